use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AssistError;

/// Timeout and retry policy applied to every downstream call.
#[derive(Debug, Clone, Copy)]
pub struct CallPolicy {
    pub request_timeout: Duration,
    pub max_retries: u32,
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(300),
            max_retries: 0,
        }
    }
}

/// Client for the agent-execution service.
pub struct AgentExecutionClient {
    base_url: String,
    client: Client,
    policy: CallPolicy,
}

impl AgentExecutionClient {
    pub fn new(base_url: String, policy: CallPolicy) -> Self {
        Self {
            base_url,
            client: Client::new(),
            policy,
        }
    }

    /// Executes the agent identified by `agent_id` with the given named
    /// parameters and decodes the inference envelope.
    pub async fn execute_agent(
        &self,
        agent_id: &str,
        parameters: Value,
    ) -> Result<AgentExecutionEnvelope, AssistError> {
        let url = format!(
            "{}/_plugins/_ml/agents/{}/_execute",
            self.base_url, agent_id
        );
        let body = serde_json::json!({ "parameters": parameters });

        let mut attempt = 0;
        loop {
            match self.execute_once(&url, &body).await {
                Err(AssistError::Downstream {
                    status: None,
                    message,
                }) if attempt < self.policy.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Agent call failed, retrying ({}/{}): {}",
                        attempt,
                        self.policy.max_retries,
                        message
                    );
                }
                other => return other,
            }
        }
    }

    async fn execute_once(
        &self,
        url: &str,
        body: &Value,
    ) -> Result<AgentExecutionEnvelope, AssistError> {
        let response = self
            .client
            .post(url)
            .timeout(self.policy.request_timeout)
            .json(body)
            .send()
            .await
            .map_err(AssistError::transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(AssistError::Downstream {
                status: Some(status),
                message,
            });
        }

        response
            .json::<AgentExecutionEnvelope>()
            .await
            .map_err(|e| AssistError::Downstream {
                status: None,
                message: format!("Invalid agent response: {}", e),
            })
    }
}

#[derive(Debug, Deserialize)]
pub struct AgentExecutionEnvelope {
    #[serde(default)]
    pub inference_results: Vec<InferenceResult>,
}

#[derive(Debug, Deserialize)]
pub struct InferenceResult {
    #[serde(default)]
    pub output: Vec<InferenceOutput>,
}

#[derive(Debug, Deserialize)]
pub struct InferenceOutput {
    pub name: String,
    #[serde(default)]
    pub result: Option<String>,
}

impl AgentExecutionEnvelope {
    /// Returns the textual result at the given output position of the first
    /// inference, if the service produced one.
    pub fn output_result(&self, position: usize) -> Option<&str> {
        self.inference_results
            .first()?
            .output
            .get(position)?
            .result
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(envelope: &str) -> AgentExecutionEnvelope {
        serde_json::from_str(envelope).unwrap()
    }

    #[test]
    fn output_result_reads_positions_of_first_inference() {
        let envelope = parse(
            r#"{"inference_results": [{"output": [
                {"name": "response", "result": "a summary"},
                {"name": "questions", "result": "<question>Q?</question>"}
            ]}]}"#,
        );
        assert_eq!(envelope.output_result(0), Some("a summary"));
        assert_eq!(envelope.output_result(1), Some("<question>Q?</question>"));
    }

    #[test]
    fn output_result_is_none_for_missing_positions() {
        let envelope = parse(r#"{"inference_results": [{"output": [{"name": "response"}]}]}"#);
        assert_eq!(envelope.output_result(0), None);
        assert_eq!(envelope.output_result(1), None);

        let empty = parse(r#"{"inference_results": []}"#);
        assert_eq!(empty.output_result(0), None);
    }
}
