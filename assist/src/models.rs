use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateQueryRequest {
    #[validate(length(min = 1, message = "index must not be empty"))]
    pub index: String,
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[validate(length(min = 1, message = "index must not be empty"))]
    pub index: String,
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    #[serde(default)]
    pub query: Option<String>,
    pub response: QueryResponsePayload,
    pub is_error: bool,
}

/// Query result attached to a summarize request. Callers either send the
/// response already serialized as a string, or a structured JSON value which
/// is serialized here at the boundary.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QueryResponsePayload {
    Text(String),
    Structured(Value),
}

impl QueryResponsePayload {
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        match self {
            QueryResponsePayload::Text(text) => Ok(text.clone()),
            QueryResponsePayload::Structured(value) => serde_json::to_string(value),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary: String,
    pub suggested_questions: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguredLanguagesResponse {
    pub configured_languages: Vec<String>,
}

/// JSON payload embedded in the generation agent's first output field. The
/// agent also returns `executionResult`, which is carried but not consumed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuery {
    pub ppl: String,
    #[serde(default)]
    pub execution_result: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_payload_keeps_string_bodies_as_is() {
        let payload: QueryResponsePayload =
            serde_json::from_value(json!("{\"took\": 3}")).unwrap();
        assert_eq!(payload.to_json_string().unwrap(), "{\"took\": 3}");
    }

    #[test]
    fn response_payload_serializes_structured_bodies() {
        let payload: QueryResponsePayload =
            serde_json::from_value(json!({ "took": 3, "hits": [] })).unwrap();
        assert_eq!(payload.to_json_string().unwrap(), r#"{"hits":[],"took":3}"#);
    }

    #[test]
    fn generated_query_parses_without_execution_result() {
        let generated: GeneratedQuery =
            serde_json::from_str(r#"{"ppl": "source=logs"}"#).unwrap();
        assert_eq!(generated.ppl, "source=logs");
        assert!(generated.execution_result.is_none());
    }

    #[test]
    fn summarize_request_accepts_optional_query() {
        let request: SummarizeRequest = serde_json::from_value(json!({
            "index": "logs",
            "question": "why did it fail",
            "response": "parse error",
            "isError": true
        }))
        .unwrap();
        assert!(request.query.is_none());
        assert!(request.is_error);
    }
}
