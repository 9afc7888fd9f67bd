use std::env;

/// Environment-driven configuration for the assist service.
///
/// The agent ids are optional: a missing id disables the matching endpoint
/// with a caller-visible 400 instead of failing startup.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    pub agent_service_url: String,
    pub search_service_url: String,
    pub ppl_agent_id: Option<String>,
    pub response_summary_agent_id: Option<String>,
    pub error_summary_agent_id: Option<String>,
}

impl AssistConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            agent_service_url: env::var("AGENT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:9200".to_string()),
            search_service_url: env::var("SEARCH_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:9200".to_string()),
            ppl_agent_id: optional_var("PPL_AGENT_ID"),
            response_summary_agent_id: optional_var("RESPONSE_SUMMARY_AGENT_ID"),
            error_summary_agent_id: optional_var("ERROR_SUMMARY_AGENT_ID"),
        }
    }
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
