pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use assist_config::AssistConfig;

use crate::services::{AgentExecutionClient, CallPolicy, SearchClient};

#[derive(Clone)]
pub struct AppState {
    pub config: AssistConfig,
    pub agent_client: Arc<AgentExecutionClient>,
    pub search_client: Arc<SearchClient>,
}

impl AppState {
    pub fn new(config: AssistConfig) -> Self {
        let agent_client = Arc::new(AgentExecutionClient::new(
            config.agent_service_url.clone(),
            CallPolicy::default(),
        ));
        let search_client = Arc::new(SearchClient::new(config.search_service_url.clone()));

        Self {
            config,
            agent_client,
            search_client,
        }
    }
}
