pub mod agent_client;
pub mod field_context;
pub mod postprocess;
pub mod search_client;

pub use agent_client::{AgentExecutionClient, AgentExecutionEnvelope, CallPolicy};
pub use search_client::SearchClient;
