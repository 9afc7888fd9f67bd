pub mod assist;

pub use assist::{configured_languages, generate_query, health, summarize};
