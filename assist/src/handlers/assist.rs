use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde_json::{json, Map, Value};
use validator::Validate;

use crate::errors::AssistError;
use crate::models::{
    ConfiguredLanguagesResponse, GenerateQueryRequest, GeneratedQuery, SummarizeRequest,
    SummarizeResponse,
};
use crate::services::field_context::build_field_context;
use crate::services::postprocess::{extract_suggested_questions, normalize_generated_ppl};
use crate::AppState;

pub async fn generate_query(
    req: web::Json<GenerateQueryRequest>,
    state: web::Data<AppState>,
) -> HttpResponse {
    tracing::info!("Query generation request for index '{}'", req.index);

    match run_generate_query(req.into_inner(), &state).await {
        Ok(ppl) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(ppl),
        Err(e) => {
            tracing::error!("Query generation failed: {}", e);
            error_response(&e)
        }
    }
}

async fn run_generate_query(
    req: GenerateQueryRequest,
    state: &AppState,
) -> Result<String, AssistError> {
    req.validate()
        .map_err(|e| AssistError::InvalidRequest(e.to_string()))?;

    let agent_id = state.config.ppl_agent_id.as_deref().ok_or_else(|| {
        AssistError::AgentNotConfigured("PPL generation agent is not configured.".to_string())
    })?;

    let parameters = json!({ "index": req.index, "question": req.question });
    let envelope = state.agent_client.execute_agent(agent_id, parameters).await?;

    let raw = envelope
        .output_result(0)
        .ok_or(AssistError::GeneratedQueryNotFound)?;
    let generated: GeneratedQuery = serde_json::from_str(raw)?;

    Ok(normalize_generated_ppl(&generated.ppl))
}

pub async fn summarize(
    req: web::Json<SummarizeRequest>,
    state: web::Data<AppState>,
) -> HttpResponse {
    tracing::info!(
        "Summarization request for index '{}' (is_error: {})",
        req.index,
        req.is_error
    );

    match run_summarize(req.into_inner(), &state).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            tracing::error!("Summarization failed: {}", e);
            error_response(&e)
        }
    }
}

async fn run_summarize(
    req: SummarizeRequest,
    state: &AppState,
) -> Result<SummarizeResponse, AssistError> {
    req.validate()
        .map_err(|e| AssistError::InvalidRequest(e.to_string()))?;

    let config = &state.config;
    let (Some(response_agent), Some(error_agent)) = (
        config.response_summary_agent_id.as_deref(),
        config.error_summary_agent_id.as_deref(),
    ) else {
        return Err(AssistError::AgentNotConfigured(
            "Summary agents are not configured.".to_string(),
        ));
    };

    let query_response = req.response.to_json_string()?;

    let mut parameters = Map::new();
    parameters.insert("index".to_string(), Value::String(req.index.clone()));
    parameters.insert("question".to_string(), Value::String(req.question.clone()));
    if let Some(query) = &req.query {
        parameters.insert("query".to_string(), Value::String(query.clone()));
    }
    parameters.insert("response".to_string(), Value::String(query_response));

    let agent_id = if req.is_error {
        let (mapping, sample) = tokio::try_join!(
            state.search_client.get_mapping(&req.index),
            state.search_client.sample_document(&req.index),
        )?;
        let fields = build_field_context(&mapping, &sample);
        parameters.insert("fields".to_string(), Value::String(fields));
        error_agent
    } else {
        response_agent
    };

    let envelope = state
        .agent_client
        .execute_agent(agent_id, Value::Object(parameters))
        .await?;

    let summary = envelope
        .output_result(0)
        .ok_or(AssistError::GeneratedSummaryNotFound)?
        .to_string();
    let suggested_questions = extract_suggested_questions(envelope.output_result(1).unwrap_or(""));

    Ok(SummarizeResponse {
        summary,
        suggested_questions,
    })
}

pub async fn configured_languages(state: web::Data<AppState>) -> HttpResponse {
    let mut languages = Vec::new();
    if state.config.ppl_agent_id.is_some() {
        languages.push("PPL".to_string());
    }

    HttpResponse::Ok().json(ConfiguredLanguagesResponse {
        configured_languages: languages,
    })
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "assist"
    }))
}

fn error_response(err: &AssistError) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(err.to_string())
}
