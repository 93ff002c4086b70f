//! Compliance API Handlers
//!
//! EU AI Act risk classification and compliance policy generation.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::api::body::JsonBody;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::service::prompts::{self, CompanyProfile};
use crate::service::report::RiskReport;
use crate::service::{AskRequest, ThreadTarget};

const RISK_POLL_ATTEMPTS: u32 = 60;
const POLICY_POLL_ATTEMPTS: u32 = 70;
const RESTRICTIVENESS_LEVELS: [&str; 3] = ["low", "medium", "high"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResponse {
    pub generated_policy: String,
}

/// POST /api/risk_classification
/// Classify a company's AI use case and extract the structured report
pub async fn risk_classification(
    State(state): State<AppState>,
    body: JsonBody,
) -> ApiResult<Json<RiskReport>> {
    let assistant = state.assistant()?;
    let profile = CompanyProfile {
        company: body.required_text("company")?,
        industry: body.required_text("industry")?,
        revenue: body.required_text("revenue")?,
        use_of_ai: body.required_text("useOfAi")?,
    };

    tracing::info!("Classifying AI use case for {}", profile.company);

    let answer = assistant
        .ask(AskRequest {
            thread: ThreadTarget::New,
            content: prompts::risk_classification(&profile),
            instructions: Some(prompts::RISK_INSTRUCTIONS.to_string()),
            poll: state.poll(RISK_POLL_ATTEMPTS),
            fallback: "No response from assistant.",
        })
        .await?;

    let report = RiskReport::from_text(&answer.text);
    tracing::debug!("Parsed risk report: {:?}", report);

    Ok(Json(report))
}

/// POST /api/generate_measures_policy
/// Generate compliance measures or a policy outline for a risk level
pub async fn generate_measures_policy(
    State(state): State<AppState>,
    body: JsonBody,
) -> ApiResult<Json<PolicyResponse>> {
    let assistant = state.assistant()?;
    let risk_level = body.required_str("riskLevel")?;
    let restrictiveness = body.required_str("restrictiveness")?;

    if !RESTRICTIVENESS_LEVELS.contains(&restrictiveness.to_lowercase().as_str()) {
        return Err(ApiError::invalid_value(format!(
            "restrictiveness must be one of: {}.",
            RESTRICTIVENESS_LEVELS.join(", ")
        )));
    }

    tracing::info!(
        "Generating policy for {} risk with {} restrictiveness",
        risk_level,
        restrictiveness
    );

    let answer = assistant
        .ask(AskRequest {
            thread: ThreadTarget::New,
            content: prompts::measures_policy(risk_level, restrictiveness),
            instructions: Some(prompts::measures_policy_instructions(
                risk_level,
                restrictiveness,
            )),
            poll: state.poll(POLICY_POLL_ATTEMPTS),
            fallback: "No response from assistant regarding policy generation.",
        })
        .await?;

    Ok(Json(PolicyResponse {
        generated_policy: answer.text,
    }))
}
