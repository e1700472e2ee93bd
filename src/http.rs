//! HTTP transport for the scoring engine
//!
//! Thin actix-web layer mapping three scoring endpoints onto the two
//! components, plus service metadata and liveness routes. All responses use
//! the `{"success": true, "data": {...}}` envelope. Malformed bodies are
//! rejected by the JSON extractor before reaching the scoring core.

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::addiction::AddictionScorer;
use crate::toxicity::ToxicityDetector;
use crate::types::{BatchAnalysis, RiskTier, UsageFactors};
use crate::{ENGINE_VERSION, SERVICE_NAME};

/// Success envelope wrapping every endpoint payload
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data,
        })
    }
}

/// Process-wide service metadata, built once at startup
#[derive(Debug, Clone, Serialize)]
pub struct ServiceMeta {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub models: [&'static str; 2],
    pub instance_id: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl ServiceMeta {
    pub fn new() -> Self {
        Self {
            name: SERVICE_NAME,
            version: ENGINE_VERSION,
            status: "healthy",
            models: ["addiction_scorer", "cyberbullying_detector"],
            instance_id: uuid::Uuid::new_v4().to_string(),
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for ServiceMeta {
    fn default() -> Self {
        Self::new()
    }
}

/// Batch analysis request over one child's recent messages
#[derive(Debug, Deserialize)]
pub struct CyberbullyingRequest {
    pub texts: Vec<String>,
    #[serde(default)]
    pub child_id: Option<String>,
}

/// Single-text sentiment/toxicity request
#[derive(Debug, Deserialize)]
pub struct SingleTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct AddictionScoreData {
    score: f64,
    risk_level: RiskTier,
    explanation: String,
    factors: UsageFactors,
}

#[derive(Debug, Serialize)]
struct CyberbullyingData {
    #[serde(flatten)]
    batch: BatchAnalysis,
    child_id: Option<String>,
}

/// Register all service routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root).service(health).service(
        web::scope("/ai")
            .service(addiction_score)
            .service(cyberbullying_check)
            .service(sentiment_analyze),
    );
}

/// Service metadata
#[get("/")]
async fn root(meta: web::Data<ServiceMeta>) -> impl Responder {
    HttpResponse::Ok().json(meta.get_ref())
}

/// Liveness probe
#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Calculate addiction risk score from multi-factor inputs
#[post("/addiction-score")]
async fn addiction_score(body: web::Json<UsageFactors>) -> impl Responder {
    let factors = body.into_inner();
    let assessment = AddictionScorer::calculate_score(&factors);

    tracing::info!(
        score = assessment.score,
        risk_level = assessment.risk_level.as_str(),
        "addiction score calculated"
    );

    ApiResponse::ok(AddictionScoreData {
        score: round2(assessment.score),
        risk_level: assessment.risk_level,
        explanation: assessment.explanation,
        factors: round_factors(&factors),
    })
}

/// Analyze a batch of texts for cyberbullying and toxicity
#[post("/cyberbullying-check")]
async fn cyberbullying_check(
    detector: web::Data<ToxicityDetector>,
    body: web::Json<CyberbullyingRequest>,
) -> impl Responder {
    let request = body.into_inner();
    let batch = detector.analyze_batch(&request.texts);

    tracing::info!(
        total_texts = batch.total_texts,
        toxic_texts = batch.toxic_texts,
        alert = batch.alert_recommended,
        "cyberbullying batch analyzed"
    );

    ApiResponse::ok(CyberbullyingData {
        batch,
        child_id: request.child_id,
    })
}

/// Analyze a single text for sentiment and toxicity
#[post("/sentiment-analyze")]
async fn sentiment_analyze(
    detector: web::Data<ToxicityDetector>,
    body: web::Json<SingleTextRequest>,
) -> impl Responder {
    let analysis = detector.analyze_text(&body.text);

    tracing::info!(
        toxicity_score = analysis.toxicity_score,
        sentiment = analysis.sentiment.as_str(),
        "text analyzed"
    );

    ApiResponse::ok(analysis)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Echo the raw inputs back with 2-decimal rounding
fn round_factors(factors: &UsageFactors) -> UsageFactors {
    UsageFactors {
        screen_time: round2(factors.screen_time),
        night_usage: round2(factors.night_usage),
        social_media_ratio: round2(factors.social_media_ratio),
        app_switching: round2(factors.app_switching),
        sentiment_volatility: round2(factors.sentiment_volatility),
        reward_dependency: round2(factors.reward_dependency),
    }
}
