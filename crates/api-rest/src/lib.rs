//! # API REST
//!
//! REST surface for the thyrocalc decision-support engine.
//!
//! Handles:
//! - HTTP endpoints with axum, one per engine query plus a bundled report
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Every endpoint is stateless: a `PatientCase` comes in as JSON, the
//! corresponding result value goes out, and nothing is shared between
//! requests. Queries that depend on another query's output (management,
//! surveillance) compute the prerequisite internally from the same case.

#![warn(rust_2018_idioms)]

use axum::{response::Json, routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use serde::Serialize;
use thyrocalc_core::{
    CaseReport, ComplicationAdviceItem, ComplicationAdvisor, Evaluation, ManagementPlan,
    ManagementPlanner, ResponseAssessor, ResponseResult, RiskResult, RiskStratifier, StageResult,
    StagingCalculator, SurgicalRecResult, SurgicalRecommender, SurveillanceGuidance,
    SurveillanceGuidanceGenerator,
};
use thyrocalc_types::PatientCase;
use utoipa::ToSchema;

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        assess_staging,
        assess_surgery,
        assess_risk,
        assess_management,
        assess_complications,
        assess_response,
        assess_surveillance,
        assess_report,
    ),
    components(schemas(
        HealthRes,
        thyrocalc_types::PatientCase,
        thyrocalc_types::Sex,
        thyrocalc_types::ClinicalNodes,
        thyrocalc_types::ClinicalEte,
        thyrocalc_types::Comorbidities,
        thyrocalc_types::TumorType,
        thyrocalc_types::HistologySubtype,
        thyrocalc_types::PathologicalEte,
        thyrocalc_types::PathologicalNodes,
        thyrocalc_types::DistantMets,
        thyrocalc_types::MolecularStatus,
        thyrocalc_types::MolecularProfile,
        thyrocalc_types::ComplicationCourse,
        thyrocalc_types::ComplicationsProfile,
        thyrocalc_types::TgAbStatus,
        thyrocalc_types::UltrasoundFinding,
        thyrocalc_types::RaiScanFinding,
        thyrocalc_types::CrossSectionalFinding,
        thyrocalc_core::ColorTag,
        thyrocalc_core::Stage,
        thyrocalc_core::TCategory,
        thyrocalc_core::NCategory,
        thyrocalc_core::MCategory,
        thyrocalc_core::StageResult,
        thyrocalc_core::Procedure,
        thyrocalc_core::SurgicalRecResult,
        thyrocalc_core::RiskCategory,
        thyrocalc_core::RiskResult,
        thyrocalc_core::RaiPlan,
        thyrocalc_core::TshPlan,
        thyrocalc_core::ManagementPlan,
        thyrocalc_core::ComplicationAdviceItem,
        thyrocalc_core::ResponseCategory,
        thyrocalc_core::ResponseResult,
        thyrocalc_core::SurveillanceGuidance,
        thyrocalc_core::CaseReport,
    ))
)]
pub struct ApiDoc;

/// Build the application router with all assessment routes, Swagger UI and
/// permissive CORS.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/assess/staging", post(assess_staging))
        .route("/assess/surgery", post(assess_surgery))
        .route("/assess/risk", post(assess_risk))
        .route("/assess/management", post(assess_management))
        .route("/assess/complications", post(assess_complications))
        .route("/assess/response", post(assess_response))
        .route("/assess/surveillance", post(assess_surveillance))
        .route("/assess/report", post(assess_report))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Thyrocalc REST API is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/assess/staging",
    request_body = PatientCase,
    responses(
        (status = 200, description = "AJCC 8th edition TNM stage", body = StageResult),
        (status = 422, description = "Malformed patient case")
    )
)]
/// Derive the AJCC 8th edition TNM stage for a case
#[axum::debug_handler]
async fn assess_staging(Json(case): Json<PatientCase>) -> Json<StageResult> {
    Json(StagingCalculator::stage(&case))
}

#[utoipa::path(
    post,
    path = "/assess/surgery",
    request_body = PatientCase,
    responses(
        (status = 200, description = "Extent-of-surgery recommendation", body = SurgicalRecResult),
        (status = 422, description = "Malformed patient case")
    )
)]
/// Derive the extent-of-surgery recommendation from pre-operative data
#[axum::debug_handler]
async fn assess_surgery(Json(case): Json<PatientCase>) -> Json<SurgicalRecResult> {
    Json(SurgicalRecommender::recommend(&case))
}

#[utoipa::path(
    post,
    path = "/assess/risk",
    request_body = PatientCase,
    responses(
        (status = 200, description = "ATA recurrence-risk stratification", body = RiskResult),
        (status = 422, description = "Malformed patient case")
    )
)]
/// Stratify a case into its ATA recurrence-risk tier
#[axum::debug_handler]
async fn assess_risk(Json(case): Json<PatientCase>) -> Json<RiskResult> {
    Json(RiskStratifier::stratify(&case))
}

#[utoipa::path(
    post,
    path = "/assess/management",
    request_body = PatientCase,
    responses(
        (status = 200, description = "RAI and TSH-suppression plan", body = ManagementPlan),
        (status = 422, description = "Malformed patient case")
    )
)]
/// Derive the RAI/TSH management plan
///
/// The recurrence-risk tier is computed internally from the same case.
#[axum::debug_handler]
async fn assess_management(Json(case): Json<PatientCase>) -> Json<ManagementPlan> {
    let risk = RiskStratifier::stratify(&case);
    Json(ManagementPlanner::plan(&risk, &case))
}

#[utoipa::path(
    post,
    path = "/assess/complications",
    request_body = PatientCase,
    responses(
        (status = 200, description = "Complication-specific guidance", body = Vec<ComplicationAdviceItem>),
        (status = 422, description = "Malformed patient case")
    )
)]
/// Derive post-operative complication guidance
#[axum::debug_handler]
async fn assess_complications(Json(case): Json<PatientCase>) -> Json<Vec<ComplicationAdviceItem>> {
    Json(ComplicationAdvisor::advise(&case))
}

#[utoipa::path(
    post,
    path = "/assess/response",
    request_body = PatientCase,
    responses(
        (status = 200, description = "Dynamic treatment-response assessment", body = ResponseResult),
        (status = 422, description = "Malformed patient case")
    )
)]
/// Assess the dynamic treatment response from surveillance data
#[axum::debug_handler]
async fn assess_response(Json(case): Json<PatientCase>) -> Json<ResponseResult> {
    Json(ResponseAssessor::assess(&case))
}

#[utoipa::path(
    post,
    path = "/assess/surveillance",
    request_body = PatientCase,
    responses(
        (status = 200, description = "Follow-up guidance", body = SurveillanceGuidance),
        (status = 422, description = "Malformed patient case")
    )
)]
/// Derive follow-up guidance
///
/// The response category is computed internally from the same case.
#[axum::debug_handler]
async fn assess_surveillance(Json(case): Json<PatientCase>) -> Json<SurveillanceGuidance> {
    let response = ResponseAssessor::assess(&case);
    Json(SurveillanceGuidanceGenerator::guidance(response.response))
}

#[utoipa::path(
    post,
    path = "/assess/report",
    request_body = PatientCase,
    responses(
        (status = 200, description = "Full evaluation of the case", body = CaseReport),
        (status = 422, description = "Malformed patient case")
    )
)]
/// Run every query on a case and return the bundled report
#[axum::debug_handler]
async fn assess_report(Json(case): Json<PatientCase>) -> Json<CaseReport> {
    Json(Evaluation::report(&case))
}
