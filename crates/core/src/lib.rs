//! # Thyrocalc Core
//!
//! Rules engine for differentiated thyroid cancer (DTC) management.
//!
//! This crate contains the classification and guidance derivations:
//! - AJCC 8th edition TNM staging
//! - Extent-of-surgery recommendation from pre-operative data
//! - ATA recurrence-risk stratification from post-operative pathology
//! - Radioiodine (RAI) and TSH-suppression planning
//! - Post-operative complication guidance
//! - Dynamic treatment-response assessment
//! - Surveillance/follow-up guidance
//!
//! Every query is a pure, total function over an immutable
//! [`PatientCase`](thyrocalc_types::PatientCase): no I/O, no shared state,
//! no error paths. Unmatched inputs always fall through to an explicit
//! default value ("Clinical Judgment", "Unclassified", and so on).
//!
//! **No API concerns**: HTTP surfaces and rendering belong in `api-rest`
//! and `thyrocalc-cli`.

pub mod complications;
pub mod management;
pub mod response;
pub mod risk;
pub mod staging;
pub mod surgical;
pub mod surveillance;

use serde::Serialize;
use thyrocalc_types::PatientCase;
use utoipa::ToSchema;

pub use complications::{ComplicationAdviceItem, ComplicationAdvisor};
pub use management::{ManagementPlan, ManagementPlanner, RaiPlan, TshPlan};
pub use response::{ResponseAssessor, ResponseCategory, ResponseResult};
pub use risk::{RiskCategory, RiskResult, RiskStratifier};
pub use staging::{MCategory, NCategory, Stage, StageResult, StagingCalculator, TCategory};
pub use surgical::{Procedure, SurgicalRecResult, SurgicalRecommender};
pub use surveillance::{SurveillanceGuidance, SurveillanceGuidanceGenerator};

/// Display severity tag attached to results.
///
/// The caller maps these to whatever presentation it uses (badge colours,
/// print styling). Ordered roughly from reassuring to alarming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    /// No severity connotation (fallback results).
    Neutral,
}

/// Full evaluation of one case: every query result in one value.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct CaseReport {
    pub staging: StageResult,
    pub surgery: SurgicalRecResult,
    pub risk: RiskResult,
    pub management: ManagementPlan,
    pub complications: Vec<ComplicationAdviceItem>,
    pub response: ResponseResult,
    pub surveillance: SurveillanceGuidance,
}

/// Whole-case evaluation.
///
/// This is a zero-sized type used for namespacing the bundled evaluation.
pub struct Evaluation;

impl Evaluation {
    /// Run every query on a case and bundle the results.
    ///
    /// The risk result feeds the management planner and the response result
    /// feeds the surveillance guidance, matching each query's declared
    /// inputs. All derivations are independent otherwise.
    pub fn report(case: &PatientCase) -> CaseReport {
        let risk = RiskStratifier::stratify(case);
        let response = ResponseAssessor::assess(case);
        CaseReport {
            staging: StagingCalculator::stage(case),
            surgery: SurgicalRecommender::recommend(case),
            management: ManagementPlanner::plan(&risk, case),
            complications: ComplicationAdvisor::advise(case),
            surveillance: SurveillanceGuidanceGenerator::guidance(response.response),
            risk,
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_deterministic() {
        let case = PatientCase::default();
        let a = Evaluation::report(&case);
        let b = Evaluation::report(&case);
        assert_eq!(a, b);
    }

    #[test]
    fn report_threads_risk_and_response() {
        let case = PatientCase {
            margins_positive: true,
            tg_suppressed: 0.05,
            ..PatientCase::default()
        };
        let report = Evaluation::report(&case);
        assert_eq!(report.risk.risk, RiskCategory::High);
        // High risk drives the strict TSH target.
        assert_eq!(report.management.tsh.target, "< 0.1 mIU/L");
        assert_eq!(report.response.response, ResponseCategory::Excellent);
        assert!(report
            .surveillance
            .interpretation
            .contains("no clinical, biochemical, or structural evidence"));
    }

    #[test]
    fn report_serialises_to_json() {
        let report = Evaluation::report(&PatientCase::default());
        let json = serde_json::to_value(&report).expect("serialise report");
        assert!(json.get("staging").is_some());
        assert!(json.get("surveillance").is_some());
    }
}
