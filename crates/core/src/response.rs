//! Dynamic treatment-response assessment from surveillance labs/imaging.
//!
//! Responsibilities:
//! - Classify the current response to therapy into one of the four dynamic
//!   categories, or "Unclassified" when the data fits none
//!
//! Notes:
//! - Tiers are tested in order: structural findings first, then biochemical
//!   abnormality, then the indeterminate band, then excellent; the first
//!   match wins
//! - A stimulated Tg only counts when it was actually measured

use crate::ColorTag;
use serde::Serialize;
use thyrocalc_types::{CrossSectionalFinding, PatientCase, TgAbStatus, UltrasoundFinding};
use utoipa::ToSchema;

// ============================================================================
// Result types
// ============================================================================

/// Dynamic treatment-response category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub enum ResponseCategory {
    #[serde(rename = "Excellent Response")]
    Excellent,
    #[serde(rename = "Indeterminate Response")]
    Indeterminate,
    #[serde(rename = "Biochemical Incomplete")]
    BiochemicalIncomplete,
    #[serde(rename = "Structural Incomplete")]
    StructuralIncomplete,
    /// The data does not cleanly fit any tier.
    Unclassified,
}

impl std::fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResponseCategory::Excellent => "Excellent Response",
            ResponseCategory::Indeterminate => "Indeterminate Response",
            ResponseCategory::BiochemicalIncomplete => "Biochemical Incomplete",
            ResponseCategory::StructuralIncomplete => "Structural Incomplete",
            ResponseCategory::Unclassified => "Unclassified",
        };
        write!(f, "{s}")
    }
}

/// Treatment-response assessment for one case.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct ResponseResult {
    pub response: ResponseCategory,
    pub description: String,
    /// Recommended next step for the category.
    pub action: String,
    pub color_tag: ColorTag,
}

// ============================================================================
// Response assessor
// ============================================================================

/// Treatment-response operations.
///
/// This is a zero-sized type used for namespacing the response derivation.
pub struct ResponseAssessor;

impl ResponseAssessor {
    /// Assess the dynamic treatment response for a case.
    pub fn assess(case: &PatientCase) -> ResponseResult {
        let imaging_positive = case.imaging_us != UltrasoundFinding::Negative
            || case.imaging_rai.has_uptake()
            || case.imaging_cross_sectional == CrossSectionalFinding::StructuralDisease;

        if imaging_positive {
            return ResponseResult {
                response: ResponseCategory::StructuralIncomplete,
                description: "Structural disease identified on imaging.".to_string(),
                action: "Consider Surgery, RAI, or Systemic Tx. Keep TSH < 0.1.".to_string(),
                color_tag: ColorTag::Red,
            };
        }

        if case.tg_suppressed >= 1.0
            || case.tg_stimulated.is_some_and(|tg| tg >= 10.0)
            || case.tg_ab_status == TgAbStatus::PositiveRising
        {
            return ResponseResult {
                response: ResponseCategory::BiochemicalIncomplete,
                description:
                    "Abnormal Tg (Suppressed ≥1) or rising antibodies without structural disease."
                        .to_string(),
                action: "Monitor closely. Evaluate for occult disease.".to_string(),
                color_tag: ColorTag::Orange,
            };
        }

        if (case.tg_suppressed >= 0.2 && case.tg_suppressed < 1.0)
            || case.tg_ab_status == TgAbStatus::PositiveStableDeclining
        {
            return ResponseResult {
                response: ResponseCategory::Indeterminate,
                description: "Low level Tg (0.2-1.0) or stable antibodies.".to_string(),
                action: "Continue surveillance. Maintain stable TSH.".to_string(),
                color_tag: ColorTag::Yellow,
            };
        }

        if case.tg_suppressed < 0.2 && case.tg_ab_status == TgAbStatus::Negative {
            return ResponseResult {
                response: ResponseCategory::Excellent,
                description: "No clinical, biochemical, or structural evidence of disease."
                    .to_string(),
                action: "Decrease surveillance intensity. Relax TSH target.".to_string(),
                color_tag: ColorTag::Green,
            };
        }

        ResponseResult {
            response: ResponseCategory::Unclassified,
            description: "Incomplete data.".to_string(),
            action: "Review inputs.".to_string(),
            color_tag: ColorTag::Neutral,
        }
    }
}
