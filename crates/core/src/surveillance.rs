//! Follow-up (surveillance) guidance per treatment-response category.
//!
//! Responsibilities:
//! - Translate the dynamic response category into an interpretation, an
//!   ordered action list, imaging advice and a TSH target rationale
//!
//! Notes:
//! - Dispatch is an exhaustive match over [`ResponseCategory`]; the
//!   unclassified arm carries only the insufficient-data interpretation,
//!   with empty imaging/TSH advice

use crate::response::ResponseCategory;
use serde::Serialize;
use utoipa::ToSchema;

/// Follow-up guidance for one response category.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct SurveillanceGuidance {
    pub interpretation: String,
    /// Recommended actions, in presentation order.
    pub actions: Vec<String>,
    pub imaging_advice: String,
    pub tsh_advice: String,
}

/// Surveillance guidance operations.
///
/// This is a zero-sized type used for namespacing the guidance derivation.
pub struct SurveillanceGuidanceGenerator;

impl SurveillanceGuidanceGenerator {
    /// Derive follow-up guidance from an already-assessed response category.
    pub fn guidance(response: ResponseCategory) -> SurveillanceGuidance {
        match response {
            ResponseCategory::Excellent => SurveillanceGuidance {
                interpretation: "The patient has no clinical, biochemical, or structural evidence \
                                 of disease. This category is associated with the lowest risk of \
                                 recurrence (<1-4%) and disease-specific death."
                    .to_string(),
                actions: vec![
                    "Decrease intensity of surveillance.".to_string(),
                    "Monitor Tg levels annually.".to_string(),
                    "Neck Ultrasound can be spaced out (e.g., every 12-24 months) or discontinued \
                     in very low risk cases after 5 years."
                        .to_string(),
                ],
                imaging_advice: "Routine diagnostic whole body scans (WBS) are NOT recommended."
                    .to_string(),
                tsh_advice: "TSH goal can be relaxed to the low normal range (0.5 – 2.0 mIU/L), \
                             significantly reducing the risk of osteoporosis and cardiac \
                             arrhythmias."
                    .to_string(),
            },
            ResponseCategory::BiochemicalIncomplete => SurveillanceGuidance {
                interpretation: "There is abnormal Thyroglobulin (Tg) or rising antibodies, but no \
                                 localizable disease on standard imaging. Spontaneous resolution \
                                 occurs in ~20% of patients, while ~20% may progress to structural \
                                 disease."
                    .to_string(),
                actions: vec![
                    "Monitor Tg and TgAb levels more frequently (e.g., every 6 months) to \
                     determine velocity."
                        .to_string(),
                    "If Tg is rapidly rising (doubling time < 1 year), expand imaging (Neck \
                     CT/MRI, Chest CT, potentially PET/CT)."
                        .to_string(),
                    "Consider empirical RAI therapy only if Tg is rising significantly and \
                     imaging is negative (controversial)."
                        .to_string(),
                ],
                imaging_advice: "Ensure comprehensive neck ultrasound is performed by an expert. \
                                 Consider cross-sectional imaging (CT Neck/Chest with contrast) to \
                                 rule out macroscopic disease."
                    .to_string(),
                tsh_advice: "Maintain TSH suppression (0.1 – 0.5 mIU/L) to minimize stimulation \
                             of occult disease."
                    .to_string(),
            },
            ResponseCategory::StructuralIncomplete => SurveillanceGuidance {
                interpretation: "Persistent or recurrent structural disease has been identified. \
                                 Clinical management depends on the location, size, and rate of \
                                 growth of the structural lesions."
                    .to_string(),
                actions: vec![
                    "Multidisciplinary review recommended (Surgery, Nuclear Medicine, \
                     Endocrinology)."
                        .to_string(),
                    "Assess if lesions are surgically resectable (Surgery is preferred for neck \
                     disease)."
                        .to_string(),
                    "If non-resectable but RAI-avid: Therapeutic RAI.".to_string(),
                    "If RAI-refractory and progressive: Consider systemic therapy (TKI) or active \
                     surveillance for indolent small volume disease."
                        .to_string(),
                ],
                imaging_advice: "Full staging required: CT Neck/Chest/Abd/Pelvis or PET/CT to \
                                 quantify disease burden."
                    .to_string(),
                tsh_advice: "Maintain strict TSH suppression (< 0.1 mIU/L) in the absence of \
                             contraindications."
                    .to_string(),
            },
            ResponseCategory::Indeterminate => SurveillanceGuidance {
                interpretation: "Findings are non-specific: Tg is detectable but low (0.2-1.0), or \
                                 antibodies are stable, or imaging shows nonspecific changes. The \
                                 risk of structural recurrence is low (15-20%)."
                    .to_string(),
                actions: vec![
                    "Continue observation. Do not rush to intervene.".to_string(),
                    "Repeat Tg and Antibodies in 6-12 months.".to_string(),
                    "Monitor specific suspicious lymph nodes with serial ultrasound.".to_string(),
                ],
                imaging_advice: "Surveillance Ultrasound of the neck in 6-12 months.".to_string(),
                tsh_advice: "TSH goal is typically 0.1 – 0.5 mIU/L, but can be individualized to \
                             0.5 – 2.0 mIU/L for lower risk patients."
                    .to_string(),
            },
            ResponseCategory::Unclassified => SurveillanceGuidance {
                interpretation: "Data is insufficient to classify response.".to_string(),
                actions: vec!["Review all input data.".to_string()],
                imaging_advice: String::new(),
                tsh_advice: String::new(),
            },
        }
    }
}
