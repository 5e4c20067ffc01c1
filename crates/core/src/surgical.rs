//! Extent-of-surgery recommendation from pre-operative findings.
//!
//! Responsibilities:
//! - Recommend total thyroidectomy, lobectomy, or either, from the clinical
//!   (pre-operative) picture only
//! - Carry the supporting considerations and the evidence strength of the
//!   underlying ATA recommendation
//!
//! Notes:
//! - The total-thyroidectomy branch reports its full fixed considerations
//!   list regardless of which trigger fired; this mirrors the published
//!   behaviour and is deliberately not filtered per trigger
//! - A non-numeric (NaN) clinical size falls through every size comparison
//!   and lands on the "Clinical Judgment" fallback

use crate::ColorTag;
use serde::Serialize;
use thyrocalc_types::{ClinicalEte, ClinicalNodes, DistantMets, PatientCase};
use utoipa::ToSchema;

// ============================================================================
// Result types
// ============================================================================

/// Recommended procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub enum Procedure {
    #[serde(rename = "Total Thyroidectomy")]
    TotalThyroidectomy,
    #[serde(rename = "Total Thyroidectomy (Preferred)")]
    TotalThyroidectomyPreferred,
    #[serde(rename = "Lobectomy OR Total Thyroidectomy")]
    LobectomyOrTotal,
    #[serde(rename = "Thyroid Lobectomy")]
    Lobectomy,
    /// No rule matched; the decision is left to the clinician.
    #[serde(rename = "Clinical Judgment")]
    ClinicalJudgment,
}

impl std::fmt::Display for Procedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Procedure::TotalThyroidectomy => "Total Thyroidectomy",
            Procedure::TotalThyroidectomyPreferred => "Total Thyroidectomy (Preferred)",
            Procedure::LobectomyOrTotal => "Lobectomy OR Total Thyroidectomy",
            Procedure::Lobectomy => "Thyroid Lobectomy",
            Procedure::ClinicalJudgment => "Clinical Judgment",
        };
        write!(f, "{s}")
    }
}

/// Extent-of-surgery recommendation for one case.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct SurgicalRecResult {
    pub procedure: Procedure,
    /// Supporting considerations, in presentation order.
    pub considerations: Vec<String>,
    /// Evidence strength of the matched ATA recommendation.
    pub level: String,
    pub color_tag: ColorTag,
}

// ============================================================================
// Surgical recommender
// ============================================================================

/// Surgical recommendation operations.
///
/// This is a zero-sized type used for namespacing the surgery derivation.
pub struct SurgicalRecommender;

impl SurgicalRecommender {
    /// Derive the extent-of-surgery recommendation.
    ///
    /// Rules are evaluated top to bottom and the first match wins:
    /// 1. any absolute total-thyroidectomy indication (size > 4 cm, clinical
    ///    nodal disease, suspected gross ETE, prior radiation, known M1),
    /// 2. 1-4 cm tumours (total preferred with bilateral nodularity,
    ///    otherwise either procedure),
    /// 3. sub-centimetre tumours (lobectomy),
    /// 4. fallback when the size is not a usable number.
    pub fn recommend(case: &PatientCase) -> SurgicalRecResult {
        let size = case.clinical_size;

        if size > 4.0
            || case.clinical_nodes != ClinicalNodes::CN0
            || case.clinical_ete != ClinicalEte::None
            || case.prior_radiation
            || case.distant_mets == DistantMets::M1
        {
            // Fixed list: not filtered down to the trigger that fired.
            return SurgicalRecResult {
                procedure: Procedure::TotalThyroidectomy,
                considerations: vec![
                    "Tumor > 4cm".to_string(),
                    "Clinical N1 disease (Central or Lateral)".to_string(),
                    "Gross Extrathyroidal Extension suspected".to_string(),
                    "History of head/neck radiation".to_string(),
                ],
                level: "Strong Recommendation (Rec 15C)".to_string(),
                color_tag: ColorTag::Red,
            };
        }

        if (1.0..=4.0).contains(&size) {
            if case.contralateral_nodules {
                return SurgicalRecResult {
                    procedure: Procedure::TotalThyroidectomyPreferred,
                    considerations: vec![
                        "Bilateral nodular disease present".to_string(),
                        "Facilitates RAI if high-risk pathology is found".to_string(),
                    ],
                    level: "Conditional Recommendation (Rec 15B)".to_string(),
                    color_tag: ColorTag::Blue,
                };
            }
            return SurgicalRecResult {
                procedure: Procedure::LobectomyOrTotal,
                considerations: vec![
                    "Lobectomy: Lower risk of hypoparathyroidism/nerve injury.".to_string(),
                    "Total: Preferred if planning for RAI or follow-up with Tg.".to_string(),
                    "Patient preference plays a major role.".to_string(),
                ],
                level: "Conditional Recommendation (Rec 15B)".to_string(),
                color_tag: ColorTag::Yellow,
            };
        }

        if size < 1.0 {
            return SurgicalRecResult {
                procedure: Procedure::Lobectomy,
                considerations: vec![
                    "Sufficient for unifocal intrathyroidal microcarcinoma".to_string(),
                    "Active Surveillance is also an alternative for selected patients (Rec 13)"
                        .to_string(),
                ],
                level: "Strong Recommendation (Rec 15A)".to_string(),
                color_tag: ColorTag::Green,
            };
        }

        SurgicalRecResult {
            procedure: Procedure::ClinicalJudgment,
            considerations: vec![],
            level: "N/A".to_string(),
            color_tag: ColorTag::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thyrocalc_types::PatientCase;

    // Scenario: 0.8 cm, cN0, no ETE, no prior radiation, M0.
    #[test]
    fn microcarcinoma_gets_lobectomy() {
        let case = PatientCase {
            clinical_size: 0.8,
            clinical_nodes: ClinicalNodes::CN0,
            clinical_ete: ClinicalEte::None,
            prior_radiation: false,
            distant_mets: DistantMets::M0,
            ..PatientCase::default()
        };
        let rec = SurgicalRecommender::recommend(&case);
        assert_eq!(rec.procedure, Procedure::Lobectomy);
        assert_eq!(rec.level, "Strong Recommendation (Rec 15A)");
        assert!(rec.considerations[1].contains("Active Surveillance"));
    }

    #[test]
    fn each_absolute_indication_triggers_total_thyroidectomy() {
        let base = PatientCase {
            clinical_size: 2.0,
            ..PatientCase::default()
        };

        let large = PatientCase {
            clinical_size: 4.5,
            ..base.clone()
        };
        let nodal = PatientCase {
            clinical_nodes: ClinicalNodes::CN1b,
            ..base.clone()
        };
        let ete = PatientCase {
            clinical_ete: ClinicalEte::GrossStrap,
            ..base.clone()
        };
        let radiation = PatientCase {
            prior_radiation: true,
            ..base.clone()
        };
        let mets = PatientCase {
            distant_mets: DistantMets::M1,
            ..base
        };

        for case in [large, nodal, ete, radiation, mets] {
            let rec = SurgicalRecommender::recommend(&case);
            assert_eq!(rec.procedure, Procedure::TotalThyroidectomy);
            assert_eq!(rec.level, "Strong Recommendation (Rec 15C)");
        }
    }

    // The first branch reports the same fixed considerations no matter which
    // trigger fired.
    #[test]
    fn total_thyroidectomy_considerations_are_a_fixed_list() {
        let radiation_only = PatientCase {
            clinical_size: 2.0,
            prior_radiation: true,
            ..PatientCase::default()
        };
        let rec = SurgicalRecommender::recommend(&radiation_only);
        assert_eq!(
            rec.considerations,
            vec![
                "Tumor > 4cm",
                "Clinical N1 disease (Central or Lateral)",
                "Gross Extrathyroidal Extension suspected",
                "History of head/neck radiation",
            ]
        );
    }

    #[test]
    fn intermediate_size_defers_to_preference() {
        let case = PatientCase {
            clinical_size: 2.5,
            ..PatientCase::default()
        };
        let rec = SurgicalRecommender::recommend(&case);
        assert_eq!(rec.procedure, Procedure::LobectomyOrTotal);
        assert_eq!(rec.level, "Conditional Recommendation (Rec 15B)");
        assert!(rec
            .considerations
            .iter()
            .any(|c| c.contains("Patient preference")));
    }

    #[test]
    fn contralateral_nodules_prefer_total() {
        let case = PatientCase {
            clinical_size: 2.5,
            contralateral_nodules: true,
            ..PatientCase::default()
        };
        let rec = SurgicalRecommender::recommend(&case);
        assert_eq!(rec.procedure, Procedure::TotalThyroidectomyPreferred);
    }

    #[test]
    fn size_boundaries_are_inclusive_at_one_and_four() {
        let one = PatientCase {
            clinical_size: 1.0,
            ..PatientCase::default()
        };
        assert_eq!(
            SurgicalRecommender::recommend(&one).procedure,
            Procedure::LobectomyOrTotal
        );

        let four = PatientCase {
            clinical_size: 4.0,
            ..PatientCase::default()
        };
        assert_eq!(
            SurgicalRecommender::recommend(&four).procedure,
            Procedure::LobectomyOrTotal
        );
    }

    #[test]
    fn non_numeric_size_falls_back_to_clinical_judgment() {
        let case = PatientCase {
            clinical_size: f64::NAN,
            ..PatientCase::default()
        };
        let rec = SurgicalRecommender::recommend(&case);
        assert_eq!(rec.procedure, Procedure::ClinicalJudgment);
        assert!(rec.considerations.is_empty());
        assert_eq!(rec.level, "N/A");
        assert_eq!(rec.color_tag, ColorTag::Neutral);
    }
}
