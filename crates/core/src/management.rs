//! Radioiodine and TSH-suppression planning.
//!
//! Responsibilities:
//! - Derive the RAI recommendation (indication, activity, preparation) from
//!   the recurrence-risk tier
//! - Derive the TSH-suppression target, relaxed when comorbidities make
//!   aggressive suppression hazardous
//!
//! Notes:
//! - Dispatch is an exhaustive match over [`RiskCategory`], so adding a tier
//!   without a plan fails to compile
//! - The intermediate-low TSH target ignores comorbidities; it is already
//!   in the relaxed range

use crate::risk::{RiskCategory, RiskResult};
use serde::Serialize;
use thyrocalc_types::PatientCase;
use utoipa::ToSchema;

// ============================================================================
// Result types
// ============================================================================

/// Radioiodine (RAI) arm of the plan.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct RaiPlan {
    /// Strength of the indication.
    pub rec: String,
    /// Administered activity.
    pub dose: String,
    pub rationale: String,
    /// Preparation method (withdrawal vs rhTSH).
    pub prep: String,
}

/// TSH-suppression arm of the plan.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct TshPlan {
    pub target: String,
    pub rationale: String,
}

/// Combined RAI and TSH management plan.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct ManagementPlan {
    pub rai: RaiPlan,
    pub tsh: TshPlan,
}

// ============================================================================
// Management planner
// ============================================================================

/// Management planning operations.
///
/// This is a zero-sized type used for namespacing the plan derivation.
pub struct ManagementPlanner;

impl ManagementPlanner {
    /// Derive the RAI/TSH plan for a stratified case.
    ///
    /// Takes the already-computed [`RiskResult`] plus the case itself, which
    /// contributes only its comorbidity flags (osteoporosis, atrial
    /// fibrillation, advanced age). Any one of those relaxes the TSH target
    /// in the high and intermediate-high tiers.
    pub fn plan(risk: &RiskResult, case: &PatientCase) -> ManagementPlan {
        let has_comorbidities = case.comorbidities.any();

        match risk.risk {
            RiskCategory::High => ManagementPlan {
                rai: RaiPlan {
                    rec: "Recommended".to_string(),
                    dose: "100-150 mCi".to_string(),
                    rationale: "High risk of recurrence/mortality. Intent: Adjuvant or Therapeutic."
                        .to_string(),
                    prep: "Thyroid Hormone Withdrawal or rhTSH (Thyrogen).".to_string(),
                },
                tsh: TshPlan {
                    target: if has_comorbidities {
                        "0.1 - 0.5 mIU/L".to_string()
                    } else {
                        "< 0.1 mIU/L".to_string()
                    },
                    rationale: if has_comorbidities {
                        "Suppression moderated due to comorbidities (Bone/Heart health)."
                            .to_string()
                    } else {
                        "Strict suppression indicated for high-risk disease.".to_string()
                    },
                },
            },
            RiskCategory::IntermediateHigh => ManagementPlan {
                rai: RaiPlan {
                    rec: "Consider / Recommended".to_string(),
                    dose: "100 mCi".to_string(),
                    rationale: "Favored for aggressive histology or significant nodal burden."
                        .to_string(),
                    prep: "rhTSH (Thyrogen) preferred for quality of life.".to_string(),
                },
                tsh: TshPlan {
                    target: if has_comorbidities {
                        "0.5 - 2.0 mIU/L".to_string()
                    } else {
                        "0.1 - 0.5 mIU/L".to_string()
                    },
                    rationale: "Mild suppression. Relax if comorbidities present.".to_string(),
                },
            },
            RiskCategory::IntermediateLow => ManagementPlan {
                rai: RaiPlan {
                    rec: "Selectively Consider".to_string(),
                    dose: "30-75 mCi".to_string(),
                    rationale: "May use for remnant ablation to facilitate follow-up.".to_string(),
                    prep: "rhTSH (Thyrogen) preferred.".to_string(),
                },
                tsh: TshPlan {
                    target: "0.5 - 2.0 mIU/L".to_string(),
                    rationale: "Low normal range sufficient.".to_string(),
                },
            },
            RiskCategory::Low => ManagementPlan {
                rai: RaiPlan {
                    rec: "Not Routinely Recommended".to_string(),
                    dose: "N/A".to_string(),
                    rationale: "Benefit likely negligible.".to_string(),
                    prep: "N/A".to_string(),
                },
                tsh: TshPlan {
                    target: "0.5 - 2.0 mIU/L".to_string(),
                    rationale: "Maintain low-normal TSH.".to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskStratifier;
    use thyrocalc_types::{Comorbidities, DistantMets, PatientCase};

    fn risk_of(case: &PatientCase) -> RiskResult {
        RiskStratifier::stratify(case)
    }

    #[test]
    fn low_risk_gets_no_routine_rai_and_relaxed_tsh() {
        let case = PatientCase::default();
        let plan = ManagementPlanner::plan(&risk_of(&case), &case);
        assert_eq!(plan.rai.rec, "Not Routinely Recommended");
        assert_eq!(plan.rai.dose, "N/A");
        assert_eq!(plan.tsh.target, "0.5 - 2.0 mIU/L");
    }

    #[test]
    fn high_risk_gets_strict_suppression_without_comorbidities() {
        let case = PatientCase {
            distant_mets: DistantMets::M1,
            ..PatientCase::default()
        };
        let plan = ManagementPlanner::plan(&risk_of(&case), &case);
        assert_eq!(plan.rai.rec, "Recommended");
        assert_eq!(plan.rai.dose, "100-150 mCi");
        assert_eq!(plan.tsh.target, "< 0.1 mIU/L");
        assert!(plan.tsh.rationale.contains("Strict suppression"));
    }

    #[test]
    fn each_comorbidity_flag_relaxes_the_high_risk_target() {
        let flags = [
            Comorbidities {
                osteoporosis: true,
                ..Comorbidities::default()
            },
            Comorbidities {
                atrial_fib: true,
                ..Comorbidities::default()
            },
            Comorbidities {
                advanced_age: true,
                ..Comorbidities::default()
            },
        ];

        for comorbidities in flags {
            let case = PatientCase {
                distant_mets: DistantMets::M1,
                comorbidities,
                ..PatientCase::default()
            };
            let plan = ManagementPlanner::plan(&risk_of(&case), &case);
            assert_eq!(plan.tsh.target, "0.1 - 0.5 mIU/L");
            assert!(plan.tsh.rationale.contains("comorbidities"));
        }
    }

    #[test]
    fn intermediate_high_relaxes_to_low_normal_with_comorbidities() {
        let case = PatientCase {
            subtype: thyrocalc_types::HistologySubtype::TallCell,
            ..PatientCase::default()
        };
        let plan = ManagementPlanner::plan(&risk_of(&case), &case);
        assert_eq!(plan.rai.rec, "Consider / Recommended");
        assert_eq!(plan.rai.dose, "100 mCi");
        assert_eq!(plan.tsh.target, "0.1 - 0.5 mIU/L");

        let with_comorbidity = PatientCase {
            comorbidities: Comorbidities {
                osteoporosis: true,
                ..Comorbidities::default()
            },
            ..case
        };
        let plan = ManagementPlanner::plan(&risk_of(&with_comorbidity), &with_comorbidity);
        assert_eq!(plan.tsh.target, "0.5 - 2.0 mIU/L");
    }

    #[test]
    fn intermediate_low_target_ignores_comorbidities() {
        let case = PatientCase {
            pathological_ete: thyrocalc_types::PathologicalEte::Microscopic,
            comorbidities: Comorbidities {
                atrial_fib: true,
                ..Comorbidities::default()
            },
            ..PatientCase::default()
        };
        let plan = ManagementPlanner::plan(&risk_of(&case), &case);
        assert_eq!(plan.rai.rec, "Selectively Consider");
        assert_eq!(plan.rai.dose, "30-75 mCi");
        assert_eq!(plan.tsh.target, "0.5 - 2.0 mIU/L");
    }
}
