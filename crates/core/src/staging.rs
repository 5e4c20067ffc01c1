//! AJCC 8th edition TNM staging for differentiated thyroid cancer.
//!
//! Responsibilities:
//! - Derive the T, N and M categories from post-operative pathology
//! - Derive the overall stage group, which for DTC pivots on age 55
//!
//! Notes:
//! - Gross extension to major structures is reported as the combined
//!   "T4a/b" category; resectability decides between IVA and IVB and is
//!   not knowable from the case record, hence the prevertebral annotation

use serde::Serialize;
use thyrocalc_types::{DistantMets, PathologicalEte, PathologicalNodes, PatientCase};
use utoipa::ToSchema;

// Age at which DTC staging switches from the two-stage to the full scheme.
const AGE_CUTOFF: f64 = 55.0;

// ============================================================================
// Result types
// ============================================================================

/// Tumour (T) category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub enum TCategory {
    T1,
    T2,
    T3a,
    T3b,
    #[serde(rename = "T4a/b")]
    T4ab,
}

impl std::fmt::Display for TCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TCategory::T1 => "T1",
            TCategory::T2 => "T2",
            TCategory::T3a => "T3a",
            TCategory::T3b => "T3b",
            TCategory::T4ab => "T4a/b",
        };
        write!(f, "{s}")
    }
}

/// Nodal (N) category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub enum NCategory {
    Nx,
    N0,
    N1a,
    N1b,
}

impl std::fmt::Display for NCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NCategory::Nx => "Nx",
            NCategory::N0 => "N0",
            NCategory::N1a => "N1a",
            NCategory::N1b => "N1b",
        };
        write!(f, "{s}")
    }
}

/// Metastasis (M) category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub enum MCategory {
    M0,
    M1,
}

impl std::fmt::Display for MCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MCategory::M0 => "M0",
            MCategory::M1 => "M1",
        };
        write!(f, "{s}")
    }
}

/// Overall AJCC stage group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub enum Stage {
    #[serde(rename = "Stage I")]
    I,
    #[serde(rename = "Stage II")]
    II,
    #[serde(rename = "Stage IVA")]
    Iva,
    /// Gross invasion of major structures: IVA, or IVB when the
    /// prevertebral fascia is involved.
    #[serde(rename = "Stage IVA (or IVB if prevertebral)")]
    IvaOrIvbIfPrevertebral,
    #[serde(rename = "Stage IVB")]
    Ivb,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Stage::I => "Stage I",
            Stage::II => "Stage II",
            Stage::Iva => "Stage IVA",
            Stage::IvaOrIvbIfPrevertebral => "Stage IVA (or IVB if prevertebral)",
            Stage::Ivb => "Stage IVB",
        };
        write!(f, "{s}")
    }
}

/// Derived TNM stage for one case.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct StageResult {
    pub stage: Stage,
    pub t: TCategory,
    pub n: NCategory,
    pub m: MCategory,
    /// Formatted age/T/N/M summary.
    pub description: String,
}

// ============================================================================
// Staging calculator
// ============================================================================

/// AJCC staging operations.
///
/// This is a zero-sized type used for namespacing the staging derivation.
pub struct StagingCalculator;

impl StagingCalculator {
    /// Derive the AJCC 8th edition stage for a case.
    ///
    /// T is decided in priority order (gross major ETE, gross strap ETE,
    /// then size thresholds at 4 cm and 2 cm); N maps the pathological
    /// nodal status directly; M follows distant metastasis. The overall
    /// group uses the DTC age-55 rule: under 55, metastatic disease is the
    /// only route past Stage I.
    pub fn stage(case: &PatientCase) -> StageResult {
        let t = match case.pathological_ete {
            PathologicalEte::GrossMajor => TCategory::T4ab,
            PathologicalEte::GrossStrap => TCategory::T3b,
            _ if case.pathological_size > 4.0 => TCategory::T3a,
            _ if case.pathological_size > 2.0 => TCategory::T2,
            _ => TCategory::T1,
        };

        let n = match case.pathological_nodes {
            PathologicalNodes::N1b => NCategory::N1b,
            PathologicalNodes::N1a => NCategory::N1a,
            PathologicalNodes::N0 => NCategory::N0,
            PathologicalNodes::Nx => NCategory::Nx,
        };

        let m = match case.distant_mets {
            DistantMets::M1 => MCategory::M1,
            DistantMets::M0 => MCategory::M0,
        };

        let stage = if case.age < AGE_CUTOFF {
            if m == MCategory::M1 {
                Stage::II
            } else {
                Stage::I
            }
        } else if m == MCategory::M1 {
            Stage::Ivb
        } else if t == TCategory::T4ab {
            if case.pathological_ete == PathologicalEte::GrossMajor {
                Stage::IvaOrIvbIfPrevertebral
            } else {
                Stage::Iva
            }
        } else if matches!(n, NCategory::N1a | NCategory::N1b) {
            Stage::II
        } else if matches!(t, TCategory::T3a | TCategory::T3b) {
            Stage::II
        } else {
            // T1 or T2, N0/Nx, M0
            Stage::I
        };

        StageResult {
            stage,
            t,
            n,
            m,
            description: format!("Age {}, {t}, {n}, {m}", case.age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thyrocalc_types::PatientCase;

    #[test]
    fn size_thresholds_advance_t_category() {
        let mut case = PatientCase {
            pathological_ete: PathologicalEte::None,
            ..PatientCase::default()
        };

        case.pathological_size = 1.5;
        assert_eq!(StagingCalculator::stage(&case).t, TCategory::T1);
        case.pathological_size = 2.0;
        assert_eq!(StagingCalculator::stage(&case).t, TCategory::T1);
        case.pathological_size = 2.1;
        assert_eq!(StagingCalculator::stage(&case).t, TCategory::T2);
        case.pathological_size = 4.0;
        assert_eq!(StagingCalculator::stage(&case).t, TCategory::T2);
        case.pathological_size = 4.1;
        assert_eq!(StagingCalculator::stage(&case).t, TCategory::T3a);
    }

    #[test]
    fn gross_ete_outranks_size() {
        let case = PatientCase {
            pathological_size: 0.5,
            pathological_ete: PathologicalEte::GrossStrap,
            ..PatientCase::default()
        };
        assert_eq!(StagingCalculator::stage(&case).t, TCategory::T3b);

        let case = PatientCase {
            pathological_ete: PathologicalEte::GrossMajor,
            ..case
        };
        assert_eq!(StagingCalculator::stage(&case).t, TCategory::T4ab);
    }

    #[test]
    fn under_55_is_stage_one_unless_metastatic() {
        let case = PatientCase {
            age: 40.0,
            pathological_size: 6.0,
            pathological_nodes: PathologicalNodes::N1b,
            ..PatientCase::default()
        };
        assert_eq!(StagingCalculator::stage(&case).stage, Stage::I);

        let case = PatientCase {
            distant_mets: DistantMets::M1,
            ..case
        };
        assert_eq!(StagingCalculator::stage(&case).stage, Stage::II);
    }

    #[test]
    fn age_boundary_switches_exactly_at_55() {
        let younger = PatientCase {
            age: 54.9,
            pathological_size: 5.0,
            ..PatientCase::default()
        };
        assert_eq!(StagingCalculator::stage(&younger).stage, Stage::I);

        let older = PatientCase {
            age: 55.0,
            ..younger
        };
        assert_eq!(StagingCalculator::stage(&older).stage, Stage::II);
    }

    #[test]
    fn nodal_disease_upstages_older_patients() {
        let case = PatientCase {
            age: 60.0,
            pathological_size: 1.0,
            pathological_nodes: PathologicalNodes::N1a,
            ..PatientCase::default()
        };
        assert_eq!(StagingCalculator::stage(&case).stage, Stage::II);
    }

    #[test]
    fn metastasis_wins_over_t4_in_older_patients() {
        let case = PatientCase {
            age: 70.0,
            pathological_ete: PathologicalEte::GrossMajor,
            distant_mets: DistantMets::M1,
            ..PatientCase::default()
        };
        assert_eq!(StagingCalculator::stage(&case).stage, Stage::Ivb);
    }

    // Scenario: 60-year-old, 5 cm tumour, gross major-structure invasion,
    // node negative, no metastases.
    #[test]
    fn gross_major_invasion_annotates_prevertebral_caveat() {
        let case = PatientCase {
            age: 60.0,
            pathological_size: 5.0,
            pathological_ete: PathologicalEte::GrossMajor,
            pathological_nodes: PathologicalNodes::N0,
            distant_mets: DistantMets::M0,
            ..PatientCase::default()
        };
        let result = StagingCalculator::stage(&case);
        assert_eq!(result.t, TCategory::T4ab);
        assert_eq!(result.n, NCategory::N0);
        assert_eq!(result.m, MCategory::M0);
        assert_eq!(result.stage, Stage::IvaOrIvbIfPrevertebral);
        assert_eq!(
            result.stage.to_string(),
            "Stage IVA (or IVB if prevertebral)"
        );
        assert_eq!(result.description, "Age 60, T4a/b, N0, M0");
    }

    #[test]
    fn staging_is_deterministic() {
        let case = PatientCase {
            age: 63.0,
            pathological_size: 3.1,
            pathological_nodes: PathologicalNodes::N1b,
            ..PatientCase::default()
        };
        assert_eq!(
            StagingCalculator::stage(&case),
            StagingCalculator::stage(&case)
        );
    }
}
