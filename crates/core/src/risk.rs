//! ATA recurrence-risk stratification from post-operative pathology.
//!
//! Responsibilities:
//! - Classify a case into one of four recurrence-risk tiers
//! - Report the specific findings that placed it there, in evaluation order
//!
//! Notes:
//! - Tiers are strictly ordered High > Intermediate-High > Intermediate-Low
//!   > Low, and evaluation short-circuits at the first tier that matches,
//!   so only that tier's reasons are reported
//! - Molecular findings count only when testing was actually performed
//! - Vessel-count criteria apply to FTC only

use crate::ColorTag;
use serde::Serialize;
use thyrocalc_types::{
    DistantMets, MolecularStatus, PathologicalEte, PathologicalNodes, PatientCase, TumorType,
};
use utoipa::ToSchema;

// ============================================================================
// Result types
// ============================================================================

/// ATA recurrence-risk category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Intermediate-Low Risk")]
    IntermediateLow,
    #[serde(rename = "Intermediate-High Risk")]
    IntermediateHigh,
    #[serde(rename = "High Risk")]
    High,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::IntermediateLow => "Intermediate-Low Risk",
            RiskCategory::IntermediateHigh => "Intermediate-High Risk",
            RiskCategory::High => "High Risk",
        };
        write!(f, "{s}")
    }
}

/// Recurrence-risk stratification for one case.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct RiskResult {
    pub risk: RiskCategory,
    /// Fixed recurrence-percentage band for the tier.
    pub description: String,
    pub color_tag: ColorTag,
    /// The findings that placed the case in this tier, in the order tested.
    pub reasoning: Vec<String>,
}

// ============================================================================
// Risk stratifier
// ============================================================================

/// Recurrence-risk operations.
///
/// This is a zero-sized type used for namespacing the risk derivation.
pub struct RiskStratifier;

impl RiskStratifier {
    /// Stratify a case into its ATA recurrence-risk tier.
    pub fn stratify(case: &PatientCase) -> RiskResult {
        let mut reasons: Vec<String> = Vec::new();
        let node_size = case.node_size.unwrap_or(0.0);
        let vascular_invasion = case.vascular_invasion.unwrap_or(0);
        let tested = case.molecular.status == MolecularStatus::Tested;

        let mut is_high = false;
        if case.pathological_ete.is_gross() || case.margins_positive {
            is_high = true;
            reasons.push("Gross ETE or incomplete resection".to_string());
        }
        if case.distant_mets == DistantMets::M1 {
            is_high = true;
            reasons.push("Distant metastases".to_string());
        }
        if tested {
            if case.molecular.tert && (case.molecular.braf || case.molecular.ras) {
                is_high = true;
                reasons.push("Genetic High Risk: TERT + BRAF/RAS".to_string());
            }
            if case.molecular.tp53 {
                is_high = true;
                reasons.push("Genetic High Risk: TP53".to_string());
            }
        }
        if case.tumor_type == TumorType::Ftc && vascular_invasion > 4 {
            is_high = true;
            reasons.push("Extensive vascular invasion (>4 vessels)".to_string());
        }
        if case.pathological_nodes == PathologicalNodes::N1b && node_size > 3.0 {
            is_high = true;
            reasons.push("Large volume N1b disease (>3cm)".to_string());
        }

        if is_high {
            return RiskResult {
                risk: RiskCategory::High,
                description: "Risk of structural recurrence > 30%".to_string(),
                color_tag: ColorTag::Red,
                reasoning: reasons,
            };
        }

        let mut is_int_high = false;
        if case.pathological_nodes == PathologicalNodes::N1b
            || (case.pathological_nodes == PathologicalNodes::N1a
                && (node_size >= 3.0 || case.ene))
        {
            is_int_high = true;
            reasons.push("Clinical N1, N1b, or N1a with ENE/large size".to_string());
        }
        if case.subtype.is_aggressive() {
            is_int_high = true;
            reasons.push(format!("Aggressive Histology: {}", case.subtype));
        }
        if tested && case.molecular.tert && !case.molecular.braf && !case.molecular.ras {
            is_int_high = true;
            reasons.push("TERT promoter mutation alone".to_string());
        }

        if is_int_high {
            return RiskResult {
                risk: RiskCategory::IntermediateHigh,
                description: "Risk of structural recurrence ~20-30%".to_string(),
                color_tag: ColorTag::Orange,
                reasoning: reasons,
            };
        }

        let mut is_int_low = false;
        if case.pathological_ete == PathologicalEte::Microscopic {
            is_int_low = true;
            reasons.push("Microscopic ETE".to_string());
        }
        if case.pathological_nodes == PathologicalNodes::N1a && node_size < 3.0 && !case.ene {
            is_int_low = true;
            reasons.push("Low volume N1a".to_string());
        }
        if tested && case.molecular.braf && !case.molecular.tert {
            is_int_low = true;
            reasons.push("BRAF V600E alone".to_string());
        }
        if case.tumor_type == TumorType::Ftc && vascular_invasion < 4 && vascular_invasion > 0 {
            is_int_low = true;
            reasons.push("Minimally invasive FTC".to_string());
        }

        if is_int_low {
            return RiskResult {
                risk: RiskCategory::IntermediateLow,
                description: "Risk of structural recurrence 10-20%".to_string(),
                color_tag: ColorTag::Yellow,
                reasoning: reasons,
            };
        }

        reasons.push("Intrathyroidal, N0/Nx, no aggressive histology".to_string());
        RiskResult {
            risk: RiskCategory::Low,
            description: "Risk of structural recurrence < 5%".to_string(),
            color_tag: ColorTag::Green,
            reasoning: reasons,
        }
    }
}
