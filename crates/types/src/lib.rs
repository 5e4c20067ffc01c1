//! # Thyrocalc Types
//!
//! Input data model for the differentiated thyroid cancer (DTC)
//! decision-support engine.
//!
//! This crate contains pure data definitions and wire handling:
//! - The [`PatientCase`] value object and its closed clinical enumerations
//! - Strict JSON/YAML parsing with field-path diagnostics
//! - Rendering back to the wire format
//!
//! **No decision logic**: staging, risk stratification and the other
//! derivations belong in `thyrocalc-core`.

pub mod case;

pub use case::{
    Case, ClinicalEte, ClinicalNodes, Comorbidities, ComplicationCourse, ComplicationsProfile,
    CrossSectionalFinding, DistantMets, HistologySubtype, MolecularProfile, MolecularStatus,
    PathologicalEte, PathologicalNodes, PatientCase, RaiScanFinding, Sex, TgAbStatus,
    TumorType, UltrasoundFinding,
};

/// Errors that can occur when parsing or rendering a patient case.
#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    /// The input did not match the case schema (wrong type, unknown key,
    /// out-of-set enum value). The message names the failing field path.
    #[error("case schema mismatch: {0}")]
    Schema(String),
    /// Serialisation of a case back to the wire format failed.
    #[error("failed to serialise case: {0}")]
    Serialization(String),
}
