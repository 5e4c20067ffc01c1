//! Patient case wire model and translation helpers.
//!
//! This module defines the single input record consumed by every engine
//! query, plus strict parse/render helpers for the JSON/YAML wire format.
//!
//! Responsibilities:
//! - Define the `PatientCase` value object and its closed enumerations
//! - Parse case documents strictly, surfacing the failing field path
//! - Render a case back to the wire format
//!
//! Notes:
//! - The record is a value object: no identity, never mutated by the engine
//! - Enum wire strings are closed sets and must round-trip exactly
//! - Malformed enum values are rejected here, before the engine ever runs

use crate::CaseError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Demographic and pre-operative (clinical) enumerations
// ============================================================================

/// Patient sex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sex {
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// Clinical (pre-operative) nodal status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ClinicalNodes {
    #[default]
    #[serde(rename = "cN0")]
    CN0,
    #[serde(rename = "cN1a")]
    CN1a,
    #[serde(rename = "cN1b")]
    CN1b,
}

/// Clinical (pre-operative) extrathyroidal extension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ClinicalEte {
    #[default]
    None,
    #[serde(rename = "Gross (Strap Muscles)")]
    GrossStrap,
    #[serde(rename = "Gross (Major Structures)")]
    GrossMajor,
}

/// Comorbidities relevant to TSH-suppression intensity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Comorbidities {
    #[serde(default)]
    pub osteoporosis: bool,
    #[serde(default)]
    pub atrial_fib: bool,
    /// Age over 60.
    #[serde(default)]
    pub advanced_age: bool,
}

impl Comorbidities {
    /// True when any comorbidity flag is set.
    pub fn any(&self) -> bool {
        self.osteoporosis || self.atrial_fib || self.advanced_age
    }
}

// ============================================================================
// Pathological (post-operative) enumerations
// ============================================================================

/// Differentiated thyroid carcinoma tumour type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TumorType {
    #[default]
    #[serde(rename = "PTC")]
    Ptc,
    #[serde(rename = "FTC")]
    Ftc,
    #[serde(rename = "OTC")]
    Otc,
    #[serde(rename = "NIFTP")]
    Niftp,
}

/// Histologic subtype/variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum HistologySubtype {
    #[default]
    Classical,
    #[serde(rename = "Follicular Variant")]
    FollicularVariant,
    #[serde(rename = "Tall Cell")]
    TallCell,
    Hobnail,
    Columnar,
    #[serde(rename = "Diffuse Sclerosing")]
    DiffuseSclerosing,
    Solid,
    #[serde(rename = "Widely Invasive FTC/OTC")]
    WidelyInvasive,
}

impl HistologySubtype {
    /// Human-readable label, identical to the wire string.
    pub fn label(&self) -> &'static str {
        match self {
            HistologySubtype::Classical => "Classical",
            HistologySubtype::FollicularVariant => "Follicular Variant",
            HistologySubtype::TallCell => "Tall Cell",
            HistologySubtype::Hobnail => "Hobnail",
            HistologySubtype::Columnar => "Columnar",
            HistologySubtype::DiffuseSclerosing => "Diffuse Sclerosing",
            HistologySubtype::Solid => "Solid",
            HistologySubtype::WidelyInvasive => "Widely Invasive FTC/OTC",
        }
    }

    /// True for the variants associated with higher structural recurrence.
    pub fn is_aggressive(&self) -> bool {
        matches!(
            self,
            HistologySubtype::TallCell
                | HistologySubtype::Hobnail
                | HistologySubtype::Columnar
                | HistologySubtype::DiffuseSclerosing
                | HistologySubtype::Solid
        )
    }
}

impl std::fmt::Display for HistologySubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Pathological extrathyroidal extension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PathologicalEte {
    #[default]
    None,
    Microscopic,
    #[serde(rename = "Gross (Strap Muscles)")]
    GrossStrap,
    #[serde(rename = "Gross (Major Structures)")]
    GrossMajor,
}

impl PathologicalEte {
    /// True for either gross extension category.
    pub fn is_gross(&self) -> bool {
        matches!(self, PathologicalEte::GrossStrap | PathologicalEte::GrossMajor)
    }
}

/// Pathological nodal status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PathologicalNodes {
    Nx,
    #[default]
    N0,
    N1a,
    N1b,
}

/// Distant metastasis status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DistantMets {
    #[default]
    M0,
    M1,
}

// ============================================================================
// Molecular profile
// ============================================================================

/// Whether molecular testing was performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MolecularStatus {
    #[default]
    Unknown,
    Tested,
}

/// Molecular testing results.
///
/// The mutation flags are meaningful only when `status` is `Tested`; the
/// engine ignores them otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MolecularProfile {
    #[serde(default)]
    pub status: MolecularStatus,
    #[serde(default)]
    pub braf: bool,
    #[serde(default)]
    pub tert: bool,
    #[serde(default)]
    pub ras: bool,
    #[serde(default)]
    pub tp53: bool,
    #[serde(default)]
    pub fusion: bool,
}

// ============================================================================
// Post-operative complications
// ============================================================================

/// Course of a post-operative complication.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComplicationCourse {
    #[default]
    None,
    Transient,
    Permanent,
}

/// Post-operative complications profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComplicationsProfile {
    #[serde(default)]
    pub hypoparathyroidism: ComplicationCourse,
    #[serde(default)]
    pub vocal_cord_palsy: ComplicationCourse,
    #[serde(default)]
    pub hematoma: bool,
    #[serde(default)]
    pub infection: bool,
    #[serde(default)]
    pub chyle_leak: bool,
}

// ============================================================================
// Surveillance enumerations
// ============================================================================

/// Thyroglobulin antibody trend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TgAbStatus {
    #[default]
    Negative,
    #[serde(rename = "Positive (Stable/Declining)")]
    PositiveStableDeclining,
    #[serde(rename = "Positive (Rising)")]
    PositiveRising,
}

/// Neck ultrasound finding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UltrasoundFinding {
    #[default]
    Negative,
    #[serde(rename = "Suspicious Nodes")]
    SuspiciousNodes,
    #[serde(rename = "Thyroid Bed Recurrence")]
    ThyroidBedRecurrence,
}

/// Radioiodine scan finding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RaiScanFinding {
    #[default]
    #[serde(rename = "Not Done")]
    NotDone,
    #[serde(rename = "No Uptake")]
    NoUptake,
    #[serde(rename = "Thyroid Bed Uptake")]
    ThyroidBedUptake,
    #[serde(rename = "Distant Uptake")]
    DistantUptake,
}

impl RaiScanFinding {
    /// True when the scan shows uptake anywhere.
    pub fn has_uptake(&self) -> bool {
        matches!(
            self,
            RaiScanFinding::ThyroidBedUptake | RaiScanFinding::DistantUptake
        )
    }
}

/// Cross-sectional imaging (CT/MRI) finding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CrossSectionalFinding {
    #[default]
    #[serde(rename = "Not Done")]
    NotDone,
    Negative,
    #[serde(rename = "Structural Disease")]
    StructuralDisease,
}

// ============================================================================
// Patient case record
// ============================================================================

/// The immutable input record consumed by every engine query.
///
/// One flat value object covering demographics, pre-operative clinical
/// findings, post-operative pathology, molecular profile, complications and
/// surveillance labs/imaging. The engine never mutates a case; every query
/// returns fresh result values.
///
/// Field semantics the engine relies on:
/// - `node_size`, `num_pos_nodes` and `ene` are meaningful only when
///   `pathological_nodes` is `N1a`/`N1b`
/// - `vascular_invasion` is meaningful only for FTC/OTC tumours
/// - `molecular` mutation flags are meaningful only when molecular testing
///   was performed
/// - missing optional numerics resolve to zero/absent at the point of use
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatientCase {
    /// Patient name, used only for report headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age in years at assessment.
    pub age: f64,
    pub sex: Sex,

    /// Pre-operative tumour size in cm.
    pub clinical_size: f64,
    #[serde(default)]
    pub clinical_nodes: ClinicalNodes,
    #[serde(default, rename = "clinicalETE")]
    pub clinical_ete: ClinicalEte,
    #[serde(default)]
    pub contralateral_nodules: bool,
    /// History of head/neck radiation.
    #[serde(default)]
    pub prior_radiation: bool,
    #[serde(default)]
    pub comorbidities: Comorbidities,

    pub tumor_type: TumorType,
    #[serde(default)]
    pub subtype: HistologySubtype,
    /// Post-operative tumour size in cm.
    pub pathological_size: f64,
    #[serde(default)]
    pub multifocality: bool,
    #[serde(default)]
    pub capsular_invasion: bool,
    #[serde(default, rename = "pathologicalETE")]
    pub pathological_ete: PathologicalEte,
    #[serde(default)]
    pub pathological_nodes: PathologicalNodes,

    /// Largest metastatic node size in cm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_size: Option<f64>,
    /// Number of positive nodes.
    #[serde(default)]
    pub num_pos_nodes: u32,
    /// Extranodal extension.
    #[serde(default)]
    pub ene: bool,

    /// Number of invaded vessels (FTC/OTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vascular_invasion: Option<u32>,
    #[serde(default)]
    pub margins_positive: bool,

    #[serde(default)]
    pub distant_mets: DistantMets,

    #[serde(default)]
    pub molecular: MolecularProfile,

    #[serde(default)]
    pub complications: ComplicationsProfile,

    /// Suppressed thyroglobulin in ng/mL.
    #[serde(default)]
    pub tg_suppressed: f64,
    /// Stimulated thyroglobulin in ng/mL, when measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tg_stimulated: Option<f64>,
    /// Current TSH in mIU/L.
    #[serde(default)]
    pub tsh_value: f64,
    #[serde(default)]
    pub tg_ab_status: TgAbStatus,

    #[serde(default, rename = "imagingUS")]
    pub imaging_us: UltrasoundFinding,
    #[serde(default, rename = "imagingRAI")]
    pub imaging_rai: RaiScanFinding,
    #[serde(default)]
    pub imaging_cross_sectional: CrossSectionalFinding,
}

impl Default for PatientCase {
    /// Baseline case: a 45-year-old woman with a 2.5 cm classical PTC,
    /// node-negative, no metastases, untested molecular profile, no
    /// complications and an undetectable suppressed Tg.
    fn default() -> Self {
        Self {
            name: None,
            age: 45.0,
            sex: Sex::Female,
            clinical_size: 2.5,
            clinical_nodes: ClinicalNodes::CN0,
            clinical_ete: ClinicalEte::None,
            contralateral_nodules: false,
            prior_radiation: false,
            comorbidities: Comorbidities::default(),
            tumor_type: TumorType::Ptc,
            subtype: HistologySubtype::Classical,
            pathological_size: 2.5,
            multifocality: false,
            capsular_invasion: false,
            pathological_ete: PathologicalEte::None,
            pathological_nodes: PathologicalNodes::N0,
            node_size: None,
            num_pos_nodes: 0,
            ene: false,
            vascular_invasion: None,
            margins_positive: false,
            distant_mets: DistantMets::M0,
            molecular: MolecularProfile::default(),
            complications: ComplicationsProfile::default(),
            tg_suppressed: 0.1,
            tg_stimulated: None,
            tsh_value: 0.5,
            tg_ab_status: TgAbStatus::Negative,
            imaging_us: UltrasoundFinding::Negative,
            imaging_rai: RaiScanFinding::NotDone,
            imaging_cross_sectional: CrossSectionalFinding::NotDone,
        }
    }
}

// ============================================================================
// Public Case operations
// ============================================================================

/// Patient case wire operations.
///
/// This is a zero-sized type used for namespacing case parse/render
/// operations. All methods are associated functions.
pub struct Case;

impl Case {
    /// Parse a patient case from JSON text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path"
    /// (e.g. `molecular.status`) to the failing field when the JSON does not
    /// match the case schema.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::Schema`] if:
    /// - any field has an unexpected type,
    /// - any enum field carries a value outside its closed set,
    /// - any unknown keys are present (due to `#[serde(deny_unknown_fields)]`).
    pub fn parse_json(json_text: &str) -> Result<PatientCase, CaseError> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>"
            } else {
                path.as_str()
            };
            CaseError::Schema(format!("{path}: {source}"))
        })
    }

    /// Parse a patient case from YAML text.
    ///
    /// Same schema and strictness as [`Case::parse_json`].
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::Schema`] on any schema mismatch, naming the
    /// failing field path.
    pub fn parse_yaml(yaml_text: &str) -> Result<PatientCase, CaseError> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        serde_path_to_error::deserialize(deserializer).map_err(|err| {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>"
            } else {
                path.as_str()
            };
            CaseError::Schema(format!("{path}: {source}"))
        })
    }

    /// Render a patient case as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::Serialization`] if serialisation fails.
    pub fn render_json(case: &PatientCase) -> Result<String, CaseError> {
        serde_json::to_string_pretty(case).map_err(|e| CaseError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
  "name": "Jane Doe",
  "age": 62,
  "sex": "Female",
  "clinicalSize": 3.2,
  "clinicalNodes": "cN1a",
  "clinicalETE": "None",
  "contralateralNodules": false,
  "priorRadiation": false,
  "comorbidities": { "osteoporosis": true, "atrialFib": false, "advancedAge": true },
  "tumorType": "PTC",
  "subtype": "Tall Cell",
  "pathologicalSize": 3.5,
  "multifocality": true,
  "capsularInvasion": false,
  "pathologicalETE": "Microscopic",
  "pathologicalNodes": "N1a",
  "nodeSize": 1.2,
  "numPosNodes": 4,
  "ene": false,
  "marginsPositive": false,
  "distantMets": "M0",
  "molecular": { "status": "Tested", "braf": true, "tert": false, "ras": false, "tp53": false, "fusion": false },
  "complications": { "hypoparathyroidism": "Transient", "vocalCordPalsy": "None", "hematoma": false, "infection": false, "chyleLeak": false },
  "tgSuppressed": 0.4,
  "tshValue": 0.3,
  "tgAbStatus": "Negative",
  "imagingUS": "Negative",
  "imagingRAI": "Not Done",
  "imagingCrossSectional": "Not Done"
}"#
    }

    #[test]
    fn round_trips_sample_json() {
        let case = Case::parse_json(sample_json()).expect("parse json");
        let output = Case::render_json(&case).expect("render case");
        let reparsed = Case::parse_json(&output).expect("reparse json");
        assert_eq!(case, reparsed);
    }

    #[test]
    fn parses_exact_enum_wire_strings() {
        let case = Case::parse_json(sample_json()).expect("parse json");
        assert_eq!(case.clinical_nodes, ClinicalNodes::CN1a);
        assert_eq!(case.subtype, HistologySubtype::TallCell);
        assert_eq!(case.pathological_ete, PathologicalEte::Microscopic);
        assert_eq!(case.imaging_rai, RaiScanFinding::NotDone);
        assert_eq!(case.molecular.status, MolecularStatus::Tested);
        assert_eq!(
            case.complications.hypoparathyroidism,
            ComplicationCourse::Transient
        );
    }

    #[test]
    fn strict_validation_rejects_unknown_keys() {
        let input = sample_json().replace("\"name\": \"Jane Doe\"", "\"unexpected_key\": 1");
        let err = Case::parse_json(&input).expect_err("should reject unknown key");
        match err {
            CaseError::Schema(msg) => assert!(msg.contains("unexpected_key")),
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn strict_validation_rejects_wrong_types() {
        let input = sample_json().replace("\"nodeSize\": 1.2", "\"nodeSize\": \"big\"");
        let err = Case::parse_json(&input).expect_err("should reject wrong type");
        match err {
            CaseError::Schema(msg) => assert!(msg.contains("nodeSize")),
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_set_enum_values() {
        let input = sample_json().replace("\"pathologicalNodes\": \"N1a\"", "\"pathologicalNodes\": \"N2\"");
        let err = Case::parse_json(&input).expect_err("should reject out-of-set enum");
        match err {
            CaseError::Schema(msg) => assert!(msg.contains("pathologicalNodes")),
            other => panic!("expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn optional_fields_default_when_omitted() {
        let input = r#"{
  "age": 40,
  "sex": "Male",
  "clinicalSize": 0.8,
  "tumorType": "PTC",
  "pathologicalSize": 0.8
}"#;
        let case = Case::parse_json(input).expect("should parse minimal case");
        assert!(case.name.is_none());
        assert_eq!(case.node_size, None);
        assert_eq!(case.num_pos_nodes, 0);
        assert!(!case.ene);
        assert_eq!(case.vascular_invasion, None);
        assert_eq!(case.tg_stimulated, None);
        assert_eq!(case.distant_mets, DistantMets::M0);
        assert_eq!(case.imaging_rai, RaiScanFinding::NotDone);
        assert!(!case.comorbidities.any());
    }

    #[test]
    fn parses_yaml_case() {
        let input = r#"age: 58
sex: Male
clinicalSize: 4.5
tumorType: FTC
subtype: Widely Invasive FTC/OTC
pathologicalSize: 4.5
vascularInvasion: 5
distantMets: M1
tgAbStatus: Positive (Rising)
"#;
        let case = Case::parse_yaml(input).expect("parse yaml");
        assert_eq!(case.tumor_type, TumorType::Ftc);
        assert_eq!(case.subtype, HistologySubtype::WidelyInvasive);
        assert_eq!(case.vascular_invasion, Some(5));
        assert_eq!(case.distant_mets, DistantMets::M1);
        assert_eq!(case.tg_ab_status, TgAbStatus::PositiveRising);
    }

    #[test]
    fn comorbidity_any_covers_each_flag() {
        let mut c = Comorbidities::default();
        assert!(!c.any());
        c.osteoporosis = true;
        assert!(c.any());
        let c = Comorbidities {
            atrial_fib: true,
            ..Comorbidities::default()
        };
        assert!(c.any());
        let c = Comorbidities {
            advanced_age: true,
            ..Comorbidities::default()
        };
        assert!(c.any());
    }
}
