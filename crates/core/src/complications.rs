//! Post-operative complication guidance.
//!
//! Responsibilities:
//! - Emit one advice item per recorded complication, in a fixed order
//!   (hypoparathyroidism, vocal cord palsy, chyle leak)
//! - Emit a single "no major complications" item when nothing matched
//!
//! Notes:
//! - The hematoma and infection flags are captured in the case record but
//!   are not mapped to advice; this gap is intentional and mirrors the
//!   published behaviour

use crate::ColorTag;
use serde::Serialize;
use thyrocalc_types::{ComplicationCourse, PatientCase};
use utoipa::ToSchema;

/// One complication-specific advice item.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct ComplicationAdviceItem {
    pub issue: String,
    pub advice: String,
    pub color_tag: ColorTag,
}

/// Complication guidance operations.
///
/// This is a zero-sized type used for namespacing the advice derivation.
pub struct ComplicationAdvisor;

impl ComplicationAdvisor {
    /// Derive the complication advice list for a case.
    ///
    /// Each complication contributes independently; transient and permanent
    /// courses of the same complication are mutually exclusive.
    pub fn advise(case: &PatientCase) -> Vec<ComplicationAdviceItem> {
        let mut guidance: Vec<ComplicationAdviceItem> = Vec::new();
        let c = &case.complications;

        match c.hypoparathyroidism {
            ComplicationCourse::Transient => guidance.push(ComplicationAdviceItem {
                issue: "Transient Hypoparathyroidism".to_string(),
                advice: "Initiate oral calcium carbonate (1-3g daily) ± Calcitriol (0.25-0.5mcg). \
                         Monitor serum calcium weekly. Wean gradually as parathyroid function recovers."
                    .to_string(),
                color_tag: ColorTag::Yellow,
            }),
            ComplicationCourse::Permanent => guidance.push(ComplicationAdviceItem {
                issue: "Permanent Hypoparathyroidism".to_string(),
                advice: "Requires lifelong Calcium + Calcitriol supplementation. Goal: Maintain serum \
                         Calcium in low-normal range (8.0-8.5 mg/dL) to avoid hypercalciuria. Monitor \
                         urinary calcium and renal function periodically."
                    .to_string(),
                color_tag: ColorTag::Red,
            }),
            ComplicationCourse::None => {}
        }

        match c.vocal_cord_palsy {
            ComplicationCourse::Transient => guidance.push(ComplicationAdviceItem {
                issue: "Transient Vocal Cord Palsy".to_string(),
                advice: "Perform flexible laryngoscopy to confirm. Speech therapy referral for voice \
                         strengthening. Observe for 6-12 months for recovery."
                    .to_string(),
                color_tag: ColorTag::Orange,
            }),
            ComplicationCourse::Permanent => guidance.push(ComplicationAdviceItem {
                issue: "Permanent Vocal Cord Palsy".to_string(),
                advice: "Consider injection laryngoplasty (early) or thyroplasty (late) if significant \
                         dysphonia/aspiration exists. Monitor for aspiration pneumonia."
                    .to_string(),
                color_tag: ColorTag::Red,
            }),
            ComplicationCourse::None => {}
        }

        if c.chyle_leak {
            guidance.push(ComplicationAdviceItem {
                issue: "Chyle Leak".to_string(),
                advice: "Conservative management: Low-fat / MCT diet. Monitor drain output daily. If \
                         high output (>500ml/day), consider NPO/TPN or Octreotide. Surgical \
                         re-exploration if persistent."
                    .to_string(),
                color_tag: ColorTag::Blue,
            });
        }

        if guidance.is_empty() {
            guidance.push(ComplicationAdviceItem {
                issue: "No Major Complications".to_string(),
                advice: "Standard post-operative care. Monitor scar healing.".to_string(),
                color_tag: ColorTag::Green,
            });
        }

        guidance
    }
}
