//! Benchmark profiles for cubestage.
//!
//! - [`reference_stage`]: 32x32 random stage, larger than any shipped level
//! - [`stress_stage`]: 256x256 random stage for scaling checks
//! - [`stage_json`]: pretty-printed JSON of a profile, for decode benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cubestage_codec::encode_string_pretty;
use cubestage_grid::StageDocument;
use cubestage_test_utils::random_document;

/// 32x32 stage with random heights, variants and metadata.
pub fn reference_stage(seed: u64) -> StageDocument {
    random_document(seed, 32, 32)
}

/// 256x256 stage, same generator as [`reference_stage`].
pub fn stress_stage(seed: u64) -> StageDocument {
    random_document(seed, 256, 256)
}

/// `doc` as the JSON text a stage file would hold.
pub fn stage_json(doc: &StageDocument) -> Result<String, serde_json::Error> {
    encode_string_pretty(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubestage_codec::decode_str;
    use cubestage_core::Rgb;

    #[test]
    fn reference_stage_has_expected_extents() {
        let doc = reference_stage(42);
        assert_eq!((doc.width(), doc.length()), (32, 32));
        assert!(doc.grid.kind_counts().items > 0);
    }

    #[test]
    fn stage_json_decodes_back() {
        let doc = reference_stage(7);
        assert_eq!(decode_str(&stage_json(&doc).unwrap()).unwrap(), doc);
    }

    #[test]
    fn stage_json_returns_text_for_unusual_colors() {
        let mut doc = reference_stage(7);
        doc.meta.appearance.color = Rgb::new(f64::NAN, f64::INFINITY, 0.1);
        let text = stage_json(&doc).unwrap();
        assert!(text.contains("\"color\""));
    }
}
