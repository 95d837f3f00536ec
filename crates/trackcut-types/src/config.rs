// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Selection Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{TrackCutError, TrackCutResult};
use crate::record::Species;

/// One configured threshold variant, addressed by catalog name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Selection name, including the configuration prefix.
    pub selection: String,
    pub threshold: f32,
}

impl VariantConfig {
    pub fn new(selection: impl Into<String>, threshold: f32) -> Self {
        Self {
            selection: selection.into(),
            threshold,
        }
    }
}

/// Setup-time configuration of a track selection.
///
/// Variant order is significant: it fixes the bit position of each
/// variant in the signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Prefix shared by all selection names, e.g. `"ConfTrk"`.
    /// Default: empty.
    pub prefix: String,

    /// Ordered threshold variants.
    pub variants: Vec<VariantConfig>,

    /// Ordered species hypotheses for the n_sigma selection.
    pub species: Vec<Species>,

    /// Calibration offset subtracted from the TPC n_sigma.
    /// Default: 0.0.
    pub n_sigma_offset_tpc: f32,

    /// Calibration offset subtracted from the TOF n_sigma.
    /// Default: 0.0.
    pub n_sigma_offset_tof: f32,

    /// Reject tracks whose DCA_xy marks them as not propagated to the
    /// primary vertex. Default: false.
    pub reject_not_propagated_tracks: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            variants: Vec::new(),
            species: Vec::new(),
            n_sigma_offset_tpc: 0.0,
            n_sigma_offset_tof: 0.0,
            reject_not_propagated_tracks: false,
        }
    }
}

impl SelectionConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> TrackCutResult<()> {
        for variant in &self.variants {
            if !variant.threshold.is_finite() {
                return Err(TrackCutError::Validation(format!(
                    "threshold for {} must be finite, got {}",
                    variant.selection, variant.threshold
                )));
            }
        }
        if !self.n_sigma_offset_tpc.is_finite() {
            return Err(TrackCutError::Validation(format!(
                "n_sigma_offset_tpc must be finite, got {}",
                self.n_sigma_offset_tpc
            )));
        }
        if !self.n_sigma_offset_tof.is_finite() {
            return Err(TrackCutError::Validation(format!(
                "n_sigma_offset_tof must be finite, got {}",
                self.n_sigma_offset_tof
            )));
        }
        for (i, species) in self.species.iter().enumerate() {
            if self.species[..i].contains(species) {
                return Err(TrackCutError::DuplicateSpecies(species.to_string()));
            }
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> TrackCutResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| TrackCutError::Config(format!("JSON parse error: {e}")))
    }
}
