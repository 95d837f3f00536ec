// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Minimal Evaluator
// ─────────────────────────────────────────────────────────────────────
//! Cheap early rejection: does a track pass the most open combination
//! of every configured selection?

use trackcut_types::{CutContainer, TrackRecord};

use crate::catalog::{CriterionKind, SelectionSemantic};
use crate::identity::any_species_within;
use crate::selection::{observable, passes, TrackSelection};

/// |DCA_xy| above which a track is considered not propagated to the
/// primary vertex (cm).
pub const NOT_PROPAGATED_DCA: f32 = 1e3;

impl<C: CutContainer> TrackSelection<C> {
    /// Whether `track` passes the loosest configured threshold of every
    /// kind with at least one variant.
    ///
    /// Kinds are applied in catalog order and the first failure rejects.
    /// `DcaMin` reads `|DCA_xy|` here, not the radial DCA, and rejects
    /// tracks below the smallest configured value. The identity
    /// criterion passes if any species hypothesis matches; with no species
    /// registered it is skipped. The not-propagated check runs last.
    pub fn is_selected_minimal<T: TrackRecord + ?Sized>(&self, track: &T) -> bool {
        let dca_xy = track.dca_xy();

        for kind in CriterionKind::ALL {
            let Some(threshold) = self.loose[kind.index()] else {
                continue;
            };
            if kind.is_identity() {
                if !self.species.is_empty()
                    && !any_species_within(track, &self.species, self.offsets, threshold)
                {
                    return false;
                }
                continue;
            }
            let ok = match kind.minimal_semantic() {
                SelectionSemantic::Equal => {
                    let value = observable(kind, track, dca_xy);
                    self.variants
                        .iter()
                        .filter(|v| v.kind == kind)
                        .any(|v| passes(SelectionSemantic::Equal, value, v.threshold))
                }
                semantic => passes(semantic, observable(kind, track, dca_xy), threshold),
            };
            if !ok {
                return false;
            }
        }

        !(self.reject_not_propagated && dca_xy.abs() > NOT_PROPAGATED_DCA)
    }
}
