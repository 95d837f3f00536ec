// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Signature Encoder
// ─────────────────────────────────────────────────────────────────────
//! Bit-wise encoding of every configured variant a track fulfils.
//!
//! Each non-identity variant owns one bit of the main signature, each
//! identity variant owns `2 × species` bits of the identity signature.
//! Bit positions are assigned at setup and stored on the variant.
//! Nothing short-circuits: a track rejected by the minimal evaluator can
//! still carry bits here.

use trackcut_types::{CutContainer, Signature, TrackRecord};

use crate::identity::{deviations, encode_species_bits};
use crate::selection::{observable, passes, BitSlot, TrackSelection};

impl<C: CutContainer> TrackSelection<C> {
    /// Signature of `track` over all configured variants.
    ///
    /// `DcaMin` variants test the radial DCA; `DcaXyMax` and `DcaZMax`
    /// test the signed components.
    pub fn signature<T: TrackRecord + ?Sized>(&self, track: &T) -> Signature<C> {
        let dca = track.dca();
        let devs = if self.identity_bit_count() > 0 {
            deviations(track, &self.species, self.offsets)
        } else {
            Vec::new()
        };

        let mut out = Signature::<C>::default();
        for variant in &self.variants {
            match variant.slot {
                BitSlot::Identity { first } => {
                    out.identity =
                        encode_species_bits(&devs, variant.threshold, first, out.identity);
                }
                BitSlot::Main(bit) => {
                    let value = observable(variant.kind, track, dca);
                    if passes(variant.kind.semantic(), value, variant.threshold) {
                        out.main = out.main.with_bit(bit);
                    }
                }
            }
        }
        out
    }

    /// Signature split into its two containers.
    pub fn cut_container<T: TrackRecord + ?Sized>(&self, track: &T) -> [C; 2] {
        let sig = self.signature(track);
        [sig.main, sig.identity]
    }
}
