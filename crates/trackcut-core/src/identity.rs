// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Species Identification (n_sigma)
// ─────────────────────────────────────────────────────────────────────
//! Particle-identification extension of the selection.
//!
//! A single `PIDnSigmaMax` variant is expanded over the configured
//! species list. For each species three deviations are computed:
//! TPC, TOF, and their quadrature sum. Two aggregation policies use them:
//!
//! - [`any_species_within`] — minimal evaluation, an OR over species of
//!   the TPC deviation alone.
//! - [`encode_species_bits`] — signature encoding, two bits per species
//!   (TPC, then combined). TOF enters only through the combination.

use trackcut_types::{CutContainer, Species, TrackRecord};

use crate::catalog::SelectionSemantic;

/// Calibration offsets subtracted from the raw n_sigma values.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PidOffsets {
    pub tpc: f32,
    pub tof: f32,
}

/// Offset-corrected deviations of a track from one species hypothesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation {
    pub tpc: f32,
    pub tof: f32,
    /// `sqrt(tpc² + tof²)`
    pub combined: f32,
}

impl Deviation {
    pub fn of<T: TrackRecord + ?Sized>(track: &T, species: Species, offsets: PidOffsets) -> Self {
        let tpc = n_sigma_tpc(track, species) - offsets.tpc;
        let tof = n_sigma_tof(track, species) - offsets.tof;
        Self {
            tpc,
            tof,
            combined: (tpc * tpc + tof * tof).sqrt(),
        }
    }
}

/// Raw TPC n_sigma of `track` for `species`.
#[inline]
pub fn n_sigma_tpc<T: TrackRecord + ?Sized>(track: &T, species: Species) -> f32 {
    track.tpc_n_sigma(species)
}

/// Raw TOF n_sigma of `track` for `species`.
///
/// Tracks without a TOF match are not special-cased; the record's value
/// is used as is.
#[inline]
pub fn n_sigma_tof<T: TrackRecord + ?Sized>(track: &T, species: Species) -> f32 {
    track.tof_n_sigma(species)
}

/// Whether any species hypothesis has `|n_sigma_TPC - offset| < max`.
///
/// An empty species list never matches; callers decide whether that
/// rejects.
pub fn any_species_within<T: TrackRecord + ?Sized>(
    track: &T,
    species: &[Species],
    offsets: PidOffsets,
    max: f32,
) -> bool {
    species
        .iter()
        .any(|&s| (n_sigma_tpc(track, s) - offsets.tpc).abs() < max)
}

/// Set the identity bits of one `PIDnSigmaMax` variant.
///
/// For species `i` bit `first_bit + 2i` records the TPC test and bit
/// `first_bit + 2i + 1` the combined test, both as `|dev| <= threshold`.
pub fn encode_species_bits<C: CutContainer>(
    deviations: &[Deviation],
    threshold: f32,
    first_bit: u32,
    mut out: C,
) -> C {
    let mut bit = first_bit;
    for dev in deviations {
        for value in [dev.tpc, dev.combined] {
            if SelectionSemantic::AbsUpperLimit.apply(value, threshold) {
                out = out.with_bit(bit);
            }
            bit += 1;
        }
    }
    out
}

/// Deviations for every species, in species-list order.
pub fn deviations<T: TrackRecord + ?Sized>(
    track: &T,
    species: &[Species],
    offsets: PidOffsets,
) -> Vec<Deviation> {
    species
        .iter()
        .map(|&s| Deviation::of(track, s, offsets))
        .collect()
}
