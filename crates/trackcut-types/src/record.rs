// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Track Record Abstraction
// ─────────────────────────────────────────────────────────────────────
//! Read-only view of a reconstructed track.
//!
//! The selection engine never owns or mutates track data. Anything that
//! can answer the accessors of [`TrackRecord`] can be selected; the
//! [`TrackSnapshot`] value type is provided for callers without their
//! own data model.

use serde::{Deserialize, Serialize};

/// Number of particle species with detector response slots.
pub const N_SPECIES: usize = 9;

/// Particle-identity hypothesis tested through detector response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Electron,
    Muon,
    Pion,
    Kaon,
    Proton,
    Deuteron,
    Triton,
    Helium3,
    Alpha,
}

impl Species {
    pub const ALL: [Species; N_SPECIES] = [
        Species::Electron,
        Species::Muon,
        Species::Pion,
        Species::Kaon,
        Species::Proton,
        Species::Deuteron,
        Species::Triton,
        Species::Helium3,
        Species::Alpha,
    ];

    /// Stable slot index, matching the ordering of [`Species::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Species::Electron => "electron",
            Species::Muon => "muon",
            Species::Pion => "pion",
            Species::Kaon => "kaon",
            Species::Proton => "proton",
            Species::Deuteron => "deuteron",
            Species::Triton => "triton",
            Species::Helium3 => "helium3",
            Species::Alpha => "alpha",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-track accessors consumed by the selection engine.
pub trait TrackRecord {
    /// Charge sign (+1 / -1).
    fn sign(&self) -> f32;
    /// Transverse momentum (GeV/c).
    fn pt(&self) -> f32;
    fn eta(&self) -> f32;
    fn tpc_n_cls_found(&self) -> u8;
    fn tpc_crossed_rows_over_findable_cls(&self) -> f32;
    fn tpc_n_cls_crossed_rows(&self) -> u8;
    fn tpc_n_cls_shared(&self) -> u8;
    fn tpc_fraction_shared_cls(&self) -> f32;
    fn its_n_cls(&self) -> u8;
    fn its_n_cls_inner_barrel(&self) -> u8;
    /// Signed transverse impact parameter (cm).
    fn dca_xy(&self) -> f32;
    /// Signed longitudinal impact parameter (cm).
    fn dca_z(&self) -> f32;

    /// Radial impact parameter, `sqrt(dca_xy² + dca_z²)`.
    fn dca(&self) -> f32 {
        self.dca_xy().hypot(self.dca_z())
    }

    /// TPC n_sigma for the given species hypothesis.
    fn tpc_n_sigma(&self, species: Species) -> f32;
    /// TOF n_sigma for the given species hypothesis.
    fn tof_n_sigma(&self, species: Species) -> f32;
}

/// Owned track values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackSnapshot {
    pub sign: f32,
    pub pt: f32,
    pub eta: f32,
    pub tpc_n_cls_found: u8,
    pub tpc_crossed_rows_over_findable_cls: f32,
    pub tpc_n_cls_crossed_rows: u8,
    pub tpc_n_cls_shared: u8,
    pub tpc_fraction_shared_cls: f32,
    pub its_n_cls: u8,
    pub its_n_cls_inner_barrel: u8,
    pub dca_xy: f32,
    pub dca_z: f32,
    /// TPC n_sigma, indexed by [`Species::index`].
    pub tpc_n_sigma: [f32; N_SPECIES],
    /// TOF n_sigma, indexed by [`Species::index`].
    pub tof_n_sigma: [f32; N_SPECIES],
}

/// Placeholder response for a species the detector did not measure.
pub const NO_RESPONSE: f32 = -999.0;

impl Default for TrackSnapshot {
    fn default() -> Self {
        Self {
            sign: 1.0,
            pt: 0.0,
            eta: 0.0,
            tpc_n_cls_found: 0,
            tpc_crossed_rows_over_findable_cls: 0.0,
            tpc_n_cls_crossed_rows: 0,
            tpc_n_cls_shared: 0,
            tpc_fraction_shared_cls: 0.0,
            its_n_cls: 0,
            its_n_cls_inner_barrel: 0,
            dca_xy: 0.0,
            dca_z: 0.0,
            tpc_n_sigma: [NO_RESPONSE; N_SPECIES],
            tof_n_sigma: [NO_RESPONSE; N_SPECIES],
        }
    }
}

impl TrackSnapshot {
    /// Set both detector responses for one species.
    pub fn with_n_sigma(mut self, species: Species, tpc: f32, tof: f32) -> Self {
        self.tpc_n_sigma[species.index()] = tpc;
        self.tof_n_sigma[species.index()] = tof;
        self
    }
}

impl TrackRecord for TrackSnapshot {
    fn sign(&self) -> f32 {
        self.sign
    }
    fn pt(&self) -> f32 {
        self.pt
    }
    fn eta(&self) -> f32 {
        self.eta
    }
    fn tpc_n_cls_found(&self) -> u8 {
        self.tpc_n_cls_found
    }
    fn tpc_crossed_rows_over_findable_cls(&self) -> f32 {
        self.tpc_crossed_rows_over_findable_cls
    }
    fn tpc_n_cls_crossed_rows(&self) -> u8 {
        self.tpc_n_cls_crossed_rows
    }
    fn tpc_n_cls_shared(&self) -> u8 {
        self.tpc_n_cls_shared
    }
    fn tpc_fraction_shared_cls(&self) -> f32 {
        self.tpc_fraction_shared_cls
    }
    fn its_n_cls(&self) -> u8 {
        self.its_n_cls
    }
    fn its_n_cls_inner_barrel(&self) -> u8 {
        self.its_n_cls_inner_barrel
    }
    fn dca_xy(&self) -> f32 {
        self.dca_xy
    }
    fn dca_z(&self) -> f32 {
        self.dca_z
    }
    fn tpc_n_sigma(&self, species: Species) -> f32 {
        self.tpc_n_sigma[species.index()]
    }
    fn tof_n_sigma(&self, species: Species) -> f32 {
        self.tof_n_sigma[species.index()]
    }
}
