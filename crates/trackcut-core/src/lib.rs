// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Multi-criterion track selection: criterion catalog, minimal
//! evaluation for early rejection, and bit-wise selection signatures
//! for later, tighter cuts.
//!
//! # Invariants
//!
//! 1. **Width is checked at setup**: a [`TrackSelection`] only exists if
//!    every configured variant has a bit in its signature container.
//!    Evaluation never overflows and never fails.
//!
//! 2. **Bit positions are fixed at setup**: each variant stores its slot,
//!    assigned in configuration order. Reordering configuration reorders
//!    bits; evaluation order never does.
//!
//! 3. **Evaluation is pure**: `is_selected_minimal` and `signature` read
//!    only the selection and the track. A built selection is `Send + Sync`
//!    and may be shared by reference across worker threads.
//!
//! 4. **Minimal and signature evaluation are independent**: the minimal
//!    evaluator short-circuits on the loosest thresholds; the encoder
//!    evaluates every variant.

pub mod catalog;
pub mod encoder;
pub mod identity;
pub mod minimal;
pub mod registry;
pub mod selection;

pub use catalog::{
    selection_help, selection_index, selection_name, selection_semantic, CriterionKind,
    CriterionSpec, SelectionSemantic, CATALOG, N_CRITERIA,
};
pub use identity::{n_sigma_tof, n_sigma_tpc, Deviation, PidOffsets};
pub use minimal::NOT_PROPAGATED_DCA;
pub use registry::SelectionRegistry;
pub use selection::{BitSlot, ConfiguredVariant, TrackSelection};
