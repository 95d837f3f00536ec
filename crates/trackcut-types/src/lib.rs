// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! TrackCut Kernel — the track selection engine.

pub mod config;
pub mod error;
pub mod record;
pub mod signature;

pub use config::{SelectionConfig, VariantConfig};
pub use error::{TrackCutError, TrackCutResult};
pub use record::{Species, TrackRecord, TrackSnapshot, N_SPECIES, NO_RESPONSE};
pub use signature::{CutContainer, Signature};
