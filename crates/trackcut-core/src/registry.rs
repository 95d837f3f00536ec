// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Selection Registry
// ─────────────────────────────────────────────────────────────────────
//! Ordered store of configured threshold variants.
//!
//! Variants are kept in registration order across all kinds. That order
//! later becomes the bit order of the signature, so the registry never
//! sorts or deduplicates.

use trackcut_types::{TrackCutError, TrackCutResult};

use crate::catalog::{selection_index, CriterionKind, SelectionSemantic};

#[derive(Debug, Clone, Default)]
pub struct SelectionRegistry {
    variants: Vec<(CriterionKind, f32)>,
}

impl SelectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one threshold variant for `kind`.
    pub fn register(&mut self, kind: CriterionKind, threshold: f32) -> TrackCutResult<()> {
        if !threshold.is_finite() {
            return Err(TrackCutError::Validation(format!(
                "threshold for {} must be finite, got {threshold}",
                kind.name()
            )));
        }
        self.variants.push((kind, threshold));
        Ok(())
    }

    /// Append a variant addressed by its configuration name.
    pub fn register_named(
        &mut self,
        name: &str,
        prefix: &str,
        threshold: f32,
    ) -> TrackCutResult<CriterionKind> {
        let kind = selection_index(name, prefix)
            .and_then(CriterionKind::from_index)
            .ok_or_else(|| TrackCutError::UnknownSelection(name.to_string()))?;
        log::debug!("resolved selection {name} -> {kind:?} ({threshold})");
        self.register(kind, threshold)?;
        Ok(kind)
    }

    /// Number of variants registered for `kind`.
    pub fn variant_count(&self, kind: CriterionKind) -> usize {
        self.variants.iter().filter(|(k, _)| *k == kind).count()
    }

    /// Number of variants across all kinds.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Thresholds registered for `kind`, in registration order.
    pub fn thresholds(&self, kind: CriterionKind) -> impl Iterator<Item = f32> + '_ {
        self.variants
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, t)| *t)
    }

    /// The most permissive threshold registered for `kind`, judged by
    /// `semantic`. `None` if the kind has no variants.
    pub fn loose_threshold(&self, kind: CriterionKind, semantic: SelectionSemantic) -> Option<f32> {
        self.thresholds(kind).reduce(|a, b| semantic.loosest(a, b))
    }

    /// All `(kind, threshold)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (CriterionKind, f32)> + '_ {
        self.variants.iter().copied()
    }
}
