// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Track Selection Session
// ─────────────────────────────────────────────────────────────────────
//! Setup-time assembly of a track selection.
//!
//! A [`TrackSelection`] is built once from a [`SelectionRegistry`] and a
//! species list, validated against the width of its signature container,
//! and is immutable afterwards apart from the two calibration setters.
//! Evaluation ([`TrackSelection::is_selected_minimal`],
//! [`TrackSelection::signature`]) only reads it, so a fully built
//! selection can be shared across threads by reference.

use std::marker::PhantomData;

use trackcut_types::{
    CutContainer, SelectionConfig, Species, TrackCutError, TrackCutResult, TrackRecord,
};

use crate::catalog::{CriterionKind, SelectionSemantic, N_CRITERIA};
use crate::identity::PidOffsets;
use crate::registry::SelectionRegistry;

/// Where a configured variant writes its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSlot {
    /// Single bit in the main signature.
    Main(u32),
    /// Two bits per species in the identity signature, starting here.
    Identity { first: u32 },
}

/// One registered `(kind, threshold)` pair with its assigned bit slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfiguredVariant {
    pub kind: CriterionKind,
    pub threshold: f32,
    pub slot: BitSlot,
}

/// A validated track selection over signature container `C`.
#[derive(Debug, Clone)]
pub struct TrackSelection<C: CutContainer = u32> {
    pub(crate) variants: Vec<ConfiguredVariant>,
    pub(crate) loose: [Option<f32>; N_CRITERIA],
    pub(crate) species: Vec<Species>,
    pub(crate) offsets: PidOffsets,
    pub(crate) reject_not_propagated: bool,
    main_bits: u32,
    identity_bits: u32,
    _container: PhantomData<C>,
}

impl<C: CutContainer> TrackSelection<C> {
    /// Freeze `registry` and `species` into a selection.
    ///
    /// Fails if the non-identity variants do not fit in `C`, if the
    /// identity bits (`2 × species × identity variants`) do not fit in
    /// `C`, or if a species is listed twice.
    pub fn new(registry: &SelectionRegistry, species: Vec<Species>) -> TrackCutResult<Self> {
        for (i, s) in species.iter().enumerate() {
            if species[..i].contains(s) {
                return Err(TrackCutError::DuplicateSpecies(s.to_string()));
            }
        }

        let identity_variants = registry.variant_count(CriterionKind::PidNSigmaMax);
        let main_required = registry.len() - identity_variants;
        if main_required > C::BITS as usize {
            log::error!(
                "number of selections too large for the cut container: {main_required} > {}",
                C::BITS
            );
            return Err(TrackCutError::SignatureOverflow {
                signature: "main",
                required: main_required,
                available: C::BITS,
            });
        }

        let per_variant = 2 * species.len();
        let identity_required = per_variant * identity_variants;
        if identity_required > C::BITS as usize {
            log::error!(
                "number of PID selections too large for the cut container: {identity_required} > {}",
                C::BITS
            );
            return Err(TrackCutError::SignatureOverflow {
                signature: "identity",
                required: identity_required,
                available: C::BITS,
            });
        }
        if identity_variants > 0 && species.is_empty() {
            log::warn!("PIDnSigmaMax configured without species; it will never reject a track");
        }

        let mut main_bit = 0u32;
        let mut identity_bit = 0u32;
        let variants: Vec<ConfiguredVariant> = registry
            .iter()
            .map(|(kind, threshold)| {
                let slot = if kind.is_identity() {
                    let slot = BitSlot::Identity {
                        first: identity_bit,
                    };
                    identity_bit += per_variant as u32;
                    slot
                } else {
                    let slot = BitSlot::Main(main_bit);
                    main_bit += 1;
                    slot
                };
                ConfiguredVariant {
                    kind,
                    threshold,
                    slot,
                }
            })
            .collect();

        let mut loose = [None; N_CRITERIA];
        for kind in CriterionKind::ALL {
            loose[kind.index()] = registry.loose_threshold(kind, kind.minimal_semantic());
        }
        let sign = loose[CriterionKind::Sign.index()];
        if registry.thresholds(CriterionKind::Sign).any(|t| Some(t) != sign) {
            log::warn!("several Sign values configured; minimal selection accepts any of them");
        }

        log::info!(
            "track selection configured: {main_bit}/{} main bits, {identity_bit}/{} identity bits, species {:?}",
            C::BITS,
            C::BITS,
            species
        );

        Ok(Self {
            variants,
            loose,
            species,
            offsets: PidOffsets::default(),
            reject_not_propagated: false,
            main_bits: main_bit,
            identity_bits: identity_bit,
            _container: PhantomData,
        })
    }

    /// Build a selection from configuration, resolving each variant name
    /// against the catalog with the configured prefix.
    pub fn from_config(config: &SelectionConfig) -> TrackCutResult<Self> {
        config.validate()?;
        let mut registry = SelectionRegistry::new();
        for variant in &config.variants {
            registry.register_named(&variant.selection, &config.prefix, variant.threshold)?;
        }
        let mut selection = Self::new(&registry, config.species.clone())?;
        selection.set_n_sigma_pid_offset(config.n_sigma_offset_tpc, config.n_sigma_offset_tof);
        selection.set_reject_not_propagated_tracks(config.reject_not_propagated_tracks);
        Ok(selection)
    }

    pub fn set_reject_not_propagated_tracks(&mut self, reject: bool) {
        self.reject_not_propagated = reject;
    }

    pub fn set_n_sigma_pid_offset(&mut self, offset_tpc: f32, offset_tof: f32) {
        self.offsets = PidOffsets {
            tpc: offset_tpc,
            tof: offset_tof,
        };
    }

    pub fn offsets(&self) -> PidOffsets {
        self.offsets
    }

    pub fn rejects_not_propagated_tracks(&self) -> bool {
        self.reject_not_propagated
    }

    /// Configured variants in configuration order, with their bit slots.
    pub fn variants(&self) -> &[ConfiguredVariant] {
        &self.variants
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    /// Loosest configured threshold of `kind` under its minimal semantic,
    /// if any.
    pub fn loose_threshold(&self, kind: CriterionKind) -> Option<f32> {
        self.loose[kind.index()]
    }

    /// Loosest configured n_sigma threshold.
    pub fn sigma_pid_max(&self) -> Option<f32> {
        self.loose_threshold(CriterionKind::PidNSigmaMax)
    }

    /// Bits used in the main signature.
    pub fn main_bit_count(&self) -> u32 {
        self.main_bits
    }

    /// Bits used in the identity signature.
    pub fn identity_bit_count(&self) -> u32 {
        self.identity_bits
    }
}

/// Value of `track` tested by a non-identity `kind`.
///
/// `dca` is the value `DcaMin` reads: the minimal evaluator passes the
/// transverse component, the signature encoder the radial one. `DcaXyMax`
/// and `DcaZMax` always read the signed components.
#[inline]
pub(crate) fn observable<T: TrackRecord + ?Sized>(
    kind: CriterionKind,
    track: &T,
    dca: f32,
) -> Option<f32> {
    let value = match kind {
        CriterionKind::Sign => track.sign(),
        CriterionKind::PtMin | CriterionKind::PtMax => track.pt(),
        CriterionKind::EtaMax => track.eta(),
        CriterionKind::TpcNClsMin => f32::from(track.tpc_n_cls_found()),
        CriterionKind::TpcFClsMin => track.tpc_crossed_rows_over_findable_cls(),
        CriterionKind::TpcCRowsMin => f32::from(track.tpc_n_cls_crossed_rows()),
        CriterionKind::TpcSClsMax => f32::from(track.tpc_n_cls_shared()),
        CriterionKind::TpcFracSClsMax => track.tpc_fraction_shared_cls(),
        CriterionKind::ItsNClsMin => f32::from(track.its_n_cls()),
        CriterionKind::ItsNClsIbMin => f32::from(track.its_n_cls_inner_barrel()),
        CriterionKind::DcaXyMax => track.dca_xy(),
        CriterionKind::DcaZMax => track.dca_z(),
        CriterionKind::DcaMin => dca,
        CriterionKind::PidNSigmaMax => return None,
    };
    Some(value)
}

/// Test a non-identity `kind` against a threshold.
#[inline]
pub(crate) fn passes(semantic: SelectionSemantic, value: Option<f32>, threshold: f32) -> bool {
    value.is_some_and(|v| semantic.apply(v, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackcut_types::{TrackSnapshot, VariantConfig};

    fn registry(entries: &[(CriterionKind, f32)]) -> SelectionRegistry {
        let mut reg = SelectionRegistry::new();
        for &(kind, t) in entries {
            reg.register(kind, t).unwrap();
        }
        reg
    }

    #[test]
    fn test_bit_slots_follow_configuration_order() {
        let reg = registry(&[
            (CriterionKind::PtMin, 0.2),
            (CriterionKind::PidNSigmaMax, 3.0),
            (CriterionKind::EtaMax, 0.8),
            (CriterionKind::PidNSigmaMax, 2.0),
            (CriterionKind::PtMin, 0.5),
        ]);
        let sel: TrackSelection =
            TrackSelection::new(&reg, vec![Species::Pion, Species::Kaon]).unwrap();
        let slots: Vec<_> = sel.variants().iter().map(|v| v.slot).collect();
        assert_eq!(
            slots,
            vec![
                BitSlot::Main(0),
                BitSlot::Identity { first: 0 },
                BitSlot::Main(1),
                BitSlot::Identity { first: 4 },
                BitSlot::Main(2),
            ]
        );
        assert_eq!(sel.main_bit_count(), 3);
        assert_eq!(sel.identity_bit_count(), 8);
    }

    #[test]
    fn test_main_overflow_is_fatal() {
        let entries: Vec<_> = (0..9).map(|i| (CriterionKind::PtMin, i as f32 * 0.1)).collect();
        let reg = registry(&entries);
        let err = TrackSelection::<u8>::new(&reg, vec![]).unwrap_err();
        assert_eq!(
            err,
            TrackCutError::SignatureOverflow {
                signature: "main",
                required: 9,
                available: 8,
            }
        );
        // Same configuration fits in a wider container.
        assert!(TrackSelection::<u16>::new(&reg, vec![]).is_ok());
    }

    #[test]
    fn test_exactly_full_container_is_accepted() {
        let entries: Vec<_> = (0..8).map(|i| (CriterionKind::PtMin, i as f32 * 0.1)).collect();
        let sel = TrackSelection::<u8>::new(&registry(&entries), vec![]).unwrap();
        assert_eq!(sel.main_bit_count(), 8);
    }

    #[test]
    fn test_identity_variants_do_not_count_toward_main() {
        let mut entries: Vec<_> = (0..8).map(|i| (CriterionKind::PtMin, i as f32 * 0.1)).collect();
        entries.push((CriterionKind::PidNSigmaMax, 3.0));
        let sel = TrackSelection::<u8>::new(&registry(&entries), vec![Species::Proton]).unwrap();
        assert_eq!(sel.main_bit_count(), 8);
        assert_eq!(sel.identity_bit_count(), 2);
    }

    #[test]
    fn test_identity_overflow_is_fatal() {
        let reg = registry(&[
            (CriterionKind::PidNSigmaMax, 3.0),
            (CriterionKind::PidNSigmaMax, 2.0),
            (CriterionKind::PidNSigmaMax, 1.0),
        ]);
        let species = vec![Species::Pion, Species::Kaon];
        let err = TrackSelection::<u8>::new(&reg, species).unwrap_err();
        assert!(matches!(
            err,
            TrackCutError::SignatureOverflow {
                signature: "identity",
                required: 12,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_species_rejected() {
        let reg = registry(&[(CriterionKind::PidNSigmaMax, 3.0)]);
        let err =
            TrackSelection::<u32>::new(&reg, vec![Species::Kaon, Species::Kaon]).unwrap_err();
        assert_eq!(err, TrackCutError::DuplicateSpecies("kaon".into()));
    }

    #[test]
    fn test_loose_thresholds_precomputed() {
        let reg = registry(&[
            (CriterionKind::PtMin, 0.5),
            (CriterionKind::PtMin, 0.2),
            (CriterionKind::DcaXyMax, 0.1),
            (CriterionKind::DcaXyMax, 0.3),
            (CriterionKind::DcaMin, 0.05),
            (CriterionKind::DcaMin, 0.01),
            (CriterionKind::PidNSigmaMax, 2.5),
            (CriterionKind::PidNSigmaMax, 3.5),
        ]);
        let sel: TrackSelection = TrackSelection::new(&reg, vec![Species::Proton]).unwrap();
        assert_eq!(sel.loose_threshold(CriterionKind::PtMin), Some(0.2));
        assert_eq!(sel.loose_threshold(CriterionKind::DcaXyMax), Some(0.3));
        assert_eq!(sel.loose_threshold(CriterionKind::DcaMin), Some(0.01));
        assert_eq!(sel.loose_threshold(CriterionKind::EtaMax), None);
        assert_eq!(sel.sigma_pid_max(), Some(3.5));
    }

    #[test]
    fn test_from_config() {
        let config = SelectionConfig {
            prefix: "ConfTrk".into(),
            variants: vec![
                VariantConfig::new("ConfTrkPtMin", 0.2),
                VariantConfig::new("ConfTrkEtaMax", 0.8),
                VariantConfig::new("ConfTrkPIDnSigmaMax", 3.0),
            ],
            species: vec![Species::Proton, Species::Deuteron],
            n_sigma_offset_tpc: 0.1,
            n_sigma_offset_tof: -0.1,
            reject_not_propagated_tracks: true,
        };
        let sel: TrackSelection = TrackSelection::from_config(&config).unwrap();
        assert_eq!(sel.variants().len(), 3);
        assert_eq!(sel.main_bit_count(), 2);
        assert_eq!(sel.identity_bit_count(), 4);
        assert_eq!(sel.offsets(), PidOffsets { tpc: 0.1, tof: -0.1 });
        assert!(sel.rejects_not_propagated_tracks());
    }

    #[test]
    fn test_from_json_end_to_end() {
        let config = SelectionConfig::from_json(
            r#"{
                "variants": [
                    {"selection": "PtMin", "threshold": 0.2},
                    {"selection": "EtaMax", "threshold": 0.8}
                ]
            }"#,
        )
        .unwrap();
        let sel: TrackSelection<u8> = TrackSelection::from_config(&config).unwrap();
        let track = TrackSnapshot {
            pt: 0.5,
            eta: 0.5,
            ..Default::default()
        };
        assert!(sel.is_selected_minimal(&track));
        assert_eq!(sel.signature(&track).main, 0b11);
    }

    #[test]
    fn test_from_config_unknown_name() {
        let config = SelectionConfig {
            prefix: "ConfTrk".into(),
            variants: vec![VariantConfig::new("PtMin", 0.2)],
            ..Default::default()
        };
        let err = TrackSelection::<u32>::from_config(&config).unwrap_err();
        assert_eq!(err, TrackCutError::UnknownSelection("PtMin".into()));
    }

    #[test]
    fn test_observable_dca_asymmetry() {
        let track = TrackSnapshot {
            dca_xy: -0.03,
            dca_z: 0.04,
            ..Default::default()
        };
        assert_eq!(
            observable(CriterionKind::DcaXyMax, &track, track.dca()),
            Some(-0.03)
        );
        assert_eq!(
            observable(CriterionKind::DcaMin, &track, track.dca_xy()),
            Some(-0.03)
        );
        let radial = observable(CriterionKind::DcaMin, &track, track.dca()).unwrap();
        assert!((radial - 0.05).abs() < 1e-6);
        assert_eq!(observable(CriterionKind::PidNSigmaMax, &track, 0.0), None);
    }

    #[test]
    fn test_selection_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrackSelection<u64>>();
    }
}
