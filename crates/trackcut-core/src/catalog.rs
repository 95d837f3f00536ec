// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Criterion Catalog
// ─────────────────────────────────────────────────────────────────────
//! Static table of every selection the kernel can apply to a track:
//! its configuration name, comparison semantic, and help string.
//!
//! The table is fixed at build time. Declaration order is the order in
//! which the minimal evaluator applies the criteria.

pub const N_CRITERIA: usize = 15;

/// How a value is compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionSemantic {
    /// Pass if `value >= threshold`.
    LowerLimit,
    /// Pass if `value <= threshold`.
    UpperLimit,
    /// Pass if `|value| <= threshold`.
    AbsUpperLimit,
    /// Pass if `|value| >= threshold`.
    AbsLowerLimit,
    /// Pass if `value == threshold`.
    Equal,
}

impl SelectionSemantic {
    /// Test `value` against `threshold`.
    #[inline]
    pub fn apply(self, value: f32, threshold: f32) -> bool {
        match self {
            SelectionSemantic::LowerLimit => value >= threshold,
            SelectionSemantic::UpperLimit => value <= threshold,
            SelectionSemantic::AbsUpperLimit => value.abs() <= threshold,
            SelectionSemantic::AbsLowerLimit => value.abs() >= threshold,
            SelectionSemantic::Equal => value == threshold,
        }
    }

    /// The more permissive of two thresholds.
    ///
    /// Upper limits open up with larger values, lower limits with smaller
    /// ones. Equality has no ordering; the smaller value is kept.
    #[inline]
    pub fn loosest(self, a: f32, b: f32) -> f32 {
        match self {
            SelectionSemantic::UpperLimit | SelectionSemantic::AbsUpperLimit => a.max(b),
            SelectionSemantic::LowerLimit
            | SelectionSemantic::AbsLowerLimit
            | SelectionSemantic::Equal => a.min(b),
        }
    }
}

/// Selectable track quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CriterionKind {
    Sign,
    PtMin,
    PtMax,
    EtaMax,
    TpcNClsMin,
    TpcFClsMin,
    TpcCRowsMin,
    TpcSClsMax,
    TpcFracSClsMax,
    ItsNClsMin,
    ItsNClsIbMin,
    DcaXyMax,
    DcaZMax,
    DcaMin,
    PidNSigmaMax,
}

impl CriterionKind {
    /// All kinds in declaration order.
    pub const ALL: [CriterionKind; N_CRITERIA] = [
        CriterionKind::Sign,
        CriterionKind::PtMin,
        CriterionKind::PtMax,
        CriterionKind::EtaMax,
        CriterionKind::TpcNClsMin,
        CriterionKind::TpcFClsMin,
        CriterionKind::TpcCRowsMin,
        CriterionKind::TpcSClsMax,
        CriterionKind::TpcFracSClsMax,
        CriterionKind::ItsNClsMin,
        CriterionKind::ItsNClsIbMin,
        CriterionKind::DcaXyMax,
        CriterionKind::DcaZMax,
        CriterionKind::DcaMin,
        CriterionKind::PidNSigmaMax,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn spec(self) -> &'static CriterionSpec {
        &CATALOG[self.index()]
    }

    #[inline]
    pub fn semantic(self) -> SelectionSemantic {
        self.spec().semantic
    }

    /// Semantic the minimal evaluator applies to this kind.
    ///
    /// Identical to [`semantic`](Self::semantic) except for `DcaMin`: the
    /// catalog bounds it from above for the signature, while the minimal
    /// evaluator keeps the smallest threshold and rejects tracks closer
    /// to the vertex than that.
    #[inline]
    pub fn minimal_semantic(self) -> SelectionSemantic {
        match self {
            CriterionKind::DcaMin => SelectionSemantic::AbsLowerLimit,
            kind => kind.semantic(),
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// The species-hypothesis criterion, handled by the identity extension.
    #[inline]
    pub fn is_identity(self) -> bool {
        self == CriterionKind::PidNSigmaMax
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriterionSpec {
    pub kind: CriterionKind,
    pub name: &'static str,
    pub semantic: SelectionSemantic,
    pub help: &'static str,
}

const fn row(
    kind: CriterionKind,
    name: &'static str,
    semantic: SelectionSemantic,
    help: &'static str,
) -> CriterionSpec {
    CriterionSpec {
        kind,
        name,
        semantic,
        help,
    }
}

use CriterionKind as K;
use SelectionSemantic as S;

/// The catalog, indexed by [`CriterionKind::index`].
pub static CATALOG: [CriterionSpec; N_CRITERIA] = [
    row(K::Sign, "Sign", S::Equal, "Sign of the track"),
    row(K::PtMin, "PtMin", S::LowerLimit, "Minimal pT (GeV/c)"),
    row(K::PtMax, "PtMax", S::UpperLimit, "Maximal pT (GeV/c)"),
    row(K::EtaMax, "EtaMax", S::AbsUpperLimit, "Maximal eta"),
    row(K::TpcNClsMin, "TPCnClsMin", S::LowerLimit, "Minimum number of TPC clusters"),
    row(
        K::TpcFClsMin,
        "TPCfClsMin",
        S::LowerLimit,
        "Minimum fraction of crossed rows/findable clusters",
    ),
    row(K::TpcCRowsMin, "TPCcRowsMin", S::LowerLimit, "Minimum number of crossed TPC rows"),
    row(K::TpcSClsMax, "TPCsClsMax", S::UpperLimit, "Maximal number of shared TPC cluster"),
    row(
        K::TpcFracSClsMax,
        "TPCfracsClsMax",
        S::UpperLimit,
        "Maximal number of fraction of shared TPC cluster",
    ),
    row(K::ItsNClsMin, "ITSnClsMin", S::LowerLimit, "Minimum number of ITS clusters"),
    row(
        K::ItsNClsIbMin,
        "ITSnClsIbMin",
        S::LowerLimit,
        "Minimum number of ITS clusters in the inner barrel",
    ),
    row(K::DcaXyMax, "DCAxyMax", S::AbsUpperLimit, "Maximal DCA_xy (cm)"),
    row(K::DcaZMax, "DCAzMax", S::AbsUpperLimit, "Maximal DCA_z (cm)"),
    row(K::DcaMin, "DCAMin", S::AbsUpperLimit, "Minimal DCA (cm)"),
    row(K::PidNSigmaMax, "PIDnSigmaMax", S::AbsUpperLimit, "Maximal PID (nSigma)"),
];

/// Configuration name of a selection: `prefix + name + suffix`.
pub fn selection_name(kind: CriterionKind, prefix: &str, suffix: &str) -> String {
    let name = kind.name();
    let mut out = String::with_capacity(prefix.len() + name.len() + suffix.len());
    out.push_str(prefix);
    out.push_str(name);
    out.push_str(suffix);
    out
}

/// Catalog index of the selection whose `prefix + name` equals `name`.
///
/// Returns `None` when nothing matches.
pub fn selection_index(name: &str, prefix: &str) -> Option<usize> {
    let rest = name.strip_prefix(prefix)?;
    CATALOG.iter().position(|spec| spec.name == rest)
}

pub fn selection_semantic(kind: CriterionKind) -> SelectionSemantic {
    kind.semantic()
}

/// Help string of a selection, with `prefix` prepended.
pub fn selection_help(kind: CriterionKind, prefix: &str) -> String {
    format!("{prefix}{}", kind.spec().help)
}
