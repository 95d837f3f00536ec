// ─────────────────────────────────────────────────────────────────────
// TrackCut Kernel — Signature Types
// ─────────────────────────────────────────────────────────────────────
//! Bit-wise containers recording which configured selections a track
//! fulfils.

use serde::{Deserialize, Serialize};

/// Unsigned integer usable as a bit-wise selection container.
///
/// The container width bounds how many selections can be configured;
/// the bound is checked once at setup.
pub trait CutContainer:
    Copy + Default + Eq + std::fmt::Debug + std::fmt::Binary + Send + Sync + 'static
{
    /// Number of usable bits.
    const BITS: u32;

    /// Copy of `self` with bit `pos` set. `pos` must be below `BITS`.
    fn with_bit(self, pos: u32) -> Self;

    /// Whether bit `pos` is set.
    fn bit(self, pos: u32) -> bool;

    fn count_ones(self) -> u32;
}

macro_rules! impl_cut_container {
    ($($t:ty),* $(,)?) => {
        $(
            impl CutContainer for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn with_bit(self, pos: u32) -> Self {
                    self | (1 << pos)
                }

                #[inline]
                fn bit(self, pos: u32) -> bool {
                    pos < Self::BITS && (self >> pos) & 1 == 1
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }
            }
        )*
    };
}

impl_cut_container!(u8, u16, u32, u64, u128);

/// Selection signature of one track.
///
/// `main` holds one bit per non-identity configured variant; `identity`
/// holds two bits (TPC, combined) per species per identity variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature<C> {
    pub main: C,
    pub identity: C,
}

impl<C: CutContainer> Signature<C> {
    pub fn main_bit(&self, pos: u32) -> bool {
        self.main.bit(pos)
    }

    pub fn identity_bit(&self, pos: u32) -> bool {
        self.identity.bit(pos)
    }

    /// True if no bit is set in either container.
    pub fn is_empty(&self) -> bool {
        self.main == C::default() && self.identity == C::default()
    }
}

impl<C: CutContainer> std::fmt::Display for Signature<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "main={:#b} identity={:#b}", self.main, self.identity)
    }
}
