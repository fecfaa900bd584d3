use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use bitfield_struct::bitfield;

pub use crate::keycode::modifier::ModifierCombination;

/// Modifier bits exactly as they appear in the first byte of a boot keyboard report.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct HidModifiers {
    #[bits(1)]
    pub left_ctrl: bool,
    #[bits(1)]
    pub left_shift: bool,
    #[bits(1)]
    pub left_alt: bool,
    #[bits(1)]
    pub left_gui: bool,
    #[bits(1)]
    pub right_ctrl: bool,
    #[bits(1)]
    pub right_shift: bool,
    #[bits(1)]
    pub right_alt: bool,
    #[bits(1)]
    pub right_gui: bool,
}

impl BitOr for HidModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl BitAnd for HidModifiers {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() & rhs.into_bits())
    }
}

impl Not for HidModifiers {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::from_bits(!self.into_bits())
    }
}

impl BitAndAssign for HidModifiers {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOrAssign for HidModifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
