use core::ops::BitOr;

use bitfield_struct::bitfield;

use crate::modifier::HidModifiers;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl ModifierCombination {
    pub const LCTRL: Self = Self::new().with_ctrl(true);
    pub const LSHIFT: Self = Self::new().with_shift(true);
    pub const LALT: Self = Self::new().with_alt(true);
    pub const LGUI: Self = Self::new().with_gui(true);
    pub const RCTRL: Self = Self::new().with_right(true).with_ctrl(true);
    pub const RSHIFT: Self = Self::new().with_right(true).with_shift(true);
    pub const RALT: Self = Self::new().with_right(true).with_alt(true);
    pub const RGUI: Self = Self::new().with_right(true).with_gui(true);

    /// Get modifier hid report bits from modifier combination
    pub fn to_hid_modifiers(self) -> HidModifiers {
        if !self.right() {
            HidModifiers::new()
                .with_left_ctrl(self.ctrl())
                .with_left_shift(self.shift())
                .with_left_alt(self.alt())
                .with_left_gui(self.gui())
        } else {
            HidModifiers::new()
                .with_right_ctrl(self.ctrl())
                .with_right_shift(self.shift())
                .with_right_alt(self.alt())
                .with_right_gui(self.gui())
        }
    }
}
