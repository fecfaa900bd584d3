/// A physical key transition reported by the matrix scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn new(row: u8, col: u8, pressed: bool) -> Self {
        Self { row, col, pressed }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// One detent of a rotary encoder reported by the encoder driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotaryEncoderEvent {
    pub id: u8,
    pub direction: Direction,
}
