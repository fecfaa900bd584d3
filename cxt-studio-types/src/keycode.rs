use strum::FromRepr;

use crate::modifier::ModifierCombination;

pub mod modifier;

/// First code of the keyboard-level custom keycode range.
///
/// Codes below it belong to the HID page and to built-in firmware features,
/// so custom codes can never collide with them.
pub const QK_KB: u16 = 0x7E00;
/// Last code of the keyboard-level custom keycode range.
pub const QK_KB_MAX: u16 = 0x7E3F;
/// First code of the lighting keycode range.
pub const QK_LIGHTING: u16 = 0x7800;
/// Last code of the lighting keycode range.
pub const QK_LIGHTING_MAX: u16 = 0x78FF;

// Key codes from the HID keyboard usage page, the subset the keymap uses
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HidKeyCode {
    /// Reserved, no-key.
    No = 0x0000,
    /// Keyboard roll over error, too many keys are pressed simultaneously, not a physical key.
    ErrorRollover = 0x0001,
    /// Keyboard post fail error, not a physical key.
    PostFail = 0x0002,
    /// An undefined error, not a physical key.
    ErrorUndefined = 0x0003,
    A = 0x0004,
    B = 0x0005,
    C = 0x0006,
    D = 0x0007,
    E = 0x0008,
    F = 0x0009,
    G = 0x000A,
    H = 0x000B,
    I = 0x000C,
    J = 0x000D,
    K = 0x000E,
    L = 0x000F,
    M = 0x0010,
    N = 0x0011,
    O = 0x0012,
    P = 0x0013,
    Q = 0x0014,
    R = 0x0015,
    S = 0x0016,
    T = 0x0017,
    U = 0x0018,
    V = 0x0019,
    W = 0x001A,
    X = 0x001B,
    Y = 0x001C,
    Z = 0x001D,
    /// `1` and `!`
    Kc1 = 0x001E,
    /// `2` and `@`
    Kc2 = 0x001F,
    /// `3` and `#`
    Kc3 = 0x0020,
    /// `4` and `$`
    Kc4 = 0x0021,
    /// `5` and `%`
    Kc5 = 0x0022,
    /// `6` and `^`
    Kc6 = 0x0023,
    /// `7` and `&`
    Kc7 = 0x0024,
    /// `8` and `*`
    Kc8 = 0x0025,
    /// `9` and `(`
    Kc9 = 0x0026,
    /// `0` and `)`
    Kc0 = 0x0027,
    Enter = 0x0028,
    Escape = 0x0029,
    Backspace = 0x002A,
    Tab = 0x002B,
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    NonusHash = 0x0032,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `` ` `` and `~`
    Grave = 0x0035,
    /// `,` and `<`
    Comma = 0x0036,
    /// `.` and `>`
    Dot = 0x0037,
    /// `/` and `?`
    Slash = 0x0038,
    CapsLock = 0x0039,
    F1 = 0x003A,
    F2 = 0x003B,
    F3 = 0x003C,
    F4 = 0x003D,
    F5 = 0x003E,
    F6 = 0x003F,
    F7 = 0x0040,
    F8 = 0x0041,
    F9 = 0x0042,
    F10 = 0x0043,
    F11 = 0x0044,
    F12 = 0x0045,
    PrintScreen = 0x0046,
    ScrollLock = 0x0047,
    Pause = 0x0048,
    Insert = 0x0049,
    Home = 0x004A,
    PageUp = 0x004B,
    Delete = 0x004C,
    End = 0x004D,
    PageDown = 0x004E,
    Right = 0x004F,
    Left = 0x0050,
    Down = 0x0051,
    Up = 0x0052,
    AudioMute = 0x00A8,
    AudioVolUp = 0x00A9,
    AudioVolDown = 0x00AA,
    MediaNextTrack = 0x00AB,
    MediaPrevTrack = 0x00AC,
    MediaStop = 0x00AD,
    MediaPlayPause = 0x00AE,
    MediaSelect = 0x00AF,
    MediaEject = 0x00B0,
    MediaFastForward = 0x00BB,
    MediaRewind = 0x00BC,
    /// Left Control
    LCtrl = 0x00E0,
    /// Left Shift
    LShift = 0x00E1,
    /// Left Alt
    LAlt = 0x00E2,
    /// Left GUI
    LGui = 0x00E3,
    /// Right Control
    RCtrl = 0x00E4,
    /// Right Shift
    RShift = 0x00E5,
    /// Right Alt
    RAlt = 0x00E6,
    /// Right GUI
    RGui = 0x00E7,
}

impl HidKeyCode {
    /// Returns `true` if the keycode is a modifier keycode
    pub fn is_modifier(self) -> bool {
        HidKeyCode::LCtrl <= self && self <= HidKeyCode::RGui
    }

    /// Returns `true` if the keycode goes into the keycode array of a keyboard report
    pub fn is_basic(self) -> bool {
        HidKeyCode::A <= self && self <= HidKeyCode::Up
    }

    /// Returns the modifier combination of a modifier keycode, empty for other keycodes
    pub fn to_hid_modifiers(self) -> ModifierCombination {
        match self {
            HidKeyCode::LCtrl => ModifierCombination::LCTRL,
            HidKeyCode::LShift => ModifierCombination::LSHIFT,
            HidKeyCode::LAlt => ModifierCombination::LALT,
            HidKeyCode::LGui => ModifierCombination::LGUI,
            HidKeyCode::RCtrl => ModifierCombination::RCTRL,
            HidKeyCode::RShift => ModifierCombination::RSHIFT,
            HidKeyCode::RAlt => ModifierCombination::RALT,
            HidKeyCode::RGui => ModifierCombination::RGUI,
            _ => ModifierCombination::new(),
        }
    }
}

impl From<u8> for HidKeyCode {
    fn from(value: u8) -> Self {
        Self::from_repr(value).unwrap_or(HidKeyCode::No)
    }
}

/// Lighting keycodes, handled by the firmware's RGB driver
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbKey {
    Toggle = 0x7820,
    ModeForward = 0x7821,
    ModeReverse = 0x7822,
    HueUp = 0x7823,
    HueDown = 0x7824,
    SaturationUp = 0x7825,
    SaturationDown = 0x7826,
    ValueUp = 0x7827,
    ValueDown = 0x7828,
}

/// Keycodes owned by this keymap, numbered from [`QK_KB`]
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeycode {
    /// Move to the next layer of the layer cycle
    CycleLayers = 0,
    /// Select all, then copy
    CopyAll = 1,
    /// Select all, then paste
    PasteAll = 2,
}

impl CustomKeycode {
    pub const fn to_u16(self) -> u16 {
        QK_KB + self as u16
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        if (QK_KB..=QK_KB_MAX).contains(&code) {
            Self::from_repr((code - QK_KB) as u8)
        } else {
            None
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    Hid(HidKeyCode),
    Rgb(RgbKey),
    Custom(CustomKeycode),
}

impl KeyCode {
    /// The 16-bit code the firmware uses for this keycode
    pub const fn to_u16(self) -> u16 {
        match self {
            KeyCode::Hid(k) => k as u16,
            KeyCode::Rgb(k) => k as u16,
            KeyCode::Custom(k) => k.to_u16(),
        }
    }

    /// Decode a 16-bit keycode, `None` if it isn't a keycode this keymap knows
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            0x0000..=0x00FF => HidKeyCode::from_repr(code as u8).map(KeyCode::Hid),
            QK_LIGHTING..=QK_LIGHTING_MAX => RgbKey::from_repr(code).map(KeyCode::Rgb),
            QK_KB..=QK_KB_MAX => CustomKeycode::from_u16(code).map(KeyCode::Custom),
            _ => None,
        }
    }
}

impl From<HidKeyCode> for KeyCode {
    fn from(key: HidKeyCode) -> Self {
        KeyCode::Hid(key)
    }
}

impl From<CustomKeycode> for KeyCode {
    fn from(key: CustomKeycode) -> Self {
        KeyCode::Custom(key)
    }
}

/// Convert a ascii char to keycode
/// bool, if the keycode should be shifted
/// assumes en-us keyboard mapping
pub fn from_ascii(ascii: u8) -> (HidKeyCode, bool) {
    match ascii {
        b'a'..=b'z' => (HidKeyCode::from(ascii - b'a' + HidKeyCode::A as u8), false),
        b'A'..=b'Z' => (HidKeyCode::from(ascii - b'A' + HidKeyCode::A as u8), true),
        b'1'..=b'9' => (HidKeyCode::from(ascii - b'1' + HidKeyCode::Kc1 as u8), false),
        b'0' => (HidKeyCode::Kc0, false),
        b'!' => (HidKeyCode::Kc1, true),
        b'@' => (HidKeyCode::Kc2, true),
        b'#' => (HidKeyCode::Kc3, true),
        b'$' => (HidKeyCode::Kc4, true),
        b'%' => (HidKeyCode::Kc5, true),
        b'^' => (HidKeyCode::Kc6, true),
        b'&' => (HidKeyCode::Kc7, true),
        b'*' => (HidKeyCode::Kc8, true),
        b'(' => (HidKeyCode::Kc9, true),
        b')' => (HidKeyCode::Kc0, true),
        b'-' => (HidKeyCode::Minus, false),
        b'_' => (HidKeyCode::Minus, true),
        b'=' => (HidKeyCode::Equal, false),
        b'+' => (HidKeyCode::Equal, true),
        b'[' => (HidKeyCode::LeftBracket, false),
        b']' => (HidKeyCode::RightBracket, false),
        b'{' => (HidKeyCode::LeftBracket, true),
        b'}' => (HidKeyCode::RightBracket, true),
        b';' => (HidKeyCode::Semicolon, false),
        b':' => (HidKeyCode::Semicolon, true),
        b'\'' => (HidKeyCode::Quote, false),
        b'"' => (HidKeyCode::Quote, true),
        b'`' => (HidKeyCode::Grave, false),
        b'~' => (HidKeyCode::Grave, true),
        b'\\' => (HidKeyCode::Backslash, false),
        b'|' => (HidKeyCode::Backslash, true),
        b',' => (HidKeyCode::Comma, false),
        b'<' => (HidKeyCode::Comma, true),
        b'.' => (HidKeyCode::Dot, false),
        b'>' => (HidKeyCode::Dot, true),
        b'/' => (HidKeyCode::Slash, false),
        b'?' => (HidKeyCode::Slash, true),
        b' ' => (HidKeyCode::Space, false),
        b'\n' => (HidKeyCode::Enter, false),
        b'\t' => (HidKeyCode::Tab, false),
        b'\x08' => (HidKeyCode::Backspace, false),
        b'\x1B' => (HidKeyCode::Escape, false),
        b'\x7F' => (HidKeyCode::Delete, false),
        _ => (HidKeyCode::No, false),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_custom_keycodes_are_in_reserved_range() {
        for key in [CustomKeycode::CycleLayers, CustomKeycode::CopyAll, CustomKeycode::PasteAll] {
            let code = KeyCode::Custom(key).to_u16();
            assert!((QK_KB..=QK_KB_MAX).contains(&code));
            assert_eq!(KeyCode::from_u16(code), Some(KeyCode::Custom(key)));
        }
        assert_eq!(CustomKeycode::CycleLayers.to_u16(), 0x7E00);
        assert_eq!(CustomKeycode::PasteAll.to_u16(), 0x7E02);
    }

    #[test]
    fn test_builtin_codes_never_decode_as_custom() {
        for code in 0..QK_KB {
            assert!(!matches!(KeyCode::from_u16(code), Some(KeyCode::Custom(_))));
        }
        assert_eq!(KeyCode::from_u16(0x7E03), None);
        assert_eq!(KeyCode::from_u16(0x0004), Some(KeyCode::Hid(HidKeyCode::A)));
        assert_eq!(KeyCode::from_u16(0x7820), Some(KeyCode::Rgb(RgbKey::Toggle)));
    }

    #[test]
    fn test_from_ascii() {
        assert_eq!(from_ascii(b'a'), (HidKeyCode::A, false));
        assert_eq!(from_ascii(b'v'), (HidKeyCode::V, false));
        assert_eq!(from_ascii(b'C'), (HidKeyCode::C, true));
        assert_eq!(from_ascii(b'9'), (HidKeyCode::Kc9, false));
        assert_eq!(from_ascii(b'?'), (HidKeyCode::Slash, true));
        assert_eq!(from_ascii(0xFF), (HidKeyCode::No, false));
    }

    #[test]
    fn test_modifier_keycodes() {
        assert!(HidKeyCode::LGui.is_modifier());
        assert!(!HidKeyCode::LGui.is_basic());
        assert!(HidKeyCode::C.is_basic());
        assert_eq!(HidKeyCode::LGui.to_hid_modifiers(), ModifierCombination::LGUI);
        assert_eq!(HidKeyCode::A.to_hid_modifiers(), ModifierCombination::new());
    }
}
