pub mod test_macro;

use cxt_studio::action::KeyAction;
use cxt_studio::config::BehaviorConfig;
use cxt_studio::hid::{HidError, HidReportWriter, KeyboardReport};
use cxt_studio::keyboard::{Disposition, Keyboard};
use cxt_studio::keymap::{ENCODER_MAP, KEYMAP, KeyMap};
use cxt_studio::{k, layer, user};
use embassy_time::{Duration, Instant};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub(crate) const KC_LSHIFT: u8 = 1 << 1;
pub(crate) const KC_LGUI: u8 = 1 << 3;

/// Position of the copy dance in the macro pad's keymap
pub(crate) const COPY_DANCE: (u8, u8) = (2, 1);
/// Position of the paste dance in the macro pad's keymap
pub(crate) const PASTE_DANCE: (u8, u8) = (2, 2);

/// Collects every report written by the keyboard
#[derive(Default)]
pub struct TestWriter {
    pub reports: Vec<KeyboardReport>,
    /// Reject every write when set
    pub disconnected: bool,
}

impl HidReportWriter for TestWriter {
    fn write_report(&mut self, report: &KeyboardReport) -> Result<usize, HidError> {
        if self.disconnected {
            return Err(HidError::Disconnected);
        }
        self.reports.push(*report);
        Ok(8)
    }
}

#[derive(Debug, Clone)]
pub struct TestKeyPress {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
    pub delay: u64, // Delay before this key event in milliseconds
}

pub type TestKeyboard<const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize> =
    Keyboard<'static, TestWriter, ROW, COL, NUM_LAYER, NUM_ENCODER>;

/// The macro pad with its own keymap
pub fn create_cxt_studio_keyboard(behavior_config: BehaviorConfig) -> TestKeyboard<4, 4, 1, 4> {
    Keyboard::new(
        KeyMap::new(&KEYMAP, &ENCODER_MAP),
        TestWriter::default(),
        behavior_config,
    )
}

static CYCLE_KEYMAP: [[[KeyAction; 4]; 1]; 5] = [
    layer!([[user!(CycleLayers), user!(CopyAll), user!(PasteAll), k!(Kc0)]]),
    layer!([[user!(CycleLayers), user!(CopyAll), user!(PasteAll), k!(Kc1)]]),
    layer!([[user!(CycleLayers), user!(CopyAll), user!(PasteAll), k!(Kc2)]]),
    layer!([[user!(CycleLayers), user!(CopyAll), user!(PasteAll), k!(Kc3)]]),
    layer!([[user!(CycleLayers), user!(CopyAll), user!(PasteAll), k!(Kc4)]]),
];
static NO_ENCODERS: [[cxt_studio::action::EncoderAction; 0]; 5] = [[], [], [], [], []];

/// A single row keyboard with five layers, each layer has the custom keys at
/// columns 0..3 and the digit of the layer at column 3
pub fn create_cycle_keyboard(behavior_config: BehaviorConfig) -> TestKeyboard<1, 4, 5, 0> {
    Keyboard::new(
        KeyMap::new(&CYCLE_KEYMAP, &NO_ENCODERS),
        TestWriter::default(),
        behavior_config,
    )
}

/// Feed a key sequence into the keyboard, then let all pending tap dances time out.
///
/// Returns the reports and the disposition of every key event.
pub fn run_key_sequence<const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>(
    keyboard: &mut TestKeyboard<ROW, COL, NUM_LAYER, NUM_ENCODER>,
    key_sequence: &[TestKeyPress],
) -> (Vec<KeyboardReport>, Vec<Disposition>) {
    let mut now = Instant::from_millis(0);
    let mut dispositions = Vec::new();
    for key in key_sequence {
        now += Duration::from_millis(key.delay);
        keyboard.tick(now);
        dispositions.push(keyboard.process_key_event(cxt_studio::event::KeyEvent::new(key.row, key.col, key.pressed), now));
    }
    keyboard.tick(now + Duration::from_secs(10));
    let reports = core::mem::take(&mut keyboard.reporter_mut().writer_mut().reports);
    (reports, dispositions)
}
