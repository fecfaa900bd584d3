extern crate cxt_studio;

// a rust macro to map a keycode name to its u8 value
#[macro_export]
macro_rules! kc8 {
    ($key: ident) => {
        cxt_studio::keycode::HidKeyCode::$key as u8
    };
}

// a rust macro to create a key sequence to simulate key presses
#[macro_export]
macro_rules! key_sequence {
    ($([$row:expr, $col:expr, $pressed:expr, $delay:expr]),* $(,)?) => {
        vec![
            $(
                $crate::common::TestKeyPress {
                    row: $row,
                    col: $col,
                    pressed: $pressed,
                    delay: $delay,
                },
            )*
        ]
    };
}

// a rust macro to create a key report that simulates key status change in hid
#[macro_export]
macro_rules! kbd_report {
    ($modifier:expr, [$($key:expr),* $(,)?] $(,)?) => {{
        let mut keycodes = [0u8; 6];
        for (slot, key) in keycodes.iter_mut().zip([$($key as u8),*]) {
            *slot = key;
        }
        cxt_studio::hid::KeyboardReport {
            modifier: $modifier,
            reserved: 0,
            leds: 0,
            keycodes,
        }
    }};
}

// the report sequence of `modifier + "ac"`
#[macro_export]
macro_rules! copy_all_reports {
    ($modifier:expr) => {
        vec![
            $crate::kbd_report!($modifier, []),
            $crate::kbd_report!($modifier, [$crate::kc8!(A)]),
            $crate::kbd_report!($modifier, []),
            $crate::kbd_report!($modifier, [$crate::kc8!(C)]),
            $crate::kbd_report!($modifier, []),
            $crate::kbd_report!(0, []),
        ]
    };
}
