/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Hid(
            $crate::keycode::HidKeyCode::$k,
        )))
    };
}

/// Create a lighting key, e.g. `rgb!(Toggle)`
#[macro_export]
macro_rules! rgb {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Rgb(
            $crate::keycode::RgbKey::$k,
        )))
    };
}

/// Create a custom key, e.g. `user!(CycleLayers)`
#[macro_export]
macro_rules! user {
    ($k: ident) => {
        $crate::action::KeyAction::Single($crate::action::Action::Key($crate::keycode::KeyCode::Custom(
            $crate::keycode::CustomKeycode::$k,
        )))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::action::KeyAction::$a
    };
}

/// Create a tap dance key, `td!(0)` refers to the first tap dance
#[macro_export]
macro_rules! td {
    ($x: literal) => {
        $crate::action::KeyAction::TapDance($x)
    };
}

/// Create an encoder action, the first argument is the counter-clockwise action, the second is the clockwise action
#[macro_export]
macro_rules! encoder {
    ($counter_clockwise: expr, $clockwise: expr) => {
        $crate::action::EncoderAction::new($counter_clockwise, $clockwise)
    };
}
