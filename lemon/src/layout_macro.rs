/// Create a layer in keymap
#[macro_export]
macro_rules! layer {
    ([$([$($x: expr), +]), +]) => {
        [$([$($x), +]),+]
    };
}

/// Place a split (left half, then right half) layout into the 4x13 Work Board matrix.
///
/// The left half is 4 rows of 6 keys. The right half is 7, 6, 6 and 5 keys: the encoder click
/// sits at the end of the first row, and the last row starts one column to the right because
/// the space bar spans two columns. Matrix positions without a switch are filled with `No`.
#[macro_export]
macro_rules! layout_lr {
    (
        $l00:expr, $l01:expr, $l02:expr, $l03:expr, $l04:expr, $l05:expr,
        $l10:expr, $l11:expr, $l12:expr, $l13:expr, $l14:expr, $l15:expr,
        $l20:expr, $l21:expr, $l22:expr, $l23:expr, $l24:expr, $l25:expr,
        $l30:expr, $l31:expr, $l32:expr, $l33:expr, $l34:expr, $l35:expr,

        $r00:expr, $r01:expr, $r02:expr, $r03:expr, $r04:expr, $r05:expr, $r06:expr,
        $r10:expr, $r11:expr, $r12:expr, $r13:expr, $r14:expr, $r15:expr,
        $r20:expr, $r21:expr, $r22:expr, $r23:expr, $r24:expr, $r25:expr,
        $r31:expr, $r32:expr, $r33:expr, $r34:expr, $r35:expr $(,)?
    ) => {
        [
            [$l00, $l01, $l02, $l03, $l04, $l05, $r00, $r01, $r02, $r03, $r04, $r05, $r06],
            [$l10, $l11, $l12, $l13, $l14, $l15, $r10, $r11, $r12, $r13, $r14, $r15, $crate::a!(No)],
            [$l20, $l21, $l22, $l23, $l24, $l25, $r20, $r21, $r22, $r23, $r24, $r25, $crate::a!(No)],
            [$l30, $l31, $l32, $l33, $l34, $l35, $crate::a!(No), $r31, $r32, $r33, $r34, $r35, $crate::a!(No)],
        ]
    };
}

/// Create a normal key. For example, `k!(A)` represents `KeyAction::Single(Action::Key(KeyCode::Hid(HidKeyCode::A)))`
#[macro_export]
macro_rules! k {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$k),
        ))
    };
}

/// Create a normal action: `KeyAction`
#[macro_export]
macro_rules! a {
    ($a: ident) => {
        $crate::types::action::KeyAction::$a
    };
}

/// Create a normal key with modifier action
#[macro_export]
macro_rules! wm {
    ($x: ident, $m: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::KeyWithModifier(
            $crate::types::keycode::KeyCode::Hid($crate::types::keycode::HidKeyCode::$x),
            $m,
        ))
    };
}

/// Create a shifted key, `shifted!(Kc1)` types `!`
#[macro_export]
macro_rules! shifted {
    ($x: ident) => {
        $crate::wm!($x, $crate::types::modifier::ModifierCombination::SHIFT)
    };
}

/// Create a layer activate action. For example, `mo!(1)` activates layer 1 while held.
#[macro_export]
macro_rules! mo {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerOn($x as u8))
    };
}

/// Create a layer toggle only action (activate layer `n` and deactivate all other layers), `n` is the layer number
#[macro_export]
macro_rules! to {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::LayerToggleOnly($x as u8))
    };
}

/// Create a layer activate action or tap key(tap/hold)
#[macro_export]
macro_rules! lt {
    ($x: expr, $k: ident) => {
        $crate::types::action::KeyAction::TapHold(
            $crate::types::action::Action::Key($crate::types::keycode::KeyCode::Hid(
                $crate::types::keycode::HidKeyCode::$k,
            )),
            $crate::types::action::Action::LayerOn($x as u8),
        )
    };
}

/// Create a modifier-tap-hold action
#[macro_export]
macro_rules! mt {
    ($k: ident, $m: expr) => {
        $crate::types::action::KeyAction::TapHold(
            $crate::types::action::Action::Key($crate::types::keycode::KeyCode::Hid(
                $crate::types::keycode::HidKeyCode::$k,
            )),
            $crate::types::action::Action::Modifier($m),
        )
    };
}

/// Create a tap dance key, referencing the tap dance at index `n`
#[macro_export]
macro_rules! td {
    ($x: expr) => {
        $crate::types::action::KeyAction::TapDance($x as u8)
    };
}

/// Create a key which triggers the user macro at index `n`
#[macro_export]
macro_rules! mc {
    ($x: expr) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::TriggerMacro($x as u8))
    };
}

/// Create a firmware special key, such as `sk!(Repeat)`
#[macro_export]
macro_rules! sk {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Special($crate::types::keycode::SpecialKey::$k),
        ))
    };
}

/// Create a RGB lighting key, such as `rgb!(Toggle)`
#[macro_export]
macro_rules! rgb {
    ($k: ident) => {
        $crate::types::action::KeyAction::Single($crate::types::action::Action::Key(
            $crate::types::keycode::KeyCode::Lighting($crate::types::keycode::LightingKey::$k),
        ))
    };
}
