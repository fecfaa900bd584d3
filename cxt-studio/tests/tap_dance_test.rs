pub mod common;

mod tap_dance_test {
    use cxt_studio::config::BehaviorConfig;
    use cxt_studio::keyboard::Disposition;
    use cxt_studio::keycode::{HidKeyCode, KeyCode};
    use cxt_studio::tap_dance::TapDanceState;
    use embassy_time::{Duration, Instant};

    use crate::common::{COPY_DANCE, KC_LGUI, PASTE_DANCE, create_cxt_studio_keyboard, run_key_sequence};
    use crate::{copy_all_reports, kbd_report, kc8, key_sequence};

    #[test]
    fn test_copy_single_tap() {
        let mut keyboard = create_cxt_studio_keyboard(BehaviorConfig::default());
        let (row, col) = COPY_DANCE;
        let (reports, dispositions) = run_key_sequence(&mut keyboard, &key_sequence![[row, col, true, 10], [row, col, false, 50]]);
        assert_eq!(
            reports,
            [
                kbd_report!(KC_LGUI, []),
                kbd_report!(KC_LGUI, [kc8!(C)]),
                kbd_report!(KC_LGUI, []),
                kbd_report!(0, []),
            ]
        );
        assert_eq!(dispositions, [Disposition::Handled, Disposition::Handled]);
    }

    #[test]
    fn test_copy_double_tap_copies_all() {
        let mut keyboard = create_cxt_studio_keyboard(BehaviorConfig::default());
        let (row, col) = COPY_DANCE;
        let (reports, _) = run_key_sequence(
            &mut keyboard,
            &key_sequence![
                [row, col, true, 10],
                [row, col, false, 50],
                [row, col, true, 50],
                [row, col, false, 50],
            ],
        );
        assert_eq!(reports, copy_all_reports!(KC_LGUI));
    }

    #[test]
    fn test_paste_single_tap() {
        let mut keyboard = create_cxt_studio_keyboard(BehaviorConfig::default());
        let (row, col) = PASTE_DANCE;
        let (reports, _) = run_key_sequence(&mut keyboard, &key_sequence![[row, col, true, 10], [row, col, false, 50]]);
        assert_eq!(
            reports,
            [
                kbd_report!(KC_LGUI, []),
                kbd_report!(KC_LGUI, [kc8!(V)]),
                kbd_report!(KC_LGUI, []),
                kbd_report!(0, []),
            ]
        );
    }

    #[test]
    fn test_paste_double_tap_sends_copy_all() {
        let mut keyboard = create_cxt_studio_keyboard(BehaviorConfig::default());
        let (row, col) = PASTE_DANCE;
        let (reports, _) = run_key_sequence(
            &mut keyboard,
            &key_sequence![
                [row, col, true, 10],
                [row, col, false, 50],
                [row, col, true, 50],
                [row, col, false, 50],
            ],
        );
        // Double tap on the paste dance sends GUI + "ac", not GUI + "av"
        assert_eq!(reports, copy_all_reports!(KC_LGUI));
    }

    #[test]
    fn test_triple_tap_does_nothing() {
        let mut keyboard = create_cxt_studio_keyboard(BehaviorConfig::default());
        for (row, col) in [COPY_DANCE, PASTE_DANCE] {
            let (reports, _) = run_key_sequence(
                &mut keyboard,
                &key_sequence![
                    [row, col, true, 10],
                    [row, col, false, 30],
                    [row, col, true, 30],
                    [row, col, false, 30],
                    [row, col, true, 30],
                    [row, col, false, 30],
                ],
            );
            assert!(reports.is_empty());
        }
    }

    #[test]
    fn test_taps_beyond_tapping_term_are_separate_dances() {
        let mut keyboard = create_cxt_studio_keyboard(BehaviorConfig::default());
        let (row, col) = COPY_DANCE;
        let (reports, _) = run_key_sequence(
            &mut keyboard,
            &key_sequence![
                [row, col, true, 10],
                [row, col, false, 50],
                [row, col, true, 300],
                [row, col, false, 50],
            ],
        );
        let copy = [
            kbd_report!(KC_LGUI, []),
            kbd_report!(KC_LGUI, [kc8!(C)]),
            kbd_report!(KC_LGUI, []),
            kbd_report!(0, []),
        ];
        assert_eq!(reports, [copy, copy].concat());
    }

    #[test]
    fn test_other_key_interrupts_dance() {
        let mut keyboard = create_cxt_studio_keyboard(BehaviorConfig::default());
        let (row, col) = PASTE_DANCE;
        let (reports, dispositions) = run_key_sequence(
            &mut keyboard,
            &key_sequence![
                [row, col, true, 10],
                [row, col, false, 20],
                [0, 0, true, 20], // Escape
                [0, 0, false, 20],
            ],
        );
        // The dance is resolved before Escape goes to the firmware
        assert_eq!(
            reports,
            [
                kbd_report!(KC_LGUI, []),
                kbd_report!(KC_LGUI, [kc8!(V)]),
                kbd_report!(KC_LGUI, []),
                kbd_report!(0, []),
            ]
        );
        assert_eq!(dispositions[2], Disposition::Default(KeyCode::Hid(HidKeyCode::Escape)));
        assert_eq!(dispositions[3], Disposition::Default(KeyCode::Hid(HidKeyCode::Escape)));
    }

    #[test]
    fn test_other_dance_interrupts_dance() {
        let mut keyboard = create_cxt_studio_keyboard(BehaviorConfig::default());
        let (reports, _) = run_key_sequence(
            &mut keyboard,
            &key_sequence![
                [COPY_DANCE.0, COPY_DANCE.1, true, 10],
                [COPY_DANCE.0, COPY_DANCE.1, false, 20],
                [PASTE_DANCE.0, PASTE_DANCE.1, true, 20],
                [PASTE_DANCE.0, PASTE_DANCE.1, false, 20],
            ],
        );
        assert_eq!(
            reports,
            [
                kbd_report!(KC_LGUI, []),
                kbd_report!(KC_LGUI, [kc8!(C)]),
                kbd_report!(KC_LGUI, []),
                kbd_report!(0, []),
                kbd_report!(KC_LGUI, []),
                kbd_report!(KC_LGUI, [kc8!(V)]),
                kbd_report!(KC_LGUI, []),
                kbd_report!(0, []),
            ]
        );
    }

    #[test]
    fn test_tick_resolves_after_tapping_term() {
        let mut keyboard = create_cxt_studio_keyboard(BehaviorConfig::default());
        let (row, col) = COPY_DANCE;
        let start = Instant::from_millis(1000);
        keyboard.process_key_event(cxt_studio::event::KeyEvent::new(row, col, true), start);
        keyboard.process_key_event(
            cxt_studio::event::KeyEvent::new(row, col, false),
            start + Duration::from_millis(50),
        );

        keyboard.tick(start + Duration::from_millis(199));
        assert!(keyboard.reporter().writer().reports.is_empty());
        assert!(matches!(
            keyboard.tap_dance(0).map(|d| d.state()),
            Some(TapDanceState::Counting { count: 1, .. })
        ));

        keyboard.tick(start + Duration::from_millis(200));
        assert_eq!(keyboard.reporter().writer().reports.len(), 4);
        assert_eq!(keyboard.tap_dance(0).map(|d| d.state()), Some(TapDanceState::Idle));

        // Fires only once
        keyboard.tick(start + Duration::from_millis(1000));
        assert_eq!(keyboard.reporter().writer().reports.len(), 4);
    }

    #[test]
    fn test_custom_tapping_term() {
        let mut config = BehaviorConfig::default();
        config.tap_dance.tapping_term = Duration::from_millis(500);
        let mut keyboard = create_cxt_studio_keyboard(config);
        let (row, col) = PASTE_DANCE;
        let (reports, _) = run_key_sequence(
            &mut keyboard,
            &key_sequence![
                [row, col, true, 10],
                [row, col, false, 100],
                [row, col, true, 300],
                [row, col, false, 50],
            ],
        );
        assert_eq!(reports, copy_all_reports!(KC_LGUI));
    }
}
