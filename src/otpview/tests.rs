//! Tests for the OTP view.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::InputKind;
    use crate::Component;
    use bubbletea_rs::{KeyMsg, Msg};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::{Arc, Mutex};

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn type_str(m: &mut Model, s: &str) {
        for ch in s.chars() {
            m.update(key(KeyCode::Char(ch)));
        }
    }

    fn backspace(m: &mut Model) -> Option<bubbletea_rs::Cmd> {
        m.update(key(KeyCode::Backspace))
    }

    fn view_with(count: i64, kind: InputKind) -> Model {
        let mut m = Model::with_config(
            Config::new()
                .with_cell_count(count)
                .with_input_kind(kind),
        )
        .unwrap();
        m.focus();
        m
    }

    /// Attaches a callback that records every code it receives.
    fn record_finished(m: &mut Model) -> Arc<Mutex<Vec<String>>> {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        m.set_on_otp_finished(Box::new(move |code: &str| {
            sink.lock().unwrap().push(code.to_string());
        }));
        calls
    }

    fn cell_values(m: &Model) -> Vec<Option<char>> {
        m.cells().iter().map(|c| c.value()).collect()
    }

    #[test]
    fn test_new_default_values() {
        let m = new();
        assert_eq!(m.cell_count(), 5);
        assert_eq!(m.input_kind(), InputKind::Text);
        assert_eq!(m.otp(), "");
        assert_eq!(m.focused_cell(), None);
        assert!(m.current_focused_cell().is_none());
        assert!(m.keypad_enabled());
        assert!(!m.keyboard_visible());
        assert!(!m.focused());
        assert!(m.err.is_none());
    }

    #[test]
    fn test_cells_have_stable_indices() {
        let m = view_with(6, InputKind::Text);
        let indices: Vec<usize> = m.cells().iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_invalid_cell_count_fails_fast() {
        let err = Model::with_config(Config::new().with_cell_count(0)).err();
        assert_eq!(err, Some(Error::InvalidCellCount(0)));
    }

    #[test]
    fn test_focus_starts_on_first_cell() {
        let m = view_with(4, InputKind::Number);
        assert_eq!(m.focused_cell(), Some(0));
        assert!(m.cells()[0].focused());
        assert!(m.keyboard_visible());
    }

    #[test]
    fn test_typing_advances_focus() {
        let mut m = view_with(5, InputKind::Text);
        for (i, ch) in "abcd".chars().enumerate() {
            assert_eq!(m.focused_cell(), Some(i));
            m.update(key(KeyCode::Char(ch)));
            assert_eq!(m.focused_cell(), Some(i + 1));
        }
        assert_eq!(m.otp(), "abcd");
        // Only one cell ever holds host focus.
        assert_eq!(m.cells().iter().filter(|c| c.focused()).count(), 1);
    }

    #[test]
    fn test_full_fill_numeric_four_cells() {
        let mut m = view_with(4, InputKind::Number);
        let calls = record_finished(&mut m);

        type_str(&mut m, "1234");

        assert_eq!(m.otp(), "1234");
        assert!(m.is_valid());
        assert!(m.is_complete());
        assert_eq!(*calls.lock().unwrap(), vec!["1234".to_string()]);
        assert_eq!(m.focused_cell(), Some(3));
        assert!(!m.keyboard_visible());
    }

    #[test]
    fn test_full_fill_five_cells_is_not_valid() {
        let mut m = view_with(5, InputKind::Number);
        let calls = record_finished(&mut m);

        type_str(&mut m, "12345");

        assert_eq!(m.otp(), "12345");
        assert!(!m.is_valid());
        assert!(m.is_complete());
        assert_eq!(*calls.lock().unwrap(), vec!["12345".to_string()]);
    }

    #[test]
    fn test_composite_code_matches_typed_sequence_for_any_count() {
        for count in 1..=8usize {
            let mut m = view_with(count as i64, InputKind::Text);
            let typed: String = "qwertyui".chars().take(count).collect();
            type_str(&mut m, &typed);
            assert_eq!(m.otp(), typed, "count = {}", count);
            assert_eq!(m.focused_cell(), Some(count - 1));
        }
    }

    #[test]
    fn test_single_cell_completes_immediately() {
        let mut m = view_with(1, InputKind::Text);
        let calls = record_finished(&mut m);
        type_str(&mut m, "z");
        assert_eq!(*calls.lock().unwrap(), vec!["z".to_string()]);
        assert_eq!(m.focused_cell(), Some(0));
    }

    #[test]
    fn test_backspace_after_completion_steps_back() {
        let mut m = view_with(4, InputKind::Number);
        let calls = record_finished(&mut m);
        type_str(&mut m, "1234");
        assert!(!m.keyboard_visible());

        // A hidden keyboard does not stop keys typed on the terminal.
        backspace(&mut m);

        assert_eq!(m.otp(), "123");
        assert_eq!(m.focused_cell(), Some(2));
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_typing_on_full_last_cell_after_completion_completes_again() {
        let mut m = view_with(4, InputKind::Number);
        let calls = record_finished(&mut m);
        type_str(&mut m, "1234");
        type_str(&mut m, "5");

        assert_eq!(m.otp(), "1234");
        assert_eq!(m.focused_cell(), Some(3));
        assert_eq!(calls.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_completion_retriggers_after_tap_on_last_cell() {
        let mut m = view_with(4, InputKind::Number);
        let calls = record_finished(&mut m);
        type_str(&mut m, "1234");

        // Tapping the already focused last cell brings the keyboard back.
        m.update(key(KeyCode::Right));
        assert_eq!(m.focused_cell(), Some(3));
        assert!(m.keyboard_visible());

        // The cell is full, so the digit is dropped but the completion runs again.
        type_str(&mut m, "9");
        assert_eq!(m.otp(), "1234");
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["1234".to_string(), "1234".to_string()]
        );
    }

    #[test]
    fn test_typing_into_full_middle_cell_advances() {
        let mut m = view_with(4, InputKind::Text);
        m.set_otp("abcd").unwrap();
        m.focus_cell(1);
        type_str(&mut m, "x");
        assert_eq!(m.otp(), "abcd");
        assert_eq!(m.focused_cell(), Some(2));
    }

    #[test]
    fn test_clearing_cell_retreats_focus() {
        let mut m = view_with(4, InputKind::Number);
        type_str(&mut m, "12");
        assert_eq!(m.focused_cell(), Some(2));

        // Empty cell: backspace steps back to cell 1, cursor after its digit.
        backspace(&mut m);
        assert_eq!(m.focused_cell(), Some(1));
        assert_eq!(m.cells()[1].position(), 1);
        assert_eq!(m.otp(), "12");

        // Clearing cell 1 empties it and steps back again.
        backspace(&mut m);
        assert_eq!(m.focused_cell(), Some(0));
        assert_eq!(m.otp(), "1");
    }

    #[test]
    fn test_clearing_first_cell_keeps_focus() {
        let mut m = view_with(4, InputKind::Number);
        type_str(&mut m, "1");
        m.focus_cell(0);
        backspace(&mut m);
        assert_eq!(m.focused_cell(), Some(0));
        assert_eq!(m.otp(), "");
        assert!(m.cells()[0].focused());
    }

    #[test]
    fn test_numeric_cells_refuse_letters() {
        let mut m = view_with(4, InputKind::Number);
        type_str(&mut m, "a");
        assert_eq!(m.otp(), "");
        assert_eq!(m.focused_cell(), Some(0));

        type_str(&mut m, "1b2");
        assert_eq!(m.otp(), "12");
        assert_eq!(m.focused_cell(), Some(2));
    }

    #[test]
    fn test_control_chords_are_not_typed() {
        let mut m = view_with(4, InputKind::Text);
        m.update(Box::new(KeyMsg {
            key: KeyCode::Char('x'),
            modifiers: KeyModifiers::ALT,
        }) as Msg);
        assert_eq!(m.otp(), "");
        assert_eq!(m.focused_cell(), Some(0));
    }

    #[test]
    fn test_arrow_navigation_saturates() {
        let mut m = view_with(3, InputKind::Text);
        m.update(key(KeyCode::Left));
        assert_eq!(m.focused_cell(), Some(0));

        m.update(key(KeyCode::Right));
        m.update(key(KeyCode::Right));
        m.update(key(KeyCode::Right));
        assert_eq!(m.focused_cell(), Some(2));

        m.update(key(KeyCode::Left));
        assert_eq!(m.focused_cell(), Some(1));
    }

    #[test]
    fn test_set_otp_wrong_length_is_noop() {
        let mut m = view_with(4, InputKind::Number);
        type_str(&mut m, "9");
        let before = cell_values(&m);

        assert_eq!(
            m.set_otp("12"),
            Err(Error::InvalidLength {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(cell_values(&m), before);
    }

    #[test]
    fn test_set_otp_non_digit_on_numeric_is_noop() {
        let mut m = view_with(4, InputKind::Number);
        assert_eq!(
            m.set_otp("12a4"),
            Err(Error::InputKindMismatch {
                kind: InputKind::Number
            })
        );
        assert_eq!(m.otp(), "");
    }

    #[test]
    fn test_set_otp_is_cosmetic() {
        let mut m = view_with(4, InputKind::Number);
        let calls = record_finished(&mut m);

        m.set_otp("5678").unwrap();

        assert_eq!(m.otp(), "5678");
        assert_eq!(m.focused_cell(), Some(0));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_set_otp_accepts_any_text_on_text_cells() {
        let mut m = view_with(3, InputKind::Text);
        m.set_otp("a1-").unwrap();
        assert_eq!(m.otp(), "a1-");
    }

    #[test]
    fn test_prefill_one_short_fills_leading_cells() {
        let m = Model::with_config(Config::new().with_cell_count(4).with_prefill("123")).unwrap();
        assert_eq!(cell_values(&m), vec![Some('1'), Some('2'), Some('3'), None]);
    }

    #[test]
    fn test_prefill_of_full_length_is_ignored() {
        let m = Model::with_config(Config::new().with_cell_count(4).with_prefill("1234")).unwrap();
        assert_eq!(m.otp(), "");
    }

    #[test]
    fn test_prefill_refused_by_input_kind_is_ignored() {
        let m = Model::with_config(
            Config::new()
                .with_cell_count(4)
                .with_input_kind(InputKind::Number)
                .with_prefill("12x"),
        )
        .unwrap();
        assert_eq!(m.otp(), "");
    }

    #[test]
    fn test_simulate_delete_press_steps_back() {
        let mut m = view_with(4, InputKind::Text);
        type_str(&mut m, "ab");
        m.focus_cell(1);

        m.simulate_delete_press();

        assert_eq!(m.otp(), "a");
        assert_eq!(m.focused_cell(), Some(0));
        assert!(m.cells()[1].is_empty());
    }

    #[test]
    fn test_simulate_delete_press_on_first_cell_keeps_focus() {
        let mut m = view_with(4, InputKind::Text);
        m.set_otp("wxyz").unwrap();
        m.focus_cell(0);

        m.simulate_delete_press();

        assert_eq!(m.otp(), "xyz");
        assert_eq!(m.focused_cell(), Some(0));
        assert!(m.current_focused_cell().unwrap().is_empty());
    }

    #[test]
    fn test_simulate_delete_press_without_focus_does_nothing() {
        let mut m = new();
        m.set_otp("abcde").unwrap();
        m.simulate_delete_press();
        assert_eq!(m.otp(), "abcde");
        assert_eq!(m.focused_cell(), None);
    }

    #[test]
    fn test_disabled_keypad_is_display_only() {
        let mut m = view_with(4, InputKind::Number);
        m.disable_keypad();
        assert!(!m.keypad_enabled());

        type_str(&mut m, "1");
        assert_eq!(m.otp(), "");

        m.update(key(KeyCode::Right));
        assert_eq!(m.focused_cell(), Some(1));
        assert!(!m.keyboard_visible());
        type_str(&mut m, "2");
        assert_eq!(m.otp(), "");

        m.enable_keypad();
        m.update(key(KeyCode::Left));
        assert!(m.keyboard_visible());
        type_str(&mut m, "3");
        assert_eq!(m.otp(), "3");
        assert_eq!(m.focused_cell(), Some(1));
    }

    #[test]
    fn test_blur_and_refocus_remembers_cell() {
        let mut m = view_with(4, InputKind::Text);
        type_str(&mut m, "ab");
        m.blur();
        assert!(!m.focused());
        assert!(!m.keyboard_visible());
        assert_eq!(m.focused_cell(), Some(2));

        // Keys are ignored while blurred.
        type_str(&mut m, "c");
        assert_eq!(m.otp(), "ab");

        m.focus();
        assert!(m.focused());
        type_str(&mut m, "c");
        assert_eq!(m.otp(), "abc");
    }

    #[test]
    fn test_focus_cell_out_of_range_is_ignored() {
        let mut m = view_with(3, InputKind::Text);
        m.focus_cell(7);
        assert_eq!(m.focused_cell(), Some(0));
    }

    #[test]
    fn test_paste_messages() {
        let mut m = view_with(4, InputKind::Number);
        m.update(Box::new(PasteMsg("4321".to_string())) as Msg);
        assert_eq!(m.otp(), "4321");
        assert!(m.err.is_none());

        m.update(Box::new(PasteMsg("12".to_string())) as Msg);
        assert_eq!(m.otp(), "4321");
        assert!(m.err.is_some());

        m.update(Box::new(PasteErrMsg("no clipboard".to_string())) as Msg);
        assert_eq!(m.err.as_deref(), Some("no clipboard"));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = new();
        let b = new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_view_shows_cell_contents() {
        let mut m = view_with(4, InputKind::Number);
        m.set_otp("2468").unwrap();
        let plain = lipgloss_extras::lipgloss::strip_ansi(&m.view());
        for digit in ['2', '4', '6', '8'] {
            assert!(plain.contains(digit), "missing {} in {:?}", digit, plain);
        }
    }

    #[test]
    fn test_view_with_background_has_no_border() {
        let m = Model::with_config(
            Config::new()
                .with_cell_count(2)
                .with_background_color("#333333"),
        )
        .unwrap();
        let plain = lipgloss_extras::lipgloss::strip_ansi(&m.view());
        assert_eq!(plain.lines().count(), 1);
    }

    #[test]
    fn test_view_without_background_draws_borders() {
        let m = Model::with_config(Config::new().with_cell_count(3)).unwrap();
        let plain = lipgloss_extras::lipgloss::strip_ansi(&m.view());
        // Top border, content row, bottom border.
        assert_eq!(plain.lines().count(), 3);
        assert!(plain.contains('│'), "missing side border in {:?}", plain);
    }

    #[tokio::test]
    async fn test_completion_returns_finished_msg() {
        let mut m = view_with(2, InputKind::Number);
        assert!(m.update(key(KeyCode::Char('4'))).is_none());

        let cmd = m
            .update(key(KeyCode::Char('2')))
            .expect("completion should return a command");
        let msg = cmd.await.expect("command should produce a message");
        let finished = msg
            .downcast_ref::<FinishedMsg>()
            .expect("message should be a FinishedMsg");
        assert_eq!(finished.code, "42");
        assert_eq!(finished.id, m.id());
    }
}
