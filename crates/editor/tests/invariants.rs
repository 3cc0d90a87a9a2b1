// Chunk: docs/chunks/cursor_controller - Caret/line-buffer state machine
//!
//! Property tests: no sequence of input can push the caret out of the
//! document, empty the buffer, or scroll the caret's line off screen.

use std::time::Instant;

use caretpad::input::{Key, KeyEvent, MouseEvent, ScrollDelta};
use caretpad::{Command, CursorController, Editor, EditorConfig, FontMetrics, NullRenderer};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Input {
    Key(Key),
    Click(f64, f64),
    Wheel(f64),
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => prop::char::range('a', 'e').prop_map(Key::Char),
        1 => Just(Key::Char('\u{0301}')),
        2 => Just(Key::Backspace),
        2 => Just(Key::Return),
        1 => Just(Key::Left),
        1 => Just(Key::Right),
        1 => Just(Key::Up),
        1 => Just(Key::Down),
        1 => Just(Key::Tab),
    ]
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        8 => key_strategy().prop_map(Input::Key),
        1 => (-50.0..500.0f64, -50.0..200.0f64).prop_map(|(x, y)| Input::Click(x, y)),
        1 => (-300.0..300.0f64).prop_map(Input::Wheel),
    ]
}

fn assert_caret_in_document(editor: &Editor) -> Result<(), TestCaseError> {
    let caret = editor.caret_position();
    let buffer = editor.buffer();
    prop_assert!(buffer.line_count() >= 1);
    prop_assert!(caret.line >= 1 && caret.line <= buffer.line_count());
    prop_assert!(caret.column <= buffer.line_len(caret.line - 1));
    Ok(())
}

proptest! {
    #[test]
    fn caret_stays_inside_the_document(
        text in "[a-c\n]{0,20}",
        inputs in prop::collection::vec(input_strategy(), 0..80),
    ) {
        let mut editor = Editor::new(EditorConfig::with_viewport(400.0, 60.0), NullRenderer).unwrap();
        editor.set_text(&text);
        let now = Instant::now();

        for input in inputs {
            match input {
                Input::Key(key) => {
                    editor.handle_key(&KeyEvent::plain(key), now);
                }
                Input::Click(x, y) => {
                    editor.handle_mouse(&MouseEvent::down(x, y), now);
                }
                Input::Wheel(dy) => {
                    editor.handle_scroll(ScrollDelta::vertical(dy));
                }
            }
            assert_caret_in_document(&editor)?;

            let scroll = editor.scroll_offset();
            prop_assert!(scroll.y <= 0.0 && scroll.x <= 0.0);
        }
    }

    #[test]
    fn caret_line_visible_after_keys(
        keys in prop::collection::vec(key_strategy(), 0..80),
    ) {
        let mut editor = Editor::new(EditorConfig::with_viewport(400.0, 60.0), NullRenderer).unwrap();
        let now = Instant::now();

        for key in keys {
            editor.handle_key(&KeyEvent::plain(key), now);

            let top = -editor.scroll_offset().y;
            let caret_top = (editor.caret_position().line - 1) as f32 * 20.0;
            prop_assert!(caret_top >= top, "caret line above the viewport");
            prop_assert!(caret_top + 20.0 <= top + 60.0, "caret line below the viewport");
        }
    }

    #[test]
    fn type_then_backspace_round_trips(
        text in "[a-c\n]{1,12}",
        moves in prop::collection::vec(0usize..4, 0..12),
        ch in prop::char::range('x', 'z'),
    ) {
        let metrics = FontMetrics::from_config(&EditorConfig::default());
        let mut c = CursorController::with_text(&text, metrics);
        for m in moves {
            let cmd = [Command::MoveLeft, Command::MoveRight, Command::MoveUp, Command::MoveDown][m];
            c.apply(cmd);
        }
        let before_text = c.buffer().text();
        let before_pos = c.position();

        c.apply(Command::InsertChar(ch));
        c.apply(Command::DeleteBackward);

        prop_assert_eq!(c.buffer().text(), before_text);
        prop_assert_eq!(c.position(), before_pos);
    }

    #[test]
    fn enter_then_backspace_round_trips(
        text in "[a-c]{2,10}",
        at in 1usize..10,
    ) {
        let metrics = FontMetrics::from_config(&EditorConfig::default());
        let mut c = CursorController::with_text(&text, metrics);
        let column = at.min(text.len() - 1);
        for _ in 0..column {
            c.apply(Command::MoveRight);
        }

        c.apply(Command::InsertNewline);
        prop_assert_eq!(c.buffer().line_count(), 2);
        prop_assert_eq!(c.buffer().line_text(0), &text[..column]);
        prop_assert_eq!(c.buffer().line_text(1), &text[column..]);

        c.apply(Command::DeleteBackward);
        prop_assert_eq!(c.buffer().text(), text);
        prop_assert_eq!(c.position().column, column);
    }
}
