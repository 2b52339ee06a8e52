#![no_main]

use input_core::{
    CharacterCasing, InsertionMode, TextBoxConfig, TextBoxEvent, TextWindowTracker, is_visible,
};
use libfuzzer_sys::fuzz_target;

const SNIPPETS: &[&str] = &["a", "xyz", "€", "ß", "\r\n", "", "é€x"];

fn decode_event(op: u8, arg: u8, len: usize) -> TextBoxEvent {
    let selecting = arg & 0x80 != 0;
    match op % 11 {
        0 => TextBoxEvent::MoveCaret {
            to: usize::from(arg & 0x7f) % (len + 2),
            selecting,
        },
        1 => TextBoxEvent::Input {
            text: SNIPPETS[usize::from(arg) % SNIPPETS.len()].to_string(),
        },
        2 => TextBoxEvent::Backspace,
        3 => TextBoxEvent::Delete,
        4 => TextBoxEvent::Left { selecting },
        5 => TextBoxEvent::Right { selecting },
        6 => TextBoxEvent::Home { selecting },
        7 => TextBoxEvent::End { selecting },
        8 => TextBoxEvent::SelectAll,
        9 => TextBoxEvent::ToggleInsertionMode,
        _ => TextBoxEvent::SetText {
            text: SNIPPETS[usize::from(arg) % SNIPPETS.len()].repeat(usize::from(arg % 5)),
        },
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&header, ops)) = data.split_first() else {
        return;
    };
    let config = TextBoxConfig {
        casing: match header % 3 {
            0 => CharacterCasing::Normal,
            1 => CharacterCasing::Lower,
            _ => CharacterCasing::Upper,
        },
        insertion_mode: if header & 0x04 != 0 {
            InsertionMode::Overwrite
        } else {
            InsertionMode::Insert
        },
        visible_columns: usize::from(header >> 4),
        max_length: (header & 0x08 != 0).then_some(usize::from(header >> 3)),
        read_only: false,
        password_char: None,
    };
    let mut tb = TextWindowTracker::new(config);

    for pair in ops.chunks_exact(2) {
        let event = decode_event(pair[0], pair[1], tb.len());
        let _ = tb.apply(&event);

        let len = tb.len();
        let window = tb.window();
        assert!(window.start <= window.end && window.end <= len);
        assert!(tb.caret() <= len);
        assert_eq!(is_visible(tb.caret(), window, len), Ok(true));
        assert!(window.width() <= tb.config().visible_columns);
        if let Some(max) = tb.config().max_length {
            assert!(len <= max);
        }
        let _ = tb.render();
    }
});
