//! End-to-end editing sessions driven through the public API.

use strand::editor::LineBuffer;
use strand::list::LinkedList;

#[test]
fn test_typing_session_with_correction() {
    let mut buffer = LineBuffer::new();

    buffer.insert('a');
    assert_eq!(buffer.text(), "a");
    assert_eq!(buffer.cursor_char(), Some('a'));

    buffer.insert('b');
    assert_eq!(buffer.text(), "ab");
    assert_eq!(buffer.cursor_char(), Some('b'));

    buffer.arrow_left();
    assert_eq!(buffer.cursor_char(), Some('a'));

    buffer.insert('c');
    assert_eq!(buffer.text(), "acb");
    assert_eq!(buffer.cursor_char(), Some('c'));

    buffer.delete();
    assert_eq!(buffer.text(), "ab");
    assert_eq!(buffer.cursor_char(), Some('a'));
}

#[test]
fn test_arrows_on_empty_buffer_do_nothing() {
    let mut buffer = LineBuffer::new();

    buffer.arrow_left();
    assert_eq!(buffer.cursor_index(), None, "left on empty must be a no-op");

    buffer.arrow_right();
    assert_eq!(buffer.cursor_index(), None, "right on empty must be a no-op");
    assert!(buffer.is_empty());
}

#[test]
fn test_arrow_right_engages_once_content_exists() {
    let mut buffer = LineBuffer::new();
    buffer.arrow_right();
    assert_eq!(buffer.cursor_index(), None);

    buffer.insert('x').arrow_left();
    assert_eq!(buffer.cursor_index(), None, "back at the virtual start");

    buffer.arrow_right();
    assert_eq!(buffer.cursor_char(), Some('x'));
}

#[test]
fn test_chained_call_style() {
    let mut buffer = LineBuffer::new();
    buffer
        .insert('h')
        .insert('e')
        .insert('l')
        .insert('l')
        .insert('o')
        .arrow_left()
        .arrow_left()
        .delete();
    assert_eq!(buffer.text(), "helo");
    assert_eq!(buffer.cursor_char(), Some('e'));
}

#[test]
fn test_walk_to_start_and_retype_head() {
    let mut buffer = LineBuffer::from_text("ello");
    for _ in 0..buffer.len() {
        buffer.arrow_left();
    }
    assert_eq!(buffer.cursor_index(), None);

    buffer.insert('h');
    assert_eq!(buffer.text(), "hello");
    assert_eq!(buffer.cursor_index(), Some(0));
}

#[test]
fn test_delete_everything_backwards() {
    let mut buffer = LineBuffer::from_text("abc");
    buffer.delete().delete().delete();
    assert!(buffer.is_empty());
    assert_eq!(buffer.cursor_index(), None);

    // The emptied buffer accepts fresh input again.
    buffer.insert('z');
    assert_eq!(buffer.text(), "z");
}

#[test]
fn test_buffer_adopts_existing_sequence() {
    let list: LinkedList<char> = "abc".chars().collect();
    let mut buffer = LineBuffer::from(list);
    assert_eq!(buffer.cursor_char(), Some('c'), "editing starts at the end");

    buffer.insert('d');
    assert_eq!(buffer.text(), "abcd");
}

#[test]
fn test_save_and_restore_cursor_position() {
    let mut buffer = LineBuffer::from_text("hello");
    buffer.arrow_left().arrow_left();

    let restored = LineBuffer::from_parts(&buffer.text(), buffer.cursor_index())
        .expect("saved cursor index is always valid");
    assert_eq!(restored, buffer);
}
