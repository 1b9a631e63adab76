pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn clamp_cursor(cursor: usize, value: &str) -> usize {
    cursor.min(char_count(value))
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let pos = clamp_cursor(*cursor, value);
    let byte_pos = byte_index_at_char(value, pos);
    value.insert(byte_pos, ch);
    *cursor = pos + 1;
}

pub fn backspace_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos - 1);
    value.remove(byte_pos);
    *cursor = pos - 1;
    true
}

pub fn delete_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos);
    value.remove(byte_pos);
    *cursor = pos;
    true
}

pub fn move_left(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    *cursor = pos - 1;
    true
}

pub fn move_right(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    let len = char_count(value);
    if pos >= len {
        return false;
    }
    *cursor = pos + 1;
    true
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    value
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_appends_at_cursor() {
        let mut value = String::from("ab");
        let mut cursor = 1;
        insert_char(&mut value, &mut cursor, 'x');
        assert_eq!(value, "axb");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let mut value = String::from("héllo");
        let mut cursor = 2;
        assert!(backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "hllo");
        assert_eq!(cursor, 1);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut value = String::from("ab");
        let mut cursor = 0;
        assert!(!backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "ab");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut value = String::from("abc");
        let mut cursor = 1;
        assert!(delete_char(&mut value, &mut cursor));
        assert_eq!(value, "ac");
        assert_eq!(cursor, 1);
        cursor = 2;
        assert!(!delete_char(&mut value, &mut cursor));
    }

    #[test]
    fn cursor_movement_clamps_to_bounds() {
        let mut cursor = 0;
        assert!(!move_left(&mut cursor, "ab"));
        assert!(move_right(&mut cursor, "ab"));
        assert_eq!(cursor, 1);
        cursor = 5;
        assert!(!move_right(&mut cursor, "ab"));
        assert_eq!(cursor, 2);
    }
}
