//! Input field handling for the terminal user interface.

/// A text input field with a cursor and an optional length limit.
///
/// The cursor and the limit count characters, not bytes.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub limit: Option<usize>,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            limit,
        }
    }

    /// Number of characters in the field.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the field holds as many characters as the limit allows.
    pub fn is_full(&self) -> bool {
        self.limit.is_some_and(|limit| self.len() >= limit)
    }

    /// The value without leading and trailing whitespace.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    fn byte_offset(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor. Returns false when the limit drops it.
    pub fn handle_char(&mut self, c: char) -> bool {
        if self.is_full() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Insert pasted text until the limit is reached, returning how many characters fit.
    pub fn handle_paste(&mut self, text: &str) -> usize {
        text.chars()
            .filter(|c| !c.is_control())
            .take_while(|c| self.handle_char(*c))
            .count()
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.len();
    }

    /// Empty the field and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(field: &mut InputField, s: &str) {
        for c in s.chars() {
            field.handle_char(c);
        }
    }

    #[test]
    fn test_limit_drops_extra_keystrokes() {
        let mut field = InputField::new(Some(30));
        type_str(&mut field, &"x".repeat(31));

        assert_eq!(field.len(), 30);
        assert!(field.is_full());
        assert!(!field.handle_char('y'));
        assert_eq!(field.value, "x".repeat(30));
    }

    #[test]
    fn test_unbounded_field_accepts_everything() {
        let mut field = InputField::new(None);
        type_str(&mut field, &"x".repeat(100));
        assert_eq!(field.len(), 100);
        assert!(!field.is_full());
    }

    #[test]
    fn test_editing_at_cursor() {
        let mut field = InputField::new(None);
        type_str(&mut field, "Bymilk");
        for _ in 0..5 {
            field.move_cursor_left();
        }
        assert_eq!(field.cursor, 1);
        field.handle_char('u');
        field.move_cursor_right();
        field.handle_char(' ');
        assert_eq!(field.value, "Buy milk");
        assert_eq!(field.cursor, 4);

        field.move_cursor_home();
        field.handle_delete();
        field.move_cursor_end();
        field.handle_backspace();
        assert_eq!(field.value, "uy mil");
        assert_eq!(field.cursor, 6);
    }

    #[test]
    fn test_multibyte_characters_count_once() {
        let mut field = InputField::new(Some(3));
        type_str(&mut field, "84°C");
        assert_eq!(field.value, "84°");
        field.handle_backspace();
        assert_eq!(field.value, "84");
    }

    #[test]
    fn test_paste_stops_at_limit() {
        let mut field = InputField::new(Some(5));
        assert_eq!(field.handle_paste("Walk\nthe dog"), 5);
        assert_eq!(field.value, "Walkt");
    }

    #[test]
    fn test_trimmed_and_clear() {
        let mut field = InputField::new(None);
        type_str(&mut field, "  Read  10 pages ");
        assert_eq!(field.trimmed(), "Read  10 pages");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor, 0);
    }
}
