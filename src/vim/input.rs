use zeroize::Zeroize;

/// Text buffer with a character cursor. Contact fields hold one line; the
/// details field also accepts `'\n'`.
///
/// The intake form collects contact details, so cleared or dropped content is
/// scrubbed rather than left in freed memory.
#[derive(Default, Clone)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = self.cursor_byte_position();
        self.content.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_at_cursor();
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.remove_at_cursor();
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.content.zeroize();
        self.content.clear();
        self.cursor = 0;
    }

    fn remove_at_cursor(&mut self) {
        let byte_pos = self.cursor_byte_position();
        let next_byte_pos = self.content[byte_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| byte_pos + i)
            .unwrap_or(self.content.len());
        self.content.drain(byte_pos..next_byte_pos);
    }

    fn cursor_byte_position(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

impl Drop for InputBuffer {
    fn drop(&mut self) {
        self.content.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> InputBuffer {
        let mut buf = InputBuffer::new();
        for c in text.chars() {
            buf.insert(c);
        }
        buf
    }

    #[test]
    fn insert_at_cursor_handles_multibyte() {
        let mut buf = typed("Zoë");
        buf.move_left();
        buf.insert('x');
        assert_eq!(buf.content(), "Zoxë");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn newline_is_kept_for_multiline_details() {
        let mut buf = typed("row 1");
        buf.insert('\n');
        buf.insert('x');
        assert_eq!(buf.content(), "row 1\nx");
        assert_eq!(buf.len(), 7);
    }

    #[test]
    fn delete_back_and_forward() {
        let mut buf = typed("abc");
        assert!(buf.delete_back());
        assert_eq!(buf.content(), "ab");
        assert!(!buf.delete_forward());

        buf.move_start();
        assert!(!buf.delete_back());
        assert!(buf.delete_forward());
        assert_eq!(buf.content(), "b");
    }

    #[test]
    fn clear_resets_content_and_cursor() {
        let mut buf = typed("jane@example.com");
        assert_eq!(buf.cursor(), 16);

        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }
}
