/// Single-line editable field with a character cursor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    content: String,
    /// Cursor position in characters, `0..=char_count`
    cursor: usize,
}

impl TextInput {
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    /// Inserts a character at the cursor
    pub fn insert_char(&mut self, character: char) {
        let byte_index = self.byte_index();
        self.content.insert(byte_index, character);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_index = self.byte_index();
        self.content.remove(byte_index);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with surrounding whitespace removed
    pub fn value(&self) -> String {
        self.content.trim().to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(index, _)| index)
    }
}

impl From<&str> for TextInput {
    fn from(content: &str) -> Self {
        Self::with_content(content)
    }
}
