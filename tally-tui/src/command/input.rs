use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys the command palette reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Enter,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Escape,
}

impl KeyInput {
    /// Translate a terminal key event. Control chords are not palette input.
    pub fn from_event(key: &KeyEvent) -> Option<Self> {
        let input = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyInput::Char(c)
            }
            KeyCode::Backspace => KeyInput::Backspace,
            KeyCode::Enter => KeyInput::Enter,
            KeyCode::Tab => KeyInput::Tab,
            KeyCode::Up => KeyInput::Up,
            KeyCode::Down => KeyInput::Down,
            KeyCode::Left => KeyInput::Left,
            KeyCode::Right => KeyInput::Right,
            KeyCode::Home => KeyInput::Home,
            KeyCode::End => KeyInput::End,
            KeyCode::Esc => KeyInput::Escape,
            _ => return None,
        };
        Some(input)
    }
}

/// The palette's one-line edit buffer. `cursor` is a byte offset that always
/// sits on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents and put the cursor at the end.
    pub fn replace(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.text.len();
    }

    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_char_start() {
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_char_start().unwrap_or(0);
    }

    pub fn right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn prev_char_start(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}
