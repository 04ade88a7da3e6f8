//! Single-line input state for the font search box.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone)]
pub struct InputState {
    pub content: String,
    /// Byte offset of the cursor, always on a char boundary
    pub cursor_position: usize,
    pub scroll_offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    None,
    /// Enter on non-empty content. The text stays in the box so the user
    /// can tweak and re-submit.
    Submit(String),
    Exit,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor_position: 0,
            scroll_offset: 0,
        }
    }

    /// Replace the content, cursor at the end. Used to seed the default font.
    pub fn set_content(&mut self, text: &str) {
        self.content = text.to_string();
        self.cursor_position = self.content.len();
        self.scroll_offset = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputAction {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => InputAction::Exit,
            (KeyCode::Char('d'), KeyModifiers::CONTROL) if self.content.is_empty() => {
                InputAction::Exit
            }
            (KeyCode::Char('v'), KeyModifiers::CONTROL) => {
                if let Ok(clipboard_content) = cli_clipboard::get_contents() {
                    for c in clipboard_content.chars().filter(|c| !c.is_control()) {
                        self.insert_char(c);
                    }
                }
                InputAction::None
            }
            (KeyCode::Enter, KeyModifiers::NONE) if !self.content.trim().is_empty() => {
                InputAction::Submit(self.content.clone())
            }
            (KeyCode::Backspace, _) => {
                self.delete_char();
                InputAction::None
            }
            (KeyCode::Delete, _) => {
                self.delete_char_forward();
                InputAction::None
            }
            (KeyCode::Left, _) => {
                self.move_cursor_left();
                InputAction::None
            }
            (KeyCode::Right, _) => {
                self.move_cursor_right();
                InputAction::None
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor_position = 0;
                InputAction::None
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor_position = self.content.len();
                InputAction::None
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.content.drain(..self.cursor_position);
                self.cursor_position = 0;
                InputAction::None
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                self.delete_word();
                InputAction::None
            }
            (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                self.insert_char(c);
                InputAction::None
            }
            _ => InputAction::None,
        }
    }

    fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let prev_pos = self.prev_char_boundary();
            self.content.drain(prev_pos..self.cursor_position);
            self.cursor_position = prev_pos;
        }
    }

    fn delete_char_forward(&mut self) {
        if self.cursor_position < self.content.len() {
            let next_pos = self.next_char_boundary();
            self.content.drain(self.cursor_position..next_pos);
        }
    }

    fn delete_word(&mut self) {
        if self.cursor_position == 0 {
            return;
        }

        let head = &self.content[..self.cursor_position];
        let trimmed = head.trim_end();
        let pos = trimmed.rfind(char::is_whitespace).map(|i| i + 1).unwrap_or(0);

        self.content.drain(pos..self.cursor_position);
        self.cursor_position = pos;
    }

    fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.prev_char_boundary();
        }
    }

    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.content.len() {
            self.cursor_position = self.next_char_boundary();
        }
    }

    fn prev_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position.saturating_sub(1);
        while pos > 0 && !self.content.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn next_char_boundary(&self) -> usize {
        let mut pos = self.cursor_position + 1;
        while pos < self.content.len() && !self.content.is_char_boundary(pos) {
            pos += 1;
        }
        pos.min(self.content.len())
    }

    /// Slice of the content that fits in `width` columns from the scroll
    /// offset.
    pub fn visible_content(&self, width: usize) -> &str {
        let mut end = (self.scroll_offset + width).min(self.content.len());
        while end < self.content.len() && !self.content.is_char_boundary(end) {
            end += 1;
        }
        &self.content[self.scroll_offset..end]
    }

    /// Keep the cursor inside the visible window before rendering.
    pub fn update_scroll(&mut self, width: usize) {
        if width == 0 {
            return;
        }
        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
        } else if self.cursor_position >= self.scroll_offset + width {
            self.scroll_offset = self.cursor_position.saturating_sub(width - 1);
        }
        while self.scroll_offset > 0 && !self.content.is_char_boundary(self.scroll_offset) {
            self.scroll_offset -= 1;
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
