//! Text input models
//!
//! `FieldState` implements plain single-line editing. `EmailField` and
//! `PasswordField` wrap it with their labels and, for passwords, the
//! visibility toggle. Rendering lives in `ui::widgets`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Mask character for hidden passwords
pub const MASK_CHAR: char = '•';

/// Editable single-line text with a char-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    cursor: usize,
    pub is_valid: Option<bool>,
}

impl FieldState {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
        self.is_valid = None;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.value.remove(idx);
        self.is_valid = None;
        true
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let idx = self.byte_index(self.cursor);
        self.value.remove(idx);
        self.is_valid = None;
        true
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

    /// Apply an editing key. Returns true when the value changed.
    pub fn handle_edit_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(c);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.move_left();
                false
            }
            KeyCode::Right => {
                self.move_right();
                false
            }
            KeyCode::Home => {
                self.move_home();
                false
            }
            KeyCode::End => {
                self.move_end();
                false
            }
            _ => false,
        }
    }
}

/// What a field reports back to its screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The value changed (the field's `on_change`)
    Changed(String),
    /// Enter on a field that hands focus to the next one
    Next,
    /// Enter on the last field of a form
    Done,
    Ignored,
}

/// Which key Enter acts as on a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImeAction {
    Next,
    Done,
}

fn route_key(state: &mut FieldState, key: KeyEvent, ime: ImeAction) -> FieldEvent {
    if key.code == KeyCode::Enter {
        return match ime {
            ImeAction::Next => FieldEvent::Next,
            ImeAction::Done => FieldEvent::Done,
        };
    }
    if state.handle_edit_key(key) {
        FieldEvent::Changed(state.value().to_string())
    } else {
        FieldEvent::Ignored
    }
}

/// Email address input
#[derive(Debug, Clone)]
pub struct EmailField {
    pub label: &'static str,
    pub state: FieldState,
}

impl Default for EmailField {
    fn default() -> Self {
        Self {
            label: "Email Address",
            state: FieldState::default(),
        }
    }
}

impl EmailField {
    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FieldEvent {
        route_key(&mut self.state, key, ImeAction::Next)
    }
}

/// Password input with a show/hide toggle
#[derive(Debug, Clone)]
pub struct PasswordField {
    pub label: &'static str,
    pub state: FieldState,
    pub hidden: bool,
    ime: ImeAction,
}

impl PasswordField {
    pub fn new(label: &'static str, ime: ImeAction) -> Self {
        Self {
            label,
            state: FieldState::default(),
            hidden: true,
            ime,
        }
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn toggle_visibility(&mut self) {
        self.hidden = !self.hidden;
    }

    /// Text as it should be drawn
    pub fn display_value(&self) -> String {
        if self.hidden {
            MASK_CHAR.to_string().repeat(self.state.value().chars().count())
        } else {
            self.state.value().to_string()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FieldEvent {
        if key.code == KeyCode::Char('r') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.toggle_visibility();
            return FieldEvent::Ignored;
        }
        route_key(&mut self.state, key, self.ime)
    }
}
