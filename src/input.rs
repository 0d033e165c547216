//! Typed answer buffer and the keyboard alphabet the game accepts.

/// Number of digits in an answer (`HHMM`).
pub const SLOTS: usize = 4;

/// Keys the game reacts to. Anything else never reaches the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Backspace,
    Confirm,
}

impl Key {
    /// Keys handled on `keydown`: decimal digits and Backspace.
    pub fn from_key_down(key: &str, code: &str) -> Option<Key> {
        if code == "Backspace" {
            return Some(Key::Backspace);
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => Some(Key::Digit(c as u8 - b'0')),
            _ => None,
        }
    }

    /// Keys handled on `keyup`: only the confirm key.
    pub fn from_key_up(_key: &str, code: &str) -> Option<Key> {
        match code {
            "Enter" | "NumpadEnter" => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// Fixed four-slot digit buffer with a write cursor.
///
/// Slots at or past the cursor are unset even if they still hold an old digit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBuffer {
    slots: [u8; SLOTS],
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == SLOTS
    }

    /// Digits typed so far.
    pub fn digits(&self) -> &[u8] {
        &self.slots[..self.cursor]
    }

    /// Write a digit at the cursor. Full buffer or non-digit: no-op.
    pub fn push_digit(&mut self, d: u8) {
        if self.cursor < SLOTS && d <= 9 {
            self.slots[self.cursor] = d;
            self.cursor += 1;
        }
    }

    pub fn backspace(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn clear(&mut self) {
        self.cursor = 0;
    }

    /// `HH:MM` readout with `_` for unset slots.
    pub fn readout(&self) -> String {
        let ch = |i: usize| -> char {
            if i < self.cursor {
                (b'0' + self.slots[i]) as char
            } else {
                '_'
            }
        };
        format!("{}{}:{}{}", ch(0), ch(1), ch(2), ch(3))
    }
}
