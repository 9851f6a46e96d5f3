use serde::Deserialize;

/// Key bindings configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct KeyBindingsConfig {
    // Global keys
    key_quit: Option<char>,

    // Demo screen actions
    key_increment: Option<char>,
    key_decrement: Option<char>,
    key_dot: Option<char>,
    key_reset: Option<char>,

    // Confirmation keys
    key_confirm_yes: Option<char>,
    key_confirm_no: Option<char>,
}

impl KeyBindingsConfig {
    pub fn quit(&self) -> char {
        self.key_quit.unwrap_or('q')
    }

    pub fn increment(&self) -> char {
        self.key_increment.unwrap_or('+')
    }

    pub fn decrement(&self) -> char {
        self.key_decrement.unwrap_or('-')
    }

    pub fn dot(&self) -> char {
        self.key_dot.unwrap_or('d')
    }

    pub fn reset(&self) -> char {
        self.key_reset.unwrap_or('r')
    }

    pub fn confirm_yes(&self) -> char {
        self.key_confirm_yes.unwrap_or('y')
    }

    pub fn confirm_no(&self) -> char {
        self.key_confirm_no.unwrap_or('n')
    }
}
