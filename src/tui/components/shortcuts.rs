//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add j/k, g/G for navigation
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self.shortcuts.push(Shortcut::new("g/G", "Top/Bottom"));
        self
    }

    /// Add n for new, e for edit, d for delete
    pub fn with_crud(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("n", "New"));
        self.shortcuts.push(Shortcut::new("e", "Edit"));
        self.shortcuts.push(Shortcut::new("d", "Delete"));
        self
    }

    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
