//! Keyboard shortcut registry.

use sketchboard_core::ToolKind;

/// What a shortcut does to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
    Redo,
    /// Abandon the gesture in progress.
    Cancel,
    Tool(ToolKind),
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub command: Command,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        command: Command,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            command,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    /// Check if a key press triggers this shortcut. Keys compare
    /// case-insensitively since Shift changes the reported letter.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool) -> bool {
        self.key.eq_ignore_ascii_case(key) && self.ctrl == ctrl && self.shift == shift
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Z", true, false, Command::Undo, "Undo"),
            Shortcut::new("Z", true, true, Command::Redo, "Redo"),
            Shortcut::new("Y", true, false, Command::Redo, "Redo"),
            Shortcut::new("Escape", false, false, Command::Cancel, "Cancel current gesture"),
            Shortcut::new("V", false, false, Command::Tool(ToolKind::Select), "Selection tool"),
            Shortcut::new("1", false, false, Command::Tool(ToolKind::Select), "Selection tool"),
            Shortcut::new("L", false, false, Command::Tool(ToolKind::Line), "Line tool"),
            Shortcut::new("2", false, false, Command::Tool(ToolKind::Line), "Line tool"),
            Shortcut::new("R", false, false, Command::Tool(ToolKind::Rectangle), "Rectangle tool"),
            Shortcut::new("3", false, false, Command::Tool(ToolKind::Rectangle), "Rectangle tool"),
            Shortcut::new("P", false, false, Command::Tool(ToolKind::Pencil), "Pencil tool"),
            Shortcut::new("4", false, false, Command::Tool(ToolKind::Pencil), "Pencil tool"),
        ]
    }

    /// Look up the command for a key press. `ctrl` should already include
    /// the platform command key.
    pub fn command_for(key: &str, ctrl: bool, shift: bool) -> Option<Command> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(key, ctrl, shift))
            .map(|shortcut| shortcut.command)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}
