use crossterm::style::Color;

/// Design tokens for logscrub CLI output.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
}
