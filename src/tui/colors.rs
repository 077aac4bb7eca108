//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Completed tasks and their summary markers
pub const EMERALD: Color = Color::Rgb(16, 185, 129);
/// Pending summary markers, remove buttons and a full input buffer
pub const ORANGE: Color = Color::Rgb(249, 115, 22);
/// Background of an open day
pub const OPEN_DAY_BG: Color = Color::Rgb(229, 231, 235);
/// Date labels, placeholders and secondary text
pub const MUTED: Color = Color::Rgb(107, 114, 128);
/// Day names
pub const INK: Color = Color::Rgb(31, 41, 55);
