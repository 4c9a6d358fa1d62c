//! Color palette for the terminal UI.

use egui::Color32;

/// Terminal color theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary accent (headings, highlighted values).
    pub accent: Color32,
    /// Secondary accent (the counting-game yellow).
    pub highlight: Color32,
    /// Success green.
    pub success: Color32,
    /// Warning yellow.
    pub warning: Color32,
    /// Error red.
    pub error: Color32,
    /// De-emphasized text.
    pub dim: Color32,
    /// Fill color for skeleton placeholder bars.
    pub skeleton: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color32::from_rgb(242, 95, 92),
            highlight: Color32::from_rgb(255, 224, 102),
            success: Color32::from_rgb(80, 200, 120),
            warning: Color32::from_rgb(255, 196, 0),
            error: Color32::from_rgb(235, 64, 52),
            dim: Color32::from_rgb(140, 140, 150),
            skeleton: Color32::from_rgb(60, 60, 70),
        }
    }
}
