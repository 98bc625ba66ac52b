//! Button slot configuration

use serde::{Deserialize, Serialize};

/// Number of physical button slots on the box
pub const MAX_BUTTONS: u8 = 16;

/// Button behavior mode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum ButtonMode {
    /// Active only while pressed
    #[default]
    Momentary,
    /// Latched, flips on each press
    Toggle,
}

/// 32-bit ARGB color
///
/// Persisted as a signed 32-bit integer, the way the phone apps store
/// colors. Unsigned values are accepted on read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(into = "i32", try_from = "i64")]
pub struct Color(pub u32);

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl From<Color> for i32 {
    fn from(color: Color) -> Self {
        color.0 as i32
    }
}

impl TryFrom<i64> for Color {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if let Ok(signed) = i32::try_from(value) {
            return Ok(Color(signed as u32));
        }
        u32::try_from(value)
            .map(Color)
            .map_err(|_| format!("color {} does not fit in 32 bits", value))
    }
}

/// Configuration of a single button slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ButtonConfig {
    /// Slot index, 0..MAX_BUTTONS
    pub id: u8,
    /// Custom label, empty shows the slot number
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub mode: ButtonMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_off: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_on: Option<Color>,
}

impl ButtonConfig {
    /// Default configuration for a slot
    pub fn new(id: u8) -> Self {
        Self {
            id,
            label: String::new(),
            mode: ButtonMode::Momentary,
            color_off: None,
            color_on: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_mode(mut self, mode: ButtonMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_colors(mut self, off: Option<Color>, on: Option<Color>) -> Self {
        self.color_off = off;
        self.color_on = on;
        self
    }

    pub fn is_toggle(&self) -> bool {
        self.mode == ButtonMode::Toggle
    }

    /// Text shown on the button: the label, or the 1-based slot number
    pub fn display_label(&self) -> String {
        if self.label.is_empty() {
            (u16::from(self.id) + 1).to_string()
        } else {
            self.label.clone()
        }
    }
}
