//! Button slot presets

use buttonbox_shared::{ButtonConfig, MAX_BUTTONS};

/// One momentary, unlabelled button per slot, ids 0..16
pub fn default_buttons() -> Vec<ButtonConfig> {
    (0..MAX_BUTTONS).map(ButtonConfig::new).collect()
}
