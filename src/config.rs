// shortcuts-vdf/src/config.rs

use serde::{Deserialize, Serialize};

/// Flag values written into newly added shortcut entries.
///
/// The defaults are the values the host itself writes for a fresh
/// non-catalog shortcut. Each flag is stored as an int32 0/1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutDefaults {
    pub is_hidden: bool,
    pub allow_desktop_config: bool,
    pub allow_overlay: bool,
    pub open_vr: bool,
    pub devkit: bool,
}

impl Default for ShortcutDefaults {
    fn default() -> Self {
        ShortcutDefaults {
            is_hidden: false,
            allow_desktop_config: true,
            allow_overlay: true,
            open_vr: false,
            devkit: false,
        }
    }
}
