use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};

/// Characters scanned on each side of the caret when detecting inline marks.
pub const DEFAULT_DETECTION_RADIUS: usize = 10;

/// Tunables for the detector, read from the editor's settings blob.
///
/// Missing keys take their defaults, so `{}` is a valid settings document and
/// reproduces the stock toolbar behaviour.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatSettings {
    pub detection_radius: usize,
    /// Scan for `<u>…</u>` too. Off by default: the toolbar has never
    /// reported underline.
    pub detect_underline: bool,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            detection_radius: DEFAULT_DETECTION_RADIUS,
            detect_underline: false,
        }
    }
}

impl FormatSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FormatError::Settings)
    }
}
