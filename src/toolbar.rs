use serde::{Deserialize, Serialize};

use crate::detect::DetectedFormat;
use crate::engine::{DEFAULT_FONT_COLOR, TRANSPARENT};
use crate::request::{BlockType, FormatRequest, InlineToggles, StyleAttributes};

pub const FONT_FAMILIES: [(&str, &str); 4] = [
    ("default", "Default"),
    ("serif", "Serif"),
    ("sans-serif", "Sans Serif"),
    ("monospace", "Monospace"),
];

pub const FONT_SIZES: [&str; 8] = ["12px", "14px", "16px", "18px", "20px", "24px", "28px", "32px"];

pub const ALIGNMENTS: [&str; 3] = ["left", "center", "right"];

#[rustfmt::skip]
pub const FONT_COLORS: [&str; 66] = [
    "#000000", "#434343", "#666666", "#999999", "#B7B7B7", "#CCCCCC", "#D9D9D9", "#EFEFEF", "#F3F3F3", "#FFFFFF",
    "#FF0000", "#FF9900", "#FFFF00", "#00FF00", "#00FFFF", "#0000FF", "#9900FF", "#FF00FF",
    "#F4CCCC", "#FCE5CD", "#FFF2CC", "#D9EAD3", "#D0E0E3", "#CFE2F3", "#D9D2E9", "#EAD1DC",
    "#EA9999", "#F9CB9C", "#FFE599", "#B6D7A8", "#A2C4C9", "#9FC5E8", "#B4A7D6", "#D5A6BD",
    "#E06666", "#F6B26B", "#FFD966", "#93C47D", "#76A5AF", "#6FA8DC", "#8E7CC3", "#C27BA0",
    "#CC0000", "#E69138", "#F1C232", "#6AA84F", "#45818E", "#3D85C6", "#674EA7", "#A64D79",
    "#990000", "#B45F06", "#BF9000", "#38761D", "#134F5C", "#0B5394", "#351C75", "#741B47",
    "#660000", "#783F04", "#7F6000", "#274E13", "#0C343D", "#073763", "#20124D", "#4C1130",
];

#[rustfmt::skip]
pub const BG_COLORS: [&str; 11] = [
    TRANSPARENT,
    "#FFFF00", "#FFE4E1", "#E0FFFF", "#F0FFF0", "#FFF8DC",
    "#FFD700", "#FFB6C1", "#87CEFA", "#98FB98", "#F0E68C",
];

/// What the floating toolbar shows for the current selection.
///
/// Block type and inline toggles come from detection; the style pickers
/// always reset to their defaults when a new selection is made.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarState {
    #[serde(rename = "type")]
    pub block: BlockType,
    #[serde(flatten)]
    pub toggles: InlineToggles,
    pub font_color: String,
    pub bg_color: String,
    pub font_family: String,
    pub font_size: String,
    pub alignment: String,
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self {
            block: BlockType::Normal,
            toggles: InlineToggles::default(),
            font_color: DEFAULT_FONT_COLOR.to_string(),
            bg_color: TRANSPARENT.to_string(),
            font_family: FONT_FAMILIES[0].0.to_string(),
            font_size: "14px".to_string(),
            alignment: ALIGNMENTS[0].to_string(),
        }
    }
}

impl ToolbarState {
    pub fn from_detection(format: DetectedFormat) -> Self {
        Self {
            block: format.block,
            toggles: InlineToggles {
                bold: format.bold,
                italic: format.italic,
                underline: format.underline,
                strikethrough: format.strikethrough,
            },
            ..Self::default()
        }
    }

    pub fn set_block(&mut self, block: BlockType) {
        self.block = block;
    }

    pub fn toggle_bold(&mut self) {
        self.toggles.bold = !self.toggles.bold;
    }

    pub fn toggle_italic(&mut self) {
        self.toggles.italic = !self.toggles.italic;
    }

    pub fn toggle_underline(&mut self) {
        self.toggles.underline = !self.toggles.underline;
    }

    pub fn toggle_strikethrough(&mut self) {
        self.toggles.strikethrough = !self.toggles.strikethrough;
    }

    pub fn to_request(&self) -> FormatRequest {
        FormatRequest {
            block: self.block,
            toggles: self.toggles,
            style: StyleAttributes {
                font_color: Some(self.font_color.clone()),
                bg_color: Some(self.bg_color.clone()),
                font_family: Some(self.font_family.clone()),
                font_size: Some(self.font_size.clone()),
                alignment: Some(self.alignment.clone()),
            },
        }
    }
}
