use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{FormatError, Result};

/// Line-level markdown construct. At most one applies per format call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockType {
    #[default]
    Normal,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Ul,
    Ol,
    InlineCode,
    Blockquote,
}

impl BlockType {
    pub const ALL: [BlockType; 11] = [
        BlockType::Normal,
        BlockType::H1,
        BlockType::H2,
        BlockType::H3,
        BlockType::H4,
        BlockType::H5,
        BlockType::H6,
        BlockType::Ul,
        BlockType::Ol,
        BlockType::InlineCode,
        BlockType::Blockquote,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            BlockType::Normal => "normal",
            BlockType::H1 => "h1",
            BlockType::H2 => "h2",
            BlockType::H3 => "h3",
            BlockType::H4 => "h4",
            BlockType::H5 => "h5",
            BlockType::H6 => "h6",
            BlockType::Ul => "ul",
            BlockType::Ol => "ol",
            BlockType::InlineCode => "inline-code",
            BlockType::Blockquote => "blockquote",
        }
    }

    pub fn heading(level: u8) -> Option<Self> {
        match level {
            1 => Some(BlockType::H1),
            2 => Some(BlockType::H2),
            3 => Some(BlockType::H3),
            4 => Some(BlockType::H4),
            5 => Some(BlockType::H5),
            6 => Some(BlockType::H6),
            _ => None,
        }
    }

    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockType::H1 => Some(1),
            BlockType::H2 => Some(2),
            BlockType::H3 => Some(3),
            BlockType::H4 => Some(4),
            BlockType::H5 => Some(5),
            BlockType::H6 => Some(6),
            _ => None,
        }
    }

    /// Lenient parse used for host input: anything unrecognised is plain text.
    pub fn from_tag_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for BlockType {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        BlockType::ALL
            .into_iter()
            .find(|block| block.tag() == s)
            .ok_or_else(|| FormatError::UnknownBlockType(s.to_string()))
    }
}

impl Serialize for BlockType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = Option::<String>::deserialize(deserializer)?;
        Ok(tag.as_deref().map(BlockType::from_tag_lossy).unwrap_or_default())
    }
}

/// Inline marks. Independent of each other and of the block type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineToggles {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl InlineToggles {
    pub fn any(self) -> bool {
        self.bold || self.italic || self.underline || self.strikethrough
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    // Font family, size and alignment travel with the request but have no
    // markdown rendition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<String>,
}

/// Everything one "apply formatting" click asks for.
///
/// Serializes to the flat object the editor view already sends:
/// `{ "type": "h2", "bold": true, "fontColor": "#FF0000", ... }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRequest {
    #[serde(rename = "type", default)]
    pub block: BlockType,
    #[serde(flatten)]
    pub toggles: InlineToggles,
    #[serde(flatten)]
    pub style: StyleAttributes,
}

impl FormatRequest {
    pub fn new(block: BlockType) -> Self {
        Self {
            block,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FormatError::Request)
    }

    pub fn bold(mut self) -> Self {
        self.toggles.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.toggles.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.toggles.underline = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.toggles.strikethrough = true;
        self
    }

    pub fn font_color(mut self, color: impl Into<String>) -> Self {
        self.style.font_color = Some(color.into());
        self
    }

    pub fn bg_color(mut self, color: impl Into<String>) -> Self {
        self.style.bg_color = Some(color.into());
        self
    }
}
