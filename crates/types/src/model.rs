//! The read-only slide content handed to the layout engine.
use serde::{Deserialize, Serialize};
use std::fmt;

/// One slide as produced by the upstream content generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideContentModel {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

impl SlideContentModel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            blocks: Vec::new(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn with_blocks(mut self, blocks: impl IntoIterator<Item = ContentBlock>) -> Self {
        self.blocks.extend(blocks);
        self
    }
}

/// A typed unit of slide body content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum ContentBlock {
    Heading { text: String },
    BulletGroup { items: Vec<String> },
    Callout { text: String },
    Image { caption: String },
}

impl ContentBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        ContentBlock::Heading { text: text.into() }
    }

    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentBlock::BulletGroup {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn callout(text: impl Into<String>) -> Self {
        ContentBlock::Callout { text: text.into() }
    }

    pub fn image(caption: impl Into<String>) -> Self {
        ContentBlock::Image {
            caption: caption.into(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::Heading { .. } => BlockKind::Heading,
            ContentBlock::BulletGroup { .. } => BlockKind::BulletGroup,
            ContentBlock::Callout { .. } => BlockKind::Callout,
            ContentBlock::Image { .. } => BlockKind::Image,
        }
    }
}

/// Discriminant of [`ContentBlock`], used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Heading,
    BulletGroup,
    Callout,
    Image,
}

impl BlockKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::BulletGroup => "bullet_group",
            BlockKind::Callout => "callout",
            BlockKind::Image => "image",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
