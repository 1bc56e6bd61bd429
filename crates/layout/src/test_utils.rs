use crate::engine::{SlideLayout, SlideLayoutEngine};
use slidefit_types::{ContentBlock, SlideContentModel};

/// Lays out with the default 16:9 configuration.
pub fn layout_default(model: &SlideContentModel) -> SlideLayout {
    SlideLayoutEngine::default()
        .layout(model)
        .expect("test slide should be valid")
}

/// A string of exactly `len` characters made of readable words.
pub fn text_of_len(len: usize) -> String {
    "lorem ipsum dolor sit amet ".chars().cycle().take(len).collect()
}

/// A bullet group of `count` items, each exactly `len` characters long.
pub fn bullets_of_len(count: usize, len: usize) -> ContentBlock {
    ContentBlock::BulletGroup {
        items: (0..count).map(|_| text_of_len(len)).collect(),
    }
}
