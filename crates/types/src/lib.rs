pub mod geometry;
pub mod model;

pub use geometry::{Canvas, VerticalSpan};
pub use model::{BlockKind, ContentBlock, SlideContentModel};
