//! A presentation as handed over by the content generator.

use crate::error::PipelineError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use slidefit_layout::SlideContentModel;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub slides: Vec<SlideContentModel>,
}

impl Deck {
    pub fn new(slides: Vec<SlideContentModel>) -> Self {
        Self { title: None, slides }
    }

    /// Parses either `{"slides": [...]}` or a bare array of slides.
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => Ok(Self::new(serde_json::from_value(Value::Array(items))?)),
            object @ Value::Object(_) => Ok(serde_json::from_value(object)?),
            other => Err(PipelineError::Deck(format!(
                "expected an object with 'slides' or an array of slides, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read deck from '{}': {}", path_ref.display(), e),
            ))
        })?;
        Self::from_json(&source)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
