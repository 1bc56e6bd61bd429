use super::orchestrator::LayoutPipeline;
use crate::error::PipelineError;
use slidefit_executor::DeckExecutor;
use slidefit_layout::{Canvas, LayoutCache, LayoutConfig, SlideLayoutEngine};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `LayoutPipeline`.
pub struct PipelineBuilder {
    config: LayoutConfig,
    executor: Option<DeckExecutor>,
    worker_count: Option<usize>,
    cache: bool,
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self {
            config: LayoutConfig::default(),
            executor: None,
            worker_count: None,
            cache: false,
        }
    }
}

impl PipelineBuilder {
    /// Creates a new `PipelineBuilder` with the 16:9 default configuration.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads layout constants from a JSON file. Keys missing from the file
    /// keep their default values.
    pub fn with_config_file<P: AsRef<Path>>(self, path: P) -> Result<Self, PipelineError> {
        let path_ref = path.as_ref();
        let source = fs::read_to_string(path_ref).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read config from '{}': {}", path_ref.display(), e),
            ))
        })?;
        self.with_config_source(&source)
    }

    pub fn with_config_source(mut self, json: &str) -> Result<Self, PipelineError> {
        self.config = LayoutConfig::from_json(json)?;
        Ok(self)
    }

    /// Overrides only the canvas, keeping every other constant.
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.config.canvas = canvas;
        self
    }

    pub fn with_executor(mut self, executor: DeckExecutor) -> Self {
        self.executor = Some(executor);
        self
    }

    /// Number of layout workers. Ignored when an executor is set explicitly.
    pub fn with_worker_count(mut self, count: usize) -> Self {
        self.worker_count = Some(count);
        self
    }

    /// Lays slides out one after another on the calling thread.
    pub fn sequential(self) -> Self {
        self.with_executor(DeckExecutor::sequential())
    }

    /// Memoizes layouts by slide content hash for the lifetime of the
    /// pipeline, holding at most `DEFAULT_CACHE_CAPACITY` slides.
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled;
        self
    }

    pub fn build(self) -> Result<LayoutPipeline, PipelineError> {
        let engine = SlideLayoutEngine::new(self.config)?;
        let executor = match self.executor {
            Some(executor) => executor,
            None => {
                let workers = self.worker_count.unwrap_or_else(num_cpus::get);
                DeckExecutor::parallel(workers)?
            }
        };
        let cache = self.cache.then(|| Arc::new(LayoutCache::new()));
        Ok(LayoutPipeline::new(Arc::new(engine), executor, cache))
    }
}
