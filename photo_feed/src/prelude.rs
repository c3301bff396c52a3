pub use crate::client::PhotoClient;
pub use crate::config::PipelineConfig;
pub use crate::error::{ConfigError, FetchError, MaterializeError, PipelineError};
pub use crate::model::{PhotoRecord, RenderableImage};
pub use crate::pipeline::{Pipeline, Presenter, RunReport, RunState};
