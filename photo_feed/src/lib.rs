//! Photo feed pipeline: fetch a JSON photo list, download a prefix of the
//! referenced images one by one, and hand the decoded images to a presenter.
//!
//! ```no_run
//! use photo_feed::prelude::*;
//!
//! struct Printer;
//!
//! impl Presenter for Printer {
//!     fn start_busy(&mut self) {}
//!     fn stop_busy(&mut self) {}
//!     fn present(&mut self, images: Vec<RenderableImage>) {
//!         println!("{} photos", images.len());
//!     }
//! }
//!
//! let pipeline = Pipeline::new(PipelineConfig::default())?;
//! let report = pipeline.run(&mut Printer);
//! assert!(report.is_done());
//! # Ok::<(), PipelineError>(())
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod materializer;
pub mod model;
pub mod pipeline;
pub mod prelude;

#[cfg(test)]
mod testing;

pub use fetcher::MetadataFetcher;
pub use materializer::ImageMaterializer;
pub use pipeline::{PendingRun, RunEvent};
