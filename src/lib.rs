pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod themes;

pub use config::PipelineConfig;
pub use error::DatasetError;
pub use pipeline::{analyze, Analysis};
