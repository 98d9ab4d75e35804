pub mod config;
pub mod engine;
pub mod error;
pub mod ingestion;
pub mod pipeline;
pub mod scene;
pub mod types;

pub use config::{BinderConfig, ObjectSpec, OutputFormat};
pub use pipeline::Pipeline;
