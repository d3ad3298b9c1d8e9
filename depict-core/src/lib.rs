//! # depict-core — shared vocabulary for model interpretation
//!
//! This crate holds everything the interpreter layer consumes from the
//! modeling side: the closed task and data-type taxonomies, the
//! [`BaseModel`] / [`TrainableModel`] capability traits, and the ambient
//! configuration and tracing setup shared by the workspace.

pub mod config;
pub mod error;
pub mod model;
pub mod taxonomy;
pub mod telemetry;

// Re-exports
pub use config::{DepictConfig, InterpreterDefaults, LoggingConfig, load_config};
pub use error::CoreError;
pub use model::{BaseModel, ModelDomain, TrainableModel};
pub use taxonomy::{DataType, ExplanationType, Task, TransparencyType, UsageMode};
