//! # depict-interpreters — explaining machine-learning models
//!
//! Two contracts live here:
//!
//! - [`Interpreter`]: anything that produces an explanation for some input.
//! - [`AnteHocInterpreter`]: an interpreter that is also a [`TrainableModel`]
//!   and can be used in two ways, fixed when it is built. Ante hoc, it is trained from
//!   scratch as an interpretable model on a caller-given (task, data type).
//!   Post hoc, it wraps an already-trained [`BaseModel`] and inherits that
//!   model's domain.
//!
//! Construction goes through [`InterpreterSetup`], either via its typed
//! factories or via [`SetupBuilder`] when the inputs are optional.
//! [`trainable_interpreter!`] wires `TrainableModel::fit` to the mode dispatch.

pub mod ante_hoc;
pub mod error;
pub mod interpreter;
pub mod setup;

// Re-exports
pub use ante_hoc::AnteHocInterpreter;
pub use error::InterpreterError;
pub use interpreter::{Interpreter, InterpreterProfile};
pub use setup::{InterpreterSetup, SetupBuilder};

pub use depict_core::{BaseModel, ExplanationType, TrainableModel, TransparencyType, UsageMode};
