//! The interpreter contract and descriptive interpreter metadata.

use depict_core::{DataType, ExplanationType, ModelDomain, Task, TransparencyType};
use serde::{Deserialize, Serialize};

/// Anything that can explain a model.
///
/// The input shape is method-specific: a single sample for local
/// explanations, `()` or a whole dataset for global ones. The explanation
/// artifact and the error type are chosen by the implementer.
pub trait Interpreter {
    type Input: ?Sized;
    type Explanation;
    type Error;

    fn interpret(&self, input: &Self::Input) -> Result<Self::Explanation, Self::Error>;
}

/// Descriptive metadata for an interpreter. Never enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterpreterProfile {
    pub name: String,
    pub transparency: TransparencyType,
    pub explanation: ExplanationType,
    /// Empty means any task.
    #[serde(default)]
    pub supported_tasks: Vec<Task>,
    /// Empty means any data type.
    #[serde(default)]
    pub supported_data_types: Vec<DataType>,
}

impl InterpreterProfile {
    pub fn new(
        name: impl Into<String>,
        transparency: TransparencyType,
        explanation: ExplanationType,
    ) -> Self {
        Self {
            name: name.into(),
            transparency,
            explanation,
            supported_tasks: Vec::new(),
            supported_data_types: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.supported_tasks.extend(tasks);
        self
    }

    pub fn with_data_types(mut self, data_types: impl IntoIterator<Item = DataType>) -> Self {
        self.supported_data_types.extend(data_types);
        self
    }

    /// Whether the interpreter declares support for the given domain.
    pub fn supports(&self, domain: ModelDomain) -> bool {
        let task_ok =
            self.supported_tasks.is_empty() || self.supported_tasks.contains(&domain.task);
        let data_ok = self.supported_data_types.is_empty()
            || self.supported_data_types.contains(&domain.data_type);
        task_ok && data_ok
    }
}
