//! Closed taxonomies shared by models and interpreters.
//!
//! [`Task`] and [`DataType`] describe the domain a model is defined on and
//! are treated as opaque tags by the interpreter layer. [`TransparencyType`]
//! and [`ExplanationType`] classify interpreters; they are descriptive
//! metadata and never enforced. [`UsageMode`] selects how a dual-mode
//! interpreter is trained and is fixed once the interpreter is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Learning task a model solves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    Binary,
    Multiclass,
    Regression,
}

impl Task {
    pub const ALL: [Task; 3] = [Task::Binary, Task::Multiclass, Task::Regression];

    /// Binary and multiclass tasks are both classification.
    pub fn is_classification(&self) -> bool {
        matches!(self, Task::Binary | Task::Multiclass)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Task::Binary => write!(f, "BINARY"),
            Task::Multiclass => write!(f, "MULTICLASS"),
            Task::Regression => write!(f, "REGRESSION"),
        }
    }
}

/// Kind of data a model consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Tabular,
    Text,
    Image,
}

impl DataType {
    pub const ALL: [DataType; 3] = [DataType::Tabular, DataType::Text, DataType::Image];
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Tabular => write!(f, "TABULAR"),
            DataType::Text => write!(f, "TEXT"),
            DataType::Image => write!(f, "IMAGE"),
        }
    }
}

/// Whether the internals of the explained model are visible to the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransparencyType {
    BlackBox,
    WhiteBox,
}

impl TransparencyType {
    pub const ALL: [TransparencyType; 2] = [TransparencyType::BlackBox, TransparencyType::WhiteBox];
}

impl fmt::Display for TransparencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransparencyType::BlackBox => write!(f, "BLACK_BOX"),
            TransparencyType::WhiteBox => write!(f, "WHITE_BOX"),
        }
    }
}

/// Scope of an explanation: a single prediction or the model as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationType {
    Local,
    Global,
}

impl ExplanationType {
    pub const ALL: [ExplanationType; 2] = [ExplanationType::Local, ExplanationType::Global];
}

impl fmt::Display for ExplanationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplanationType::Local => write!(f, "LOCAL"),
            ExplanationType::Global => write!(f, "GLOBAL"),
        }
    }
}

/// How a dual-mode interpreter is used.
///
/// An ante-hoc method is trained from scratch as a model of its own; the
/// same method can also be fitted post hoc around an already-trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageMode {
    AnteHoc,
    PostHoc,
}

impl UsageMode {
    pub const ALL: [UsageMode; 2] = [UsageMode::AnteHoc, UsageMode::PostHoc];
}

impl fmt::Display for UsageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageMode::AnteHoc => write!(f, "ANTE_HOC"),
            UsageMode::PostHoc => write!(f, "POST_HOC"),
        }
    }
}
