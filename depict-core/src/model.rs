//! Model capability traits consumed by interpreters.

use crate::taxonomy::{DataType, Task};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The (task, data type) pair a model is defined on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelDomain {
    pub task: Task,
    pub data_type: DataType,
}

impl ModelDomain {
    pub fn new(task: Task, data_type: DataType) -> Self {
        Self { task, data_type }
    }

    /// Every domain in the closed taxonomy, task-major.
    pub fn all() -> impl Iterator<Item = ModelDomain> {
        Task::ALL.into_iter().flat_map(|task| {
            DataType::ALL
                .into_iter()
                .map(move |data_type| ModelDomain::new(task, data_type))
        })
    }
}

impl fmt::Display for ModelDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.task, self.data_type)
    }
}

/// Uniform prediction interface every explained model exposes.
pub trait BaseModel {
    type Input: ?Sized;
    type Output;
    type Error;

    /// Domain the model was built for.
    fn domain(&self) -> ModelDomain;

    fn predict(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;

    fn task(&self) -> Task {
        self.domain().task
    }

    fn data_type(&self) -> DataType {
        self.domain().data_type
    }
}

/// A model that can be trained from data.
pub trait TrainableModel: BaseModel {
    type TrainingData;

    fn fit(&mut self, data: Self::TrainingData) -> Result<(), Self::Error>;
}
