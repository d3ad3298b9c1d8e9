//! Mode-bound interpreter state.
//!
//! An [`InterpreterSetup`] is what a dual-mode interpreter is constructed
//! from. It is either ante-hoc, carrying the caller's (task, data type), or
//! post-hoc, carrying a shared reference to the wrapped model and that
//! model's own domain. Once built it cannot change.
//!
//! The typed factories [`InterpreterSetup::ante_hoc`] and
//! [`InterpreterSetup::post_hoc`] cannot fail. [`SetupBuilder`] accepts the
//! inputs as optionals (for instance from configuration) and validates them
//! on [`SetupBuilder::build`].

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use depict_core::{BaseModel, DataType, InterpreterDefaults, ModelDomain, Task, UsageMode};

use crate::error::InterpreterError;

enum Binding<M> {
    AnteHoc,
    PostHoc(Arc<M>),
}

/// Immutable usage mode and domain of an interpreter.
pub struct InterpreterSetup<M> {
    binding: Binding<M>,
    domain: ModelDomain,
}

impl<M> InterpreterSetup<M> {
    /// The interpreter is trained from scratch on the given domain.
    pub fn ante_hoc(task: Task, data_type: DataType) -> Self {
        let domain = ModelDomain::new(task, data_type);
        tracing::debug!(mode = %UsageMode::AnteHoc, %domain, "Interpreter setup created");
        Self {
            binding: Binding::AnteHoc,
            domain,
        }
    }

    /// Start a validating builder for the given mode.
    pub fn builder(usage_mode: UsageMode) -> SetupBuilder<M> {
        SetupBuilder::new(usage_mode)
    }

    pub fn usage_mode(&self) -> UsageMode {
        match self.binding {
            Binding::AnteHoc => UsageMode::AnteHoc,
            Binding::PostHoc(_) => UsageMode::PostHoc,
        }
    }

    pub fn domain(&self) -> ModelDomain {
        self.domain
    }

    pub fn task(&self) -> Task {
        self.domain.task
    }

    pub fn data_type(&self) -> DataType {
        self.domain.data_type
    }

    /// The explained model, present only in post-hoc mode.
    pub fn wrapped_model(&self) -> Option<&Arc<M>> {
        match &self.binding {
            Binding::AnteHoc => None,
            Binding::PostHoc(model) => Some(model),
        }
    }
}

impl<M: BaseModel> InterpreterSetup<M> {
    /// The interpreter explains `model` and inherits its domain.
    pub fn post_hoc(model: Arc<M>) -> Self {
        let domain = model.domain();
        tracing::debug!(mode = %UsageMode::PostHoc, %domain, "Interpreter setup created");
        Self {
            binding: Binding::PostHoc(model),
            domain,
        }
    }
}

impl<M> Clone for InterpreterSetup<M> {
    fn clone(&self) -> Self {
        let binding = match &self.binding {
            Binding::AnteHoc => Binding::AnteHoc,
            Binding::PostHoc(model) => Binding::PostHoc(Arc::clone(model)),
        };
        Self {
            binding,
            domain: self.domain,
        }
    }
}

impl<M> fmt::Debug for InterpreterSetup<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterpreterSetup")
            .field("usage_mode", &self.usage_mode())
            .field("domain", &self.domain)
            .field("wraps_model", &self.wrapped_model().is_some())
            .finish()
    }
}

enum ModelSlot<M> {
    Typed(Arc<M>),
    /// An erased model that failed to downcast to `M`.
    Mismatch,
}

/// Collects optional interpreter inputs and checks them against the usage mode.
pub struct SetupBuilder<M> {
    usage_mode: Option<UsageMode>,
    task: Option<Task>,
    data_type: Option<DataType>,
    model: Option<ModelSlot<M>>,
}

impl<M> SetupBuilder<M> {
    pub fn new(usage_mode: UsageMode) -> Self {
        Self {
            usage_mode: Some(usage_mode),
            task: None,
            data_type: None,
            model: None,
        }
    }

    /// Seed the builder from configured defaults. The usage mode may still be absent.
    pub fn from_defaults(defaults: &InterpreterDefaults) -> Self {
        Self {
            usage_mode: defaults.usage_mode,
            task: defaults.task,
            data_type: defaults.data_type,
            model: None,
        }
    }

    pub fn usage_mode(mut self, usage_mode: UsageMode) -> Self {
        self.usage_mode = Some(usage_mode);
        self
    }

    pub fn task(mut self, task: Task) -> Self {
        self.task = Some(task);
        self
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }

    pub fn model(mut self, model: Arc<M>) -> Self {
        self.model = Some(ModelSlot::Typed(model));
        self
    }
}

impl<M: Send + Sync + 'static> SetupBuilder<M> {
    /// Supply a model whose concrete type is only known at runtime, e.g. one
    /// pulled from a registry. A model of any other type than `M` makes
    /// [`build`](Self::build) fail with a capability mismatch.
    pub fn erased_model(mut self, model: Arc<dyn Any + Send + Sync>) -> Self {
        self.model = Some(match model.downcast::<M>() {
            Ok(model) => ModelSlot::Typed(model),
            Err(_) => ModelSlot::Mismatch,
        });
        self
    }
}

impl<M: BaseModel> SetupBuilder<M> {
    /// Validate the collected inputs.
    ///
    /// Ante-hoc needs a task and a data type; post-hoc needs a model of type
    /// `M`. Inputs the mode does not use are ignored.
    pub fn build(self) -> Result<InterpreterSetup<M>, InterpreterError> {
        let result = self.validate();
        if let Err(error) = &result {
            tracing::warn!(%error, "Interpreter setup rejected");
        }
        result
    }

    fn validate(self) -> Result<InterpreterSetup<M>, InterpreterError> {
        let mode = self.usage_mode.ok_or(InterpreterError::MissingUsageMode)?;
        match mode {
            UsageMode::AnteHoc => {
                if self.model.is_some() {
                    tracing::debug!(%mode, "Ignoring model supplied to ante-hoc interpreter");
                }
                let task = self
                    .task
                    .ok_or_else(|| InterpreterError::missing(mode, "task_type"))?;
                let data_type = self
                    .data_type
                    .ok_or_else(|| InterpreterError::missing(mode, "data_type"))?;
                Ok(InterpreterSetup::ante_hoc(task, data_type))
            }
            UsageMode::PostHoc => {
                if self.task.is_some() || self.data_type.is_some() {
                    tracing::debug!(%mode, "Ignoring task/data type, post-hoc interpreters inherit the model's domain");
                }
                match self.model {
                    None => Err(InterpreterError::missing(mode, "model")),
                    Some(ModelSlot::Mismatch) => Err(InterpreterError::CapabilityMismatch {
                        expected: std::any::type_name::<M>(),
                    }),
                    Some(ModelSlot::Typed(model)) => Ok(InterpreterSetup::post_hoc(model)),
                }
            }
        }
    }
}
