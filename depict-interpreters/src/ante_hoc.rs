//! Dual-mode interpreters: trained as models of their own, or fitted around one.

use std::sync::Arc;

use depict_core::{BaseModel, TrainableModel, UsageMode};

use crate::interpreter::Interpreter;
use crate::setup::InterpreterSetup;

/// An interpretable method that can be used ante hoc or post hoc.
///
/// An ante-hoc interpreter is itself a trainable model, so the trait builds
/// on [`TrainableModel`]. Implementers store the [`InterpreterSetup`] they
/// were constructed with, report its domain from [`BaseModel::domain`] and
/// provide both training branches. Their [`TrainableModel::fit`] forwards to
/// [`dispatch_fit`](Self::dispatch_fit), which [`trainable_interpreter!`]
/// generates.
pub trait AnteHocInterpreter: Interpreter + TrainableModel {
    /// Type of the model explained in post-hoc mode.
    type Wrapped: BaseModel;

    fn setup(&self) -> &InterpreterSetup<Self::Wrapped>;

    /// Train the interpreter as a standalone model.
    fn fit_ante_hoc(&mut self, data: Self::TrainingData) -> Result<(), <Self as BaseModel>::Error>;

    /// Train the explanation machinery around the already-fitted wrapped model.
    fn fit_post_hoc(&mut self, data: Self::TrainingData) -> Result<(), <Self as BaseModel>::Error>;

    /// Run the training branch of the setup's usage mode. The data and the
    /// branch's error pass through untouched.
    fn dispatch_fit(&mut self, data: Self::TrainingData) -> Result<(), <Self as BaseModel>::Error> {
        let setup = self.setup();
        let mode = setup.usage_mode();
        let domain = setup.domain();
        debug_assert_eq!(self.domain(), domain, "model domain differs from interpreter setup");
        tracing::debug!(%mode, %domain, "Dispatching interpreter fit");
        match mode {
            UsageMode::AnteHoc => self.fit_ante_hoc(data),
            UsageMode::PostHoc => self.fit_post_hoc(data),
        }
    }

    fn usage_mode(&self) -> UsageMode {
        self.setup().usage_mode()
    }

    fn wrapped_model(&self) -> Option<&Arc<Self::Wrapped>> {
        self.setup().wrapped_model()
    }
}

/// Implement [`TrainableModel`] for an [`AnteHocInterpreter`] so that `fit`
/// goes through [`AnteHocInterpreter::dispatch_fit`].
///
/// ```ignore
/// trainable_interpreter!(RuleList, (Vec<Vec<f64>>, Vec<u8>));
/// ```
#[macro_export]
macro_rules! trainable_interpreter {
    ($name:ty, $data:ty) => {
        impl $crate::TrainableModel for $name {
            type TrainingData = $data;

            fn fit(
                &mut self,
                data: $data,
            ) -> Result<(), <Self as $crate::BaseModel>::Error> {
                $crate::AnteHocInterpreter::dispatch_fit(self, data)
            }
        }
    };
}
