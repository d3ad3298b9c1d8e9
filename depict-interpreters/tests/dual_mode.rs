//! Construction and fit-dispatch behavior of dual-mode interpreters.

use std::any::Any;
use std::sync::Arc;

use depict_core::{CoreError, DataType, ModelDomain, Task};
use depict_interpreters::{
    AnteHocInterpreter, BaseModel, Interpreter, InterpreterError, InterpreterSetup, SetupBuilder,
    TrainableModel, UsageMode, trainable_interpreter,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

struct DummyModel {
    domain: ModelDomain,
}

impl DummyModel {
    fn shared(task: Task, data_type: DataType) -> Arc<Self> {
        Arc::new(Self {
            domain: ModelDomain::new(task, data_type),
        })
    }
}

impl BaseModel for DummyModel {
    type Input = i64;
    type Output = i64;
    type Error = CoreError;

    fn domain(&self) -> ModelDomain {
        self.domain
    }

    fn predict(&self, sample: &i64) -> Result<i64, CoreError> {
        Ok(*sample)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    AnteHoc,
    PostHoc,
}

/// Records which training branch ran and with which arguments.
struct RecordingInterpreter {
    setup: InterpreterSetup<DummyModel>,
    calls: Vec<(Branch, (i64, i64))>,
}

impl RecordingInterpreter {
    fn new(setup: InterpreterSetup<DummyModel>) -> Self {
        Self {
            setup,
            calls: Vec::new(),
        }
    }
}

impl Interpreter for RecordingInterpreter {
    type Input = i64;
    type Explanation = i64;
    type Error = CoreError;

    fn interpret(&self, sample: &i64) -> Result<i64, CoreError> {
        Ok(*sample)
    }
}

// An ante-hoc interpreter is itself a model.
impl BaseModel for RecordingInterpreter {
    type Input = i64;
    type Output = i64;
    type Error = CoreError;

    fn domain(&self) -> ModelDomain {
        self.setup.domain()
    }

    fn predict(&self, sample: &i64) -> Result<i64, CoreError> {
        self.interpret(sample)
    }
}

trainable_interpreter!(RecordingInterpreter, (i64, i64));

impl AnteHocInterpreter for RecordingInterpreter {
    type Wrapped = DummyModel;

    fn setup(&self) -> &InterpreterSetup<DummyModel> {
        &self.setup
    }

    fn fit_ante_hoc(&mut self, args: (i64, i64)) -> Result<(), CoreError> {
        self.calls.push((Branch::AnteHoc, args));
        Ok(())
    }

    fn fit_post_hoc(&mut self, args: (i64, i64)) -> Result<(), CoreError> {
        self.calls.push((Branch::PostHoc, args));
        Ok(())
    }
}

fn train<M: TrainableModel>(model: &mut M, data: M::TrainingData) -> Result<(), M::Error> {
    model.fit(data)
}

fn describe<I: AnteHocInterpreter>(interpreter: &I) -> (UsageMode, Task, DataType) {
    (interpreter.usage_mode(), interpreter.task(), interpreter.data_type())
}

#[test]
fn ante_hoc_construction_reflects_every_domain() {
    for domain in ModelDomain::all() {
        let setup = SetupBuilder::<DummyModel>::new(UsageMode::AnteHoc)
            .task(domain.task)
            .data_type(domain.data_type)
            .build()
            .unwrap();
        let interpreter = RecordingInterpreter::new(setup);
        assert_eq!(interpreter.usage_mode(), UsageMode::AnteHoc);
        assert_eq!(interpreter.task(), domain.task);
        assert_eq!(interpreter.data_type(), domain.data_type);
        assert_eq!(interpreter.domain(), domain);
    }
}

#[test]
fn ante_hoc_construction_requires_task_and_data_type() {
    let cases = [
        (None, None),
        (Some(Task::Binary), None),
        (None, Some(DataType::Text)),
    ];
    for (task, data_type) in cases {
        let mut builder = SetupBuilder::<DummyModel>::new(UsageMode::AnteHoc);
        if let Some(task) = task {
            builder = builder.task(task);
        }
        if let Some(data_type) = data_type {
            builder = builder.data_type(data_type);
        }
        let err = builder.build().unwrap_err();
        assert!(
            matches!(err, InterpreterError::MissingArgument { mode: UsageMode::AnteHoc, .. }),
            "unexpected error for {task:?}/{data_type:?}: {err}"
        );
    }
}

#[test]
fn post_hoc_construction_inherits_model_domain() {
    for domain in ModelDomain::all() {
        let model = DummyModel::shared(domain.task, domain.data_type);
        let setup = InterpreterSetup::builder(UsageMode::PostHoc)
            .model(Arc::clone(&model))
            .build()
            .unwrap();
        let interpreter = RecordingInterpreter::new(setup);

        let wrapped = interpreter.wrapped_model().unwrap();
        assert!(Arc::ptr_eq(wrapped, &model));
        assert_eq!(wrapped.task(), domain.task);
        assert_eq!(wrapped.data_type(), domain.data_type);
        assert_eq!(interpreter.domain(), domain);
    }
}

#[test]
fn post_hoc_construction_requires_model() {
    let err = SetupBuilder::<DummyModel>::new(UsageMode::PostHoc)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        InterpreterError::MissingArgument {
            mode: UsageMode::PostHoc,
            argument: "model",
        }
    );
}

#[test]
fn post_hoc_construction_rejects_non_model() {
    struct RawWeights(#[allow(dead_code)] Vec<f32>);

    let raw: Arc<dyn Any + Send + Sync> = Arc::new(RawWeights(vec![0.1, 0.2]));
    let err = SetupBuilder::<DummyModel>::new(UsageMode::PostHoc)
        .erased_model(raw)
        .build()
        .unwrap_err();
    assert!(matches!(err, InterpreterError::CapabilityMismatch { .. }));
}

#[test]
fn interpreters_can_be_wrapped_post_hoc() {
    let inner = Arc::new(RecordingInterpreter::new(InterpreterSetup::ante_hoc(
        Task::Multiclass,
        DataType::Image,
    )));
    let outer = InterpreterSetup::post_hoc(Arc::clone(&inner));
    assert_eq!(outer.domain(), ModelDomain::new(Task::Multiclass, DataType::Image));
    assert_eq!(outer.wrapped_model().unwrap().predict(&7).unwrap(), 7);
}

#[test]
fn generic_training_goes_through_dispatch() {
    let mut ante =
        RecordingInterpreter::new(InterpreterSetup::ante_hoc(Task::Regression, DataType::Tabular));
    train(&mut ante, (4, 2)).unwrap();
    assert_eq!(ante.calls, vec![(Branch::AnteHoc, (4, 2))]);
    assert_eq!(
        describe(&ante),
        (UsageMode::AnteHoc, Task::Regression, DataType::Tabular)
    );

    let mut post = RecordingInterpreter::new(InterpreterSetup::post_hoc(DummyModel::shared(
        Task::Binary,
        DataType::Image,
    )));
    train(&mut post, (-1, 9)).unwrap();
    assert_eq!(post.calls, vec![(Branch::PostHoc, (-1, 9))]);
    assert_eq!(
        describe(&post),
        (UsageMode::PostHoc, Task::Binary, DataType::Image)
    );
}

fn any_domain() -> impl Strategy<Value = ModelDomain> {
    (
        prop::sample::select(Task::ALL.to_vec()),
        prop::sample::select(DataType::ALL.to_vec()),
    )
        .prop_map(|(task, data_type)| ModelDomain::new(task, data_type))
}

proptest! {
    #[test]
    fn ante_hoc_fit_forwards_exact_args(domain in any_domain(), a in any::<i64>(), b in any::<i64>()) {
        let mut interpreter = RecordingInterpreter::new(
            InterpreterSetup::ante_hoc(domain.task, domain.data_type),
        );
        interpreter.fit((a, b)).unwrap();
        prop_assert_eq!(interpreter.calls, vec![(Branch::AnteHoc, (a, b))]);
    }

    #[test]
    fn post_hoc_fit_forwards_exact_args(domain in any_domain(), a in any::<i64>(), b in any::<i64>()) {
        let model = DummyModel::shared(domain.task, domain.data_type);
        let mut interpreter = RecordingInterpreter::new(InterpreterSetup::post_hoc(model));
        interpreter.fit((a, b)).unwrap();
        prop_assert_eq!(interpreter.calls, vec![(Branch::PostHoc, (a, b))]);
    }

    #[test]
    fn mode_never_changes_across_fits(post_hoc in any::<bool>(), rounds in 1usize..8) {
        let setup = if post_hoc {
            InterpreterSetup::post_hoc(DummyModel::shared(Task::Binary, DataType::Text))
        } else {
            InterpreterSetup::ante_hoc(Task::Binary, DataType::Text)
        };
        let mut interpreter = RecordingInterpreter::new(setup);
        let mode = interpreter.usage_mode();
        for i in 0..rounds {
            interpreter.fit((i as i64, 0)).unwrap();
            prop_assert_eq!(interpreter.usage_mode(), mode);
        }
        let expected = if post_hoc { Branch::PostHoc } else { Branch::AnteHoc };
        prop_assert!(interpreter.calls.iter().all(|(branch, _)| *branch == expected));
        prop_assert_eq!(interpreter.calls.len(), rounds);
    }
}
