//! Stage pipeline plumbing
//!
//! Pre-processing is a short chain of stages: the grammar turns text into a
//! [`SourceDocument`](crate::latex::grammar::SourceDocument), then comment completion
//! turns that into the final tree. Each stage implements [`Runnable`]; a [`Transform`]
//! chains stages whose types line up and remembers their names, so a failure can say
//! which stage it came from and each stage runs inside its own tracing span.
//!
//! ```rust,ignore
//! let pipeline = Transform::named("grammar", parse)   // String -> SourceDocument
//!     .then(CompleteComments::new());                 // SourceDocument -> Node
//! assert_eq!(pipeline.stages(), ["grammar", "complete-comments"]);
//! ```

use thiserror::Error;
use tracing::debug_span;

/// Error that can occur while running a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("{0}")]
    Error(String),
    #[error("Stage '{stage}' failed: {message}")]
    StageFailed { stage: String, message: String },
}

impl TransformError {
    /// Attribute `error` to the stage called `stage`
    pub fn stage(stage: &str, error: impl std::fmt::Display) -> Self {
        TransformError::StageFailed {
            stage: stage.to_string(),
            message: error.to_string(),
        }
    }
}

impl From<String> for TransformError {
    fn from(message: String) -> Self {
        TransformError::Error(message)
    }
}

impl From<&str> for TransformError {
    fn from(message: &str) -> Self {
        TransformError::Error(message.to_string())
    }
}

/// One step of a pipeline
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;

    /// Name used in spans, in [`Transform::stages`] and in [`TransformError::StageFailed`]
    fn name(&self) -> &'static str;
}

type StageFn<I, O> = Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>;

/// A chain of stages taking `I` to `O`
pub struct Transform<I, O> {
    run_fn: StageFn<I, O>,
    stages: Vec<&'static str>,
}

impl<I, O> Transform<I, O> {
    /// Start a pipeline with a closure as its first stage.
    ///
    /// Plain errors returned by the closure are reported as failures of stage `name`;
    /// errors that already name a stage pass through unchanged.
    pub fn named<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(move |input| {
                let _span = debug_span!("stage", stage = name).entered();
                f(input).map_err(|error| attribute(name, error))
            }),
            stages: vec![name],
        }
    }

    /// Append `stage`, whose input must be this pipeline's output
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let name = stage.name();
        let previous = self.run_fn;
        let mut stages = self.stages;
        stages.push(name);
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = previous(input)?;
                let _span = debug_span!("stage", stage = name).entered();
                stage.run(intermediate).map_err(|error| attribute(name, error))
            }),
            stages,
        }
    }

    /// Stage names in execution order
    pub fn stages(&self) -> &[&'static str] {
        &self.stages
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }

    /// A nested pipeline is listed under the name of its first stage; its own stages
    /// already attribute their failures
    fn name(&self) -> &'static str {
        self.stages.first().copied().unwrap_or("pipeline")
    }
}

fn attribute(name: &str, error: TransformError) -> TransformError {
    match error {
        TransformError::Error(message) => TransformError::StageFailed {
            stage: name.to_string(),
            message,
        },
        named @ TransformError::StageFailed { .. } => named,
    }
}
