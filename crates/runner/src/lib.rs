//! One-shot task runner: fetch a task, solve it, deliver the outcome.

pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod selector;

pub use dispatcher::{DispatchState, RunReport, TaskDispatcher};
pub use error::{ProcessingError, RunError};
pub use generator::{GenerateError, HttpTaskSource, TaskSource};
pub use selector::{select_problem, SelectorError};
