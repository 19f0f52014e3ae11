//! Drives a single run: generate a task, solve it, submit the outcome.
//!
//! ```text
//! AwaitingTask -> Solving -> AwaitingSubmission -> Delivered
//!       \            \               \
//!        `------------`---------------`-----> Failed
//! ```
//!
//! Only submission is retried (inside [`ResilientSubmitter`]). Generation
//! and solving failures end the run immediately.

use followgraph_compute::ComputeEngine;
use followgraph_core::config::RegistrationConfig;
use followgraph_core::{GenerateRequest, Problem, TaskDescriptor, TaskOutcome};
use followgraph_notify::{DeliveryReport, ResilientSubmitter};
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::{ProcessingError, RunError};
use crate::generator::TaskSource;
use crate::selector::select_problem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    AwaitingTask,
    Solving,
    AwaitingSubmission,
    Delivered,
    Failed,
}

impl DispatchState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DispatchState::Delivered | DispatchState::Failed)
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: Uuid,
    pub problem: Problem,
    pub outcome: TaskOutcome,
    pub delivery: DeliveryReport,
}

pub struct TaskDispatcher {
    registration: RegistrationConfig,
    source: Box<dyn TaskSource>,
    submitter: ResilientSubmitter,
    state: DispatchState,
}

impl TaskDispatcher {
    pub fn new(
        registration: RegistrationConfig,
        source: Box<dyn TaskSource>,
        submitter: ResilientSubmitter,
    ) -> Self {
        Self {
            registration,
            source,
            submitter,
            state: DispatchState::AwaitingTask,
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Execute the run once. Every error is terminal.
    pub async fn run(&mut self) -> Result<RunReport, RunError> {
        let run_id = Uuid::new_v4();
        let span = info_span!("run", %run_id, reg_no = %self.registration.reg_no);

        let result = self.run_steps(run_id).instrument(span.clone()).await;

        let _guard = span.enter();
        match &result {
            Ok(_) => self.transition(DispatchState::Delivered),
            Err(e) => {
                error!(error = %e, "run failed");
                self.transition(DispatchState::Failed);
            }
        }
        result
    }

    async fn run_steps(&mut self, run_id: Uuid) -> Result<RunReport, RunError> {
        let request = GenerateRequest {
            name: self.registration.name.clone(),
            reg_no: self.registration.reg_no.clone(),
            email: self.registration.email.clone(),
        };
        let descriptor = self
            .source
            .generate(&request)
            .await
            .map_err(RunError::Generation)?;

        self.transition(DispatchState::Solving);
        let (problem, outcome) = self.solve(&descriptor)?;

        self.transition(DispatchState::AwaitingSubmission);
        let delivery = self
            .submitter
            .submit(&descriptor.webhook, &descriptor.access_token, &outcome)
            .await?;

        Ok(RunReport {
            run_id,
            problem,
            outcome,
            delivery,
        })
    }

    fn solve(&self, descriptor: &TaskDescriptor) -> Result<(Problem, TaskOutcome), ProcessingError> {
        let problem = select_problem(&self.registration.reg_no)?;
        info!(%problem, "problem selected");

        let outcome = ComputeEngine::solve(problem, &descriptor.data)?;
        Ok((
            problem,
            TaskOutcome {
                reg_no: self.registration.reg_no.clone(),
                outcome,
            },
        ))
    }

    fn transition(&mut self, next: DispatchState) {
        info!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
    }
}
