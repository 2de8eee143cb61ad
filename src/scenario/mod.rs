mod checks;
mod context;
mod report;
mod steps;

pub use checks::CheckFailure;
pub use context::ScenarioContext;
pub use report::{StepOutcome, SuiteReport};

use crate::client::FoodApiClient;

/// The seven cases of the scenario, named after what they exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateFood,
    EditFoodName,
    ListAllFoods,
    DeleteFood,
    EditDeletedFood,
    EditUnknownId,
    DeleteDeletedFood,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::CreateFood => "create food",
            Step::EditFoodName => "edit food name",
            Step::ListAllFoods => "list all foods",
            Step::DeleteFood => "delete food",
            Step::EditDeletedFood => "edit deleted food",
            Step::EditUnknownId => "edit unknown id",
            Step::DeleteDeletedFood => "delete deleted food",
        }
    }
}

/// Execution order is part of the contract: later steps assert on state that
/// earlier steps left behind on the remote service.
pub const STEP_ORDER: [Step; 7] = [
    Step::CreateFood,
    Step::EditFoodName,
    Step::ListAllFoods,
    Step::DeleteFood,
    Step::EditDeletedFood,
    Step::EditUnknownId,
    Step::DeleteDeletedFood,
];

/// Runs a single step against the shared client, reading and mutating the
/// shared context.
pub async fn run_step(
    step: Step,
    client: &FoodApiClient,
    context: &mut ScenarioContext,
) -> StepOutcome {
    let failures = steps::execute(step, client, context).await;
    StepOutcome { step, failures }
}

/// Runs every step in [`STEP_ORDER`] against the shared client.
///
/// A failed step is recorded and the remaining steps still run; steps that
/// depend on an identifier nothing captured report that distinctly instead of
/// firing a request with a hole in the path.
#[tracing::instrument(name = "Running the food scenario", skip(client))]
pub async fn run(client: &FoodApiClient) -> SuiteReport {
    let mut context = ScenarioContext::default();
    let mut outcomes = Vec::with_capacity(STEP_ORDER.len());
    for step in STEP_ORDER {
        let outcome = run_step(step, client, &mut context).await;
        if outcome.passed() {
            tracing::info!(step = step.name(), "step passed");
        } else {
            tracing::warn!(
                step = step.name(),
                failures = outcome.failures.len(),
                "step failed"
            );
        }
        outcomes.push(outcome);
    }
    SuiteReport { outcomes }
}
