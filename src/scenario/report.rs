use super::checks::CheckFailure;
use super::Step;

#[derive(Debug)]
pub struct StepOutcome {
    pub step: Step,
    pub failures: Vec<CheckFailure>,
}

impl StepOutcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// All seven outcomes, in execution order.
#[derive(Debug)]
pub struct SuiteReport {
    pub outcomes: Vec<StepOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(StepOutcome::passed)
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }

    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.outcomes.iter().find(|o| o.step == step)
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for outcome in &self.outcomes {
            if outcome.passed() {
                writeln!(f, "PASS  {}", outcome.step.name())?;
            } else {
                writeln!(f, "FAIL  {}", outcome.step.name())?;
                for failure in &outcome.failures {
                    writeln!(f, "      - {}", failure)?;
                }
            }
        }
        write!(
            f,
            "{} of {} steps passed",
            self.outcomes.len() - self.failed_count(),
            self.outcomes.len()
        )
    }
}
