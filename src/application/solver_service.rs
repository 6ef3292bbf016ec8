use std::sync::Arc;
use std::time::Instant;
use crate::common::{ApplicationError, ApplicationResult};
use crate::domains::{DynLogger, PuzzleSource};
use super::catalog::{find_problem, Solution};

pub struct SolverService {
    source: Arc<dyn PuzzleSource>,
    logger: DynLogger,
}

impl SolverService {
    pub fn new(source: Arc<dyn PuzzleSource>, logger: DynLogger) -> Self {
        Self { source, logger }
    }

    /// Load the named puzzle from the configured source and solve it.
    pub fn solve_named(&self, problem: &str, input_name: &str) -> ApplicationResult<Solution> {
        let input = self.source.load_puzzle(input_name).map_err(|e| {
            self.logger.error(&format!("failed to load '{}': {}", input_name, e));
            ApplicationError::from(e)
        })?;
        self.solve_text(problem, &input)
    }

    pub fn solve_text(&self, problem: &str, input: &str) -> ApplicationResult<Solution> {
        let entry = find_problem(problem).ok_or_else(|| {
            self.logger.warn(&format!("unknown problem '{}'", problem));
            ApplicationError::UnknownProblem(problem.to_string())
        })?;

        let started = Instant::now();
        match (entry.solve)(input) {
            Ok(solution) => {
                self.logger.info(&format!(
                    "{} solved in {:?}: {}",
                    entry.id,
                    started.elapsed(),
                    solution.answer.lines().next().unwrap_or("")
                ));
                Ok(solution)
            }
            Err(e) => {
                self.logger.error(&format!("{} failed: {}", entry.id, e));
                Err(e.into())
            }
        }
    }
}
