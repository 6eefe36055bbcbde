use crate::expression::ShapeSet;
use crate::solver::constants::DEFAULT_TARGET;

/// Configuration for expression search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub target: i64,
    pub shapes: ShapeSet,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            shapes: ShapeSet::Classic,
        }
    }
}
