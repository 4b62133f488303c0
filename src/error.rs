/*
 * Error Module
 *
 * Errors raised when the herd is handed lifecycle parameters it cannot use.
 * The simulation itself never fails.
 */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("birth survival rate must be a probability in [0, 1], got {0}")]
    BirthSurvivalRate(f32),
    #[error("tick survival rate must be a probability in [0, 1], got {0}")]
    TickSurvivalRate(f32),
}
