use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinCalcError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Too many loans: {count} supplied, at most 3 can be compared")]
    ScenarioLimit { count: usize },
}
