use thiserror::Error;

/// Malformed road insertion request. Rejected before the graph is touched.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum InputError {
    #[error("Please enter valid numbers for all fields ({field} is {value:?})")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Please enter both locations")]
    MissingLocation,

    #[error("Road must have exactly 5 comma-separated fields (from, to, distance, time, risk), got {0}")]
    FieldCount(usize),
}

/// Error returned at the planner boundary.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum PlannerError {
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("Start or destination not found in the graph: [{0}]")]
    UnknownNode(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
