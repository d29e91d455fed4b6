use thiserror::Error;

pub type Result<T> = std::result::Result<T, RdvzError>;

#[derive(Debug, Error)]
pub enum RdvzError {
    #[error("Wrong number of arguments (expected {expected})")]
    ArgumentCount { expected: usize, got: usize },

    #[error("Invalid number for {name}: {text}")]
    InvalidNumber { name: &'static str, text: String },

    #[error("Invalid value of {0}")]
    InvalidParameter(String),

    #[error(
        "Could not find a solution for the initial velocity of the chaser \
         (det(B) = {determinant:e})"
    )]
    SingularSystem { determinant: f64 },

    #[error("Degenerate orbit: angular rate is zero")]
    DegenerateOrbit,
}
