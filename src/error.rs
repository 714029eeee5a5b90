use thiserror::Error;

/// Errors returned by the policy core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyError {
    /// A parameter value for which the computation is undefined,
    /// e.g. a Minkowski order `p <= 0`.
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The softmax normalizer came out zero, infinite or NaN.
    #[error("softmax normalization degenerated (sum of weights = {sum})")]
    NumericDegeneracy { sum: f64 },
}

pub type Result<T> = std::result::Result<T, PolicyError>;
