use thiserror::Error;

/// Errors raised while folding an external road table into a graph
#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("city name must not be empty")]
    EmptyCityName,

    #[error("road {from} -> {to} connects a city to itself")]
    SelfLoop { from: String, to: String },

    #[error("road {from} -> {to} has negative distance {distance}")]
    NegativeDistance {
        from: String,
        to: String,
        distance: f64,
    },

    #[error("road {from} -> {to} has non-finite distance {distance}")]
    NonFiniteDistance {
        from: String,
        to: String,
        distance: f64,
    },
}

pub type NetworkResult<T> = std::result::Result<T, NetworkError>;
