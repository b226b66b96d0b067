use std::fmt;
use thiserror::Error;

/// The integer on the input an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    VertexCount,
    EdgeCount,
    /// Endpoint `side` (0 or 1) of the edge at position `edge`.
    Endpoint { edge: usize, side: usize },
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::VertexCount => write!(f, "vertex count"),
            Field::EdgeCount => write!(f, "edge count"),
            Field::Endpoint { edge, side: 0 } => write!(f, "first endpoint of edge {}", edge),
            Field::Endpoint { edge, .. } => write!(f, "second endpoint of edge {}", edge),
        }
    }
}

/// Reasons a graph description on the input is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input ended while reading {what}")]
    MissingToken { what: Field },

    #[error("expected an integer for {what}, found `{token}`")]
    Malformed { what: Field, token: String },

    #[error("{what} must not be negative, found {value}")]
    Negative { what: Field, value: i64 },

    #[error("edge {index} ({u}, {v}) has an endpoint outside 0..{n}")]
    VertexOutOfRange { index: usize, u: i64, v: i64, n: usize },

    #[error("failed to read input: {0}")]
    Io(String),
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_name_the_offending_integer() {
        assert_eq!(Field::VertexCount.to_string(), "vertex count");
        assert_eq!(Field::Endpoint { edge: 4, side: 0 }.to_string(), "first endpoint of edge 4");
        let err = InputError::MissingToken { what: Field::Endpoint { edge: 1, side: 1 } };
        assert_eq!(err.to_string(), "input ended while reading second endpoint of edge 1");
    }
}
