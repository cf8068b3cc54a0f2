//! Error types for layout configuration and input.
//!
//! The simulation itself never fails: coincident nodes, dangling edges and
//! unresolved grid conflicts all degrade gracefully. Errors are only raised
//! up front, before any node is moved.

/// Errors returned before a layout run starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The grid size must be finite and strictly positive.
    #[error("grid size must be finite and greater than zero, got {0}")]
    InvalidGridSize(f64),

    /// A numeric option is outside its accepted range.
    #[error("invalid value for `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Two nodes share the same identifier.
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(String),

    /// A node starts at a NaN or infinite coordinate.
    #[error("node {0} has a non-finite starting position")]
    NonFinitePosition(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LayoutError::InvalidGridSize(0.0).to_string(),
            "grid size must be finite and greater than zero, got 0"
        );
        assert_eq!(
            LayoutError::InvalidParameter {
                name: "coolingFactor",
                value: -1.0
            }
            .to_string(),
            "invalid value for `coolingFactor`: -1"
        );
        assert_eq!(
            LayoutError::DuplicateNodeId("Ns.Order".into()).to_string(),
            "duplicate node id: Ns.Order"
        );
        assert_eq!(
            LayoutError::NonFinitePosition("Ns.Line".into()).to_string(),
            "node Ns.Line has a non-finite starting position"
        );
    }
}
