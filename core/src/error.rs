use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    // A non-empty grid was required but width or height is zero
    #[error("invalid dimensions {width}x{height}: a non-empty grid is required")]
    InvalidDimensions { width: usize, height: usize },

    // Climate grids must have the same shape as the elevation grid
    #[error("{layer} grid is {}x{}, expected {}x{}", found.0, found.1, expected.0, expected.1)]
    DimensionMismatch {
        layer: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    // Rejected before any generation work starts
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, TerrainError>;

#[cfg(test)]
mod tests {
    use super::TerrainError;

    #[test]
    fn mismatch_message_names_layer_and_shapes() {
        let err = TerrainError::DimensionMismatch {
            layer: "temperature",
            expected: (10, 10),
            found: (10, 11),
        };
        assert_eq!(err.to_string(), "temperature grid is 10x11, expected 10x10");
    }

    #[test]
    fn invalid_parameter_message() {
        let err = TerrainError::InvalidParameter {
            name: "octaves",
            reason: "must be at least 1".into(),
        };
        assert_eq!(err.to_string(), "invalid parameter `octaves`: must be at least 1");
    }
}
