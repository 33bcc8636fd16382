//! Error type for terrain generation.

use thiserror::Error;

/// Errors reported synchronously before any generation work starts.
///
/// Out-of-range neighbor lookups during displacement are *not* errors;
/// they are resolved by the toroidal wrap rule in
/// [`crate::heightfield::Heightfield::wrapped_height`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    /// Grid resolution below the 2x2-vertex minimum.
    #[error("grid size must be at least 1, got {n}")]
    InvalidGridSize { n: usize },

    /// One of the bounding rectangle coordinates is NaN or infinite.
    #[error("bounding rectangle coordinates must be finite")]
    NonFiniteBounds,

    /// A scalar generation parameter is NaN or infinite.
    #[error("parameter `{0}` must be finite")]
    NonFiniteParameter(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TerrainError::InvalidGridSize { n: 0 }.to_string(),
            "grid size must be at least 1, got 0"
        );
        assert_eq!(
            TerrainError::NonFiniteParameter("roughness").to_string(),
            "parameter `roughness` must be finite"
        );
    }
}
