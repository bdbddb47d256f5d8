use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core.
///
/// Degenerate geometry and unrecognized integration methods are surfaced
/// as explicit errors instead of silently producing non-finite values or
/// no-op steps.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or scenario parameter (non-positive mass, bad time step, ...).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Two bodies occupy the same position, the pairwise force is singular.
    #[error("degenerate geometry: bodies {i} and {j} are coincident")]
    DegenerateGeometry { i: usize, j: usize },

    /// Integration method name not recognized at construction time.
    #[error("unknown integration method: {0:?} (expected \"Euler\", \"Verlet\" or \"VerletREL\")")]
    UnknownMethod(String),

    /// Propagated I/O errors from the trajectory writer.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("mass must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("mass"));

        let e = Error::DegenerateGeometry { i: 0, j: 3 };
        assert!(format!("{e}").contains("0"));
        assert!(format!("{e}").contains("3"));
    }
}
