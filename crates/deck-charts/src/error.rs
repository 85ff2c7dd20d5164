use thiserror::Error;

/// Reasons a render pass ends in the placeholder state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// No record decided between scalar and vector values
    #[error("Invalid data structure.")]
    ShapeUndetermined,
    /// No numeric timestamps
    #[error("No valid X data.")]
    NoValidXDomain,
    /// No numeric values for the detected layout
    #[error("No valid Y values to plot.")]
    NoValidYDomain,
}
