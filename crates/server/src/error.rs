use astro_jsx_core::{ComponentError, FormattedComponentError};
use thiserror::Error;

/// Errors surfaced by renderers to the host pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RendererError {
    /// An MDX component failed while being probed.
    #[error(transparent)]
    Formatted(#[from] FormattedComponentError),
    /// A component or the render collaborator failed while rendering.
    #[error(transparent)]
    Component(#[from] ComponentError),
    /// No registered renderer accepted the component.
    #[error("No matching renderer found for component `{component}`")]
    NoMatchingRenderer {
        /// Display name of the rejected candidate.
        component: String,
    },
}
