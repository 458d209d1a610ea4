//! Seams between this crate, the markup serializer, and the host pipeline.

use astro_jsx_core::{Candidate, ComponentError, JsxElement, Props, Slots};
use async_trait::async_trait;
use serde::Serialize;

use crate::error::RendererError;

/// Serializes element descriptors into HTML.
///
/// Implemented by the host; this crate only builds the descriptor and hands it
/// over together with the host's render state.
#[async_trait]
pub trait JsxRenderer: Send + Sync {
    /// Render state owned by the host for the current page.
    type Context: Send + Sync;

    /// Renders `vnode` to a markup string.
    async fn render_jsx(
        &self,
        ctx: &Self::Context,
        vnode: JsxElement,
    ) -> Result<String, ComponentError>;
}

/// Markup produced for a single component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticMarkup {
    /// Serialized HTML.
    pub html: String,
}

/// A renderer the host pipeline can ask to classify and render components.
#[async_trait]
pub trait SsrRenderer<C: Sync>: Send + Sync {
    /// Renderer identifier.
    fn name(&self) -> &str;

    /// Returns true if this renderer handles `candidate`.
    async fn check(
        &self,
        candidate: &Candidate,
        props: &Props,
        slots: &Slots,
    ) -> Result<bool, RendererError>;

    /// Renders a candidate previously accepted by [`SsrRenderer::check`].
    async fn render_to_static_markup(
        &self,
        ctx: &C,
        candidate: &Candidate,
        props: &Props,
        slots: &Slots,
    ) -> Result<StaticMarkup, RendererError>;
}
