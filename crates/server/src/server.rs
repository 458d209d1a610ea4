//! Detection and static rendering of Astro JSX components.

use astro_jsx_core::{
    Candidate, ComponentError, FormattedComponentError, Props, Slots, jsx, merge_props,
    normalize_slots,
};
use async_trait::async_trait;

use crate::config::RendererConfig;
use crate::error::RendererError;
use crate::renderer::{JsxRenderer, SsrRenderer, StaticMarkup};

/// Decides whether `candidate` is an Astro JSX component by invoking it.
///
/// Non-invocable candidates are rejected without being called. Otherwise the
/// candidate is called with `props`, the normalized slots and `children`, and
/// accepted only if its output carries the [`astro_jsx_core::AstroJsx`] marker.
///
/// A failing MDX component is reported as a [`FormattedComponentError`]; any
/// other failure means the candidate is not ours and yields `Ok(false)`.
pub async fn check(
    candidate: &Candidate,
    props: &Props,
    slots: &Slots,
) -> Result<bool, FormattedComponentError> {
    if !candidate.is_invocable() {
        return Ok(false);
    }

    let (children, named) = normalize_slots(slots);
    let args = merge_props(props, &named, children);

    match candidate.invoke(args).await {
        None => Ok(false),
        Some(Ok(output)) => Ok(output.carries_marker()),
        Some(Err(cause)) if candidate.is_mdx_component() => {
            Err(FormattedComponentError::mdx_runtime(cause))
        }
        Some(Err(cause)) => {
            log::debug!(
                "`{}` failed while probing, treating it as a foreign component: {}",
                candidate.display_name(),
                cause
            );
            Ok(false)
        }
    }
}

/// Renders an already accepted component to HTML through `renderer`.
///
/// Errors from the component or the renderer are returned as they are.
pub async fn render_to_static_markup<R>(
    renderer: &R,
    ctx: &R::Context,
    candidate: &Candidate,
    props: &Props,
    slots: &Slots,
) -> Result<StaticMarkup, ComponentError>
where
    R: JsxRenderer + ?Sized,
{
    let (children, named) = normalize_slots(slots);
    let vnode = jsx(candidate.clone(), merge_props(props, &named, children));
    let html = renderer.render_jsx(ctx, vnode).await?;
    Ok(StaticMarkup { html })
}

/// The JSX renderer as registered with the host pipeline.
pub struct JsxServerRenderer<R> {
    renderer: R,
    config: RendererConfig,
}

impl<R: JsxRenderer> JsxServerRenderer<R> {
    /// Creates a renderer with the default `astro:jsx` registration.
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, RendererConfig::default())
    }

    /// Creates a renderer with a custom registration.
    pub fn with_config(renderer: R, config: RendererConfig) -> Self {
        Self { renderer, config }
    }

    /// Registration settings.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }
}

#[async_trait]
impl<R: JsxRenderer> SsrRenderer<R::Context> for JsxServerRenderer<R> {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn check(
        &self,
        candidate: &Candidate,
        props: &Props,
        slots: &Slots,
    ) -> Result<bool, RendererError> {
        Ok(check(candidate, props, slots).await?)
    }

    async fn render_to_static_markup(
        &self,
        ctx: &R::Context,
        candidate: &Candidate,
        props: &Props,
        slots: &Slots,
    ) -> Result<StaticMarkup, RendererError> {
        Ok(render_to_static_markup(&self.renderer, ctx, candidate, props, slots).await?)
    }
}
