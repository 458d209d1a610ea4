//! Picks the renderer for a component and renders it.

use astro_jsx_core::{Candidate, Props, Slots};
use serde::Serialize;

use crate::error::RendererError;
use crate::renderer::SsrRenderer;

/// Output of [`render_component`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedComponent {
    /// Name of the renderer that produced the markup.
    pub renderer: String,
    /// Serialized HTML.
    pub html: String,
}

/// Renders `candidate` with the first renderer whose `check` accepts it.
///
/// Renderers are tried in order. An error from a `check` stops the search.
pub async fn render_component<C: Sync>(
    renderers: &[Box<dyn SsrRenderer<C>>],
    ctx: &C,
    candidate: &Candidate,
    props: &Props,
    slots: &Slots,
) -> Result<RenderedComponent, RendererError> {
    for renderer in renderers {
        if !renderer.check(candidate, props, slots).await? {
            continue;
        }

        log::debug!(
            "Rendering `{}` with {}",
            candidate.display_name(),
            renderer.name()
        );
        let markup = renderer
            .render_to_static_markup(ctx, candidate, props, slots)
            .await?;
        return Ok(RenderedComponent {
            renderer: renderer.name().to_string(),
            html: markup.html,
        });
    }

    let component = candidate.display_name();
    log::warn!("No renderer accepted `{}`", component);
    Err(RendererError::NoMatchingRenderer { component })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::StaticMarkup;
    use astro_jsx_core::ComponentError;
    use async_trait::async_trait;
    use serde_json::json;

    /// Accepts value candidates equal to `tag` and renders them as an empty element.
    struct TagRenderer {
        tag: &'static str,
    }

    #[async_trait]
    impl SsrRenderer<()> for TagRenderer {
        fn name(&self) -> &str {
            self.tag
        }

        async fn check(
            &self,
            candidate: &Candidate,
            _props: &Props,
            _slots: &Slots,
        ) -> Result<bool, RendererError> {
            Ok(matches!(candidate, Candidate::Value(v) if v == self.tag))
        }

        async fn render_to_static_markup(
            &self,
            _ctx: &(),
            _candidate: &Candidate,
            _props: &Props,
            _slots: &Slots,
        ) -> Result<StaticMarkup, RendererError> {
            Ok(StaticMarkup {
                html: format!("<{0}></{0}>", self.tag),
            })
        }
    }

    /// Rejects everything by failing.
    struct Failing;

    #[async_trait]
    impl SsrRenderer<()> for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn check(
            &self,
            _candidate: &Candidate,
            _props: &Props,
            _slots: &Slots,
        ) -> Result<bool, RendererError> {
            Err(ComponentError::new("check exploded").into())
        }

        async fn render_to_static_markup(
            &self,
            _ctx: &(),
            _candidate: &Candidate,
            _props: &Props,
            _slots: &Slots,
        ) -> Result<StaticMarkup, RendererError> {
            unreachable!("never accepted")
        }
    }

    fn renderers() -> Vec<Box<dyn SsrRenderer<()>>> {
        vec![
            Box::new(TagRenderer { tag: "section" }),
            Box::new(TagRenderer { tag: "aside" }),
        ]
    }

    #[tokio::test]
    async fn first_accepting_renderer_wins() {
        let rendered = render_component(
            &renderers(),
            &(),
            &Candidate::from(json!("aside")),
            &Props::new(),
            &Slots::new(),
        )
        .await
        .unwrap();
        assert_eq!(rendered.renderer, "aside");
        assert_eq!(rendered.html, "<aside></aside>");
    }

    #[tokio::test]
    async fn no_match_is_an_error() {
        let err = render_component(
            &renderers(),
            &(),
            &Candidate::from(json!("nav")),
            &Props::new(),
            &Slots::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(
            err,
            RendererError::NoMatchingRenderer {
                component: "nav".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "No matching renderer found for component `nav`"
        );
    }

    #[tokio::test]
    async fn check_errors_stop_the_search() {
        let mut list: Vec<Box<dyn SsrRenderer<()>>> = vec![Box::new(Failing)];
        list.extend(renderers());
        let err = render_component(
            &list,
            &(),
            &Candidate::from(json!("section")),
            &Props::new(),
            &Slots::new(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Error: check exploded");
    }
}
