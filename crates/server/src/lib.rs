#![deny(missing_docs)]
//! Astro JSX server renderer: component detection, static markup, and renderer selection.

/// Renderer registration settings.
pub mod config;
/// Renderer error types.
pub mod error;
/// Renderer selection for the host pipeline.
pub mod pipeline;
/// Collaborator and pipeline traits.
pub mod renderer;
/// `check` and `render_to_static_markup` for JSX components.
pub mod server;

pub use config::RendererConfig;
pub use error::RendererError;
pub use pipeline::{RenderedComponent, render_component};
pub use renderer::{JsxRenderer, SsrRenderer, StaticMarkup};
pub use server::{JsxServerRenderer, check, render_to_static_markup};
