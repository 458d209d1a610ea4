#![deny(missing_docs)]
//! Astro JSX core: slot normalization, prop merging, and the component protocol.

/// Component candidates, the result marker, and element descriptors.
pub mod component;
/// Component and overlay error types.
pub mod error;
/// Property bags and argument merging.
pub mod props;
/// Slot name normalization.
pub mod slot;

pub use component::{
    AstroJsx, Candidate, Component, ComponentOrigin, ComponentOutput, FnComponent, JsxElement, jsx,
};
pub use error::{ComponentError, FormattedComponentError, MDX_RUNTIME_HINT};
pub use props::{CHILDREN_PROP, Props, Slots, merge_props};
pub use slot::{DEFAULT_SLOT, normalize_slots, slot_name};
