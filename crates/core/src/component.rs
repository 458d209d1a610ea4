//! The JSX component protocol: candidates, components and the result marker.
//!
//! A value belongs to the protocol when invoking it yields a [`JsxElement`],
//! which can only be built through [`jsx`] and therefore always carries the
//! [`AstroJsx`] marker.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ComponentError;
use crate::props::Props;

/// Where a component was authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentOrigin {
    /// Written directly as code.
    #[default]
    Code,
    /// Compiled from an MDX document.
    Mdx,
}

/// A callable component.
#[async_trait]
pub trait Component: Send + Sync {
    /// Invokes the component with its merged props.
    async fn call(&self, props: Props) -> Result<ComponentOutput, ComponentError>;

    /// Name used in diagnostics.
    fn name(&self) -> &str {
        "Anonymous"
    }

    /// Authoring format of the component.
    fn origin(&self) -> ComponentOrigin {
        ComponentOrigin::Code
    }
}

/// Adapts an async closure into a [`Component`].
pub struct FnComponent<F> {
    name: String,
    origin: ComponentOrigin,
    func: F,
}

impl<F> FnComponent<F> {
    /// Wraps `func` as a code component called `name`.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            origin: ComponentOrigin::Code,
            func,
        }
    }

    /// Sets the authoring format.
    pub fn with_origin(mut self, origin: ComponentOrigin) -> Self {
        self.origin = origin;
        self
    }
}

#[async_trait]
impl<F, Fut> Component for FnComponent<F>
where
    F: Fn(Props) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ComponentOutput, ComponentError>> + Send + 'static,
{
    async fn call(&self, props: Props) -> Result<ComponentOutput, ComponentError> {
        (self.func)(props).await
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn origin(&self) -> ComponentOrigin {
        self.origin
    }
}

/// A value a renderer is asked to classify and possibly render.
#[derive(Clone)]
pub enum Candidate {
    /// Something that can be invoked.
    Component(Arc<dyn Component>),
    /// Any other value; never invoked.
    Value(Value),
}

impl Candidate {
    /// Wraps a component.
    pub fn component(component: impl Component + 'static) -> Self {
        Candidate::Component(Arc::new(component))
    }

    /// Returns the component if the candidate is invocable.
    pub fn as_component(&self) -> Option<&Arc<dyn Component>> {
        match self {
            Candidate::Component(component) => Some(component),
            Candidate::Value(_) => None,
        }
    }

    /// Returns true if the candidate can be invoked.
    pub fn is_invocable(&self) -> bool {
        matches!(self, Candidate::Component(_))
    }

    /// Returns true if the candidate is a component compiled from MDX.
    pub fn is_mdx_component(&self) -> bool {
        self.as_component()
            .is_some_and(|component| component.origin() == ComponentOrigin::Mdx)
    }

    /// Name used in logs and errors.
    pub fn display_name(&self) -> String {
        match self {
            Candidate::Component(component) => component.name().to_string(),
            Candidate::Value(Value::String(text)) => text.clone(),
            Candidate::Value(value) => value.to_string(),
        }
    }

    /// Invokes the candidate, or returns `None` when it is not invocable.
    pub async fn invoke(&self, props: Props) -> Option<Result<ComponentOutput, ComponentError>> {
        match self {
            Candidate::Component(component) => Some(component.call(props).await),
            Candidate::Value(_) => None,
        }
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Component(component) => f
                .debug_struct("Component")
                .field("name", &component.name())
                .field("origin", &component.origin())
                .finish(),
            Candidate::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        Candidate::Value(value)
    }
}

/// Marker carried by every element produced through [`jsx`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstroJsx {
    _private: (),
}

/// Element descriptor: a candidate paired with the props it will be called with.
#[derive(Debug, Clone)]
pub struct JsxElement {
    component: Candidate,
    props: Props,
    marker: AstroJsx,
}

/// Builds an element descriptor for `component` with `props`.
pub fn jsx(component: Candidate, props: Props) -> JsxElement {
    JsxElement {
        component,
        props,
        marker: AstroJsx { _private: () },
    }
}

impl JsxElement {
    /// The wrapped candidate.
    pub fn component(&self) -> &Candidate {
        &self.component
    }

    /// Props the candidate is called with.
    pub fn props(&self) -> &Props {
        &self.props
    }

    /// The protocol marker.
    pub fn marker(&self) -> AstroJsx {
        self.marker
    }

    /// Invokes the wrapped candidate with a copy of the element's props.
    pub async fn invoke(&self) -> Option<Result<ComponentOutput, ComponentError>> {
        self.component.invoke(self.props.clone()).await
    }
}

/// What invoking a component produced.
#[derive(Debug, Clone)]
pub enum ComponentOutput {
    /// An element built with [`jsx`].
    Jsx(JsxElement),
    /// Any other value.
    Value(Value),
}

impl ComponentOutput {
    /// The protocol marker, if the output carries one.
    pub fn marker(&self) -> Option<AstroJsx> {
        match self {
            ComponentOutput::Jsx(element) => Some(element.marker()),
            ComponentOutput::Value(_) => None,
        }
    }

    /// Returns true if the output belongs to the JSX protocol.
    pub fn carries_marker(&self) -> bool {
        self.marker().is_some()
    }
}

impl From<JsxElement> for ComponentOutput {
    fn from(element: JsxElement) -> Self {
        ComponentOutput::Jsx(element)
    }
}

impl From<Value> for ComponentOutput {
    fn from(value: Value) -> Self {
        ComponentOutput::Value(value)
    }
}
