use serde::Serialize;
use thiserror::Error;

/// Hint attached to runtime failures of MDX components.
pub const MDX_RUNTIME_HINT: &str =
    "This issue often occurs when your MDX component encounters runtime errors.";

/// Failure raised while invoking a component or rendering its output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name}: {message}")]
pub struct ComponentError {
    /// Error kind, e.g. `TypeError`.
    pub name: String,
    /// Human readable message.
    pub message: String,
    /// Captured stack trace, if the producer recorded one.
    pub stack: Option<String>,
}

impl ComponentError {
    /// Create a generic `Error` with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_name("Error", message)
    }

    /// Create an error with an explicit kind
    pub fn with_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    /// Attach a stack trace
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// A component failure enriched for display in a developer error overlay.
///
/// Raised by the prober when an MDX component fails at runtime. Carries the
/// original error's fields untouched plus a fixed hint.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct FormattedComponentError {
    /// Original error message.
    pub message: String,
    /// Original error kind.
    pub name: String,
    /// Overlay title; the original error kind.
    pub title: String,
    /// Original stack trace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    /// Suggestion shown next to the error.
    pub hint: String,
}

impl FormattedComponentError {
    /// Wraps a runtime failure of an MDX component.
    pub fn mdx_runtime(cause: ComponentError) -> Self {
        Self {
            message: cause.message,
            title: cause.name.clone(),
            name: cause.name,
            stack: cause.stack,
            hint: MDX_RUNTIME_HINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_error_display() {
        let err = ComponentError::with_name("TypeError", "x is undefined");
        assert_eq!(err.to_string(), "TypeError: x is undefined");
        assert_eq!(ComponentError::new("boom").name, "Error");
    }

    #[test]
    fn mdx_runtime_keeps_original_fields() {
        let cause = ComponentError::with_name("ReferenceError", "foo is not defined")
            .with_stack("at Content (post.mdx:3:1)");
        let formatted = FormattedComponentError::mdx_runtime(cause);
        assert_eq!(formatted.message, "foo is not defined");
        assert_eq!(formatted.name, "ReferenceError");
        assert_eq!(formatted.title, "ReferenceError");
        assert_eq!(formatted.stack.as_deref(), Some("at Content (post.mdx:3:1)"));
        assert_eq!(formatted.hint, MDX_RUNTIME_HINT);
        assert_eq!(formatted.to_string(), "foo is not defined");
    }

    #[test]
    fn serializes_for_overlay() {
        let formatted = FormattedComponentError::mdx_runtime(ComponentError::new("boom"));
        let json = serde_json::to_value(&formatted).unwrap();
        assert_eq!(json["hint"], MDX_RUNTIME_HINT);
        assert!(json.get("stack").is_none());
    }
}
