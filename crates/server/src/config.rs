//! Renderer registration settings.

use serde::{Deserialize, Serialize};

/// How a renderer is registered with the host pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RendererConfig {
    /// Renderer identifier (e.g., "astro:jsx").
    pub name: String,
    /// Module the host loads to reach `check` and `renderToStaticMarkup`.
    pub server_entrypoint: String,
    /// Optional module used for hydration on the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_entrypoint: Option<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            name: "astro:jsx".to_string(),
            server_entrypoint: "astro/jsx/server.js".to_string(),
            client_entrypoint: None,
        }
    }
}

impl RendererConfig {
    /// Parses a JSON config. Missing fields take their defaults.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_astro_jsx() {
        let config = RendererConfig::default();
        assert_eq!(config.name, "astro:jsx");
        assert_eq!(config.server_entrypoint, "astro/jsx/server.js");
        assert!(config.client_entrypoint.is_none());
    }

    #[test]
    fn parses_camel_case_with_defaults() {
        let config =
            RendererConfig::from_json(r#"{ "name": "my:jsx", "clientEntrypoint": "my/client.js" }"#)
                .unwrap();
        assert_eq!(config.name, "my:jsx");
        assert_eq!(config.server_entrypoint, "astro/jsx/server.js");
        assert_eq!(config.client_entrypoint.as_deref(), Some("my/client.js"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(RendererConfig::from_json("{ name: ").is_err());
    }

    #[test]
    fn skips_absent_client_entrypoint() {
        let json = serde_json::to_value(RendererConfig::default()).unwrap();
        assert!(json.get("clientEntrypoint").is_none());
        assert_eq!(json["serverEntrypoint"], "astro/jsx/server.js");
    }
}
