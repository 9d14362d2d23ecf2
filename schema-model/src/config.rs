use serde::Deserialize;

/// Options for [generate_model_with](fn.generate_model_with.html).
///
/// ```rust
/// # use schema_model::GeneratorConfig;
/// let config: GeneratorConfig = serde_json::from_str(r#"{ "customScalars": ["Email"] }"#).unwrap();
/// assert!(config.is_custom_scalar("Email"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Scalar type names defined by the schema author. Fields of these types
    /// are kept as attributes instead of being dropped.
    pub custom_scalars: Vec<String>,
}

impl GeneratorConfig {
    pub fn with_custom_scalar(mut self, name: impl Into<String>) -> Self {
        self.custom_scalars.push(name.into());
        self
    }

    pub fn is_custom_scalar(&self, name: &str) -> bool {
        self.custom_scalars.iter().any(|scalar| scalar == name)
    }
}
