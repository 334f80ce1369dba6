//! Generator configuration.
//!
//! TOML-based configuration for the Gemini driver. The configuration
//! system supports:
//! - Bundled defaults (include_str! from adreel.toml)
//! - User overrides (./adreel.toml or ~/.config/adreel/adreel.toml)
//! - Automatic merging with user values taking precedence

use adreel_error::{AdreelResult, ConfigError, ConfigErrorKind};
use config::{Config, File, FileFormat};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings for the Gemini generation driver.
///
/// Field defaults match the bundled `adreel.toml`; the builder starts from
/// those defaults so tests and callers can override single fields.
///
/// # Examples
///
/// ```
/// use adreel_client::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .poll_interval_secs(1u64)
///     .build()
///     .unwrap();
/// assert_eq!(*config.poll_interval_secs(), 1);
/// assert_eq!(config.text_model(), "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), default)]
pub struct GeneratorConfig {
    /// Base URL of the Generative Language API
    base_url: String,
    /// Model for entity analysis and storyboard expansion
    text_model: String,
    /// Model for scene preview stills
    image_model: String,
    /// Model for video synthesis
    video_model: String,
    /// Seconds between video operation status polls
    poll_interval_secs: u64,
    /// Placeholder still substituted when preview synthesis fails
    placeholder_url: String,
}

impl GeneratorConfig {
    /// Creates a new builder for `GeneratorConfig`.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            video_model: "veo-3.1-fast-generate-preview".to_string(),
            poll_interval_secs: 5,
            placeholder_url: "https://picsum.photos/800/450?grayscale".to_string(),
        }
    }
}

/// Top-level Adreel configuration file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct AdreelConfig {
    /// Generation driver settings
    generator: GeneratorConfig,
}

impl AdreelConfig {
    /// Load configuration with layered precedence.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a source cannot be read or the merged
    /// result does not deserialize.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use adreel_client::AdreelConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = AdreelConfig::load()?;
    /// println!("video model: {}", config.generator().video_model());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> AdreelResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../adreel.toml");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // Add user config from home directory (optional)
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/adreel/adreel.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        // Add user config from current directory (optional, highest precedence)
        builder = builder.add_source(File::with_name("adreel").required(false));

        // Build and deserialize
        builder
            .build()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Load(format!(
                    "Failed to build configuration: {e}"
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                ConfigError::new(ConfigErrorKind::Parse(format!(
                    "Failed to parse configuration: {e}"
                )))
                .into()
            })
    }

    /// Consume the configuration, yielding the generator settings.
    pub fn into_generator(self) -> GeneratorConfig {
        self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_parse() {
        const DEFAULT_CONFIG: &str = include_str!("../../../adreel.toml");
        let config: AdreelConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.generator(), &GeneratorConfig::default());
    }

    #[test]
    fn later_sources_take_precedence() {
        const DEFAULT_CONFIG: &str = include_str!("../../../adreel.toml");
        let config: AdreelConfig = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(
                "[generator]\npoll_interval_secs = 1",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(*config.generator().poll_interval_secs(), 1);
        assert_eq!(config.generator().text_model(), "gemini-2.5-flash");
    }

    #[test]
    fn builder_overrides_single_field() {
        let config = GeneratorConfig::builder()
            .placeholder_url("https://example.com/fallback.png")
            .build()
            .unwrap();
        assert_eq!(config.placeholder_url(), "https://example.com/fallback.png");
        assert_eq!(config.video_model(), "veo-3.1-fast-generate-preview");
    }
}
