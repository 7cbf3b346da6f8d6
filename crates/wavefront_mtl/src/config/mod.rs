//! Configuration system
//!
//! Parser settings are plain serde structs that can be loaded from TOML or RON files.

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;

        // Try different formats
        if path.ends_with(".toml") {
            Self::from_toml_str(&contents)
        } else if path.ends_with(".ron") {
            Self::from_ron_str(&contents)
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Parse configuration from TOML text
    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Parse configuration from RON text
    fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Values parsed but are not usable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Characters separating tokens within a line
pub const DEFAULT_HORIZONTAL_DELIMITERS: &str = " \t";

/// Characters separating lines
pub const DEFAULT_LINE_DELIMITERS: &str = "\n\r";

/// # Parser Configuration
///
/// Delimiter sets used by the tokenizer. Each string is a set of characters, any of which
/// ends the current token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Delimiters between tokens of one directive
    pub horizontal_delimiters: String,
    /// Delimiters between directives
    pub line_delimiters: String,
}

impl ParserConfig {
    /// Create a configuration with the standard delimiter sets
    pub fn new() -> Self {
        Self {
            horizontal_delimiters: DEFAULT_HORIZONTAL_DELIMITERS.to_string(),
            line_delimiters: DEFAULT_LINE_DELIMITERS.to_string(),
        }
    }

    /// Set the intra-line delimiter set
    pub fn with_horizontal_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.horizontal_delimiters = delimiters.into();
        self
    }

    /// Set the line delimiter set
    pub fn with_line_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.line_delimiters = delimiters.into();
        self
    }

    /// Validate the configuration
    ///
    /// Both sets must be non-empty and must not share a character.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizontal_delimiters.is_empty() {
            return Err(ConfigError::Invalid(
                "horizontal delimiter set cannot be empty".to_string(),
            ));
        }

        if self.line_delimiters.is_empty() {
            return Err(ConfigError::Invalid(
                "line delimiter set cannot be empty".to_string(),
            ));
        }

        if let Some(shared) = self
            .horizontal_delimiters
            .chars()
            .find(|c| self.line_delimiters.contains(*c))
        {
            return Err(ConfigError::Invalid(format!(
                "delimiter {shared:?} appears in both the horizontal and line sets"
            )));
        }

        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for ParserConfig {}
