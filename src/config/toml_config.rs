use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub processor: ProcessorSettings,
    #[serde(default)]
    pub io: IoSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessorSettings {
    /// Author substrings that cause a book to be excluded.
    #[serde(default)]
    pub excluded_author_names: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub normalize: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoSettings {
    #[serde(default = "default_input_path")]
    pub input_path: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for IoSettings {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

fn default_input_path() -> String {
    "books.json".to_string()
}

fn default_output_path() -> String {
    "books_output.csv".to_string()
}

impl TomlConfig {
    /// Loads configuration from a TOML file, substituting `${VAR}` placeholders first.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EtlError::ConfigError {
                message: format!("Config file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders from the environment. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(&mut self, cli: &crate::config::CliConfig) {
        if let Some(input) = &cli.input {
            self.io.input_path = input.clone();
        }
        if let Some(output) = &cli.output {
            self.io.output_path = output.clone();
        }
        if !cli.exclude_author.is_empty() {
            self.processor
                .excluded_author_names
                .extend(cli.exclude_author.iter().cloned());
            tracing::info!(
                "🔧 Excluded authors extended from command line: {:?}",
                cli.exclude_author
            );
        }
        if cli.case_sensitive {
            self.processor.case_sensitive = true;
        }
        if cli.normalize {
            self.processor.normalize = true;
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.io.input_path
    }

    fn output_path(&self) -> &str {
        &self.io.output_path
    }

    fn excluded_author_names(&self) -> &[String] {
        &self.processor.excluded_author_names
    }

    fn author_match_case_sensitive(&self) -> bool {
        self.processor.case_sensitive
    }

    fn normalize(&self) -> bool {
        self.processor.normalize
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("io.input_path", &self.io.input_path)?;
        validate_file_extension("io.input_path", &self.io.input_path, &["json"])?;

        validate_path("io.output_path", &self.io.output_path)?;
        validate_file_extension("io.output_path", &self.io.output_path, &["csv"])?;

        for name in &self.processor.excluded_author_names {
            validate_non_empty_string("processor.excluded_author_names", name)?;
        }

        Ok(())
    }
}
