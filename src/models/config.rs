use std::path::{Path, PathBuf};

use hicolor_codec::{DitherPolicy, FormatVariant};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "HICOLOR_CONFIG";

/// Defaults applied when a command-line flag is absent.
///
/// ```yaml
/// variant: 15        # 5, 6, 15, 16, "15-bit", "16-bit"
/// dither: bayer      # none, bayer, pattern, floyd-steinberg
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Target format variant for `encode` and `quantize`
    #[serde(deserialize_with = "parse_variant")]
    pub variant: FormatVariant,

    /// Dither policy for `encode` and `quantize`
    #[serde(deserialize_with = "parse_dither")]
    pub dither: DitherPolicy,
}

impl AppConfig {
    /// Load the config file named on the command line or in `HICOLOR_CONFIG`.
    ///
    /// With neither set the defaults are used. A file that was named but
    /// cannot be read or parsed is an error.
    pub fn load(cli_path: Option<&Path>) -> Result<Self, AppError> {
        match resolve_path(cli_path) {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        tracing::info!(
            path = %path.display(),
            variant = %config.variant,
            dither = %config.dither,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields the
    /// defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

fn resolve_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    cli_path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
}

/// Accept the variant as either a YAML number or a string.
fn parse_variant<'de, D>(deserializer: D) -> Result<FormatVariant, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s,
        other => {
            return Err(D::Error::custom(format!(
                "invalid variant {other:?}, expected 15 or 16"
            )))
        }
    };
    text.parse()
        .map_err(|_| D::Error::custom(format!("unknown variant {text:?}, expected 15 or 16")))
}

fn parse_dither<'de, D>(deserializer: D) -> Result<DitherPolicy, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.variant, FormatVariant::Variant16);
        assert_eq!(config.dither, DitherPolicy::None);
    }

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_yaml("variant: \"15\"\ndither: bayer\n").unwrap();
        assert_eq!(config.variant, FormatVariant::Variant15);
        assert_eq!(config.dither, DitherPolicy::Bayer);
    }

    #[test]
    fn test_parse_numeric_variant() {
        let config = AppConfig::from_yaml("variant: 5").unwrap();
        assert_eq!(config.variant, FormatVariant::Variant15);
        assert_eq!(config.dither, DitherPolicy::None);

        let config = AppConfig::from_yaml("variant: 16-bit").unwrap();
        assert_eq!(config.variant, FormatVariant::Variant16);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_yaml("dither: floyd-steinberg").unwrap();
        assert_eq!(config.variant, FormatVariant::Variant16);
        assert_eq!(config.dither, DitherPolicy::FloydSteinberg);
    }

    #[test]
    fn test_empty_config() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_yaml("variant: 24").unwrap_err();
        assert!(err.to_string().contains("unknown variant"), "{err}");

        let err = AppConfig::from_yaml("dither: sparkle").unwrap_err();
        assert!(err.to_string().contains("sparkle"), "{err}");

        assert!(AppConfig::from_yaml("variant: [15]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "variant: 15").unwrap();
        writeln!(file, "dither: pattern").unwrap();

        let config = AppConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.variant, FormatVariant::Variant15);
        assert_eq!(config.dither, DitherPolicy::Pattern);
    }

    #[test]
    fn test_load_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            AppConfig::load_from_file(&missing),
            Err(AppError::Config(_))
        ));

        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "dither: [").unwrap();
        assert!(matches!(
            AppConfig::load_from_file(&broken),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_explicit_path_wins() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dither: bayer").unwrap();
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.dither, DitherPolicy::Bayer);
    }
}
