use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::{Locale, LocaleDisplay};

/// Main site configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    /// Recipe name; sources are `{name}_en.txt` / `{name}_he.txt`
    #[serde(default = "default_name")]
    pub name: String,
    /// Directory holding the text sources and the hero image
    #[serde(default = "default_dir")]
    pub source_dir: PathBuf,
    /// Directory the HTML pages are written to
    #[serde(default = "default_dir")]
    pub output_dir: PathBuf,
    /// Display strings for the English page
    #[serde(default = "default_en_display")]
    pub en: LocaleDisplay,
    /// Display strings for the Hebrew page
    #[serde(default = "default_he_display")]
    pub he: LocaleDisplay,
    /// Hero image file name; discovered from the source directory when unset
    #[serde(default)]
    pub hero_image: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            source_dir: default_dir(),
            output_dir: default_dir(),
            en: default_en_display(),
            he: default_he_display(),
            hero_image: None,
        }
    }
}

// Default value functions
fn default_name() -> String {
    "Recipe".to_string()
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_en_display() -> LocaleDisplay {
    LocaleDisplay::default_for(Locale::En)
}

fn default_he_display() -> LocaleDisplay {
    LocaleDisplay::default_for(Locale::He)
}

impl SiteConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_PAGES__ prefix
    /// 2. recipe-pages.toml file in current directory, or `path` when given
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_PAGES__EN__TIME
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        load_config(path)
    }

    pub fn display(&self, locale: Locale) -> &LocaleDisplay {
        match locale {
            Locale::En => &self.en,
            Locale::He => &self.he,
        }
    }
}

/// Load configuration from file and environment variables
///
/// See [`SiteConfig::load`] for the source priority.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    let file = match path {
        // An explicitly requested file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-pages").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_PAGES__HE__LEVEL
        .add_source(
            Environment::with_prefix("RECIPE_PAGES")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_values() {
        let config = SiteConfig::default();
        assert_eq!(config.name, "Recipe");
        assert_eq!(config.source_dir, PathBuf::from("."));
        assert_eq!(config.en.time, "40 minutes");
        assert_eq!(config.he.level, "קל");
        assert!(config.hero_image.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            r#"
name = "Shnitzel"
output_dir = "public"

[en]
time = "45 minutes"
level = "Easy–Intermediate"
servings = "6"

[he]
time = "45 דקות"
level = "קל-מתקדם"
servings = "6"
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.name, "Shnitzel");
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.source_dir, PathBuf::from("."));
        assert_eq!(config.display(Locale::En).time, "45 minutes");
        assert_eq!(config.display(Locale::He).level, "קל-מתקדם");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            r#"
[he]
time = "45 דקות"
level = "קל"
servings = "4"
"#,
        )
        .unwrap();

        std::env::set_var("RECIPE_PAGES__HE__TIME", "שעה");
        let result = load_config(Some(&path));
        std::env::remove_var("RECIPE_PAGES__HE__TIME");

        let config = result.unwrap();
        assert_eq!(config.he.time, "שעה");
        assert_eq!(config.he.servings, "4");
        assert_eq!(config.en, LocaleDisplay::default_for(Locale::En));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }
}
