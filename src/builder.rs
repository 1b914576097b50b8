use std::path::PathBuf;

use crate::config::SiteConfig;
use crate::model::{Locale, LocaleDisplay};
use crate::pipeline::{generate, write_site, GeneratedSite};
use crate::GenerateError;

/// Builder for configuring and running page generation
#[derive(Debug, Default)]
pub struct RecipePagesBuilder {
    base: Option<SiteConfig>,
    name: Option<String>,
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    en: Option<LocaleDisplay>,
    he: Option<LocaleDisplay>,
    hero_image: Option<String>,
}

impl RecipePagesBuilder {
    /// Start from a loaded configuration; later setters override its values
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.base = Some(config);
        self
    }

    /// Set the recipe name
    ///
    /// # Example
    /// ```
    /// use recipe_pages::RecipePages;
    ///
    /// let builder = RecipePages::builder().name("Shnitzel");
    /// ```
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the directory holding `{name}_en.txt`, `{name}_he.txt` and the image
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    /// Set the directory pages are written to
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Set the time, skill level and servings shown for `locale`
    ///
    /// # Example
    /// ```
    /// use recipe_pages::{Locale, LocaleDisplay, RecipePages};
    ///
    /// let builder = RecipePages::builder()
    ///     .name("Shnitzel")
    ///     .display(Locale::He, LocaleDisplay::new("45 דקות", "קל-מתקדם", "6"));
    /// ```
    pub fn display(mut self, locale: Locale, display: LocaleDisplay) -> Self {
        match locale {
            Locale::En => self.en = Some(display),
            Locale::He => self.he = Some(display),
        }
        self
    }

    /// Use this image file name instead of searching the source directory
    pub fn hero_image(mut self, file_name: impl Into<String>) -> Self {
        self.hero_image = Some(file_name.into());
        self
    }

    /// Resolve the final configuration
    ///
    /// # Errors
    /// Returns `GenerateError::Builder` when no recipe name was given, either
    /// here or in the base configuration.
    pub fn into_config(self) -> Result<SiteConfig, GenerateError> {
        let has_base = self.base.is_some();
        let mut config = self.base.unwrap_or_default();

        match self.name {
            Some(name) => config.name = name,
            None if has_base => {}
            None => {
                return Err(GenerateError::Builder(
                    "No recipe name specified. Use .name()".to_string(),
                ))
            }
        }
        if config.name.trim().is_empty() {
            return Err(GenerateError::Builder(
                "Recipe name cannot be empty".to_string(),
            ));
        }

        if let Some(dir) = self.source_dir {
            config.source_dir = dir;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(display) = self.en {
            config.en = display;
        }
        if let Some(display) = self.he {
            config.he = display;
        }
        if self.hero_image.is_some() {
            config.hero_image = self.hero_image;
        }

        Ok(config)
    }

    /// Parse and render every page without writing anything
    pub fn generate(self) -> Result<GeneratedSite, GenerateError> {
        let config = self.into_config()?;
        generate(&config)
    }

    /// Parse, render and write every page, returning the written paths
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_pages::RecipePages;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let written = RecipePages::builder()
    ///     .name("Shnitzel")
    ///     .output_dir("public")
    ///     .write()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn write(self) -> Result<Vec<PathBuf>, GenerateError> {
        let config = self.into_config()?;
        let site = generate(&config)?;
        write_site(&site, &config.output_dir)
    }
}

/// Main entry point for the builder API
pub struct RecipePages;

impl RecipePages {
    /// Creates a new builder for generating recipe pages
    pub fn builder() -> RecipePagesBuilder {
        RecipePagesBuilder::default()
    }
}
