pub mod assets;
pub mod builder;
pub mod config;
pub mod error;
pub mod labels;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod render;

use std::path::Path;

// Re-export builder API
pub use builder::{RecipePages, RecipePagesBuilder};
pub use config::SiteConfig;
pub use error::GenerateError;
pub use labels::LabelSet;
pub use model::{
    Locale, LocaleDisplay, PageKind, ParsedRecipe, RecipeSource, RenderConfig, RenderedPage,
};
pub use parser::{parse_file, parse_recipe};
pub use pipeline::{generate, generate_and_write, write_site, GeneratedSite};
pub use render::{render_print, render_standard, PageTemplate};

/// Parse a recipe file and render its standard page
///
/// Convenience wrapper for single-page use; links and hero image come from
/// `config`.
pub fn page_from_file(path: &Path, config: &RenderConfig) -> Result<String, GenerateError> {
    let recipe = parse_file(path, config.locale)?;
    Ok(render_standard(&recipe, config))
}

/// Parse a recipe file and render its print page
pub fn print_page_from_file(path: &Path, config: &RenderConfig) -> Result<String, GenerateError> {
    let recipe = parse_file(path, config.locale)?;
    Ok(render_print(&recipe, config))
}
