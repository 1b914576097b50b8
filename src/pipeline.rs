//! Parse both locale sources, render all pages, then write them.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::assets::find_hero_image;
use crate::config::SiteConfig;
use crate::error::GenerateError;
use crate::model::{
    page_file_name, source_file_name, Locale, PageKind, ParsedRecipe, RenderConfig,
    RenderedPage,
};
use crate::parser::parse_file;
use crate::render::{PageTemplate, PrintPage, StandardPage};

/// Every page of one recipe, rendered but not yet written
#[derive(Debug, Clone)]
pub struct GeneratedSite {
    pub pages: Vec<RenderedPage>,
    /// Source path of the hero image, if the recipe has one
    pub hero_image: Option<PathBuf>,
}

impl GeneratedSite {
    pub fn page(&self, locale: Locale, kind: PageKind) -> Option<&RenderedPage> {
        self.pages
            .iter()
            .find(|page| page.locale == locale && page.kind == kind)
    }
}

/// Render configuration for `locale`, with links to the sibling and print pages
pub fn render_config(
    config: &SiteConfig,
    locale: Locale,
    hero_image: Option<String>,
) -> RenderConfig {
    RenderConfig::new(locale)
        .with_display(config.display(locale).clone())
        .with_hero_image(hero_image)
        .with_sibling_page(page_file_name(
            &config.name,
            locale.sibling(),
            PageKind::Standard,
        ))
        .with_print_page(page_file_name(&config.name, locale, PageKind::Print))
}

/// Render the standard and print pages of one locale
pub fn render_locale(
    name: &str,
    recipe: &ParsedRecipe,
    config: &RenderConfig,
) -> Vec<RenderedPage> {
    let templates: [&dyn PageTemplate; 2] = [&StandardPage, &PrintPage];
    templates
        .into_iter()
        .map(|template| RenderedPage {
            locale: config.locale,
            kind: template.kind(),
            file_name: page_file_name(name, config.locale, template.kind()),
            html: template.render(recipe, config),
        })
        .collect()
}

/// Parse and render every page without touching the output directory.
///
/// Fails on the first unreadable source, before anything is written.
pub fn generate(config: &SiteConfig) -> Result<GeneratedSite, GenerateError> {
    let hero_path = resolve_hero_image(config)?;
    // Pages reference the image by file name; write_site copies it next to them
    let hero_image = hero_path
        .as_deref()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .map(String::from);

    let mut pages = Vec::with_capacity(Locale::ALL.len() * 2);
    for locale in Locale::ALL {
        let source = config.source_dir.join(source_file_name(&config.name, locale));
        let recipe = parse_file(&source, locale)?;
        let render_config = render_config(config, locale, hero_image.clone());
        pages.extend(render_locale(&config.name, &recipe, &render_config));
    }

    Ok(GeneratedSite {
        pages,
        hero_image: hero_path,
    })
}

/// Path of the hero image inside the source directory.
///
/// A configured image that does not exist falls back to the lookup by recipe
/// name, so pages never reference a missing file.
fn resolve_hero_image(config: &SiteConfig) -> Result<Option<PathBuf>, GenerateError> {
    if let Some(hero) = config.hero_image.as_deref().filter(|hero| !hero.is_empty()) {
        let path = config.source_dir.join(hero);
        if path.is_file() {
            return Ok(Some(path));
        }
        warn!("Configured hero image {} not found", path.display());
    }

    Ok(find_hero_image(&config.source_dir, &config.name)?
        .map(|file_name| config.source_dir.join(file_name)))
}

/// Write every page into `output_dir`, creating it when missing.
///
/// The hero image is copied next to the pages when it lives elsewhere.
pub fn write_site(site: &GeneratedSite, output_dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    fs::create_dir_all(output_dir).map_err(|source| GenerateError::WritePage {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(site.pages.len());
    for page in &site.pages {
        let path = page.path_in(output_dir);
        fs::write(&path, &page.html).map_err(|source| GenerateError::WritePage {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    if let Some(hero) = &site.hero_image {
        copy_hero_image(hero, output_dir)?;
    }

    Ok(written)
}

fn copy_hero_image(hero: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    let Some(file_name) = hero.file_name() else {
        return Ok(());
    };
    let target = output_dir.join(file_name);
    if target.exists() || !hero.is_file() {
        debug!("Not copying hero image {}", hero.display());
        return Ok(());
    }

    fs::copy(hero, &target).map_err(|source| GenerateError::WritePage {
        path: target.clone(),
        source,
    })?;
    info!("Copied hero image to {}", target.display());
    Ok(())
}

/// Generate and write all pages described by `config`
pub fn generate_and_write(config: &SiteConfig) -> Result<Vec<PathBuf>, GenerateError> {
    let site = generate(config)?;
    write_site(&site, &config.output_dir)
}
