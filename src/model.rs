use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Display language of a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    He,
}

impl Locale {
    /// Every supported locale, in generation order
    pub const ALL: [Locale; 2] = [Locale::En, Locale::He];

    /// Language code used in `lang` attributes and file names
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::He => "he",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Locale::En => Direction::Ltr,
            Locale::He => Direction::Rtl,
        }
    }

    /// The locale whose page the language switch links to
    pub fn sibling(&self) -> Locale {
        match self {
            Locale::En => Locale::He,
            Locale::He => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text direction of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    /// Physical side where lists start, used for bullets and step numbers
    pub fn start_side(&self) -> &'static str {
        match self {
            Direction::Ltr => "left",
            Direction::Rtl => "right",
        }
    }
}

/// Raw text of one recipe file
#[derive(Debug, Clone)]
pub struct RecipeSource {
    pub locale: Locale,
    pub text: String,
}

impl RecipeSource {
    pub fn new(locale: Locale, text: impl Into<String>) -> Self {
        Self {
            locale,
            text: text.into(),
        }
    }
}

/// A recipe split into its sections.
/// Every field except the title may be empty when the source lacks its header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    /// One entry per step; lines within a step are joined by `\n`
    pub instructions: Vec<String>,
    pub description: String,
}

/// Per-locale strings shown in the meta row of the standard page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocaleDisplay {
    pub time: String,
    pub level: String,
    pub servings: String,
}

impl LocaleDisplay {
    pub fn new(
        time: impl Into<String>,
        level: impl Into<String>,
        servings: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            level: level.into(),
            servings: servings.into(),
        }
    }

    /// Fallback strings for a locale when none are configured
    pub fn default_for(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::new("40 minutes", "Easy", "6"),
            Locale::He => Self::new("40 דקות", "קל", "6"),
        }
    }
}

/// Everything the renderer needs besides the parsed recipe
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub locale: Locale,
    pub display: LocaleDisplay,
    /// Hero image path relative to the page; `None` omits the image
    pub hero_image: Option<String>,
    /// Link to the same recipe in the sibling locale
    pub sibling_page: Option<String>,
    /// Link to the print variant of this page
    pub print_page: Option<String>,
}

impl RenderConfig {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            display: LocaleDisplay::default_for(locale),
            hero_image: None,
            sibling_page: None,
            print_page: None,
        }
    }

    pub fn with_display(mut self, display: LocaleDisplay) -> Self {
        self.display = display;
        self
    }

    pub fn with_hero_image(mut self, hero_image: Option<String>) -> Self {
        self.hero_image = hero_image;
        self
    }

    pub fn with_sibling_page(mut self, sibling_page: impl Into<String>) -> Self {
        self.sibling_page = Some(sibling_page.into());
        self
    }

    pub fn with_print_page(mut self, print_page: impl Into<String>) -> Self {
        self.print_page = Some(print_page.into());
        self
    }
}

/// Which template produced a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Standard,
    Print,
}

/// A complete HTML document and the file name it is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub locale: Locale,
    pub kind: PageKind,
    pub file_name: String,
    pub html: String,
}

impl RenderedPage {
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

/// File name of a page for `name` in `locale`
pub fn page_file_name(name: &str, locale: Locale, kind: PageKind) -> String {
    match kind {
        PageKind::Standard => format!("{}_{}.html", name, locale.code()),
        PageKind::Print => format!("{}_{}_print.html", name, locale.code()),
    }
}

/// File name of the text source for `name` in `locale`
pub fn source_file_name(name: &str, locale: Locale) -> String {
    format!("{}_{}.txt", name, locale.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file_names() {
        assert_eq!(
            page_file_name("Shnitzel", Locale::En, PageKind::Standard),
            "Shnitzel_en.html"
        );
        assert_eq!(
            page_file_name("Shnitzel", Locale::He, PageKind::Print),
            "Shnitzel_he_print.html"
        );
        assert_eq!(source_file_name("Shnitzel", Locale::He), "Shnitzel_he.txt");
    }

    #[test]
    fn test_locale_direction_and_sibling() {
        assert_eq!(Locale::En.direction(), Direction::Ltr);
        assert_eq!(Locale::He.direction(), Direction::Rtl);
        assert_eq!(Locale::He.direction().start_side(), "right");
        assert_eq!(Locale::En.sibling(), Locale::He);
        assert_eq!(Locale::He.sibling(), Locale::En);
    }
}
