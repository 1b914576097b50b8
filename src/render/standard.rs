use log::debug;

use super::{
    description_text, document_head, footer, ingredients_section, instructions_section,
    standard_css, Markup, PageTemplate,
};
use crate::labels::LabelSet;
use crate::model::{PageKind, ParsedRecipe, RenderConfig};

/// The full, decorated recipe page with hero image and language switch
pub struct StandardPage;

impl PageTemplate for StandardPage {
    fn kind(&self) -> PageKind {
        PageKind::Standard
    }

    fn render(&self, recipe: &ParsedRecipe, config: &RenderConfig) -> String {
        let labels = LabelSet::for_locale(config.locale);
        debug!(
            "Rendering standard {} page for '{}'",
            config.locale, recipe.title
        );

        let mut page = document_head(labels, &recipe.title, &standard_css(labels));
        page.raw("<div class=\"page\">\n\n");

        if let Some(print_page) = &config.print_page {
            page.raw("<a class=\"print-button\" href=\"")
                .attr(print_page)
                .raw("\" target=\"_blank\">🖨️ ")
                .text(labels.print)
                .raw("</a>\n\n");
        }

        if let Some(sibling_page) = &config.sibling_page {
            page.raw("<div class=\"lang-switch\">\n    <a href=\"")
                .attr(sibling_page)
                .raw("\"><img src=\"")
                .attr(labels.switch_flag)
                .raw("\" alt=\"")
                .attr(labels.switch_text)
                .raw("\"> ")
                .text(labels.switch_text)
                .raw("</a>\n</div>\n\n");
        }

        if let Some(hero) = config.hero_image.as_deref().filter(|hero| !hero.is_empty()) {
            page.raw("<img class=\"hero\" src=\"")
                .attr(hero)
                .raw("\" alt=\"")
                .attr(&recipe.title)
                .raw("\">\n\n");
        }

        page.raw("<div class=\"header-bar\"></div>\n\n")
            .push(&header(labels, recipe, config))
            .raw("\n")
            .push(&ingredients_section(labels, &recipe.ingredients))
            .raw("\n<div class=\"divider\"></div>\n\n")
            .push(&instructions_section(labels, &recipe.instructions))
            .raw("\n")
            .push(&footer(labels))
            .raw("</div>\n</body>\n</html>\n");

        page.into_string()
    }
}

fn header(labels: &LabelSet, recipe: &ParsedRecipe, config: &RenderConfig) -> Markup {
    let mut header = Markup::new();
    header
        .raw("<div class=\"header\">\n    <div class=\"tag\">")
        .text(labels.tag)
        .raw("</div>\n    <h1>")
        .text(&recipe.title)
        .raw("</h1>\n    <div class=\"subtitle\">")
        .text(labels.subtitle)
        .raw("</div>\n    <div class=\"description\">")
        .push(&description_text(&recipe.description))
        .raw("</div>\n\n    <div class=\"meta\">\n");

    let meta = [
        ("🕒", labels.time, &config.display.time),
        ("🍽️", labels.servings, &config.display.servings),
        ("🧑‍🍳", labels.level, &config.display.level),
    ];
    for (icon, label, value) in meta {
        header
            .raw("        <div class=\"meta-item\"><span class=\"icon\">")
            .raw(icon)
            .raw("</span> <b>")
            .text(label)
            .raw(":</b> ")
            .text(value)
            .raw("</div>\n");
    }

    header.raw("    </div>\n</div>\n");
    header
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Locale, LocaleDisplay};

    fn recipe() -> ParsedRecipe {
        ParsedRecipe {
            title: "Shnitzel".to_string(),
            ingredients: vec!["Egg".to_string(), "Flour".to_string()],
            instructions: vec!["Mix well.".to_string(), "Fry until golden.".to_string()],
            description: String::new(),
        }
    }

    #[test]
    fn test_meta_row_uses_display_strings() {
        let config = RenderConfig::new(Locale::En)
            .with_display(LocaleDisplay::new("45 minutes", "Easy–Intermediate", "4"));
        let html = StandardPage.render(&recipe(), &config);

        assert!(html.contains("<b>Time:</b> 45 minutes"));
        assert!(html.contains("<b>Servings:</b> 4"));
        assert!(html.contains("<b>Skill Level:</b> Easy–Intermediate"));
    }

    #[test]
    fn test_optional_links_omitted() {
        let html = StandardPage.render(&recipe(), &RenderConfig::new(Locale::En));
        assert!(!html.contains("class=\"print-button\" href"));
        assert!(!html.contains("<div class=\"lang-switch\">"));
        assert!(!html.contains("<img class=\"hero\""));
    }

    #[test]
    fn test_links_and_hero_present() {
        let config = RenderConfig::new(Locale::He)
            .with_hero_image(Some("Shnitzel.jpg".to_string()))
            .with_sibling_page("Shnitzel_en.html")
            .with_print_page("Shnitzel_he_print.html");
        let html = StandardPage.render(&recipe(), &config);

        assert!(html.contains("<img class=\"hero\" src=\"Shnitzel.jpg\" alt=\"Shnitzel\">"));
        assert!(html.contains("<a href=\"Shnitzel_en.html\"><img src=\"flag_gb.png\""));
        assert!(html.contains("href=\"Shnitzel_he_print.html\" target=\"_blank\">🖨️ הדפסה</a>"));
        assert!(html.contains("<html lang=\"he\" dir=\"rtl\">"));
    }

    #[test]
    fn test_empty_hero_string_omits_image() {
        let config = RenderConfig::new(Locale::En).with_hero_image(Some(String::new()));
        let html = StandardPage.render(&recipe(), &config);
        assert!(!html.contains("class=\"hero\""));
    }
}
