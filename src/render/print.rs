use log::debug;

use super::{
    description_text, document_head, footer, ingredients_section, instructions_section,
    print_css, PageTemplate,
};
use crate::labels::LabelSet;
use crate::model::{PageKind, ParsedRecipe, RenderConfig};

/// Compact variant of the recipe meant for paper
pub struct PrintPage;

impl PageTemplate for PrintPage {
    fn kind(&self) -> PageKind {
        PageKind::Print
    }

    fn render(&self, recipe: &ParsedRecipe, config: &RenderConfig) -> String {
        let labels = LabelSet::for_locale(config.locale);
        debug!("Rendering print {} page for '{}'", config.locale, recipe.title);

        let title = format!("{} – {}", recipe.title, labels.print);
        let mut page = document_head(labels, &title, &print_css(labels));

        page.raw("\n<h1>")
            .text(&recipe.title)
            .raw("</h1>\n<p class=\"description\">")
            .push(&description_text(&recipe.description))
            .raw("</p>\n\n<button class=\"print-button\" onclick=\"window.print()\">🖨️ ")
            .text(labels.print)
            .raw("</button>\n\n")
            .push(&ingredients_section(labels, &recipe.ingredients))
            .raw("\n<div class=\"divider\"></div>\n\n")
            .push(&instructions_section(labels, &recipe.instructions))
            .raw("\n")
            .push(&footer(labels))
            .raw("</body>\n</html>\n");

        page.into_string()
    }
}
