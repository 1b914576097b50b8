//! HTML page rendering.
//!
//! Both templates take a [`ParsedRecipe`] and a [`RenderConfig`] and return a
//! self-contained document. Rendering never fails: empty fields produce empty
//! sections.

use crate::labels::{LabelSet, TIP_PREFIXES};
use crate::model::{PageKind, ParsedRecipe, RenderConfig};

mod markup;
mod print;
mod standard;
mod styles;

pub use self::markup::Markup;
pub use self::print::PrintPage;
pub use self::standard::StandardPage;
pub use self::styles::{print_css, standard_css};

pub trait PageTemplate {
    fn kind(&self) -> PageKind;
    fn render(&self, recipe: &ParsedRecipe, config: &RenderConfig) -> String;
}

pub fn render_standard(recipe: &ParsedRecipe, config: &RenderConfig) -> String {
    StandardPage.render(recipe, config)
}

pub fn render_print(recipe: &ParsedRecipe, config: &RenderConfig) -> String {
    PrintPage.render(recipe, config)
}

/// `<!DOCTYPE>` through `<body>`, with the given style sheet inlined
fn document_head(labels: &LabelSet, title: &str, css: &str) -> Markup {
    let mut head = Markup::new();
    head.raw("<!DOCTYPE html>\n<html lang=\"")
        .raw(labels.lang)
        .raw("\" dir=\"")
        .raw(labels.direction.as_str())
        .raw("\">\n<head>\n<meta charset=\"UTF-8\">\n")
        .raw("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n")
        .raw("<title>")
        .text(title)
        .raw("</title>\n<style>\n")
        .raw(css)
        .raw("</style>\n</head>\n<body>\n");
    head
}

fn ingredients_section(labels: &LabelSet, ingredients: &[String]) -> Markup {
    let mut section = Markup::new();
    section
        .raw("<div class=\"section-box\">\n    <h2>")
        .text(labels.ingredients)
        .raw("</h2>\n    <ul>\n");
    for ingredient in ingredients {
        section
            .raw("        <li>")
            .text(ingredient)
            .raw("</li>\n");
    }
    section.raw("    </ul>\n</div>\n");
    section
}

fn instructions_section(labels: &LabelSet, steps: &[String]) -> Markup {
    let mut section = Markup::new();
    section
        .raw("<div class=\"section-box\">\n    <h2>")
        .text(labels.instructions)
        .raw("</h2>\n    <ol>\n");
    for step in steps {
        section.raw("        <li>").push(&step_body(step)).raw("</li>\n");
    }
    section.raw("    </ol>\n</div>\n");
    section
}

/// The first line of a step is its lead text; later lines become paragraphs,
/// or tip callouts when they start with a tip label.
fn step_body(step: &str) -> Markup {
    let mut body = Markup::new();
    let mut lines = step.lines().map(str::trim).filter(|line| !line.is_empty());

    if let Some(lead) = lines.next() {
        body.text(lead);
    }
    for line in lines {
        match split_tip(line) {
            Some((label, text)) => {
                body.raw("<p class=\"tip\"><span class=\"tip-label\">")
                    .text(label)
                    .raw("</span> ")
                    .text(text)
                    .raw("</p>");
            }
            None => {
                body.raw("<p>").text(line).raw("</p>");
            }
        }
    }
    body
}

/// Split `Tip: text` into its label (with the colon) and the remaining text
fn split_tip(line: &str) -> Option<(&str, &str)> {
    let lower = line.to_lowercase();
    if !TIP_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
        return None;
    }
    let colon = line.find(':')?;
    Some((&line[..=colon], line[colon + 1..].trim()))
}

/// Escaped description with line breaks kept
fn description_text(description: &str) -> Markup {
    let mut text = Markup::new();
    for (index, line) in description.lines().enumerate() {
        if index > 0 {
            text.raw("<br>\n");
        }
        text.text(line);
    }
    text
}

fn footer(labels: &LabelSet) -> Markup {
    let mut footer = Markup::new();
    footer
        .raw("<div class=\"footer\">\n    ")
        .text(labels.footer)
        .raw("\n</div>\n");
    footer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_with_tip_and_paragraph() {
        let body = step_body("Fry the schnitzel.\nTurn once.\nTip: keep the oil hot.");
        assert_eq!(
            body.as_str(),
            "Fry the schnitzel.<p>Turn once.</p>\
             <p class=\"tip\"><span class=\"tip-label\">Tip:</span> keep the oil hot.</p>"
        );
    }

    #[test]
    fn test_hebrew_tip_label() {
        assert_eq!(split_tip("טיפ: שמן חם"), Some(("טיפ:", "שמן חם")));
        assert_eq!(split_tip("TIP:salt"), Some(("TIP:", "salt")));
        assert_eq!(split_tip("Tipping point: none"), None);
    }

    #[test]
    fn test_tip_on_lead_line_is_plain_step() {
        let body = step_body("Tip: this is the whole step");
        assert_eq!(body.as_str(), "Tip: this is the whole step");
    }

    #[test]
    fn test_description_lines_escaped_and_broken() {
        let text = description_text("Crispy & golden\n<fresh>");
        assert_eq!(text.as_str(), "Crispy &amp; golden<br>\n&lt;fresh&gt;");
    }
}
