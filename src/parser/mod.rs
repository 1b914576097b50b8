//! Plain-text recipe parsing.
//!
//! A recipe file starts with its title line, followed by blocks introduced by
//! bilingual section headers (`Ingredients` / `מצרכים`, `Instructions` /
//! `אופן ההכנה`, `Description` / `תיאור`).

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::GenerateError;
use crate::model::{Locale, ParsedRecipe, RecipeSource};

mod sections;

pub use self::sections::{extract_block, Section};

/// Characters stripped from both ends of an ingredient line
const BULLET_CHARS: &[char] = &['•', '\t', '-', ' '];

/// Read and parse the recipe source at `path`
pub fn parse_file(path: &Path, locale: Locale) -> Result<ParsedRecipe, GenerateError> {
    let text = fs::read_to_string(path).map_err(|source| GenerateError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", text.len(), path.display());

    Ok(parse_source(&RecipeSource::new(locale, text)))
}

pub fn parse_source(source: &RecipeSource) -> ParsedRecipe {
    let recipe = parse_recipe(&source.text);
    debug!(
        "Parsed {} recipe '{}': {} ingredients, {} steps",
        source.locale,
        recipe.title,
        recipe.ingredients.len(),
        recipe.instructions.len()
    );
    recipe
}

/// Split recipe text into title, ingredients, instructions and description
pub fn parse_recipe(text: &str) -> ParsedRecipe {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let title = lines.first().map(|line| line.trim()).unwrap_or_default();

    ParsedRecipe {
        title: title.to_string(),
        ingredients: parse_ingredients(&extract_block(&lines, Section::Ingredients)),
        instructions: parse_steps(&extract_block(&lines, Section::Instructions)),
        description: extract_block(&lines, Section::Description)
            .join("\n")
            .trim()
            .to_string(),
    }
}

/// One ingredient per non-blank line, with bullets stripped from the ends
pub fn parse_ingredients(block: &[&str]) -> Vec<String> {
    block
        .iter()
        .map(|line| line.trim_matches(BULLET_CHARS).trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// One step per paragraph; paragraphs are separated by blank lines
pub fn parse_steps(block: &[&str]) -> Vec<String> {
    let mut steps = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in block {
        if line.trim().is_empty() {
            push_paragraph(&mut steps, &mut current);
        } else {
            current.push(line.trim_end());
        }
    }
    push_paragraph(&mut steps, &mut current);

    steps
}

fn push_paragraph(steps: &mut Vec<String>, current: &mut Vec<&str>) {
    let paragraph = current.join("\n");
    current.clear();

    let paragraph = paragraph.trim();
    if !paragraph.is_empty() {
        steps.push(paragraph.to_string());
    }
}
