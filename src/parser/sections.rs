/// A titled block of a recipe source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Ingredients,
    Instructions,
    Description,
}

impl Section {
    pub const ALL: [Section; 3] = [
        Section::Ingredients,
        Section::Instructions,
        Section::Description,
    ];

    /// Header lines that open this section, in both languages
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            Section::Ingredients => &["Ingredients", "מצרכים"],
            Section::Instructions => &["Instructions", "אופן ההכנה"],
            Section::Description => &["Description", "תיאור"],
        }
    }

    /// Section opened by `line`, compared exactly after trimming
    pub fn from_header(line: &str) -> Option<Section> {
        let line = line.trim();
        Section::ALL
            .into_iter()
            .find(|section| section.headers().contains(&line))
    }
}

/// Collect the lines belonging to `section`.
///
/// Collection starts after the first header of `section` and stops at the next
/// header of a different section. A repeated header of the same section is
/// skipped. Lines in between are returned verbatim, blank ones included.
pub fn extract_block<'a>(lines: &[&'a str], section: Section) -> Vec<&'a str> {
    let mut collecting = false;
    let mut block = Vec::new();

    for line in lines {
        match Section::from_header(line) {
            Some(found) if found == section => collecting = true,
            Some(_) if collecting => break,
            Some(_) => {}
            None if collecting => block.push(*line),
            None => {}
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_exact() {
        assert_eq!(
            Section::from_header("  Ingredients "),
            Some(Section::Ingredients)
        );
        assert_eq!(Section::from_header("אופן ההכנה"), Some(Section::Instructions));
        assert_eq!(Section::from_header("ingredients"), None);
        assert_eq!(Section::from_header("Ingredients:"), None);
    }

    #[test]
    fn test_block_stops_at_other_header() {
        let lines = vec!["Title", "Ingredients", "a", "", "b", "Description", "c"];
        assert_eq!(
            extract_block(&lines, Section::Ingredients),
            vec!["a", "", "b"]
        );
        assert_eq!(extract_block(&lines, Section::Description), vec!["c"]);
        assert!(extract_block(&lines, Section::Instructions).is_empty());
    }

    #[test]
    fn test_first_block_wins_on_duplicates() {
        let lines = vec![
            "Title",
            "Ingredients",
            "egg",
            "Ingredients",
            "flour",
            "Instructions",
            "mix",
            "Ingredients",
            "salt",
        ];
        assert_eq!(
            extract_block(&lines, Section::Ingredients),
            vec!["egg", "flour"]
        );
        assert_eq!(extract_block(&lines, Section::Instructions), vec!["mix"]);
    }
}
