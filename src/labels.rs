use crate::model::{Direction, Locale};

/// User-visible vocabulary and typography for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    pub lang: &'static str,
    pub direction: Direction,
    pub font_family: &'static str,
    pub tag: &'static str,
    pub subtitle: &'static str,
    pub time: &'static str,
    pub servings: &'static str,
    pub level: &'static str,
    pub ingredients: &'static str,
    pub instructions: &'static str,
    pub print: &'static str,
    pub footer: &'static str,
    /// Name of the sibling language, shown on the language switch
    pub switch_text: &'static str,
    /// Flag icon of the sibling language
    pub switch_flag: &'static str,
}

static ENGLISH: LabelSet = LabelSet {
    lang: "en",
    direction: Direction::Ltr,
    font_family: "system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
    tag: "RECIPE",
    subtitle: "A classic dish you can easily make at home.",
    time: "Time",
    servings: "Servings",
    level: "Skill Level",
    ingredients: "Ingredients",
    instructions: "Instructions",
    print: "Print",
    footer: "© 2026 Tomer Hillel Lev. All rights reserved.",
    switch_text: "עברית",
    switch_flag: "flag_il.png",
};

static HEBREW: LabelSet = LabelSet {
    lang: "he",
    direction: Direction::Rtl,
    font_family: "Alef, system-ui, sans-serif",
    tag: "מתכון",
    subtitle: "מנה קלאסית שקל להכין בבית.",
    time: "זמן",
    servings: "מנות",
    level: "רמת קושי",
    ingredients: "מצרכים",
    instructions: "הוראות הכנה",
    print: "הדפסה",
    footer: "כל הזכויות שמורות לתומר הלל לב ©",
    switch_text: "English",
    switch_flag: "flag_gb.png",
};

impl LabelSet {
    pub fn for_locale(locale: Locale) -> &'static LabelSet {
        match locale {
            Locale::En => &ENGLISH,
            Locale::He => &HEBREW,
        }
    }

    /// Physical side where bullets and step numbers sit
    pub fn start_side(&self) -> &'static str {
        self.direction.start_side()
    }
}

/// Prefixes marking a tip line inside a step
pub const TIP_PREFIXES: [&str; 2] = ["tip:", "טיפ:"];
