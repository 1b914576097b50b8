//! Inline style sheets for the two page templates.
//!
//! `$side` is replaced with the physical side where lists start and `$font`
//! with the locale's font stack.

use crate::labels::LabelSet;

const PALETTE: &str = r#":root {
    --main-orange: #d35400;
    --ingredient-bullet: #d35400;
    --section-bg: #fffaf0;
}
"#;

const LISTS: &str = r#"h2 {
    font-size: 20px;
    margin-bottom: 10px;
    color: var(--main-orange);
}
.section-box {
    background: var(--section-bg);
    border: 1px solid #f7d8c5;
    border-radius: 10px;
    padding: 16px;
    margin-bottom: 16px;
}
ul {
    list-style: none;
    padding-$side: 28px;
    margin: 0;
}
ul li {
    position: relative;
    padding-$side: 28px;
    margin-bottom: 6px;
}
ul li::before {
    content: "❖";
    color: var(--ingredient-bullet);
    position: absolute;
    $side: 0;
}
ol {
    list-style: none;
    counter-reset: step-counter;
    padding-$side: 0;
    margin: 0;
}
ol li {
    counter-increment: step-counter;
    position: relative;
    margin-bottom: 14px;
    padding-$side: 36px;
    font-size: 15px;
}
ol li::before {
    content: counter(step-counter);
    position: absolute;
    top: 0;
    $side: 0;
    width: 28px;
    height: 28px;
    border-radius: 50%;
    background: var(--main-orange);
    color: #fff;
    text-align: center;
    line-height: 28px;
    font-weight: bold;
}
ol li p {
    margin: 6px 0 0;
}
.divider {
    border-top: none;
    border-left: none;
    border-right: none;
    height: 2px;
    background: linear-gradient(to right, var(--main-orange) 10%, #fff 50%, var(--main-orange) 90%);
    margin: 20px 0;
}
.footer {
    padding: 12px 0;
    font-size: 13px;
    color: #555;
    text-align: center;
    border-top: 1px solid #f0e0d0;
    margin-top: 24px;
    background: transparent;
}
"#;

const STANDARD: &str = r#"body {
    font-family: $font;
    background: linear-gradient(180deg, #fdf8f0 0%, #fffefc 100%);
    margin: 0;
    padding: 40px;
    display: flex;
    justify-content: center;
}
.page {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
    max-width: 900px;
    width: 100%;
    background: #ffffff;
    border-radius: 16px;
    box-shadow: 0 10px 30px rgba(0,0,0,0.08);
    padding: 28px 32px 32px;
    position: relative;
}
.hero {
    width: 100%;
    height: 260px;
    object-fit: cover;
    border-radius: 14px;
    margin-top: 20px;
    margin-bottom: 24px;
    box-shadow: 0 6px 18px rgba(0,0,0,0.12);
}
.lang-switch {
    position: absolute;
    top: 16px;
    right: 16px;
    font-size: 14px;
    z-index: 15;
    display: flex;
    align-items: center;
    gap: 4px;
    text-decoration: none;
}
.lang-switch img {
    width: 20px;
    height: 14px;
}
.header-bar {
    height: 3px;
    background: var(--main-orange);
    border-radius: 2px;
    margin-bottom: 18px;
}
.header {
    margin-bottom: 20px;
}
.tag {
    text-transform: uppercase;
    letter-spacing: 0.12em;
    font-size: 12px;
    color: #7a7a7a;
}
h1 {
    margin: 6px 0;
    font-size: 32px;
    color: var(--main-orange);
}
.subtitle {
    font-size: 15px;
    color: #666;
    margin-bottom: 10px;
}
.description {
    font-size: 15px;
    color: #444;
}
.meta {
    display: flex;
    gap: 24px;
    margin-top: 16px;
}
.meta-item {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 18px;
    color: #23412f;
}
.meta-item span.icon {
    font-size: 30px;
}
.tip {
    border: 2px solid var(--main-orange);
    background: #fff7f0;
    border-radius: 12px;
    padding: 12px;
    margin: 12px 0;
    font-size: 15px;
    line-height: 1.5;
    color: #6b2e1a;
}
.tip-label {
    font-weight: bold;
    color: var(--main-orange);
}
.print-button {
    position: absolute;
    top: 16px;
    left: 16px;
    padding: 4px 8px;
    font-size: 12px;
    border: none;
    border-radius: 5px;
    background: var(--main-orange);
    color: white;
    cursor: pointer;
    text-decoration: none;
    z-index: 20;
}
.print-button:hover {
    background: #e67e22;
}
"#;

const PRINT: &str = r#"body {
    font-family: Georgia, serif;
    padding: 40px;
    max-width: 800px;
    margin: auto;
    line-height: 1.5;
    background: #fff;
}
h1 {
    font-size: 32px;
    margin-bottom: 10px;
    color: var(--main-orange);
}
.tip {
    border: 1px solid var(--main-orange);
    background-color: #fff5ec;
    color: #d35400;
    padding: 8px 12px;
    margin: 8px 0;
    border-radius: 6px;
    font-weight: bold;
}
.print-button {
    padding: 4px 8px;
    font-size: 12px;
    border: none;
    border-radius: 5px;
    background: var(--main-orange);
    color: white;
    cursor: pointer;
}
@media print {
    body {
        padding: 12px;
        max-width: 100%;
        font-size: 12px;
        line-height: 1.3;
    }
    h1 {
        font-size: 24px;
    }
    h2 {
        font-size: 16px;
    }
    ol li {
        margin-bottom: 8px;
        padding-$side: 32px;
        font-size: 11px;
        line-height: 1.3;
        word-wrap: break-word;
    }
    ol li::before {
        width: 24px;
        height: 24px;
        line-height: 24px;
    }
    ul li {
        padding-$side: 24px;
        margin-bottom: 4px;
    }
    .section-box {
        padding: 10px;
        margin-bottom: 8px;
    }
    .footer {
        font-size: 11px;
        margin-top: 16px;
    }
    img.hero,
    .print-button {
        display: none;
    }
}
"#;

/// Style sheet of the full, decorated page
pub fn standard_css(labels: &LabelSet) -> String {
    fill([PALETTE, STANDARD, LISTS].concat(), labels)
}

/// Denser style sheet of the print page
pub fn print_css(labels: &LabelSet) -> String {
    fill([PALETTE, LISTS, PRINT].concat(), labels)
}

fn fill(template: String, labels: &LabelSet) -> String {
    template
        .replace("$side", labels.start_side())
        .replace("$font", labels.font_family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Locale;

    #[test]
    fn test_side_follows_direction() {
        let en = standard_css(LabelSet::for_locale(Locale::En));
        let he = standard_css(LabelSet::for_locale(Locale::He));

        assert!(en.contains("padding-left: 28px;"));
        assert!(!en.contains("padding-right: 28px;"));
        assert!(he.contains("padding-right: 28px;"));
        assert!(he.contains("font-family: Alef"));
        assert!(!he.contains('$'));
    }

    #[test]
    fn test_print_hides_hero() {
        let css = print_css(LabelSet::for_locale(Locale::He));
        assert!(css.contains("@media print"));
        assert!(css.contains("img.hero"));
        assert!(css.contains("padding-right: 24px;"));
        assert!(!css.contains('$'));
    }
}
