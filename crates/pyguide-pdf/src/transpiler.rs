//! Sections to Typst markup transpiler
//!
//! Converts guide sections to a Typst markup string. Section text is
//! sanitized, checked against the Latin-1 gate, and embedded as string
//! literals so body content such as `# Works` or `[1, 2, 3]` is never
//! interpreted as Typst markup.

use pyguide_content::Section;

use crate::error::Result;
use crate::sanitize::{check_latin1, sanitize};

/// Transpiler for converting sections to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a document title and its sections to Typst markup
    ///
    /// The title becomes the centered bold header on every page, including
    /// pages the engine breaks automatically.
    pub fn transpile(title: &str, sections: &[Section]) -> Result<String> {
        let mut output = String::new();

        let title = sanitize(title);
        check_latin1(&title)?;

        output.push_str(&format!(
            "#set document(title: \"{}\")\n",
            escape_string(&title)
        ));
        output.push_str(&format!(
            "#set page(\n  paper: \"a4\",\n  margin: (x: 2cm, top: 3cm, bottom: 2.5cm),\n  header: align(center, text(weight: \"bold\", size: 14pt, \"{}\")),\n)\n",
            escape_string(&title)
        ));
        output.push_str("#set text(size: 11pt)\n\n");

        for section in sections {
            output.push_str(&Self::transpile_section(section)?);
            output.push('\n');
        }

        Ok(output)
    }

    /// Transpile a single section: bold title line, then the body with
    /// line breaks preserved, each followed by fixed vertical spacing
    fn transpile_section(section: &Section) -> Result<String> {
        let title = sanitize(&section.title);
        check_latin1(&title)?;
        let body = sanitize(&section.body);
        check_latin1(&body)?;

        let mut output = String::new();
        output.push_str(&format!(
            "#text(weight: \"bold\", size: 12pt, \"{}\")\n#v(2pt)\n",
            escape_string(&title)
        ));
        output.push_str(&Self::transpile_body(&body));
        output.push_str("#v(8pt)\n");
        Ok(output)
    }

    /// Render body text line by line
    ///
    /// Non-blank lines become string-literal expressions joined by explicit
    /// line breaks; blank lines become paragraph breaks.
    fn transpile_body(body: &str) -> String {
        let mut output = String::new();
        for line in body.lines() {
            if line.trim().is_empty() {
                output.push('\n');
            } else {
                output.push_str(&format!("#\"{}\" \\\n", escape_string(line)));
            }
        }
        output
    }
}

/// Escape special characters in strings for Typst string literals
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyguide_content::{guide_sections, GUIDE_TITLE};

    #[test]
    fn test_transpile_sets_page_header() {
        let typst = Transpiler::transpile(GUIDE_TITLE, &[]).unwrap();
        assert!(typst.contains("header: align(center"));
        assert!(typst.contains("Python List vs Tuple - Complete Guide"));
    }

    #[test]
    fn test_transpile_renders_all_sections_in_order() {
        let sections = guide_sections();
        let typst = Transpiler::transpile(GUIDE_TITLE, &sections).unwrap();

        let mut last = 0;
        for section in &sections {
            let needle = format!(
                "#text(weight: \"bold\", size: 12pt, \"{}\")",
                section.title
            );
            let pos = typst[last..]
                .find(&needle)
                .unwrap_or_else(|| panic!("title not found in order: {}", section.title));
            last += pos + needle.len();
        }
    }

    #[test]
    fn test_transpile_renders_eight_titles_and_bodies() {
        let sections = guide_sections();
        let typst = Transpiler::transpile(GUIDE_TITLE, &sections).unwrap();

        let title_count = typst
            .matches("#text(weight: \"bold\", size: 12pt,")
            .count();
        assert_eq!(title_count, 8);
        // Every body renders at least one literal line
        for section in &sections {
            let first_line = sanitize(section.body.lines().next().unwrap());
            assert!(typst.contains(&first_line));
        }
    }

    #[test]
    fn test_transpile_sanitizes_en_dash() {
        let section = Section::new(
            "Why Tuple is Faster",
            "Fixed size – no dynamic resizing",
        );
        let typst = Transpiler::transpile("Guide", &[section]).unwrap();
        assert!(typst.contains("Fixed size - no dynamic resizing"));
        assert!(!typst.contains('–'));
    }

    #[test]
    fn test_transpile_sanitizes_arrows() {
        let section = Section::new("Definition", "- List: [1, 2, 3] → Mutable");
        let typst = Transpiler::transpile("Guide", &[section]).unwrap();
        assert!(typst.contains("- List: [1, 2, 3] -> Mutable"));
    }

    #[test]
    fn test_transpile_rejects_unencodable_character() {
        let section = Section::new("Bad", "snowman ☃ survives nothing");
        let result = Transpiler::transpile("Guide", &[section]);
        assert!(result.is_err());
    }

    #[test]
    fn test_body_lines_are_string_literals() {
        let section = Section::new("Mutability Example", "my_list.append(4)  # Works");
        let typst = Transpiler::transpile("Guide", &[section]).unwrap();
        // `#` in body text stays inside a string literal, not markup
        assert!(typst.contains("#\"my_list.append(4)  # Works\""));
    }

    #[test]
    fn test_blank_lines_become_paragraph_breaks() {
        let section = Section::new("Two Paragraphs", "first\n\nsecond");
        let typst = Transpiler::transpile("Guide", &[section]).unwrap();
        assert!(typst.contains("#\"first\" \\\n\n#\"second\""));
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string("hello"), "hello");
        assert_eq!(escape_string("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_string("back\\slash"), "back\\\\slash");
    }
}
