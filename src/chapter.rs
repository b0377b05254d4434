//! Chapter title extraction.
//!
//! A chapter file is plain text whose first level-1 heading (`# Title`) names
//! the chapter. That one line is lifted out as the title; everything else,
//! including any later headings, is the chapter body.

use crate::error::{Error, Result};
use crate::schema::Schema;

const HEADING_MARKER: &str = "# ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// File name the chapter was read from
    pub source: String,
    pub title: String,
    pub body: String,
}

impl Chapter {
    /// Render the chapter through the schema's chapter template.
    pub fn render(&self, schema: &Schema, recto: bool) -> String {
        (schema.chapter)(&self.title, recto, &self.body)
    }
}

/// Returns the title if `line` is a level-1 heading.
fn heading_title(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.strip_prefix(HEADING_MARKER)
        .filter(|title| !title.is_empty())
}

/// Find the index and title of the first level-1 heading line.
pub fn find_heading<'a>(lines: &[&'a str]) -> Option<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .find_map(|(i, line)| heading_title(line).map(|title| (i, title)))
}

/// Split raw chapter text into its title and body.
pub fn extract(source: &str, text: &str) -> Result<Chapter> {
    let lines: Vec<&str> = text.split('\n').collect();
    let (index, title) = find_heading(&lines).ok_or_else(|| Error::MissingHeading {
        chapter: source.to_string(),
    })?;

    let body = lines
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, line)| *line)
        .collect::<Vec<&str>>()
        .join("\n");

    Ok(Chapter {
        source: source.to_string(),
        title: title.to_string(),
        body,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::SCHEMA;

    #[test]
    fn extracts_single_heading() {
        let chapter = extract("01.md", "# Intro\nHello world").expect("has a heading");
        assert_eq!(chapter.source, "01.md");
        assert_eq!(chapter.title, "Intro");
        assert_eq!(chapter.body, "Hello world");
    }

    #[test]
    fn removes_only_the_heading_line() {
        let text = "preface line\n\n# The Middle\nfirst\nsecond\n";
        let chapter = extract("c.md", text).expect("has a heading");
        assert_eq!(chapter.title, "The Middle");
        assert_eq!(chapter.body, "preface line\n\nfirst\nsecond\n");
    }

    #[test]
    fn later_headings_stay_in_body() {
        let text = "# One\nalpha\n# Two\nbeta";
        let chapter = extract("c.md", text).expect("has a heading");
        assert_eq!(chapter.title, "One");
        assert_eq!(chapter.body, "alpha\n# Two\nbeta");
    }

    #[test]
    fn missing_heading_is_an_error() {
        for text in ["", "just text", "## Subheading\nbody", "#NoSpace", "# ", " # Indented"] {
            match extract("x.md", text) {
                Err(Error::MissingHeading { chapter }) => assert_eq!(chapter, "x.md"),
                other => panic!("expected missing heading for {text:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn crlf_heading_is_recognised() {
        let chapter = extract("c.md", "# Windows\r\nbody\r\n").expect("has a heading");
        assert_eq!(chapter.title, "Windows");
        assert_eq!(chapter.body, "body\r\n");
    }

    #[test]
    fn find_heading_is_read_only_scan() {
        let lines = ["a", "# B", "# C"];
        assert_eq!(find_heading(&lines), Some((1, "B")));
        assert_eq!(find_heading(&["a", "b"]), None);
    }

    #[test]
    fn title_keeps_everything_after_marker() {
        let chapter = extract("c.md", "#  Spaced # out").expect("has a heading");
        assert_eq!(chapter.title, " Spaced # out");
    }

    #[test]
    fn renders_through_schema() {
        let chapter = extract("01.md", "# Intro\nHello world").expect("has a heading");
        assert_eq!(
            chapter.render(&SCHEMA, true),
            "\\cleardoublepage\n\\chapter{Intro}\nHello world\n"
        );
    }
}
