//! The LaTeX template table.
//!
//! Everything the assembled document can contain is declared here: the
//! preamble, the header fields that are read from configuration (in the order
//! they are emitted), the chapter template, and the document wrapper. Each
//! formatter is a plain function so it can be tested on its own.

use crate::config::FieldValue;

/// Formats one configured value into one line of header markup.
pub type FieldFormatter = fn(&FieldValue) -> String;

pub struct Field {
    pub name: &'static str,
    pub format: FieldFormatter,
}

pub struct FieldGroup {
    pub name: &'static str,
    pub fields: &'static [Field],
}

pub struct Schema {
    /// Bumped whenever the emitted markup changes shape
    pub version: u32,
    pub documentclass: &'static str,
    /// Header field groups in emission order
    pub header: &'static [FieldGroup],
    pub chapter: fn(title: &str, recto: bool, body: &str) -> String,
    pub wrapper: fn(body: &str) -> String,
}

pub const SCHEMA: Schema = Schema {
    version: 1,
    documentclass: DOCUMENTCLASS,
    header: &[
        FieldGroup {
            name: "page",
            fields: &[
                Field {
                    name: "paper",
                    format: paper,
                },
                Field {
                    name: "margin",
                    format: margin,
                },
            ],
        },
        FieldGroup {
            name: "fonts",
            fields: &[Field {
                name: "main",
                format: main_font,
            }],
        },
        FieldGroup {
            name: "metadata",
            fields: &[
                Field {
                    name: "title",
                    format: title,
                },
                Field {
                    name: "author",
                    format: author,
                },
                Field {
                    name: "date",
                    format: date,
                },
            ],
        },
    ],
    chapter,
    wrapper,
};

const DOCUMENTCLASS: &str = r"\documentclass[11pt,openany]{book}
\usepackage{fontspec}
\usepackage{geometry}
\usepackage{hyperref}
";

fn paper(value: &FieldValue) -> String {
    format!(r"\geometry{{{value}}}")
}

fn margin(value: &FieldValue) -> String {
    format!(r"\geometry{{margin={value}}}")
}

fn main_font(value: &FieldValue) -> String {
    format!(r"\setmainfont{{{value}}}")
}

fn title(value: &FieldValue) -> String {
    format!(r"\title{{{value}}}")
}

fn author(value: &FieldValue) -> String {
    match value {
        FieldValue::List(authors) => format!(
            r"\author{{{}}}",
            authors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(r" \and ")
        ),
        other => format!(r"\author{{{other}}}"),
    }
}

fn date(value: &FieldValue) -> String {
    format!(r"\date{{{value}}}")
}

fn chapter(title: &str, recto: bool, body: &str) -> String {
    // openany lets \chapter start on either side; recto forces the right-hand page
    let clear = if recto {
        r"\cleardoublepage"
    } else {
        r"\clearpage"
    };
    format!("{clear}\n\\chapter{{{title}}}\n{body}\n")
}

fn wrapper(body: &str) -> String {
    format!("\\begin{{document}}\n\\maketitle\n\\tableofcontents\n{body}\\end{{document}}\n")
}
