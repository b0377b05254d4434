//! Book configuration.
//!
//! The configuration names the build directory, the generated `.tex` file, the
//! chapter style, and the compiler to run. Every other top-level table is a
//! field group whose values are consumed by the header formatters in
//! [`crate::schema`]. Field groups are not validated on load; a missing value
//! only surfaces when the header is built.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration file name used when none is given on the command line
pub const DEFAULT_CONFIG_FILE: &str = "defaults.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Output directory, relative to the project root
    pub build: PathBuf,
    /// Name of the generated LaTeX file inside `build`
    pub tex_filename: String,
    /// Typesetting engine binary
    #[serde(default = "default_engine")]
    pub engine: String,
    #[serde(rename = "chapterStyle")]
    pub chapter_style: ChapterStyle,
    /// Header field groups, keyed by group name
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChapterStyle {
    /// Start every chapter on a right-hand page
    pub recto: bool,
}

fn default_engine() -> String {
    "lualatex".to_string()
}

/// A configured value, independent of the document format it was read from.
///
/// Variant order matters: `Datetime` has to be tried before `Table`, since TOML
/// hands dates to untagged enums as a single-key map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An empty value (`date:` or `date: ~` in YAML); renders as nothing
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Datetime(toml::value::Datetime),
    List(Vec<FieldValue>),
    Table(BTreeMap<String, FieldValue>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::String(s) => write!(f, "{s}"),
            FieldValue::Datetime(d) => write!(f, "{d}"),
            FieldValue::List(items) => write!(
                f,
                "{}",
                items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
            FieldValue::Table(table) => write!(
                f,
                "{}",
                table
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<String>>()
                    .join(",")
            ),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl Configuration {
    /// Look up `group.field`, failing if either level is absent.
    pub fn field(&self, group: &str, field: &str) -> Result<&FieldValue> {
        let missing = || Error::MissingConfigValue {
            group: group.to_string(),
            field: field.to_string(),
        };
        match self.fields.get(group) {
            Some(FieldValue::Table(table)) => table.get(field).ok_or_else(missing),
            _ => Err(missing()),
        }
    }

    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.build)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        self.output_dir(root).join(&self.tex_filename)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        let table = |pairs: &[(&str, FieldValue)]| {
            FieldValue::Table(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            )
        };

        let mut fields = BTreeMap::new();
        fields.insert(
            "page".to_string(),
            table(&[("paper", "a5paper".into()), ("margin", "2cm".into())]),
        );
        fields.insert(
            "fonts".to_string(),
            table(&[("main", "Latin Modern Roman".into())]),
        );
        fields.insert(
            "metadata".to_string(),
            table(&[
                ("title", "Untitled".into()),
                ("author", FieldValue::List(vec!["Anonymous".into()])),
                ("date", r"\today".into()),
            ]),
        );

        Configuration {
            build: PathBuf::from("build"),
            tex_filename: "book.tex".to_string(),
            engine: default_engine(),
            chapter_style: ChapterStyle { recto: true },
            fields,
        }
    }
}

/// Serialisation format of a configuration file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
}

impl Format {
    pub fn from_path(path: &Path) -> Format {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }

    pub fn parse(self, contents: &str) -> std::result::Result<Configuration, String> {
        match self {
            Format::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    pub fn serialize(self, config: &Configuration) -> anyhow::Result<String> {
        Ok(match self {
            Format::Yaml => serde_yaml::to_string(config)?,
            Format::Toml => toml::to_string_pretty(config)?,
        })
    }
}

/// Read and parse the configuration at `path`.
pub fn load(path: &Path) -> Result<Configuration> {
    let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    Format::from_path(path)
        .parse(&contents)
        .map_err(|message| Error::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
}
