use crate::config::Configuration;
use crate::error::Result;
use crate::schema::Schema;

/// Build the document preamble: the schema's document class followed by one
/// line per declared header field, in group-then-field declaration order.
pub fn build_header(config: &Configuration, schema: &Schema) -> Result<String> {
    let mut header = schema.documentclass.to_string();

    for group in schema.header {
        for field in group.fields {
            let value = config.field(group.name, field.name)?;
            log::debug!("header field {}.{} = {value}", group.name, field.name);
            header += &(field.format)(value);
            header.push('\n');
        }
    }

    for (name, _) in config.fields.iter() {
        if !schema.header.iter().any(|group| group.name == name) {
            log::debug!("ignoring configuration table `{name}`, it isn't a header field group");
        }
    }

    Ok(header)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{Configuration, FieldValue, Format};
    use crate::error::Error;
    use crate::schema::SCHEMA;

    #[test]
    fn one_line_per_declared_field() {
        let config = Configuration::default();
        let header = build_header(&config, &SCHEMA).expect("can build header");

        let body = header
            .strip_prefix(SCHEMA.documentclass)
            .expect("header starts with the document class");
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                r"\geometry{a5paper}",
                r"\geometry{margin=2cm}",
                r"\setmainfont{Latin Modern Roman}",
                r"\title{Untitled}",
                r"\author{Anonymous}",
                r"\date{\today}",
            ]
        );
    }

    #[test]
    fn order_follows_schema_not_configuration() {
        // keys deliberately listed in reverse of the schema's declaration order
        let yaml = r#"
build: out
tex_filename: doc.tex
chapterStyle: { recto: false }
metadata: { date: D, author: A, title: T }
fonts: { main: F }
page: { margin: M, paper: P }
"#;
        let config = Format::Yaml.parse(yaml).expect("can parse config");
        let header = build_header(&config, &SCHEMA).expect("can build header");
        let body = &header[SCHEMA.documentclass.len()..];
        assert_eq!(
            body,
            "\\geometry{P}\n\\geometry{margin=M}\n\\setmainfont{F}\n\\title{T}\n\\author{A}\n\\date{D}\n"
        );
    }

    #[test]
    fn undeclared_tables_are_ignored() {
        let mut config = Configuration::default();
        config.fields.insert(
            "colophon".to_string(),
            FieldValue::Table([("text".to_string(), FieldValue::from("x"))].into()),
        );
        let with_extra = build_header(&config, &SCHEMA).expect("can build header");
        let plain = build_header(&Configuration::default(), &SCHEMA).expect("can build header");
        assert_eq!(with_extra, plain);
    }

    #[test]
    fn missing_group_fails() {
        let mut config = Configuration::default();
        config.fields.remove("fonts");
        match build_header(&config, &SCHEMA) {
            Err(Error::MissingConfigValue { group, field }) => {
                assert_eq!(group, "fonts");
                assert_eq!(field, "main");
            }
            other => panic!("expected missing value, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_fails() {
        let mut config = Configuration::default();
        if let Some(FieldValue::Table(metadata)) = config.fields.get_mut("metadata") {
            metadata.remove("date");
        }
        assert!(matches!(
            build_header(&config, &SCHEMA),
            Err(Error::MissingConfigValue { .. })
        ));
    }
}
