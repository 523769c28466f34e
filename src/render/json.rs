//! JSON renderer for structured logging
//!
//! Writes each record as a single-line JSON object (JSONL), compatible with
//! log aggregation tools like ELK or Loki. Grouped attributes become nested
//! objects: `db.conn.host` renders as `{"db":{"conn":{"host":…}}}`.

use super::Renderer;
use crate::core::{Record, RecordAttr, Result};
use serde_json::{Map, Value};
use std::io::Write;
use std::iter;

#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented multi-line objects instead of JSONL
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Build the JSON object for a record
    pub fn to_value(&self, record: &Record) -> Value {
        let mut object = Map::new();

        if !record.time.is_empty() {
            object.insert("time".to_string(), Value::String(record.time.clone()));
        }
        object.insert("level".to_string(), Value::String(record.level.clone()));
        object.insert("msg".to_string(), Value::String(record.message.clone()));

        for attr in &record.attrs {
            insert_grouped(&mut object, attr);
        }

        Value::Object(object)
    }
}

/// Top-level keys owned by the record itself
const RESERVED_KEYS: [&str; 3] = ["time", "level", "msg"];

/// Prefix given to an attribute path whose first segment is a reserved key
const RESERVED_PREFIX: &str = "attr.";

/// Later attributes overwrite earlier ones with the same path; a group that
/// collides with a plain value replaces it with an object. The record's own
/// `time`, `level` and `msg` are never replaced: a colliding top-level
/// segment is written as `attr.<name>` instead.
fn insert_grouped(root: &mut Map<String, Value>, attr: &RecordAttr) {
    let mut path: Vec<String> = attr
        .groups
        .iter()
        .cloned()
        .chain(iter::once(attr.key.clone()))
        .collect();
    if let Some(first) = path.first_mut() {
        if RESERVED_KEYS.contains(&first.as_str()) {
            first.insert_str(0, RESERVED_PREFIX);
        }
    }
    let Some((key, groups)) = path.split_last() else {
        return;
    };

    let mut current = root;
    for group in groups {
        let slot = current
            .entry(group.as_str())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        current = match slot.as_object_mut() {
            Some(map) => map,
            None => return,
        };
    }
    current.insert(key.clone(), attr.value.to_json_value());
}

impl Renderer for JsonRenderer {
    fn render(&self, out: &mut dyn Write, record: &Record) -> Result<()> {
        let value = self.to_value(record);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &value)?;
        } else {
            serde_json::to_writer(&mut *out, &value)?;
        }
        out.write_all(b"\n")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Attr, FieldValue};
    use std::sync::Arc;

    fn grouped(groups: &[&str], key: &str, value: impl Into<FieldValue>) -> RecordAttr {
        let groups: Arc<[String]> = groups.iter().map(|g| g.to_string()).collect();
        RecordAttr::new(groups, Attr::new(key, value))
    }

    fn render(renderer: &JsonRenderer, record: &Record) -> String {
        let mut buffer = Vec::new();
        renderer.render(&mut buffer, record).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_json_render() {
        let record = Record::new("INFO", "2024-01-01T00:00:00.000Z", "started")
            .with_attr(RecordAttr::ungrouped("port", 8080));
        let output = render(&JsonRenderer::new(), &record);

        assert_eq!(
            output,
            "{\"time\":\"2024-01-01T00:00:00.000Z\",\"level\":\"INFO\",\"msg\":\"started\",\"port\":8080}\n"
        );
    }

    #[test]
    fn test_json_nests_groups() {
        let record = Record::new("DEBUG", "", "query")
            .with_attr(grouped(&["db"], "name", "main"))
            .with_attr(grouped(&["db", "conn"], "host", "localhost"))
            .with_attr(grouped(&["db", "conn"], "port", 5432));
        let output = render(&JsonRenderer::new(), &record);

        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.get("time").is_none());
        assert_eq!(parsed["db"]["name"], "main");
        assert_eq!(parsed["db"]["conn"]["host"], "localhost");
        assert_eq!(parsed["db"]["conn"]["port"], 5432);
    }

    #[test]
    fn test_json_group_replaces_scalar() {
        let record = Record::new("INFO", "", "m")
            .with_attr(RecordAttr::ungrouped("db", "flat"))
            .with_attr(grouped(&["db"], "host", "h"));
        let value = JsonRenderer::new().to_value(&record);
        assert_eq!(value["db"]["host"], "h");
    }

    #[test]
    fn test_json_record_fields_are_not_overwritten() {
        let record = Record::new("INFO", "2024-01-01T00:00:00.000Z", "started")
            .with_attr(RecordAttr::ungrouped("msg", "shadow"))
            .with_attr(RecordAttr::ungrouped("level", "x"))
            .with_attr(RecordAttr::ungrouped("time", 0))
            .with_attr(grouped(&["msg"], "id", 7));
        let value = JsonRenderer::new().to_value(&record);

        assert_eq!(value["msg"], "started");
        assert_eq!(value["level"], "INFO");
        assert_eq!(value["time"], "2024-01-01T00:00:00.000Z");
        assert_eq!(value["attr.level"], "x");
        assert_eq!(value["attr.time"], 0);
        // The group replaces the earlier scalar at the same renamed path
        assert_eq!(value["attr.msg"]["id"], 7);
    }

    #[test]
    fn test_json_reserved_names_inside_groups_are_kept() {
        let record = Record::new("INFO", "", "m").with_attr(grouped(&["http"], "msg", "ok"));
        let value = JsonRenderer::new().to_value(&record);
        assert_eq!(value["http"]["msg"], "ok");
        assert_eq!(value["msg"], "m");
    }

    #[test]
    fn test_json_pretty_is_multiline() {
        let record = Record::new("INFO", "", "m").with_attr(RecordAttr::ungrouped("k", "v"));
        let output = render(&JsonRenderer::pretty(), &record);
        assert!(output.lines().count() > 1);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["k"], "v");
    }
}
