use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let rendered = match serde_json::to_value(value)? {
        Value::Array(items) if items.is_empty() => String::from("(no rows)"),
        Value::Array(items) => {
            let headers = column_order(&items);
            let rows = items
                .iter()
                .map(|item| {
                    headers
                        .iter()
                        .map(|h| item.get(h).map_or_else(|| String::from("-"), value_to_cell))
                        .collect()
                })
                .collect::<Vec<Vec<String>>>();
            let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
            table::render_table(&header_refs, &rows, options)
        }
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            table::render_table(&["field", "value"], &rows, options)
        }
        scalar => value_to_cell(&scalar),
    };
    Ok(rendered)
}

/// Columns in first-seen order across all objects. Lesson records list their
/// id/title/topic first because the struct declares them first.
fn column_order(items: &[Value]) -> Vec<String> {
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }
    if headers.is_empty() {
        headers.push(String::from("value"));
    }
    headers
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("; "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use syl_core::entities::LessonScript;

    use super::{column_order, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_lists_fields() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("field")));
        assert!(out.contains("id"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let out = render(&Vec::<Example>::new(), OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn lesson_columns_follow_declaration_order() {
        let lessons = vec![serde_json::to_value(LessonScript::new("1", "T", "CLI")).unwrap()];
        let headers = column_order(&lessons);
        assert_eq!(&headers[..3], ["id", "title", "topic"]);
    }
}
