use serde_json::{Map, Value};

/// Builds a compact textual description of an index's fields from its
/// mapping plus a one-document sample, used to ground the error-summary
/// agent.
pub fn build_field_context(mapping: &Value, sample: &Value) -> String {
    let mut lines = Vec::new();

    if let Some(properties) = find_properties(mapping) {
        let source = sample
            .pointer("/hits/hits/0/_source")
            .unwrap_or(&Value::Null);
        collect_fields(properties, "", source, &mut lines);
    }

    lines.join("\n")
}

// The mapping response nests the properties under the index name; take the
// first entry regardless of what the index is called.
fn find_properties(mapping: &Value) -> Option<&Map<String, Value>> {
    mapping
        .as_object()?
        .values()
        .next()?
        .pointer("/mappings/properties")?
        .as_object()
}

fn collect_fields(
    properties: &Map<String, Value>,
    prefix: &str,
    source: &Value,
    lines: &mut Vec<String>,
) {
    for (name, field) in properties {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        if let Some(nested) = field.get("properties").and_then(Value::as_object) {
            let nested_source = source.get(name).unwrap_or(&Value::Null);
            collect_fields(nested, &path, nested_source, lines);
            continue;
        }

        let field_type = field.get("type").and_then(Value::as_str).unwrap_or("object");
        let mut line = format!("- {}: {}", path, field_type);
        if let Some(example) = source.get(name) {
            if !example.is_null() {
                line.push_str(&format!(" (example: {})", example));
            }
        }
        lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_properties_with_dotted_paths() {
        let mapping = json!({
            "logs": {
                "mappings": {
                    "properties": {
                        "status": { "type": "keyword" },
                        "agent": {
                            "properties": {
                                "version": { "type": "text" }
                            }
                        }
                    }
                }
            }
        });
        let sample = json!({
            "hits": {
                "hits": [{
                    "_source": {
                        "status": "200",
                        "agent": { "version": "8.1" }
                    }
                }]
            }
        });

        let context = build_field_context(&mapping, &sample);
        assert_eq!(
            context,
            "- agent.version: text (example: \"8.1\")\n- status: keyword (example: \"200\")"
        );
    }

    #[test]
    fn fields_without_a_sample_value_keep_the_bare_description() {
        let mapping = json!({
            "logs": { "mappings": { "properties": { "bytes": { "type": "long" } } } }
        });
        let sample = json!({ "hits": { "hits": [] } });

        assert_eq!(build_field_context(&mapping, &sample), "- bytes: long");
    }

    #[test]
    fn empty_mapping_yields_an_empty_context() {
        assert_eq!(
            build_field_context(&json!({}), &json!({ "hits": { "hits": [] } })),
            ""
        );
    }
}
