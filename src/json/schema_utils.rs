use serde::Serialize;
use serde_json::{Map, Value, json};

const MAX_DEPTH: usize = 16;

/// Keys that only carry documentation for humans, not shape.
const METADATA_KEYS: [&str; 6] = ["$schema", "$id", "title", "definitions", "$defs", "examples"];

/// Turns a `schemars` root schema into a self-contained response schema:
/// `$ref`s are inlined, metadata is dropped and `["T", "null"]` becomes
/// `T` + `nullable`.
pub fn clean_schema<T: Serialize>(root: T) -> serde_json::Result<Value> {
    let mut root_val = serde_json::to_value(root)?;

    let definitions = root_val
        .get("definitions")
        .or_else(|| root_val.get("$defs"))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    inline_node(&mut root_val, &definitions, 0);

    if let Value::Object(map) = &mut root_val {
        for key in METADATA_KEYS {
            map.remove(key);
        }
    }

    Ok(root_val)
}

fn inline_node(node: &mut Value, definitions: &Map<String, Value>, depth: usize) {
    if depth > MAX_DEPTH {
        *node = json!({ "type": "object" });
        return;
    }

    // Resolve the reference first so the borrow on the map is released.
    let reference = node
        .get("$ref")
        .and_then(Value::as_str)
        .map(|r| r.rsplit('/').next().unwrap_or_default().to_string());
    if let Some(name) = reference {
        *node = definitions
            .get(&name)
            .cloned()
            .unwrap_or_else(|| {
                json!({ "type": "object", "description": "Unresolvable reference" })
            });
        inline_node(node, definitions, depth + 1);
        return;
    }

    let Value::Object(map) = node else {
        return;
    };

    map.remove("$schema");
    map.remove("title");
    map.remove("default");
    map.remove("examples");

    if let Some(Value::Array(types)) = map.get("type") {
        let concrete: Vec<Value> = types.iter().filter(|t| *t != "null").cloned().collect();
        let nullable = concrete.len() < types.len();
        if let Some(first) = concrete.into_iter().next() {
            map.insert("type".to_string(), first);
            if nullable {
                map.insert("nullable".to_string(), json!(true));
            }
        }
    }

    if let Some(Value::Object(props)) = map.get_mut("properties") {
        for prop in props.values_mut() {
            inline_node(prop, definitions, depth + 1);
        }
    }

    if let Some(items) = map.get_mut("items") {
        inline_node(items, definitions, depth + 1);
    }

    // `Option<Struct>` comes out of schemars as `allOf: [{$ref}]`; flatten it.
    if let Some(Value::Array(all_of)) = map.remove("allOf") {
        if all_of.len() == 1 {
            let mut inner = all_of.into_iter().next().unwrap_or(Value::Null);
            inline_node(&mut inner, definitions, depth + 1);
            if let Value::Object(inner_map) = inner {
                for (k, v) in inner_map {
                    map.entry(k).or_insert(v);
                }
            }
        } else {
            let mut all_of = all_of;
            for item in all_of.iter_mut() {
                inline_node(item, definitions, depth + 1);
            }
            map.insert("allOf".to_string(), Value::Array(all_of));
        }
    }

    for key in ["anyOf", "oneOf"] {
        if let Some(Value::Array(arr)) = map.get_mut(key) {
            for item in arr.iter_mut() {
                inline_node(item, definitions, depth + 1);
            }
        }
    }
}
