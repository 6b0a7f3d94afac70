// src/core/xml.rs
//! Generic XML rendering of a JSON value tree

use serde_json::Value;

/// Element name used for list entries
pub const LIST_ITEM_TAG: &str = "item";

/// Attribute carrying an object key that had to be sanitised
pub const KEY_ATTR: &str = "key";

const INDENT: &str = "  ";

/// Render `value` under a single `root` element, indented, with an XML declaration.
///
/// Object keys that are not valid element names are sanitised, and the
/// original key is kept in a `key` attribute so distinct keys stay distinct.
pub fn to_xml(value: &Value, root: &str) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_element(&mut out, &open_tag(root), value, 0);
    out
}

/// Element name plus the `key` attribute when sanitising changed the name
fn open_tag(key: &str) -> (String, Option<String>) {
    let name = tag_name(key);
    let original = (name != key).then(|| escape(key));
    (name, original)
}

fn write_element(
    out: &mut String,
    (tag, key): &(String, Option<String>),
    value: &Value,
    depth: usize,
) {
    let pad = INDENT.repeat(depth);
    let open = match key {
        Some(key) => format!("{tag} {KEY_ATTR}=\"{key}\""),
        None => tag.clone(),
    };

    match value {
        Value::Null => out.push_str(&format!("{pad}<{open}/>\n")),
        Value::Array(items) if items.is_empty() => out.push_str(&format!("{pad}<{open}/>\n")),
        Value::Object(map) if map.is_empty() => out.push_str(&format!("{pad}<{open}/>\n")),
        Value::Array(items) => {
            out.push_str(&format!("{pad}<{open}>\n"));
            let item = (LIST_ITEM_TAG.to_string(), None);
            for child in items {
                write_element(out, &item, child, depth + 1);
            }
            out.push_str(&format!("{pad}</{tag}>\n"));
        }
        Value::Object(map) => {
            out.push_str(&format!("{pad}<{open}>\n"));
            for (key, child) in map {
                write_element(out, &open_tag(key), child, depth + 1);
            }
            out.push_str(&format!("{pad}</{tag}>\n"));
        }
        Value::Bool(b) => out.push_str(&format!("{pad}<{open}>{b}</{tag}>\n")),
        Value::Number(n) => out.push_str(&format!("{pad}<{open}>{n}</{tag}>\n")),
        Value::String(s) => out.push_str(&format!("{pad}<{open}>{}</{tag}>\n", escape(s))),
    }
}

/// Map an arbitrary key onto a valid XML element name
pub fn tag_name(key: &str) -> String {
    let mut name: String = key
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect();

    match name.chars().next() {
        None => LIST_ITEM_TAG.to_string(),
        Some(first) if first.is_alphabetic() || first == '_' => name,
        Some(_) => {
            name.insert(0, '_');
            name
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            // not representable in XML 1.0
            c if (c as u32) < 0x20 && !matches!(c, '\t' | '\n' | '\r') => {}
            c => escaped.push(c),
        }
    }
    escaped
}
