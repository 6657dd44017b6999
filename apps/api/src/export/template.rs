//! Minimal `{{var}}` / `{{#each}}` template renderer for export drafts.
//!
//! This is deliberately not a templating language: no conditionals, no
//! escaping, no error reporting. Rendering is best-effort — unresolved paths
//! and malformed markers substitute to the empty string, because a half
//! rendered README is more useful to the learner than a 500.

use serde_json::Value;

const EACH_OPEN: &str = "{{#each";
const EACH_CLOSE: &str = "{{/each}}";

/// Renders `template` against `context`. Pure: same inputs, same output.
///
/// Iteration blocks are expanded first (recursively, each element becoming
/// the context for its body), then the remaining `{{ path }}` markers are
/// substituted. Paths are dot-separated; `this` segments are no-ops so
/// `{{this}}` and `{{this.field}}` work inside iteration bodies.
pub fn render(template: &str, context: &Value) -> String {
    let expanded = render_each_blocks(template, context);
    render_variables(&expanded, context)
}

fn render_each_blocks(template: &str, context: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(EACH_OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + EACH_OPEN.len()..];

        let Some(path_end) = after_open.find("}}") else {
            // Unterminated open tag: drop the tag, keep the trailing text.
            rest = after_open;
            continue;
        };
        let path = after_open[..path_end].trim();
        let body_and_rest = &after_open[path_end + 2..];

        let Some(close_at) = find_matching_close(body_and_rest) else {
            // No matching {{/each}}: drop the open tag and carry on.
            rest = body_and_rest;
            continue;
        };

        let body = &body_and_rest[..close_at];
        // Anything that is not a sequence iterates zero times.
        if let Some(Value::Array(items)) = resolve_path(context, path) {
            for item in items {
                out.push_str(&render(body, item));
            }
        }

        rest = &body_and_rest[close_at + EACH_CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

/// Finds the `{{/each}}` matching an already-consumed open tag, skipping over
/// nested blocks. Returns the byte offset of the matching close tag.
fn find_matching_close(s: &str) -> Option<usize> {
    let mut depth = 1usize;
    let mut pos = 0usize;
    loop {
        let close = s[pos..].find(EACH_CLOSE)?;
        let open = s[pos..].find(EACH_OPEN);
        match open {
            Some(open_at) if open_at < close => {
                depth += 1;
                pos += open_at + EACH_OPEN.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + close);
                }
                pos += close + EACH_CLOSE.len();
            }
        }
    }
}

fn render_variables(template: &str, context: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            // Unterminated marker: drop the braces, keep the text.
            out.push_str(after);
            rest = "";
            break;
        };

        let inner = after[..end].trim();
        // Dangling block tags left over from a malformed template render empty.
        if !inner.starts_with('#') && !inner.starts_with('/') {
            if let Some(value) = resolve_path(context, inner) {
                out.push_str(&value_to_string(value));
            }
        }

        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Recursive descent over the context: one mapping lookup per path segment.
/// `this` and empty segments are skipped; any miss or null is absent.
fn resolve_path<'a>(context: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = context;
    for segment in path.split('.') {
        let segment = segment.trim();
        if segment.is_empty() || segment == "this" {
            continue;
        }
        current = current.as_object()?.get(segment)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
