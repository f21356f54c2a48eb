//! Identifier conversions between AWS API shape names and Rust SDK names

/// Uppercase the first character, leave the rest untouched (`kms` -> `Kms`)
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert a PascalCase API name to the snake_case name the Rust SDK uses
///
/// Keeps the acronym rule of hemmer-provider-generator's `sanitize_name`:
/// runs of capitals are treated as one acronym, so `ResourceARN` becomes
/// `resource_arn` and `ARN` becomes `arn`.
pub fn snake_case(s: &str) -> String {
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let should_add_underscore = i > 0
                && (chars[i - 1].is_lowercase()
                    || chars[i - 1].is_ascii_digit()
                    || (i + 1 < chars.len() && chars[i + 1].is_lowercase()));
            if should_add_underscore && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else if ch == '-' || ch == ' ' || ch == '.' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
        } else {
            result.push(ch);
        }
    }

    result.trim_matches('_').to_string()
}

/// Build the Rust expression that extracts tags from an SDK `output` value
///
/// `path` is a dotted member path where any segment may carry a list index,
/// e.g. `TagDescriptions[0].Tags`. Every member is treated as optional and
/// an out-of-range index yields `None`. Indices should be numeric; anything
/// else is copied into the expression as written.
pub fn tags_expression(path: &str) -> String {
    let mut expr = String::from("output");

    for (i, segment) in path.split('.').enumerate() {
        let (member, index) = split_index(segment);
        let field = snake_case(member);

        if i == 0 {
            expr.push('.');
            expr.push_str(&field);
        } else {
            expr.push_str(&format!(".and_then(|v| v.{})", field));
        }

        if let Some(index) = index {
            expr.push_str(&format!(".and_then(|v| v.into_iter().nth({}))", index));
        }
    }

    expr
}

/// Split `Name[3]` into (`Name`, Some("3")); plain names have no index
fn split_index(segment: &str) -> (&str, Option<&str>) {
    if let Some(open) = segment.find('[') {
        if let Some(close) = segment[open..].find(']') {
            let index = segment[open + 1..open + close].trim();
            return (&segment[..open], Some(index));
        }
    }
    (segment, None)
}
