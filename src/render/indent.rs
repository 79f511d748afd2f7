//! Block indentation for multi-line instruction text

/// Prefix every non-blank line of `text` with `indent`.
///
/// Blank and whitespace-only lines come out empty so the rendered YAML carries no
/// trailing whitespace.
pub fn indent_text(text: &str, indent: &str) -> String {
    text.split('\n')
        .map(|line| if line.trim().is_empty() { String::new() } else { format!("{indent}{line}") })
        .collect::<Vec<_>>()
        .join("\n")
}
