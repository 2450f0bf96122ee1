pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Renders a list of errors as a bulleted block, one error per line.
pub(crate) fn bulleted<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter()
        .map(|item| format!("  * {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
