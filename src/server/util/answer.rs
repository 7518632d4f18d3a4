/// Compares a submitted answer with the expected one, ignoring surrounding
/// whitespace and letter case.
pub fn answers_match(given: &str, expected: &str) -> bool {
    given.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// Splits newline-separated answer options into a list, dropping blank lines.
pub fn split_options(options: Option<&str>) -> Vec<String> {
    options
        .map(|raw| {
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Joins answer options for storage, one per line. An empty list is stored as `None`.
pub fn join_options(options: &[String]) -> Option<String> {
    let kept: Vec<&str> = options
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .collect();

    if kept.is_empty() {
        None
    } else {
        Some(kept.join("\n"))
    }
}
