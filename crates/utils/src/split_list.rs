/// Split a separated CLI list, trimming entries and dropping empty ones.
#[must_use]
pub fn split_list(input: &str, separator: char) -> Vec<String> {
    input
        .split(separator)
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
