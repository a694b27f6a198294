use alloc::string::String;

/// The default section key: the item's first character, uppercased.
///
/// Consecutive items with equal keys form one section. Empty strings map to an empty key, so a
/// run of empty items forms its own section.
pub fn first_letter_uppercase(item: &str) -> String {
    item.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
