//! Name filtering applied to listings before pagination.

use crate::domain::Named;

/// Keeps the items whose name contains `needle`, ignoring case.
///
/// Characters are compared one to one after simple uppercase mapping, so a
/// character never expands (`ß` stays `ß`) and compatibility forms such as the
/// Kelvin sign do not match their ASCII look-alikes.
///
/// A missing or empty needle returns `items` unchanged. Relative order is kept.
pub fn filter_by_name<T: Named>(items: Vec<T>, needle: Option<&str>) -> Vec<T> {
    let Some(needle) = needle.filter(|n| !n.is_empty()) else {
        return items;
    };

    let needle = fold_case(needle);
    items
        .into_iter()
        .filter(|item| fold_case(item.name()).contains(&needle))
        .collect()
}

fn fold_case(text: &str) -> String {
    text.chars().map(simple_uppercase).collect()
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(mapped), None) => mapped,
        _ => c,
    }
}
