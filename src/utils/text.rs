use std::fmt::Display;

use itertools::Itertools;

/// Formats items as a comma-separated list of double-quoted strings.
pub fn quoted_list<T: Display>(items: &[T]) -> String {
    items.iter().map(|item| format!("\"{item}\"")).join(", ")
}
