//! Free-word search conditions
//!
//! One search box serves two lookups: input that parses as an integer matches
//! an identifier or a phone number with hyphens removed, anything else is a
//! case-sensitive substring match over name-like columns or an exact phone
//! number match.

use crate::args::Args;

/// Parsed free-word input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreeWord<'a> {
    Empty,
    Numeric { id: i64, digits: &'a str },
    Text(&'a str),
}

impl<'a> FreeWord<'a> {
    pub fn parse(input: &'a str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return FreeWord::Empty;
        }
        match trimmed.parse::<i64>() {
            Ok(id) => FreeWord::Numeric {
                id,
                digits: trimmed,
            },
            Err(_) => FreeWord::Text(trimmed),
        }
    }
}

/// Columns a free-word search is applied to
#[derive(Debug, Clone, Copy)]
pub struct FreeWordTarget {
    pub id_column: &'static str,
    /// Each group is concatenated before matching, e.g. last name + first name
    pub text_columns: &'static [&'static [&'static str]],
    pub phone_column: Option<&'static str>,
}

impl FreeWordTarget {
    /// Render the condition for `word`, binding its values into `args`.
    ///
    /// Returns `None` for empty input so the caller can skip the filter.
    pub fn condition(&self, word: &FreeWord<'_>, args: &mut Args) -> Option<String> {
        match word {
            FreeWord::Empty => None,
            FreeWord::Numeric { id, digits } => {
                let mut terms = vec![format!("{} = {}", self.id_column, args.bind(*id))];
                if let Some(phone) = self.phone_column {
                    terms.push(format!(
                        "REPLACE({}, '-', '') LIKE {}",
                        phone,
                        args.bind(contains_pattern(digits))
                    ));
                }
                Some(format!("({})", terms.join(" OR ")))
            }
            FreeWord::Text(text) => {
                let pattern = args.bind(contains_pattern(text));
                let mut terms = self
                    .text_columns
                    .iter()
                    .map(|group| format!("{} LIKE {}", concat(group), pattern))
                    .collect::<Vec<_>>();
                if let Some(phone) = self.phone_column {
                    terms.push(format!("{} = {}", phone, args.bind(*text)));
                }
                Some(format!("({})", terms.join(" OR ")))
            }
        }
    }
}

fn concat(group: &[&str]) -> String {
    match group {
        [single] => (*single).to_string(),
        columns => format!("CONCAT({})", columns.join(", ")),
    }
}

/// `%text%` with LIKE wildcards in `text` escaped
pub fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for ch in text.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
