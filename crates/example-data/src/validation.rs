//! Name and email rules for generated residents.
//!
//! Generated names must read like the hand-written fixture names: letters
//! separated by single spaces, between [`NAME_MIN`] and [`NAME_MAX`]
//! characters. Email addresses are derived from the name so the pair stays
//! consistent.

/// Minimum allowed length for a generated resident name.
pub const NAME_MIN: usize = 3;

/// Maximum allowed length for a generated resident name.
pub const NAME_MAX: usize = 40;

/// Mail domain used for generated residents.
pub(crate) const EXAMPLE_MAIL_DOMAIN: &str = "example.com";

/// Returns `true` when `name` is an acceptable generated resident name.
///
/// # Examples
///
/// ```
/// use example_data::is_presentable_name;
///
/// assert!(is_presentable_name("Ada Lovelace"));
/// assert!(!is_presentable_name("Ada  Lovelace")); // double space
/// assert!(!is_presentable_name("O'Brien"));
/// assert!(!is_presentable_name("Al"));
/// ```
#[must_use]
pub fn is_presentable_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&length) {
        return false;
    }
    name.split(' ')
        .all(|word| !word.is_empty() && word.chars().all(char::is_alphabetic))
}

/// Drops every character that is not a letter or a space, then collapses
/// runs of whitespace.
#[must_use]
pub(crate) fn normalise_name(raw: &str) -> String {
    let letters: String = raw
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect();
    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builds `first.last@example.com` style addresses from a presentable name.
#[must_use]
pub(crate) fn email_for(name: &str) -> String {
    let local = name
        .split(' ')
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".");
    format!("{local}@{EXAMPLE_MAIL_DOMAIN}")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Ada", true)]
    #[case("Ada Lovelace", true)]
    #[case("Maria Silva", true)]
    #[case("João Santos", true)]
    #[case("ab", false)]
    #[case("", false)]
    #[case(" Ada", false)]
    #[case("Ada ", false)]
    #[case("Marie-Claire", false)]
    #[case("user_123", false)]
    fn presentable_names(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_presentable_name(name), expected);
    }

    #[test]
    fn rejects_names_exceeding_max_length() {
        let long_name = "A".repeat(NAME_MAX + 1);
        assert!(!is_presentable_name(&long_name));
    }

    #[rstest]
    #[case("O'Brien  Smith", "OBrien Smith")]
    #[case("  Marie-Claire Dupont ", "MarieClaire Dupont")]
    #[case("Ada Lovelace", "Ada Lovelace")]
    fn normalise_strips_punctuation_and_spacing(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalise_name(raw), expected);
    }

    #[test]
    fn email_joins_lowercase_words() {
        assert_eq!(email_for("Ada Lovelace"), "ada.lovelace@example.com");
    }
}
