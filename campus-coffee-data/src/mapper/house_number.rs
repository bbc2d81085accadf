//! Split and merge of free-text house numbers.
//!
//! The directory shows house numbers as text (`"12a"`) while storage keeps
//! a number and a one-character suffix. The two directions are independent
//! and lossy:
//!
//! - splitting keeps every ASCII digit as the number and the first
//!   non-digit anywhere in the text as the suffix, so `"a12b"` becomes
//!   `12` and `'a'`;
//! - merging drops a suffix that has no number.
//!
//! Only digits followed by at most one trailing character survive a
//! split-then-merge unchanged.

/// Storage form of a house number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HouseNumberParts {
    /// All digits of the house number read as one number.
    pub number: Option<u32>,
    /// First non-digit character of the house number.
    pub suffix: Option<char>,
}

/// Split a free-text house number into number and suffix.
///
/// Absent or blank input yields empty parts. Digits past `i32::MAX`
/// leave the number absent.
///
/// # Examples
/// ```
/// use campus_coffee_data::mapper::{split_house_number, HouseNumberParts};
///
/// assert_eq!(
///     split_house_number(Some("12a")),
///     HouseNumberParts { number: Some(12), suffix: Some('a') }
/// );
/// assert_eq!(split_house_number(Some("  ")), HouseNumberParts::default());
/// ```
#[must_use]
pub fn split_house_number(raw: Option<&str>) -> HouseNumberParts {
    let Some(text) = raw.filter(|value| !value.trim().is_empty()) else {
        return HouseNumberParts::default();
    };

    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    HouseNumberParts {
        number: digits
            .parse::<i32>()
            .ok()
            .and_then(|value| u32::try_from(value).ok()),
        suffix: text.chars().find(|ch| !ch.is_ascii_digit()),
    }
}

/// Merge a stored number and suffix back into free text.
///
/// # Examples
/// ```
/// use campus_coffee_data::mapper::merge_house_number;
///
/// assert_eq!(merge_house_number(Some(12), Some('a')).as_deref(), Some("12a"));
/// assert_eq!(merge_house_number(None, Some('a')), None);
/// ```
#[must_use]
pub fn merge_house_number(number: Option<u32>, suffix: Option<char>) -> Option<String> {
    number.map(|value| {
        let mut merged = value.to_string();
        merged.extend(suffix);
        merged
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::trailing_letter("12a", Some(12), Some('a'))]
    #[case::digits_only("45", Some(45), None)]
    #[case::letters_around_digits("a12b", Some(12), Some('a'))]
    #[case::hyphenated("45-b", Some(45), Some('-'))]
    #[case::leading_space(" 7", Some(7), Some(' '))]
    #[case::letters_only("A", None, Some('A'))]
    #[case::range("3-5", Some(35), Some('-'))]
    #[case::leading_zero("007", Some(7), None)]
    #[case::too_long("12345678901", None, None)]
    #[case::largest_signed("2147483647", Some(2_147_483_647), None)]
    #[case::past_signed_range("2147483648", None, None)]
    fn split_extracts_digits_and_first_non_digit(
        #[case] raw: &str,
        #[case] number: Option<u32>,
        #[case] suffix: Option<char>,
    ) {
        assert_eq!(
            split_house_number(Some(raw)),
            HouseNumberParts { number, suffix }
        );
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[case(Some("\t\n"))]
    fn split_of_blank_input_is_empty(#[case] raw: Option<&str>) {
        assert_eq!(split_house_number(raw), HouseNumberParts::default());
    }

    #[rstest]
    #[case(Some(12), Some('a'), Some("12a"))]
    #[case(Some(12), None, Some("12"))]
    #[case(None, Some('a'), None)]
    #[case(None, None, None)]
    #[case(Some(0), Some('b'), Some("0b"))]
    fn merge_appends_suffix_to_number(
        #[case] number: Option<u32>,
        #[case] suffix: Option<char>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(merge_house_number(number, suffix).as_deref(), expected);
    }

    #[rstest]
    #[case("a45", "45a")]
    #[case("45-b", "45-")]
    #[case("007", "7")]
    fn lossy_inputs_do_not_round_trip(#[case] raw: &str, #[case] merged: &str) {
        let parts = split_house_number(Some(raw));
        assert_eq!(
            merge_house_number(parts.number, parts.suffix).as_deref(),
            Some(merged)
        );
    }
}
