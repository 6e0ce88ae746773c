//! Route number extraction from free-text labels.

use once_cell::sync::Lazy;
use regex::Regex;

/// Digits followed by exactly one letter, e.g. `7Т` but not `10км`.
static SUFFIXED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)(\p{L})(?:\P{L}|$)").expect("valid pattern"));

static PLAIN_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("valid pattern"));

/// The pieces of a route label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteIdentifier {
    /// Route number, 0 when the label has no digits.
    pub number: u32,
    /// Uppercased variant letter directly after the number.
    pub literal_suffix: Option<char>,
    /// The label with its leading `"<number>, "` removed.
    pub name: String,
}

/// Split a route label such as `"7Т, Н.Крым - Центральный рынок"` into
/// number, variant letter and display name.
///
/// A letter-suffixed number anywhere in the label wins over a plain digit
/// run. Never fails: a label without digits yields number 0 and passes
/// through unchanged.
///
/// # Examples
///
/// ```
/// use gortrans::extract::extract_identifier;
///
/// let id = extract_identifier("7т, Н.Крым - Центральный рынок");
/// assert_eq!(id.number, 7);
/// assert_eq!(id.literal_suffix, Some('Т'));
/// assert_eq!(id.name, "Н.Крым - Центральный рынок");
/// ```
pub fn extract_identifier(label: &str) -> RouteIdentifier {
    let (token, number, literal_suffix) = if let Some(caps) = SUFFIXED_NUMBER.captures(label)
        && let (Some(digits), Some(letter)) = (caps.get(1), caps.get(2))
    {
        let suffix = letter
            .as_str()
            .chars()
            .next()
            .map(|c| c.to_uppercase().next().unwrap_or(c));
        (
            &label[digits.start()..letter.end()],
            parse_number(digits.as_str()),
            suffix,
        )
    } else if let Some(m) = PLAIN_NUMBER.find(label) {
        (m.as_str(), parse_number(m.as_str()), None)
    } else {
        return RouteIdentifier {
            number: 0,
            literal_suffix: None,
            name: label.to_string(),
        };
    };

    RouteIdentifier {
        number,
        literal_suffix,
        name: label.replacen(&format!("{token}, "), "", 1),
    }
}

/// Digit runs too long for a `u32` fall back to 0, like a missing number.
fn parse_number(digits: &str) -> u32 {
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_number() {
        let id = extract_identifier("80, ДДК им. Кирова - ул. Милиционера Власова");
        assert_eq!(id.number, 80);
        assert_eq!(id.literal_suffix, None);
        assert_eq!(id.name, "ДДК им. Кирова - ул. Милиционера Власова");
    }

    #[test]
    fn suffixed_number_is_uppercased() {
        let id = extract_identifier("7Т, Н.Крым - Центральный рынок");
        assert_eq!(id.number, 7);
        assert_eq!(id.literal_suffix, Some('Т'));
        assert_eq!(id.name, "Н.Крым - Центральный рынок");

        let id = extract_identifier("7т, Н.Крым - Центральный рынок");
        assert_eq!(id.literal_suffix, Some('Т'));
        assert_eq!(id.name, "Н.Крым - Центральный рынок");
    }

    #[test]
    fn suffixed_match_wins_over_earlier_plain_digits() {
        let id = extract_identifier("Школа № 107 - 5А, Разгуляй");
        assert_eq!(id.number, 5);
        assert_eq!(id.literal_suffix, Some('А'));
        assert_eq!(id.name, "Школа № 107 - Разгуляй");
    }

    #[test]
    fn only_first_digit_run_counts() {
        let id = extract_identifier("12, Школа № 107 - Разгуляй");
        assert_eq!(id.number, 12);
        assert_eq!(id.literal_suffix, None);
        assert_eq!(id.name, "Школа № 107 - Разгуляй");
    }

    #[test]
    fn two_letters_are_not_a_suffix() {
        let id = extract_identifier("10км, Окружная");
        assert_eq!(id.number, 10);
        assert_eq!(id.literal_suffix, None);
        assert_eq!(id.name, "10км, Окружная");
    }

    #[test]
    fn suffix_at_end_of_label() {
        let id = extract_identifier("Маршрут 68Э");
        assert_eq!(id.number, 68);
        assert_eq!(id.literal_suffix, Some('Э'));
        assert_eq!(id.name, "Маршрут 68Э");
    }

    #[test]
    fn no_digits_defaults_to_zero() {
        let id = extract_identifier("Н.Крым, Центральный рынок");
        assert_eq!(id.number, 0);
        assert_eq!(id.literal_suffix, None);
        assert_eq!(id.name, "Н.Крым, Центральный рынок");
    }

    #[test]
    fn only_first_occurrence_removed() {
        let id = extract_identifier("3, Вокзал - 3, Заречная");
        assert_eq!(id.number, 3);
        assert_eq!(id.name, "Вокзал - 3, Заречная");
    }

    #[test]
    fn overflowing_number_defaults_to_zero() {
        let id = extract_identifier("99999999999, Куда-то");
        assert_eq!(id.number, 0);
        assert_eq!(id.name, "Куда-то");
    }

    #[test]
    fn empty_label() {
        let id = extract_identifier("");
        assert_eq!(id.number, 0);
        assert_eq!(id.literal_suffix, None);
        assert_eq!(id.name, "");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn cyrillic_letter() -> impl Strategy<Value = char> {
        prop_oneof![
            proptest::char::range('А', 'Я'),
            proptest::char::range('а', 'я'),
        ]
    }

    proptest! {
        /// "<digits><letter>, <rest>" splits into its three parts
        #[test]
        fn suffixed_label(
            digits in "[1-9][0-9]{0,5}",
            letter in cyrillic_letter(),
            rest in "[А-Яа-я .-]{0,30}",
        ) {
            let label = format!("{digits}{letter}, {rest}");
            let id = extract_identifier(&label);
            prop_assert_eq!(id.number, digits.parse::<u32>().unwrap());
            prop_assert_eq!(id.literal_suffix, letter.to_uppercase().next());
            prop_assert_eq!(id.name, rest);
        }

        /// A leading digit run with no letter after it has no suffix
        #[test]
        fn plain_label(
            digits in "[1-9][0-9]{0,5}",
            rest in "[А-Яа-я .-]{0,30}",
        ) {
            let label = format!("{digits}, {rest}");
            let id = extract_identifier(&label);
            prop_assert_eq!(id.number, digits.parse::<u32>().unwrap());
            prop_assert_eq!(id.literal_suffix, None);
            prop_assert_eq!(id.name, rest);
        }

        /// Arbitrary labels never panic; a suffix implies the label had digits
        #[test]
        fn any_label(label in ".{0,40}") {
            let id = extract_identifier(&label);
            if id.literal_suffix.is_some() {
                prop_assert!(label.chars().any(|c| c.is_ascii_digit()));
            }
        }
    }
}
