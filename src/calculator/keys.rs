//! Textual key sequences, as accepted by `--keys`.

use crate::calculator::button::Button;
use crate::calculator::error::KeyParseError;

/// Parse a key sequence such as `"12 + 3 ="` or `"AC 9 +/- ="`.
///
/// Whitespace is skipped. `AC` (any case) and `+/-`
/// are read as single buttons; every other character goes through
/// [`Button::from_char`].
pub fn parse_keys(input: &str) -> Result<Vec<Button>, KeyParseError> {
    let mut buttons = Vec::new();
    let mut offset = 0;

    while offset < input.len() {
        let rest = &input[offset..];
        if rest.starts_with("+/-") {
            buttons.push(Button::SignToggle);
            offset += 3;
            continue;
        }
        if rest.get(..2).is_some_and(|head| head.eq_ignore_ascii_case("ac")) {
            buttons.push(Button::Clear);
            offset += 2;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        if !ch.is_whitespace() {
            let button = Button::from_char(ch).ok_or(KeyParseError { ch, offset })?;
            buttons.push(button);
        }
        offset += ch.len_utf8();
    }

    Ok(buttons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_is_ignored() {
        let keys = parse_keys(" 1 2\t+ 3 = ").unwrap();
        assert_eq!(
            keys,
            vec![Button::One, Button::Two, Button::Plus, Button::Three, Button::Equals]
        );
    }

    #[test]
    fn multi_char_labels() {
        let keys = parse_keys("Ac9+/-%.").unwrap();
        assert_eq!(
            keys,
            vec![
                Button::Clear,
                Button::Nine,
                Button::SignToggle,
                Button::Percent,
                Button::Dot
            ]
        );
    }

    #[test]
    fn plus_not_followed_by_slash_minus_is_plus() {
        let keys = parse_keys("+/2").unwrap();
        assert_eq!(keys, vec![Button::Plus, Button::Divide, Button::Two]);
    }

    #[test]
    fn unknown_character_reports_offset() {
        let err = parse_keys("12 ? 3").unwrap_err();
        assert_eq!(err, KeyParseError { ch: '?', offset: 3 });
    }

    #[test]
    fn non_ascii_is_rejected_without_panicking() {
        let err = parse_keys("1é").unwrap_err();
        assert_eq!(err.ch, 'é');
        assert_eq!(err.offset, 1);
    }
}
