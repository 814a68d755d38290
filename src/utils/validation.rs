use anyhow::{anyhow, Result};

pub const FIRST_SURAH: i64 = 1;
pub const LAST_SURAH: i64 = 114;

/// Parses a free-text surah request from its leading integer, so "36 يس"
/// reads as 36. Accepts Western and Arabic-Indic digits; text without a
/// leading integer yields `None`.
pub fn parse_surah_number(text: &str) -> Option<i64> {
    let mut chars = text.trim_start().chars().map(normalize_digit).peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let digits: String = chars.take_while(char::is_ascii_digit).take(MAX_SURAH_DIGITS + 1).collect();
    if digits.is_empty() || digits.len() > MAX_SURAH_DIGITS {
        return None;
    }

    let number: i64 = digits.parse().ok()?;
    Some(if negative { -number } else { number })
}

/// Longer digit runs are never surah numbers.
const MAX_SURAH_DIGITS: usize = 6;

fn normalize_digit(c: char) -> char {
    match c {
        '٠'..='٩' => char::from(b'0' + (c as u32 - '٠' as u32) as u8),
        '۰'..='۹' => char::from(b'0' + (c as u32 - '۰' as u32) as u8),
        other => other,
    }
}

pub fn validate_surah_number(number: i64) -> Result<u16> {
    if !(FIRST_SURAH..=LAST_SURAH).contains(&number) {
        return Err(anyhow!(
            "Surah number must be between {} and {}, got {}",
            FIRST_SURAH,
            LAST_SURAH,
            number
        ));
    }
    Ok(number as u16)
}

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Positive IDs are user chats
    if chat_id > 9_999_999_999 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Supergroups and channels are encoded as -100XXXXXXXXXX
    if chat_id < -1_999_999_999_999 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

/// Parses a comma-separated list of chat ids, ignoring blanks.
pub fn parse_chat_id_list(input: &str) -> Result<Vec<i64>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let id: i64 = s.parse().map_err(|_| anyhow!("Invalid chat id '{}'", s))?;
            validate_telegram_chat_id(id)?;
            Ok(id)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_surah_number_western_digits() {
        assert_eq!(parse_surah_number("1"), Some(1));
        assert_eq!(parse_surah_number(" 114 "), Some(114));
        assert_eq!(parse_surah_number("0"), Some(0));
        assert_eq!(parse_surah_number("-5"), Some(-5));
    }

    #[test]
    fn test_parse_surah_number_arabic_digits() {
        assert_eq!(parse_surah_number("١١٤"), Some(114));
        assert_eq!(parse_surah_number("۳۶"), Some(36));
    }

    #[test]
    fn test_parse_surah_number_rejects_text() {
        assert_eq!(parse_surah_number(""), None);
        assert_eq!(parse_surah_number("سورة"), None);
        assert_eq!(parse_surah_number("abc12"), None);
        assert_eq!(parse_surah_number("-"), None);
        assert_eq!(parse_surah_number("99999999999"), None);
    }

    #[test]
    fn test_parse_surah_number_takes_leading_integer() {
        assert_eq!(parse_surah_number("2 البقرة"), Some(2));
        assert_eq!(parse_surah_number("36 يس"), Some(36));
        assert_eq!(parse_surah_number("١٨ الكهف"), Some(18));
        assert_eq!(parse_surah_number("12abc"), Some(12));
        assert_eq!(parse_surah_number("1.5"), Some(1));
        assert_eq!(parse_surah_number("+7"), Some(7));
    }

    #[test]
    fn test_validate_surah_number_bounds() {
        assert_eq!(validate_surah_number(1).unwrap(), 1);
        assert_eq!(validate_surah_number(114).unwrap(), 114);
        assert!(validate_surah_number(0).is_err());
        assert!(validate_surah_number(115).is_err());
        assert!(validate_surah_number(-1).is_err());
    }

    #[test]
    fn test_validate_telegram_chat_id_valid() {
        // Private chat (positive)
        assert!(validate_telegram_chat_id(12345).is_ok());
        assert!(validate_telegram_chat_id(6_123_456_789).is_ok());

        // Group chat (negative)
        assert!(validate_telegram_chat_id(-987654321).is_ok());

        // Super group (very negative)
        assert!(validate_telegram_chat_id(-1001234567890).is_ok());
    }

    #[test]
    fn test_validate_telegram_chat_id_invalid() {
        assert!(validate_telegram_chat_id(0).is_err());
        assert!(validate_telegram_chat_id(-3000000000000).is_err());
        assert!(validate_telegram_chat_id(30_000_000_000).is_err());
    }

    #[test]
    fn test_parse_chat_id_list() {
        assert_eq!(parse_chat_id_list("").unwrap(), Vec::<i64>::new());
        assert_eq!(parse_chat_id_list("123, -456 ,").unwrap(), vec![123, -456]);
        assert!(parse_chat_id_list("123,abc").is_err());
        assert!(parse_chat_id_list("0").is_err());
    }
}
