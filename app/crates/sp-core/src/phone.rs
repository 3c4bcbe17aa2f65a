//! Phone number normalization for OTP login.

const MIN_E164_DIGITS: usize = 10;
const MAX_E164_DIGITS: usize = 15;

/// Normalize user input to E.164. Returns an empty string when the input has
/// no digits at all.
///
/// Russian national formats are expanded: `8 999 ...` and bare ten-digit
/// mobile numbers starting with 9 become `+7...`.
pub fn normalize_phone_to_e164(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('+') {
        return trimmed.to_string();
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    match (digits.len(), digits.as_bytes()[0]) {
        (11, b'8') => format!("+7{}", &digits[1..]),
        (10, b'9') => format!("+7{}", digits),
        _ => format!("+{}", digits),
    }
}

/// `+` followed by 10 to 15 digits after normalization.
pub fn is_valid_phone(raw: &str) -> bool {
    let normalized = normalize_phone_to_e164(raw);
    let Some(digits) = normalized.strip_prefix('+') else {
        return false;
    };

    (MIN_E164_DIGITS..=MAX_E164_DIGITS).contains(&digits.len())
        && digits.chars().all(|c| c.is_ascii_digit())
}
