//! `wa.me` deep links used to hand a booking over to WhatsApp.

/// Digits only; `wa.me` rejects `+`, spaces and dashes.
pub fn normalize_number(number: &str) -> Option<String> {
    let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 6 {
        None
    } else {
        Some(digits)
    }
}

/// `https://wa.me/<digits>?text=<message>`, or `None` when the number is unusable.
pub fn deep_link(number: &str, message: &str) -> Option<String> {
    let digits = normalize_number(number)?;
    Some(format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(message)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_number() {
        assert_eq!(normalize_number("+213 (555) 12-34-56").as_deref(), Some("213555123456"));
        assert_eq!(normalize_number("12"), None);
    }

    #[test]
    fn test_deep_link_encodes_message() {
        let link = deep_link("+1 555 0100 200", "Hello there & welcome").unwrap();
        assert_eq!(link, "https://wa.me/15550100200?text=Hello%20there%20%26%20welcome");
    }

    #[test]
    fn test_deep_link_without_number() {
        assert!(deep_link("", "hi").is_none());
    }
}
