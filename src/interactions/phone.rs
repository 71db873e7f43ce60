/// Keeps only ASCII digits. No grouping: dotted formatting broke submissions
/// and stays off.
pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_everything_but_digits() {
        assert_eq!(sanitize_phone("090-123 abc 456"), "090123456");
        assert_eq!(sanitize_phone("+84 (91) 222.333"), "8491222333");
    }

    #[test]
    fn leaves_clean_numbers_alone() {
        assert_eq!(sanitize_phone("0938123456"), "0938123456");
        assert_eq!(sanitize_phone(""), "");
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert_eq!(sanitize_phone("٠٩٣8"), "8");
    }
}
