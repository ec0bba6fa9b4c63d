//! Text helpers: title-casing and presentation derivations.

use super::patterns::{COMPANY, WHITESPACE};

/// Placeholder shown for records without a name.
pub const UNNAMED: &str = "Chưa có tên";

/// Lower-case everything, then upper-case the first letter of each
/// space-separated word.
pub fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Whether the name belongs to a company ("công ty").
pub fn is_company(name: &str) -> bool {
    COMPANY.is_match(name)
}

/// Phone with all whitespace removed, as dialled.
pub fn compact_phone(phone: &str) -> String {
    WHITESPACE.replace_all(phone, "").into_owned()
}

/// Name to display, with a placeholder for empty names.
pub fn display_name(name: &str) -> &str {
    if name.is_empty() { UNNAMED } else { name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("nguyễn văn AN"), "Nguyễn Văn An");
        assert_eq!(title_case("ĐINH tiên hoàng"), "Đinh Tiên Hoàng");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_keeps_spacing() {
        assert_eq!(title_case("lê  lợi"), "Lê  Lợi");
    }

    #[test]
    fn test_title_case_idempotent() {
        for input in ["trần HƯNG đạo", "3 tháng 2", "  pasteur ", "công ty ABC"] {
            let once = title_case(input);
            assert_eq!(title_case(&once), once);
        }
    }

    #[test]
    fn test_is_company() {
        assert!(is_company("Công ty TNHH Minh Phát"));
        assert!(is_company("CÔNG  TY cổ phần"));
        assert!(!is_company("Anh Công"));
    }

    #[test]
    fn test_compact_phone() {
        assert_eq!(compact_phone("0909 888777"), "0909888777");
        assert_eq!(compact_phone("0901234567"), "0901234567");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(""), UNNAMED);
        assert_eq!(display_name("Chị Mai"), "Chị Mai");
    }
}
