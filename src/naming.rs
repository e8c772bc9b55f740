use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Split a wire name into words at separators and case boundaries.
///
/// `created_at` → `created`, `at`; `HTTPServer` → `HTTP`, `Server`;
/// `userID` → `user`, `ID`.
fn words(name: &str) -> Vec<String> {
    let mut out = Vec::new();
    for chunk in SEPARATORS.split(name).filter(|c| !c.is_empty()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut current = String::new();
        for (i, &c) in chars.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                None => false,
                Some(p) if c.is_ascii_uppercase() => {
                    p.is_ascii_lowercase()
                        || p.is_ascii_digit()
                        || (p.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase()))
                }
                Some(_) => false,
            };
            if boundary && !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        if !current.is_empty() {
            out.push(current);
        }
    }
    out
}

/// Lower-camel-case identifier for a wire name: `is_active` → `isActive`, `ID` → `id`.
pub fn lower_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in words(name).iter().enumerate() {
        let lower = word.to_ascii_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            let mut chars = lower.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_and_kebab() {
        assert_eq!(lower_camel_case("is_active"), "isActive");
        assert_eq!(lower_camel_case("created-at"), "createdAt");
        assert_eq!(lower_camel_case("__typename"), "typename");
    }

    #[test]
    fn camel_and_pascal() {
        assert_eq!(lower_camel_case("isActive"), "isActive");
        assert_eq!(lower_camel_case("UserName"), "userName");
    }

    #[test]
    fn acronyms() {
        assert_eq!(lower_camel_case("ID"), "id");
        assert_eq!(lower_camel_case("userID"), "userId");
        assert_eq!(lower_camel_case("HTTPServer"), "httpServer");
    }

    #[test]
    fn digits_stay_attached() {
        assert_eq!(lower_camel_case("address_line2"), "addressLine2");
        assert_eq!(lower_camel_case("v2Name"), "v2Name");
    }

    #[test]
    fn screaming_enum_values() {
        assert_eq!(lower_camel_case("IN_PROGRESS"), "inProgress");
        assert_eq!(lower_camel_case("ACTIVE"), "active");
    }
}
