use std::collections::HashSet;
use tracing::trace;

/// Abbreviations that keep their all-caps spelling inside an identifier.
const COMMON_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

const DIGIT_WORDS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Prepended to keys made of nothing but digits.
const NUMERIC_PREFIX: &str = "Num";

/// Removes every character that cannot appear in an identifier.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Makes a token safe to start an identifier with.
///
/// An all-digit token gets a `Num` prefix. Otherwise each digit of a leading
/// digit run is spelled out as its own word, so `1name` becomes `One_name`.
pub fn format_leading_digits(token: &str) -> String {
    let rest = token.trim_start_matches(|c: char| c.is_ascii_digit());
    let digits = &token[..token.len() - rest.len()];

    if digits.is_empty() {
        return token.to_owned();
    }

    if rest.is_empty() {
        return format!("{}{}", NUMERIC_PREFIX, token);
    }

    let mut out = String::with_capacity(token.len() * 4);
    for digit in digits.bytes() {
        out.push_str(DIGIT_WORDS[usize::from(digit - b'0')]);
        out.push('_');
    }
    out.push_str(rest);
    out
}

/// Converts a token to an exported, initialism-aware identifier.
///
/// Words are split on underscores and on lower-to-upper transitions, so
/// `SCREAMING_CASE` is two words and `wishListUuid` is three.
pub fn proper_case(token: &str) -> String {
    split_words(token).into_iter().map(case_word).collect()
}

/// Converts a raw JSON key to a field identifier.
pub fn identifier_for(raw_key: &str) -> String {
    let ident = proper_case(&format_leading_digits(&sanitize(raw_key)));

    // Underscores dropped by casing can expose digits, as in `_1a`.
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        proper_case(&format_leading_digits(&ident))
    } else {
        ident
    }
}

/// Whether `ident` starts with an upper-case letter, which Go requires for a
/// field or type to be visible to `encoding/json`.
pub fn is_exported(ident: &str) -> bool {
    ident.chars().next().map_or(false, char::is_uppercase)
}

fn split_words(token: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (i, c) in token.char_indices() {
        if c == '_' {
            if start < i {
                words.push(&token[start..i]);
            }
            start = i + c.len_utf8();
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            if p.is_lowercase() && c.is_uppercase() {
                words.push(&token[start..i]);
                start = i;
            }
        }
        prev = Some(c);
    }

    if start < token.len() {
        words.push(&token[start..]);
    }
    words
}

fn case_word(word: &str) -> String {
    let upper = word.to_uppercase();
    if COMMON_INITIALISMS.contains(&upper.as_str()) {
        return upper;
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// The set of names already handed out during one generation run.
///
/// Every name returned by [`NameRegistry::unique_name`] is reserved, so no two
/// calls on the same registry ever return the same name.
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Reserves and returns a name based on `candidate`.
    ///
    /// Tries `candidate` itself, then `prefix + candidate` when a prefix is
    /// given, then `candidate` followed by 0, 1, 2, ... until one is free.
    pub fn unique_name(&mut self, candidate: &str, prefix: &str) -> String {
        let name = self.pick(candidate, prefix);
        if name != candidate {
            trace!("name {:?} already taken, using {:?}", candidate, name);
        }
        self.names.insert(name.clone());
        name
    }

    fn pick(&self, candidate: &str, prefix: &str) -> String {
        if !self.contains(candidate) {
            return candidate.to_owned();
        }

        if !prefix.is_empty() {
            let prefixed = format!("{}{}", prefix, candidate);
            if !self.contains(&prefixed) {
                return prefixed;
            }
        }

        (0u64..)
            .map(|i| format!("{}{}", candidate, i))
            .find(|name| !self.contains(name))
            .unwrap_or_else(|| candidate.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_punctuation() {
        assert_eq!("username", sanitize("user-name"));
        assert_eq!("emailaddress", sanitize("email@address"));
        assert_eq!("snake_case", sanitize("snake_case"));
        assert_eq!("a1", sanitize(" a.1 "));
        assert_eq!("", sanitize("$-%"));
    }

    #[test]
    fn leading_digits() {
        assert_eq!("Num123", format_leading_digits("123"));
        assert_eq!("One_name", format_leading_digits("1name"));
        assert_eq!("Two_things", format_leading_digits("2things"));
        assert_eq!("One_Two_ab", format_leading_digits("12ab"));
        assert_eq!("name", format_leading_digits("name"));
        assert_eq!("a1", format_leading_digits("a1"));
        assert_eq!("", format_leading_digits(""));
    }

    #[test]
    fn proper_case_words() {
        assert_eq!("UserID", proper_case("user_id"));
        assert_eq!("APIKey", proper_case("api_key"));
        assert_eq!("HTTPURL", proper_case("http_url"));
        assert_eq!("SimpleName", proper_case("simple_name"));
        assert_eq!("ScreamingCase", proper_case("SCREAMING_CASE"));
        assert_eq!("ShortTitle", proper_case("shortTitle"));
        assert_eq!("WishListUUID", proper_case("wishListUuid"));
        assert_eq!("CurrentPageURL", proper_case("current_page_url"));
        assert_eq!("OneName", proper_case("One_name"));
        assert_eq!("A", proper_case("__a__"));
        assert_eq!("", proper_case("___"));
    }

    #[test]
    fn identifiers() {
        assert_eq!("UserID", identifier_for("user_id"));
        assert_eq!("APIKey", identifier_for("api_key"));
        assert_eq!("HTTPURL", identifier_for("http_url"));
        assert_eq!("ScreamingCase", identifier_for("SCREAMING_CASE"));
        assert_eq!("Num123", identifier_for("123"));
        assert_eq!("OneName", identifier_for("1name"));
        assert_eq!("Username", identifier_for("user-name"));
        assert_eq!("Emailaddress", identifier_for("email@address"));
        assert_eq!("IPAddress", identifier_for("ip_address"));
        assert_eq!("", identifier_for("!!"));
        assert_eq!("Num123", identifier_for("_123"));
        assert_eq!("OneA", identifier_for("_1a"));
        assert_eq!("Four2", identifier_for("4_2"));
    }

    #[test]
    fn exported_identifiers() {
        assert!(is_exported("Name"));
        assert!(is_exported("Über"));
        assert!(!is_exported("name"));
        assert!(!is_exported("名前"));
        assert!(!is_exported("_x"));
        assert!(!is_exported(""));
    }

    #[test]
    fn unique_names() {
        let seen = || {
            let mut registry = NameRegistry::new();
            registry.unique_name("Name", "");
            registry.unique_name("Value", "");
            registry
        };

        assert_eq!("NewName", NameRegistry::new().unique_name("NewName", ""));
        assert_eq!("Name0", seen().unique_name("Name", ""));
        assert_eq!("UserName", seen().unique_name("Name", "User"));
        assert_eq!("Value0", seen().unique_name("Value", ""));

        let mut registry = seen();
        assert_eq!("Name0", registry.unique_name("Name", ""));
        assert_eq!("Name1", registry.unique_name("Name", ""));
        assert_eq!("UserName", registry.unique_name("Name", "User"));
        assert_eq!("Name2", registry.unique_name("Name", "User"));
        assert!(registry.contains("Name2"));
    }
}
