//! Attribute identifiers and Go naming helpers

use convert_case::{Case, Casing};
use std::fmt;

/// Name of an attribute as it appears in the schema (`snake_case`)
///
/// # Examples
///
/// ```rust
/// use tfplugin_codegen::schema::FrameworkIdentifier;
///
/// let name = FrameworkIdentifier::from("api_settings");
/// assert_eq!(name.to_pascal_case(), "ApiSettings");
/// assert_eq!(name.to_camel_case(), "apiSettings");
/// assert_eq!(name.to_string(), "api_settings");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameworkIdentifier(String);

impl FrameworkIdentifier {
    /// Create an identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Raw identifier text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to `PascalCase` (exported Go identifier)
    ///
    /// Words are split on `_` only, so digits stay inside their word.
    #[must_use]
    pub fn to_pascal_case(&self) -> String {
        self.0.from_case(Case::Snake).to_case(Case::Pascal)
    }

    /// Convert to camelCase (unexported Go identifier)
    #[must_use]
    pub fn to_camel_case(&self) -> String {
        self.0.from_case(Case::Snake).to_case(Case::Camel)
    }

    /// Go string literal of the identifier
    #[must_use]
    pub fn to_go_literal(&self) -> String {
        go_quote(&self.0)
    }
}

impl fmt::Display for FrameworkIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FrameworkIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FrameworkIdentifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FrameworkIdentifier {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Quote a string as a double-quoted Go literal
///
/// Uses the escape forms of Go's `strconv.Quote` for quotes, backslashes,
/// control characters, Unicode whitespace other than the ASCII space, and
/// invisible format characters such as U+00AD and U+200B. Other code points
/// Go treats as unprintable (unassigned ones, for instance) pass through
/// verbatim, which still yields a valid Go literal.
///
/// # Examples
///
/// ```rust
/// use tfplugin_codegen::schema::go_quote;
///
/// assert_eq!(go_quote("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// ```
#[must_use]
pub fn go_quote(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 2);
    out.push('"');

    for c in input.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0b}' => out.push_str("\\v"),
            '\u{0c}' => out.push_str("\\f"),
            c if c.is_control() && u32::from(c) < 0x80 => {
                out.push_str(&format!("\\x{:02x}", u32::from(c)));
            }
            c if c.is_control() || (c.is_whitespace() && c != ' ') || is_invisible_format(c) => {
                out.push_str(&format!("\\u{:04x}", u32::from(c)));
            }
            c => out.push(c),
        }
    }

    out.push('"');
    out
}

/// Invisible format characters (Unicode category Cf) in the Basic
/// Multilingual Plane that commonly slip into pasted documentation
fn is_invisible_format(c: char) -> bool {
    matches!(
        c,
        '\u{00ad}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061c}'
            | '\u{06dd}'
            | '\u{070f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(FrameworkIdentifier::from("example").to_pascal_case(), "Example");
        assert_eq!(
            FrameworkIdentifier::from("example_attribute").to_pascal_case(),
            "ExampleAttribute"
        );
    }

    #[test]
    fn test_digits_do_not_split_words() {
        let cases = [
            ("a1b", "A1b", "a1b"),
            ("http2enabled", "Http2enabled", "http2enabled"),
            ("ipv4_address", "Ipv4Address", "ipv4Address"),
            ("port_8080", "Port8080", "port8080"),
        ];

        for (raw, pascal, camel) in cases {
            let name = FrameworkIdentifier::from(raw);
            assert_eq!(name.to_pascal_case(), pascal, "{raw}");
            assert_eq!(name.to_camel_case(), camel, "{raw}");
        }
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(
            FrameworkIdentifier::from("example_attribute").to_camel_case(),
            "exampleAttribute"
        );
    }

    #[test]
    fn test_go_literal() {
        assert_eq!(FrameworkIdentifier::from("example").to_go_literal(), "\"example\"");
    }

    #[test]
    fn test_go_quote_escapes() {
        assert_eq!(go_quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(go_quote("tab\there"), "\"tab\\there\"");
        assert_eq!(go_quote("\u{01}"), "\"\\x01\"");
        assert_eq!(go_quote("\u{7f}"), "\"\\x7f\"");
        assert_eq!(go_quote("héllo"), "\"héllo\"");
    }

    #[test]
    fn test_go_quote_escapes_invisible_characters() {
        assert_eq!(go_quote("soft\u{00ad}hyphen"), "\"soft\\u00adhyphen\"");
        assert_eq!(go_quote("line\u{2028}break"), "\"line\\u2028break\"");
        assert_eq!(go_quote("no\u{00a0}break"), "\"no\\u00a0break\"");
        assert_eq!(go_quote("\u{feff}bom"), "\"\\ufeffbom\"");
        assert_eq!(go_quote("\u{200b}"), "\"\\u200b\"");
        assert_eq!(go_quote("\u{85}"), "\"\\u0085\"");
        assert_eq!(go_quote("plain space"), "\"plain space\"");
    }
}
