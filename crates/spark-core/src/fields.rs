//! Submitted field set and its wire encoding.

/// Ordered `(name, value)` pairs captured from the form at submit time.
///
/// Alongside the email input, landing pages typically declare hidden fields
/// the form backend routes on (a `form-name` field, honeypots). Insertion
/// order is preserved so the wire body follows the document order of the
/// fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, keeping any existing field of the same name.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Replace the first field named `name`, or append it.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Value of the first field named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the set holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialize as an `application/x-www-form-urlencoded` body.
    pub fn to_urlencoded(&self) -> String {
        let mut body = String::new();
        for (name, value) in &self.fields {
            if !body.is_empty() {
                body.push('&');
            }
            form_urlencode(name, &mut body);
            body.push('=');
            form_urlencode(value, &mut body);
        }
        body
    }
}

/// Encode one component with form-urlencoding semantics: space becomes `+`,
/// ASCII alphanumerics and `*-._` pass through, every other byte is
/// percent-escaped.
fn form_urlencode(component: &str, out: &mut String) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for byte in component.bytes() {
        match byte {
            b' ' => out.push('+'),
            b'*' | b'-' | b'.' | b'_' => out.push(byte as char),
            b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_email_with_space_and_at() {
        let mut fields = FormFields::new();
        fields.push("email", "a b@c.d");
        assert_eq!(fields.to_urlencoded(), "email=a+b%40c.d");
    }

    #[test]
    fn test_preserves_field_order() {
        let fields = FormFields::new()
            .with_field("form-name", "waitlist")
            .with_field("email", "user@example.com");
        assert_eq!(
            fields.to_urlencoded(),
            "form-name=waitlist&email=user%40example.com"
        );
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut fields = FormFields::new()
            .with_field("form-name", "waitlist")
            .with_field("email", "old@example.com");
        fields.set("email", "new@example.com");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("email"), Some("new@example.com"));
        // Replacement keeps the original position.
        assert_eq!(
            fields.to_urlencoded(),
            "form-name=waitlist&email=new%40example.com"
        );
    }

    #[test]
    fn test_set_appends_when_absent() {
        let mut fields = FormFields::new();
        fields.set("email", "user@example.com");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("email"), Some("user@example.com"));
    }

    #[test]
    fn test_encodes_utf8_per_byte() {
        let mut fields = FormFields::new();
        fields.push("note", "café");
        assert_eq!(fields.to_urlencoded(), "note=caf%C3%A9");
    }

    #[test]
    fn test_passthrough_characters() {
        let mut fields = FormFields::new();
        fields.push("v", "A9z *-._");
        assert_eq!(fields.to_urlencoded(), "v=A9z+*-._");
    }

    #[test]
    fn test_empty_value_and_empty_set() {
        assert_eq!(FormFields::new().to_urlencoded(), "");
        let mut fields = FormFields::new();
        fields.push("bot-field", "");
        assert_eq!(fields.to_urlencoded(), "bot-field=");
    }

    #[test]
    fn test_ampersand_and_equals_escaped() {
        let mut fields = FormFields::new();
        fields.push("q", "a=b&c");
        assert_eq!(fields.to_urlencoded(), "q=a%3Db%26c");
    }
}
