use std::fmt::Display;

/// Query parameter carrying the API key; always the last one on the wire.
pub const API_KEY_PARAM: &str = "apiKey";

/// Incremental builder for an address fragment.
///
/// Parameters are emitted in call order. The fragment always ends with
/// `apiKey=` so the client only has to append the key value.
#[derive(Debug)]
pub(crate) struct AddressBuilder {
    buf: String,
    has_query: bool,
}

impl AddressBuilder {
    pub(crate) fn new(path: impl Into<String>) -> Self {
        Self {
            buf: path.into(),
            has_query: false,
        }
    }

    pub(crate) fn param(mut self, key: &str, value: impl Display) -> Self {
        self.buf.push(if self.has_query { '&' } else { '?' });
        self.buf.push_str(key);
        self.buf.push('=');
        self.buf.push_str(&value.to_string());
        self.has_query = true;
        self
    }

    /// Emits `key=` with an empty value when `value` is `None`.
    pub(crate) fn optional<T: Display>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self.param(key, ""),
        }
    }

    /// Opens the query string without a parameter, producing `?&apiKey=`.
    pub(crate) fn empty_lead(mut self) -> Self {
        self.buf.push('?');
        self.has_query = true;
        self
    }

    pub(crate) fn finish(self) -> String {
        self.param(API_KEY_PARAM, "").buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_path_gets_question_mark_before_key() {
        let address = AddressBuilder::new("/v1/marketstatus/now").finish();
        assert_eq!(address, "/v1/marketstatus/now?apiKey=");
    }

    #[test]
    fn params_join_with_ampersand_in_call_order() {
        let address = AddressBuilder::new("/x")
            .param("b", 2)
            .param("a", true)
            .finish();
        assert_eq!(address, "/x?b=2&a=true&apiKey=");
    }

    #[test]
    fn absent_optional_renders_empty_value() {
        let address = AddressBuilder::new("/x")
            .optional::<i64>("timestamp", None)
            .optional("limit", Some(10))
            .finish();
        assert_eq!(address, "/x?timestamp=&limit=10&apiKey=");
    }

    #[test]
    fn empty_lead_keeps_leading_ampersand() {
        let address = AddressBuilder::new("/x").empty_lead().finish();
        assert_eq!(address, "/x?&apiKey=");
    }
}
