use secrecy::{ExposeSecret, Secret};

/// Header the backend expects the token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// `<meta name="csrf-token" content="...">`
pub const CSRF_META_NAME: &str = "csrf-token";

/// Hidden form input rendered by `{% csrf_token %}`.
pub const CSRF_INPUT_NAME: &str = "csrfmiddlewaretoken";

/// Per-session anti-forgery token, kept out of `Debug` output.
#[derive(Clone)]
pub struct CsrfToken(Secret<String>);

impl CsrfToken {
    /// Returns `None` for blank values; an empty token is as good as none.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(Secret::new(trimmed.to_string())))
        }
    }

    /// Picks the first non-blank candidate, in order.
    pub fn first_of<I>(candidates: I) -> Option<Self>
    where
        I: IntoIterator<Item = Option<String>>,
    {
        candidates.into_iter().flatten().find_map(Self::new)
    }

    pub fn header_value(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CsrfToken([REDACTED])")
    }
}
