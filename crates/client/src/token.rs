use shared_types::TokenParam;
use std::fmt;

/// Opaque reset token taken from the emailed link.
///
/// Never empty; construct through [`Token::new`], [`ResetLink::token`] or
/// [`ResetQuery::token`].
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token, rejecting blank values.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are credentials; keep them out of logs and panic messages.
impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(..)")
    }
}

/// Token-bearing query values as the router hands them over.
///
/// The router percent-decodes the whole query before splitting it on `&`,
/// so a token containing an encoded `&` arrives cut short. [`ResetQuery`]
/// reads the undecoded query instead where the platform exposes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetLink {
    pub token: Option<String>,
    pub id: Option<String>,
}

impl ResetLink {
    /// The value under the configured parameter, if present and non-blank.
    pub fn token(&self, param: TokenParam) -> Option<Token> {
        let value = match param {
            TokenParam::Token => &self.token,
            TokenParam::Id => &self.id,
        };
        value.clone().and_then(Token::new)
    }
}

/// Undecoded query string of the page, e.g. `?token=abc%26def&lang=en`,
/// as the browser reports it in `location.search`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetQuery(String);

impl ResetQuery {
    /// First non-empty value of `param`, each pair split before decoding.
    pub fn token(&self, param: TokenParam) -> Option<Token> {
        self.0
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key) == param.name()).then(|| decode(value))
            })
            .find_map(Token::new)
    }
}

/// Decode one `application/x-www-form-urlencoded` component.
/// Malformed escapes are kept verbatim.
fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

impl From<&str> for ResetQuery {
    fn from(raw: &str) -> Self {
        Self(raw.trim_start_matches('?').to_string())
    }
}
