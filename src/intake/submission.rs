use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::options::{Device, RequestType, Urgency};
use crate::error::Result;

/// Characters left unescaped in a query component. Matches the set browsers
/// keep for `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Values collected by a completed intake form. Text is scrubbed on drop.
#[derive(Debug, Clone, PartialEq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Submission {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[zeroize(skip)]
    pub request_type: Option<RequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[zeroize(skip)]
    pub urgency: Option<Urgency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[zeroize(skip)]
    pub device: Option<Device>,
    pub details: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub nda: bool,
    #[zeroize(skip)]
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Account-creation link carrying the submitted email forward
    pub fn signup_link(&self, base: &str) -> String {
        signup_link(base, &self.email)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Appends `email=<value>` to `base`, percent-encoding the value.
pub fn signup_link(base: &str, email: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    let encoded = utf8_percent_encode(email, QUERY_COMPONENT);
    format!("{base}{separator}email={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_email_only_escapes_at_sign() {
        assert_eq!(
            signup_link("/signup", "jane@example.com"),
            "/signup?email=jane%40example.com"
        );
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            signup_link("/signup", "j+a ne&x=1@ex.com"),
            "/signup?email=j%2Ba%20ne%26x%3D1%40ex.com"
        );
    }

    #[test]
    fn empty_email_still_produces_parameter() {
        assert_eq!(signup_link("/signup", ""), "/signup?email=");
    }

    #[test]
    fn existing_query_is_extended() {
        assert_eq!(
            signup_link("https://example.com/signup?ref=intake", "a@b.co"),
            "https://example.com/signup?ref=intake&email=a%40b.co"
        );
    }

    #[test]
    fn toml_uses_form_labels() {
        let submission = Submission {
            request_type: Some(RequestType::Formula),
            urgency: Some(Urgency::Immediate),
            device: Some(Device::Mac),
            details: "Fix SUMIFS".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            nda: true,
            submitted_at: Utc::now(),
        };

        let rendered = submission.to_toml().unwrap();
        assert!(rendered.contains("type = \"Create / Fix a Formula\""));
        assert!(rendered.contains("urgency = \"Immediate (Today)\""));
        assert!(rendered.contains("device = \"Mac\""));
        assert!(rendered.contains("nda = true"));
        assert_eq!(
            submission.signup_link("/signup"),
            "/signup?email=jane%40example.com"
        );
    }
}
