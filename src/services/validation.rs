use std::sync::LazyLock;

use regex::Regex;

use crate::errors::DispatchError;
use crate::models::DispatchRequest;

static E164_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{6,14}$").expect("valid E.164 pattern"));

/// Trimmed, non-empty request fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLead {
    pub full_name: String,
    pub phone_number: String,
    pub message_template: String,
}

/// A phone number in `+<7-15 digits>` form. Only produced by [`normalize_phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPhone(String);

impl NormalizedPhone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn validate_presence(request: &DispatchRequest) -> Result<ValidatedLead, DispatchError> {
    let field = |value: &Option<String>| value.as_deref().unwrap_or("").trim().to_string();

    let full_name = field(&request.full_name);
    let phone_number = field(&request.phone_number);
    let message_template = field(&request.message_template);

    if full_name.is_empty() || phone_number.is_empty() || message_template.is_empty() {
        return Err(DispatchError::MissingFields);
    }

    Ok(ValidatedLead {
        full_name,
        phone_number,
        message_template,
    })
}

/// Syntactic E.164 check only; whether the number exists is the provider's concern.
pub fn normalize_phone(raw: &str) -> Result<NormalizedPhone, DispatchError> {
    let trimmed = raw.trim();
    if !E164_PATTERN.is_match(trimmed) {
        return Err(DispatchError::InvalidPhone);
    }

    if trimmed.starts_with('+') {
        Ok(NormalizedPhone(trimmed.to_string()))
    } else {
        Ok(NormalizedPhone(format!("+{trimmed}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_presence_trims_fields() {
        let req = DispatchRequest::new("  Jamie  ", " +15551234567 ", "\tHello {{name}}\n");
        let lead = validate_presence(&req).unwrap();
        assert_eq!(lead.full_name, "Jamie");
        assert_eq!(lead.phone_number, "+15551234567");
        assert_eq!(lead.message_template, "Hello {{name}}");
    }

    #[test]
    fn test_validate_presence_rejects_blank_or_absent() {
        let cases = [
            DispatchRequest::new("", "+15551234567", "Hi"),
            DispatchRequest::new("Alex", "   ", "Hi"),
            DispatchRequest::new("Alex", "+15551234567", " \n\t "),
            DispatchRequest {
                full_name: Some("Alex".to_string()),
                phone_number: None,
                message_template: Some("Hi".to_string()),
            },
            DispatchRequest::default(),
        ];
        for req in &cases {
            assert!(matches!(
                validate_presence(req),
                Err(DispatchError::MissingFields)
            ));
        }
    }

    #[test]
    fn test_normalize_phone_adds_plus() {
        assert_eq!(normalize_phone("15551234567").unwrap().as_str(), "+15551234567");
        assert_eq!(normalize_phone(" +447911123456 ").unwrap().as_str(), "+447911123456");
    }

    #[test]
    fn test_normalize_phone_is_idempotent() {
        let once = normalize_phone("+15551234567").unwrap();
        let twice = normalize_phone(once.as_str()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(normalize_phone("15551234567").unwrap(), once);
    }

    #[test]
    fn test_normalize_phone_length_bounds() {
        assert!(normalize_phone("1234567").is_ok());
        assert!(normalize_phone("123456789012345").is_ok());
        assert!(normalize_phone("123456").is_err());
        assert!(normalize_phone("1234567890123456").is_err());
    }

    #[test]
    fn test_normalize_phone_rejects_bad_shapes() {
        for raw in [
            "12345",
            "+0551234567",
            "0155512345",
            "+1 555 123 4567",
            "+1-555-123-4567",
            "++15551234567",
            "whatsapp:+15551234567",
            "+1555abc4567",
            "",
        ] {
            assert!(
                matches!(normalize_phone(raw), Err(DispatchError::InvalidPhone)),
                "expected {raw:?} to be rejected"
            );
        }
    }
}
