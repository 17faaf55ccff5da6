use serde::Deserialize;

/// A lead submitted through the capture form.
///
/// Every field may be absent on the wire; absence is treated the same as an empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, rename = "message")]
    pub message_template: Option<String>,
}

impl DispatchRequest {
    pub fn new(
        full_name: impl Into<String>,
        phone_number: impl Into<String>,
        message_template: impl Into<String>,
    ) -> Self {
        Self {
            full_name: Some(full_name.into()),
            phone_number: Some(phone_number.into()),
            message_template: Some(message_template.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{"fullName":"Alex Johnson","phoneNumber":"+15551234567","message":"Hi {{name}}"}"#;
        let req: DispatchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.full_name.as_deref(), Some("Alex Johnson"));
        assert_eq!(req.phone_number.as_deref(), Some("+15551234567"));
        assert_eq!(req.message_template.as_deref(), Some("Hi {{name}}"));
    }

    #[test]
    fn test_deserialize_absent_and_null_fields() {
        let req: DispatchRequest = serde_json::from_str(r#"{"fullName":null}"#).unwrap();
        assert!(req.full_name.is_none());
        assert!(req.phone_number.is_none());
        assert!(req.message_template.is_none());
    }
}
