// PDF-email relay DTOs

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Recipient metadata for the report email
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RecipientInfo {
    #[schema(example = "Jane Doe")]
    #[validate(length(min = 1, message = "Recipient name is required"))]
    pub name: String,
    #[schema(example = "jane@example.com")]
    #[validate(email(message = "A valid recipient email is required"))]
    pub email: String,
}

/// A selected value with its description, listed in the email body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CoreValueItem {
    #[schema(example = "Integrity")]
    pub value: String,
    #[schema(example = "Doing the right thing even when nobody is watching")]
    pub description: String,
}

/// Request DTO for POST /api/send-pdf-email
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendPdfEmailRequest {
    /// Base64-encoded PDF report
    #[validate(length(min = 1, message = "pdfBase64 is required"))]
    pub pdf_base64: String,
    #[validate]
    pub user_info: RecipientInfo,
    pub core_values: Vec<CoreValueItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = r#"{
            "pdfBase64": "JVBERi0xLjQ=",
            "userInfo": { "name": "Jane", "email": "jane@example.com" },
            "coreValues": [
                { "value": "Integrity", "description": "Doing the right thing" }
            ]
        }"#;

        let request: SendPdfEmailRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.pdf_base64, "JVBERi0xLjQ=");
        assert_eq!(request.user_info.name, "Jane");
        assert_eq!(request.core_values.len(), 1);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_pdf_is_rejected() {
        let request = SendPdfEmailRequest {
            pdf_base64: "".to_string(),
            user_info: RecipientInfo {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
            },
            core_values: vec![],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_invalid_recipient_email_is_rejected() {
        let request = SendPdfEmailRequest {
            pdf_base64: "JVBERi0xLjQ=".to_string(),
            user_info: RecipientInfo {
                name: "Jane".to_string(),
                email: "nope".to_string(),
            },
            core_values: vec![],
        };
        assert!(request.validate().is_err());
    }
}
