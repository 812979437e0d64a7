// SMTP delivery for assessment report emails

use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::str::FromStr;

use crate::config::EmailConfig;
use crate::email::models::CoreValueItem;
use crate::error::ApiError;

/// Filename for the attached PDF report
const REPORT_FILENAME: &str = "leadership-values-report.pdf";

/// Email service wrapping an async SMTP transport
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_name: String,
    from_email: String,
}

impl EmailService {
    /// Create a new EmailService from SMTP configuration
    ///
    /// Building the transport does not open a connection; delivery
    /// failures surface on send.
    pub fn new(config: &EmailConfig) -> Result<Self, ApiError> {
        let creds = Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| ApiError::EmailError(format!("Invalid SMTP host: {e}")))?
            .port(config.smtp_port)
            .credentials(creds)
            .build();

        Ok(Self {
            mailer,
            from_name: config.from_name.clone(),
            from_email: config.from_email.clone(),
        })
    }

    /// Send the assessment report email with the PDF attached
    pub async fn send_report(
        &self,
        to_email: &str,
        to_name: &str,
        pdf: Vec<u8>,
        core_values: &[CoreValueItem],
    ) -> Result<(), ApiError> {
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", self.from_name, self.from_email))
            .map_err(|e| ApiError::EmailError(format!("Invalid from address: {e}")))?;

        let to_mailbox = Mailbox::from_str(to_email)
            .map_err(|e| ApiError::EmailError(format!("Invalid recipient address: {e}")))?;

        let html_content = build_report_html(to_name, core_values);

        let pdf_content_type = ContentType::parse("application/pdf")
            .map_err(|e| ApiError::EmailError(format!("Invalid attachment content type: {e}")))?;
        let attachment = Attachment::new(REPORT_FILENAME.to_string()).body(pdf, pdf_content_type);

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject("Your Leadership Values Assessment Results")
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_content),
                    )
                    .singlepart(attachment),
            )
            .map_err(|e| ApiError::EmailError(format!("Failed to build email: {e}")))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| ApiError::EmailError(format!("Failed to send email: {e}")))?;

        tracing::info!("Sent assessment report email");
        Ok(())
    }
}

/// Render the HTML body listing the selected values
pub fn build_report_html(recipient_name: &str, core_values: &[CoreValueItem]) -> String {
    let items: String = core_values
        .iter()
        .map(|item| {
            format!(
                "<li style=\"margin-bottom: 10px;\"><strong>{}</strong>: {}</li>\n",
                item.value, item.description
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Your Leadership Values Assessment Results</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #2c3e50;">Your Leadership Values</h2>

        <p>Hi {},</p>

        <p>Thank you for completing the leadership values assessment.
        These are the core values you selected:</p>

        <ul>
{}        </ul>

        <p>Your full report is attached as a PDF.</p>

        <hr style="border: none; border-top: 1px solid #ecf0f1; margin: 30px 0;">

        <p style="font-size: 12px; color: #7f8c8d;">
            This email was sent because an assessment report was requested
            for this address. If that wasn't you, you can safely ignore it.
        </p>
    </div>
</body>
</html>
"#,
        recipient_name, items
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: &str, description: &str) -> CoreValueItem {
        CoreValueItem {
            value: value.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_report_html_lists_all_values() {
        let html = build_report_html(
            "Jane",
            &[
                item("Integrity", "Doing the right thing"),
                item("Courage", "Owning hard decisions"),
            ],
        );

        assert!(html.contains("Hi Jane,"));
        assert!(html.contains("<strong>Integrity</strong>: Doing the right thing"));
        assert!(html.contains("<strong>Courage</strong>: Owning hard decisions"));
    }

    #[test]
    fn test_report_html_with_no_values_still_renders() {
        let html = build_report_html("Jane", &[]);
        assert!(html.contains("Hi Jane,"));
        assert!(html.contains("<ul>"));
    }
}
