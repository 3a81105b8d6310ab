//! Contact and job application form handlers.
//!
//! Both forms run the same pipeline: validate the fields, check the
//! reCAPTCHA token, compose the office email and send it through Brevo.
//! Each step has its own [`Submission`] status.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use hood_service::{CaptchaService, EmailMessage, EmailService};
use jiff::Timestamp;

use crate::extract::{Form, Json, Lang, Multipart};
use crate::handler::Result;
use crate::handler::request::{ApplicationForm, ContactForm};
use crate::handler::response::{ErrorResponse, Submission};
use crate::handler::utility::{application_email, contact_email};
use crate::service::{MailConfig, ServiceState};

/// Tracing target for form submissions.
const TRACING_TARGET: &str = "hood_server::handler::forms";

/// Checks the reCAPTCHA token. A verifier that cannot be reached counts as a failed check.
async fn verify_human(captcha: &CaptchaService, token: &str) -> bool {
    match captcha.is_human(token).await {
        Ok(is_human) => is_human,
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET,
                error = %error,
                "Captcha verification unavailable, rejecting submission"
            );
            false
        }
    }
}

/// Sends the composed email and maps the outcome to a submission status.
async fn deliver(email: &EmailService, message: &EmailMessage) -> Submission {
    match email.send(message).await {
        Ok(receipt) => {
            tracing::info!(
                target: TRACING_TARGET,
                message_id = ?receipt.message_id,
                "Submission delivered"
            );
            Submission::success()
        }
        Err(error) => {
            tracing::error!(
                target: TRACING_TARGET,
                error = %error,
                "Failed to deliver submission"
            );
            Submission::server_error()
        }
    }
}

/// Forwards a consultation request to the office.
#[tracing::instrument(skip_all, fields(lang = %locale))]
async fn send_contact(
    Lang(locale): Lang,
    State(captcha): State<CaptchaService>,
    State(email): State<EmailService>,
    State(mail): State<MailConfig>,
    Form(form): Form<ContactForm>,
) -> Submission {
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            tracing::debug!(target: TRACING_TARGET, errors = %errors, "Contact form rejected");
            return Submission::validation_failed(&errors);
        }
    };

    if !verify_human(&captcha, &request.recaptcha_token).await {
        return Submission::bot_detected();
    }

    let message = contact_email(&request, &mail, Timestamp::now());
    deliver(&email, &message).await
}

fn send_contact_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Send consultation request")
        .description(
            "Validates the contact form, verifies the reCAPTCHA token and emails \
            the request to the office. Field errors are reported as codes per field.",
        )
        .response::<200, Json<Submission>>()
        .response::<400, Json<Submission>>()
        .response::<403, Json<Submission>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<Submission>>()
}

/// Forwards a job application, with its optional résumé, to human resources.
#[tracing::instrument(skip_all, fields(lang = %locale))]
async fn send_application(
    Lang(locale): Lang,
    State(captcha): State<CaptchaService>,
    State(email): State<EmailService>,
    State(mail): State<MailConfig>,
    multipart: Multipart,
) -> Result<Submission> {
    let form = ApplicationForm::from_multipart(multipart).await?;
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            tracing::debug!(target: TRACING_TARGET, errors = %errors, "Application form rejected");
            return Ok(Submission::validation_failed(&errors));
        }
    };

    if !verify_human(&captcha, &request.recaptcha_token).await {
        return Ok(Submission::bot_detected());
    }

    let message = application_email(&request, &mail);
    Ok(deliver(&email, &message).await)
}

fn send_application_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Send job application")
        .description(
            "Accepts a `multipart/form-data` body with the fields `firstName`, \
            `lastName`, `email`, `phone`, `job`, `coverLetter`, `recaptchaToken` \
            and an optional PDF `resume` of at most 5 MiB.",
        )
        .response::<200, Json<Submission>>()
        .response::<400, Json<Submission>>()
        .response::<403, Json<Submission>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<413, Json<ErrorResponse>>()
        .response::<500, Json<Submission>>()
}

/// Returns routes for the website forms.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/{lang}/contact",
            post_with(send_contact, send_contact_docs),
        )
        .api_route(
            "/api/{lang}/careers/apply",
            post_with(send_application, send_application_docs),
        )
        .with_path_items(|item| item.tag("Forms"))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use axum_test::multipart::{MultipartForm, Part};
    use hood_service::ErrorKind as ServiceErrorKind;
    use hood_service::mock::{MockCaptchaProvider, MockEmailProvider};

    use super::*;
    use crate::handler::response::SubmissionStatus;
    use crate::handler::test::{create_test_server_with_state, create_test_state};

    async fn server(
        email: &MockEmailProvider,
        captcha: MockCaptchaProvider,
    ) -> anyhow::Result<TestServer> {
        let state = create_test_state(email.service(), captcha.service())?;
        create_test_server_with_state(routes(), state).await
    }

    fn contact_form() -> ContactForm {
        ContactForm {
            first_name: Some("Sara".into()),
            last_name: Some("Haddad".into()),
            email: Some("sara@example.com".into()),
            phone: Some("+971 50 123 4567".into()),
            subject: Some("corporate".into()),
            message: Some("I would like to discuss a shareholder agreement.".into()),
            recaptcha_token: Some("token".into()),
        }
    }

    fn application_form() -> MultipartForm {
        MultipartForm::new()
            .add_text("firstName", "Omar")
            .add_text("lastName", "Khalil")
            .add_text("email", "omar@example.com")
            .add_text("phone", "+966501234567")
            .add_text("job", "Legal Counsel")
            .add_text("coverLetter", "Ten years of practice.")
            .add_text("recaptchaToken", "token")
    }

    #[tokio::test]
    async fn contact_is_sent_to_the_office() -> anyhow::Result<()> {
        let email = MockEmailProvider::new();
        let server = server(&email, MockCaptchaProvider::human()).await?;

        let response = server.post("/api/en/contact").form(&contact_form()).await;
        response.assert_status_ok();
        let body = response.json::<Submission>();
        assert_eq!(body.status, SubmissionStatus::Success);

        let sent = email.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New Consultation: Corporate Law");
        assert_eq!(sent[0].to[0].email, "office@hoodbinadel.com");
        assert_eq!(sent[0].sender.email, "website@hoodbinadel.com");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_contact_reports_every_field() -> anyhow::Result<()> {
        let email = MockEmailProvider::new();
        let server = server(&email, MockCaptchaProvider::human()).await?;

        let form = ContactForm {
            first_name: Some("S".into()),
            email: Some("not-an-email".into()),
            phone: Some("0501234567".into()),
            subject: Some("family".into()),
            message: Some("Hi".into()),
            recaptcha_token: None,
            ..contact_form()
        };

        let response = server.post("/api/ar/contact").form(&form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Submission>();
        assert_eq!(body.status, SubmissionStatus::ValidationFailed);
        assert_eq!(body.errors["firstName"], ["too_short_name"]);
        assert_eq!(body.errors["email"], ["invalid_email"]);
        assert_eq!(body.errors["phone"], ["invalid_phone"]);
        assert_eq!(body.errors["subject"], ["invalid_subject"]);
        assert_eq!(body.errors["message"], ["message_too_short"]);
        assert_eq!(body.errors["recaptchaToken"], ["recaptcha_required"]);
        assert!(!body.errors.contains_key("lastName"));
        assert!(email.sent().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn low_score_is_rejected_as_bot() -> anyhow::Result<()> {
        let email = MockEmailProvider::new();
        let server = server(&email, MockCaptchaProvider::with_score(0.2)).await?;

        let response = server.post("/api/en/contact").form(&contact_form()).await;
        response.assert_status_forbidden();
        assert_eq!(response.json::<Submission>().status, SubmissionStatus::BotDetected);
        assert!(email.sent().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_verifier_is_rejected_as_bot() -> anyhow::Result<()> {
        let email = MockEmailProvider::new();
        let captcha = MockCaptchaProvider::failing(ServiceErrorKind::NetworkError);
        let server = server(&email, captcha).await?;

        let response = server.post("/api/en/contact").form(&contact_form()).await;
        response.assert_status_forbidden();
        assert!(email.sent().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn delivery_failure_is_a_server_error() -> anyhow::Result<()> {
        let email = MockEmailProvider::failing(ServiceErrorKind::ExternalError);
        let server = server(&email, MockCaptchaProvider::human()).await?;

        let response = server.post("/api/ar/contact").form(&contact_form()).await;
        response.assert_status_internal_server_error();
        assert_eq!(response.json::<Submission>().status, SubmissionStatus::ServerError);
        Ok(())
    }

    #[tokio::test]
    async fn contact_in_unknown_language_is_not_found() -> anyhow::Result<()> {
        let email = MockEmailProvider::new();
        let server = server(&email, MockCaptchaProvider::human()).await?;

        server
            .post("/api/fr/contact")
            .form(&contact_form())
            .await
            .assert_status_not_found();
        assert!(email.sent().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn application_with_resume_is_sent() -> anyhow::Result<()> {
        let email = MockEmailProvider::new();
        let server = server(&email, MockCaptchaProvider::human()).await?;

        let resume = Part::bytes(b"%PDF-1.7 resume".to_vec())
            .file_name("Resume.PDF")
            .mime_type("application/pdf");
        let form = application_form().add_part("resume", resume);

        let response = server.post("/api/ar/careers/apply").multipart(form).await;
        response.assert_status_ok();

        let sent = email.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "طلب توظيف جديد: Legal Counsel");
        assert_eq!(sent[0].attachments.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn application_rejects_non_pdf_resume() -> anyhow::Result<()> {
        let email = MockEmailProvider::new();
        let server = server(&email, MockCaptchaProvider::human()).await?;

        let resume = Part::bytes(b"plain text".to_vec())
            .file_name("resume.txt")
            .mime_type("text/plain");
        let form = application_form().add_part("resume", resume);

        let response = server.post("/api/en/careers/apply").multipart(form).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Submission>();
        assert_eq!(body.errors["resume"], ["invalid_file_type"]);
        assert!(email.sent().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn application_requires_a_captcha_pass() -> anyhow::Result<()> {
        let email = MockEmailProvider::new();
        let server = server(&email, MockCaptchaProvider::invalid()).await?;

        let response = server
            .post("/api/en/careers/apply")
            .multipart(application_form())
            .await;
        response.assert_status_forbidden();
        assert!(email.sent().is_empty());
        Ok(())
    }
}
