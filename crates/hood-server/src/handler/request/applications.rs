//! Job application request types.

use bytes::Bytes;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use super::validations::{check_email, check_name, check_phone, reject, require, validate_resume};
use crate::extract::Multipart;
use crate::handler::Result;

/// Résumé file attached to an application.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    /// File name as sent by the browser.
    pub file_name: String,
    /// File content.
    pub content: Bytes,
}

/// Raw job application as posted by the careers page.
///
/// The form is sent as `multipart/form-data`. The schema below documents
/// its text fields; `resume` is an optional PDF file part.
#[must_use]
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Title of the job applied for.
    pub job: Option<String>,
    /// Free-form cover letter, one paragraph per line.
    pub cover_letter: Option<String>,
    /// reCAPTCHA v3 token generated by the page.
    pub recaptcha_token: Option<String>,
    #[serde(skip)]
    #[schemars(skip)]
    pub resume: Option<ResumeUpload>,
}

/// Job application that passed validation.
#[derive(Debug, Clone)]
pub struct ApplicationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub job: String,
    pub cover_letter: Option<String>,
    pub resume: Option<ResumeUpload>,
    pub recaptcha_token: String,
}

impl ApplicationForm {
    /// Reads the form out of a multipart body.
    ///
    /// Unknown parts are skipped. A file part with neither a name nor content
    /// is how browsers send an empty file input, and counts as no résumé.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == "resume" {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let content = field.bytes().await?;
                if !file_name.is_empty() || !content.is_empty() {
                    form.resume = Some(ResumeUpload { file_name, content });
                }
                continue;
            }

            let slot = match name.as_str() {
                "firstName" => &mut form.first_name,
                "lastName" => &mut form.last_name,
                "email" => &mut form.email,
                "phone" => &mut form.phone,
                "job" => &mut form.job,
                "coverLetter" => &mut form.cover_letter,
                "recaptchaToken" => &mut form.recaptcha_token,
                _ => continue,
            };

            *slot = Some(field.text().await?);
        }

        Ok(form)
    }

    /// Validates every field and collects all failures.
    pub fn validate(self) -> Result<ApplicationRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let first_name = check_name(&mut errors, "firstName", self.first_name);
        let last_name = check_name(&mut errors, "lastName", self.last_name);
        let email = check_email(&mut errors, "email", self.email);
        let phone = check_phone(&mut errors, "phone", self.phone);
        let job = require(&mut errors, "job", self.job, "job_required");
        let recaptcha_token = require(
            &mut errors,
            "recaptchaToken",
            self.recaptcha_token,
            "recaptcha_required",
        );

        if let Some(resume) = &self.resume
            && let Some(code) = validate_resume(&resume.file_name, &resume.content)
        {
            reject(&mut errors, "resume", code);
        }

        match (first_name, last_name, email, phone, job, recaptcha_token) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(phone),
                Some(job),
                Some(recaptcha_token),
            ) if errors.is_empty() => Ok(ApplicationRequest {
                first_name,
                last_name,
                email,
                phone,
                job,
                cover_letter: self.cover_letter.filter(|letter| !letter.is_empty()),
                resume: self.resume,
                recaptcha_token,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ApplicationForm {
        ApplicationForm {
            first_name: Some("Omar".into()),
            last_name: Some("Khalid".into()),
            email: Some("omar@example.com".into()),
            phone: Some("+974 3312 3456".into()),
            job: Some("Legal Counsel".into()),
            cover_letter: Some(String::new()),
            recaptcha_token: Some("token".into()),
            resume: None,
        }
    }

    #[test]
    fn accepts_application_without_resume() -> anyhow::Result<()> {
        let request = valid_form()
            .validate()
            .map_err(|e| anyhow::anyhow!("{e}"))?;

        assert_eq!(request.job, "Legal Counsel");
        assert!(request.cover_letter.is_none());
        assert!(request.resume.is_none());
        Ok(())
    }

    #[test]
    fn rejects_non_pdf_resume() {
        let form = ApplicationForm {
            resume: Some(ResumeUpload {
                file_name: "cv.docx".into(),
                content: Bytes::from_static(b"PK\x03\x04"),
            }),
            ..valid_form()
        };

        let errors = form.validate().err().unwrap_or_default();
        let codes: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(_, list)| list.iter().map(|e| e.code.to_string()).collect::<Vec<_>>())
            .collect();
        assert_eq!(codes, ["invalid_file_type"]);
    }

    #[test]
    fn missing_job_uses_its_own_code() {
        let form = ApplicationForm {
            job: None,
            ..valid_form()
        };

        let errors = form.validate().err().unwrap_or_default();
        let job = errors
            .field_errors()
            .into_iter()
            .find(|(name, _)| name.to_string() == "job")
            .map(|(_, list)| list[0].code.to_string());
        assert_eq!(job.as_deref(), Some("job_required"));
    }
}
