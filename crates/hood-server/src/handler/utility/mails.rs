//! Office notification emails for the contact and application forms.
//!
//! Every value that comes from the visitor is HTML-escaped before it is
//! placed in the message body.

use hood_document::escape_html;
use hood_service::{EmailAddress, EmailAttachment, EmailMessage};
use jiff::Timestamp;
use unicode_bidi::Direction;

use crate::handler::request::{ApplicationRequest, ContactRequest};
use crate::service::MailConfig;

/// Recipient name of contact requests.
const OFFICE_RECIPIENT_NAME: &str = "Office";

/// Sender name of job applications.
const APPLICATION_SENDER_NAME: &str = "موقع هود بن عادل للمحاماة - طلب توظيف";

/// Recipient name of job applications.
const APPLICATION_RECIPIENT_NAME: &str = "إدارة الموارد البشرية";

/// Returns `rtl` or `ltr` from the first strong character of `text`.
///
/// Text without any strong character is `ltr`.
pub fn text_direction(text: &str) -> &'static str {
    match unicode_bidi::get_base_direction(text) {
        Direction::Rtl => "rtl",
        Direction::Ltr | Direction::Mixed => "ltr",
    }
}

/// Composes the consultation request sent to the office.
///
/// The language of the email follows the direction of the visitor's message.
pub fn contact_email(request: &ContactRequest, config: &MailConfig, sent_at: Timestamp) -> EmailMessage {
    let direction = text_direction(&request.message);
    let rtl = direction == "rtl";
    let align = if rtl { "right" } else { "left" };
    let subject_label = request.subject.label(rtl);

    let (heading, client, email, phone, subject, footer, prefix, sender_prefix) = if rtl {
        (
            "تفاصيل الاستشارة الواردة",
            "اسم العميل",
            "البريد الإلكتروني",
            "رقم الهاتف",
            "الموضوع",
            "تم الإرسال من الموقع الرسمي",
            "استشارة جديدة",
            "استشارة من",
        )
    } else {
        (
            "New Consultation Details",
            "Client Name",
            "Email",
            "Phone",
            "Subject",
            "Sent from the Official Website",
            "New Consultation",
            "Consultation from",
        )
    };

    let full_name = escape_html(&format!("{} {}", request.first_name, request.last_name));
    let html = format!(
        r##"<div dir="{direction}" style="font-family: 'Segoe UI', Tahoma, Geneva, sans-serif; line-height: 1.6; color: #333; text-align: {align}; max-width: 600px; margin: auto; border: 1px solid #eee; border-radius: 15px; overflow: hidden;">
  <div style="background: #1a1a1a; padding: 25px; text-align: center; border-bottom: 4px solid #d4af37;">
    <h2 style="color: #d4af37; margin: 0;">{heading}</h2>
  </div>
  <div style="padding: 30px; background: #ffffff;">
    <p><strong>{client}:</strong> {full_name}</p>
    <p><strong>{email}:</strong> {email_value}</p>
    <p><strong>{phone}:</strong> <span dir="ltr">{phone_value}</span></p>
    <hr style="border: 0; border-top: 1px solid #eee; margin: 20px 0;">
    <p style="color: #d4af37; font-weight: bold; font-size: 1.1em;">{subject}: {subject_label}</p>
    <div style="background: #f9f9f9; padding: 20px; border-radius: 10px; border-{align}: 5px solid #d4af37; white-space: pre-wrap; font-size: 15px;">{message}</div>
  </div>
  <div style="background: #f4f4f4; padding: 15px; text-align: center; font-size: 11px; color: #888; border-top: 1px solid #eee;">{footer} | {timestamp}</div>
</div>"##,
        email_value = escape_html(&request.email),
        phone_value = escape_html(&request.phone),
        message = escape_html(&request.message),
        timestamp = sent_at.strftime("%Y-%m-%d %H:%M UTC"),
    );

    let sender = EmailAddress::new(&config.sender_email).with_name(format!(
        "{sender_prefix} {} {}",
        request.first_name, request.last_name
    ));

    EmailMessage::new(sender, format!("{prefix}: {subject_label}"), html).with_recipient(
        EmailAddress::new(&config.office_receiver_email).with_name(OFFICE_RECIPIENT_NAME),
    )
}

/// Composes the job application sent to human resources.
///
/// Always written in Arabic. The résumé, if any, is attached as is.
pub fn application_email(request: &ApplicationRequest, config: &MailConfig) -> EmailMessage {
    let cover_letter = match request.cover_letter.as_deref() {
        Some(letter) => letter
            .split('\n')
            .map(|paragraph| {
                format!(
                    r#"<p style="text-align: justify; text-align-last: center; margin-bottom: 15px;">{}</p>"#,
                    escape_html(paragraph)
                )
            })
            .collect::<String>(),
        None => "<p>لم يتم تقديم خطاب توصية.</p>".to_owned(),
    };

    let html = format!(
        r##"<div dir="rtl" style="font-family: Arial, sans-serif; color: #1a1a1a; max-width: 600px; margin: 0 auto; border: 1px solid #e5e7eb; padding: 20px;">
  <h2 style="color: #1a237e; border-bottom: 2px solid #1a237e; padding-bottom: 10px; text-align: center;">طلب توظيف جديد</h2>
  <div style="background-color: #f8fafc; padding: 15px; border-radius: 5px; margin: 20px 0;">
    <h3 style="margin-top: 0; color: #1a237e;">بيانات المتقدم:</h3>
    <p><strong>الاسم:</strong> {full_name}</p>
    <p><strong>البريد الإلكتروني:</strong> {email}</p>
    <p><strong>رقم الهاتف:</strong> <span dir="ltr">{phone}</span></p>
    <p><strong>الوظيفة المستهدفة:</strong> {job}</p>
  </div>
  <div style="margin: 20px 0;">
    <h3 style="color: #1a237e;">خطاب التوصية:</h3>
    <div style="line-height: 1.6; color: #374151;">{cover_letter}</div>
  </div>
  <hr style="border: 0; border-top: 1px solid #e5e7eb; margin: 20px 0;">
  <p style="font-size: 12px; color: #6b7280; text-align: center;">تم إرسال هذا الطلب عبر الموقع الإلكتروني لشركة هود بن عادل للمحاماة.</p>
</div>"##,
        full_name = escape_html(&format!("{} {}", request.first_name, request.last_name)),
        email = escape_html(&request.email),
        phone = escape_html(&request.phone),
        job = escape_html(&request.job),
    );

    let sender = EmailAddress::new(&config.sender_email).with_name(APPLICATION_SENDER_NAME);
    let recipient =
        EmailAddress::new(&config.office_receiver_email).with_name(APPLICATION_RECIPIENT_NAME);

    let mut message = EmailMessage::new(sender, format!("طلب توظيف جديد: {}", request.job), html)
        .with_recipient(recipient);

    if let Some(resume) = &request.resume {
        message = message.with_attachment(EmailAttachment::new(
            resume.file_name.clone(),
            resume.content.clone(),
        ));
    }

    message
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::handler::request::{ConsultationSubject, ResumeUpload};

    fn config() -> MailConfig {
        MailConfig {
            sender_email: "website@hoodbinadel.com".into(),
            office_receiver_email: "office@hoodbinadel.com".into(),
        }
    }

    fn contact(message: &str) -> ContactRequest {
        ContactRequest {
            first_name: "Sara".into(),
            last_name: "Ahmed".into(),
            email: "sara@example.com".into(),
            phone: "+974 5555 1234".into(),
            subject: ConsultationSubject::Corporate,
            message: message.into(),
            recaptcha_token: "token".into(),
        }
    }

    fn application(cover_letter: Option<&str>) -> ApplicationRequest {
        ApplicationRequest {
            first_name: "Omar".into(),
            last_name: "Khalid".into(),
            email: "omar@example.com".into(),
            phone: "+974 3333 4444".into(),
            job: "Legal Counsel".into(),
            cover_letter: cover_letter.map(str::to_owned),
            resume: None,
            recaptcha_token: "token".into(),
        }
    }

    #[test]
    fn direction_from_first_strong_character() {
        assert_eq!(text_direction("مرحبا hello"), "rtl");
        assert_eq!(text_direction("hello مرحبا"), "ltr");
        assert_eq!(text_direction("123 ...  שלום"), "rtl");
        assert_eq!(text_direction("12345"), "ltr");
        assert_eq!(text_direction(""), "ltr");
    }

    #[test]
    fn english_contact_email() {
        let message = contact_email(
            &contact("I need advice on a <merger>."),
            &config(),
            Timestamp::UNIX_EPOCH,
        );

        assert_eq!(message.subject, "New Consultation: Corporate Law");
        assert_eq!(message.sender.email, "website@hoodbinadel.com");
        assert_eq!(message.sender.name.as_deref(), Some("Consultation from Sara Ahmed"));
        assert_eq!(message.to[0].email, "office@hoodbinadel.com");
        assert_eq!(message.to[0].name.as_deref(), Some("Office"));
        assert!(message.html_content.contains(r#"dir="ltr""#));
        assert!(message.html_content.contains("&lt;merger&gt;"));
        assert!(message.html_content.contains("Sent from the Official Website | 1970-01-01 00:00 UTC"));
    }

    #[test]
    fn arabic_contact_email() {
        let message = contact_email(
            &contact("أحتاج إلى استشارة بخصوص تأسيس شركة"),
            &config(),
            Timestamp::UNIX_EPOCH,
        );

        assert_eq!(message.subject, "استشارة جديدة: قانون الشركات");
        assert_eq!(message.sender.name.as_deref(), Some("استشارة من Sara Ahmed"));
        assert!(message.html_content.contains(r#"dir="rtl""#));
        assert!(message.html_content.contains("تفاصيل الاستشارة الواردة"));
        assert!(message.html_content.contains("border-right: 5px"));
    }

    #[test]
    fn application_email_paragraphs() {
        let message = application_email(&application(Some("First line\n<b>Second</b>")), &config());

        assert_eq!(message.subject, "طلب توظيف جديد: Legal Counsel");
        assert_eq!(message.to[0].name.as_deref(), Some("إدارة الموارد البشرية"));
        assert_eq!(
            message.html_content.matches("text-align-last: center").count(),
            2
        );
        assert!(message.html_content.contains("&lt;b&gt;Second&lt;/b&gt;"));
        assert!(message.attachments.is_empty());
    }

    #[test]
    fn application_email_without_cover_letter_attaches_resume() {
        let mut request = application(None);
        request.resume = Some(ResumeUpload {
            file_name: "cv.pdf".into(),
            content: Bytes::from_static(b"%PDF-1.7"),
        });

        let message = application_email(&request, &config());
        assert!(message.html_content.contains("لم يتم تقديم خطاب توصية."));
        assert_eq!(message.attachments.len(), 1);
        assert_eq!(message.attachments[0].name, "cv.pdf");
    }
}
