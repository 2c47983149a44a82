use askama::Template;
use clerint_inquiry::{ContactInquiry, DemoRequest, Inquiry, InquiryType};

/// HTML and plain-text bodies of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub text: String,
}

/// An inquiry that can be turned into a team notification.
pub trait Notification: Inquiry {
    /// Short form name used in logs.
    const FORM: &'static str;

    /// Returned to the submitter once the notification has been handed off.
    const ACCEPTED_MESSAGE: &'static str;

    /// Returned to the submitter on any failure other than validation.
    const FAILURE_MESSAGE: &'static str;

    fn render(&self) -> askama::Result<Rendered>;
}

/// Free text split on `\n`, rendered with `<br>` between lines.
fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[derive(Template)]
#[template(path = "emails/contact.html")]
struct ContactHtml<'a> {
    tagline: &'a str,
    name: &'a str,
    email: &'a str,
    organization: Option<&'a str>,
    inquiry_label: &'a str,
    subject: &'a str,
    message_lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactText<'a> {
    name: &'a str,
    email: &'a str,
    organization: Option<&'a str>,
    inquiry_label: &'a str,
    subject: &'a str,
    message: &'a str,
}

impl Notification for ContactInquiry {
    const FORM: &'static str = "contact";
    const ACCEPTED_MESSAGE: &'static str = "Message sent successfully";
    const FAILURE_MESSAGE: &'static str = "Failed to send message. Please try again later.";

    fn render(&self) -> askama::Result<Rendered> {
        let html = ContactHtml {
            tagline: self.kind().map_or("General Inquiry", InquiryType::label),
            name: &self.name,
            email: &self.email,
            organization: self.organization.as_deref(),
            inquiry_label: self.inquiry_label(),
            subject: &self.subject,
            message_lines: lines(&self.message),
        }
        .render()?;

        let text = ContactText {
            name: &self.name,
            email: &self.email,
            organization: self.organization.as_deref(),
            inquiry_label: self.inquiry_label(),
            subject: &self.subject,
            message: &self.message,
        }
        .render()?;

        Ok(Rendered { html, text })
    }
}

#[derive(Template)]
#[template(path = "emails/request_demo.html")]
struct DemoRequestHtml<'a> {
    first_name: &'a str,
    full_name: &'a str,
    email: &'a str,
    company: &'a str,
    job_title: Option<&'a str>,
    team_size: &'a str,
    use_case: &'a str,
    message_lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "emails/request_demo.txt")]
struct DemoRequestText<'a> {
    full_name: &'a str,
    email: &'a str,
    company: &'a str,
    job_title: Option<&'a str>,
    team_size: &'a str,
    use_case: &'a str,
    message: Option<&'a str>,
}

impl Notification for DemoRequest {
    const FORM: &'static str = "request-demo";
    const ACCEPTED_MESSAGE: &'static str = "Demo request submitted successfully";
    const FAILURE_MESSAGE: &'static str =
        "Failed to process demo request. Please try again later.";

    fn render(&self) -> askama::Result<Rendered> {
        let full_name = self.full_name();

        let html = DemoRequestHtml {
            first_name: &self.first_name,
            full_name: &full_name,
            email: &self.email,
            company: &self.company,
            job_title: self.job_title.as_deref(),
            team_size: self.team_size_label(),
            use_case: self.use_case_label(),
            message_lines: self.message.as_deref().map(lines).unwrap_or_default(),
        }
        .render()?;

        let text = DemoRequestText {
            full_name: &full_name,
            email: &self.email,
            company: &self.company,
            job_title: self.job_title.as_deref(),
            team_size: self.team_size_label(),
            use_case: self.use_case_label(),
            message: self.message.as_deref(),
        }
        .render()?;

        Ok(Rendered { html, text })
    }
}
