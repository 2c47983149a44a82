use std::str::FromStr;

use serde::Deserialize;
use validator::Validate;

use super::{EMAIL_PATTERN, Inquiry, Payload, optional, present};
use crate::{InquiryType, Recipient};

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub inquiry_type: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Validate, Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    #[validate(regex(path = *EMAIL_PATTERN))]
    pub email: String,
    pub organization: Option<String>,
    /// Inquiry type as submitted; unknown values are kept for display.
    pub inquiry_type: String,
    pub subject: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn kind(&self) -> Option<InquiryType> {
        InquiryType::from_str(&self.inquiry_type).ok()
    }

    /// Human readable inquiry type, or the raw value when it is not a known one.
    pub fn inquiry_label(&self) -> &str {
        self.kind()
            .map_or(self.inquiry_type.as_str(), |kind| kind.label())
    }
}

impl Payload for ContactPayload {
    type Inquiry = ContactInquiry;

    const REQUIRED_FIELDS: &'static [&'static str] =
        &["name", "email", "inquiryType", "subject", "message"];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => present(&self.name),
            "email" => present(&self.email),
            "organization" => present(&self.organization),
            "inquiryType" => present(&self.inquiry_type),
            "subject" => present(&self.subject),
            "message" => present(&self.message),
            _ => None,
        }
    }

    fn build(self) -> ContactInquiry {
        ContactInquiry {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            organization: optional(self.organization),
            inquiry_type: self.inquiry_type.unwrap_or_default(),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
        }
    }
}

impl Inquiry for ContactInquiry {
    /// Unknown inquiry types land in the general inbox rather than being rejected.
    fn recipient(&self) -> Recipient {
        self.kind()
            .map_or(Recipient::General, InquiryType::recipient)
    }

    fn subject(&self) -> String {
        format!("[Contact Form] {}", self.subject)
    }

    fn reply_to(&self) -> &str {
        &self.email
    }
}
