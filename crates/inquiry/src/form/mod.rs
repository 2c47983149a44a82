use std::sync::LazyLock;

use regex::Regex;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{Recipient, Result, ValidationError};

mod contact;
mod request_demo;

pub use contact::{ContactInquiry, ContactPayload};
pub use request_demo::{DemoRequest, DemoRequestPayload};

pub(crate) static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Raw JSON body of a lead-capture form.
///
/// Every field is decoded as optional so that a missing key, `null` and `""`
/// all surface as the same [`ValidationError::MissingField`].
pub trait Payload: DeserializeOwned + Send + 'static {
    type Inquiry: Inquiry;

    /// Fields that must be present and non-empty, in the order they are checked.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Submitted value of a field by its wire name, `None` when absent or empty.
    fn field(&self, name: &str) -> Option<&str>;

    /// Moves the fields into the inquiry. Only called once every required field is present.
    fn build(self) -> Self::Inquiry;

    /// First entry of [`Self::REQUIRED_FIELDS`] without a value.
    fn missing_field(&self) -> Option<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|name| self.field(name).is_none())
    }

    /// Checks required fields in order, then the email format.
    fn into_inquiry(self) -> Result<Self::Inquiry> {
        if let Some(field) = self.missing_field() {
            return Err(ValidationError::MissingField(field));
        }

        let inquiry = self.build();
        inquiry
            .validate()
            .map_err(|_| ValidationError::InvalidEmail)?;

        Ok(inquiry)
    }
}

/// A validated submission, ready to be turned into a notification.
pub trait Inquiry: Validate + Send + Sync {
    fn recipient(&self) -> Recipient;

    fn subject(&self) -> String;

    /// Address replies to the notification should go to.
    fn reply_to(&self) -> &str;
}

pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
