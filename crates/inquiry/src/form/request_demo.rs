use std::str::FromStr;

use serde::Deserialize;
use validator::Validate;

use super::{EMAIL_PATTERN, Inquiry, Payload, optional, present};
use crate::{Recipient, TeamSize, UseCase};

#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoRequestPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub team_size: Option<String>,
    pub use_case: Option<String>,
    pub message: Option<String>,
}

#[derive(Validate, Debug, Clone, PartialEq, Eq)]
pub struct DemoRequest {
    pub first_name: String,
    pub last_name: String,
    #[validate(regex(path = *EMAIL_PATTERN))]
    pub email: String,
    pub company: String,
    pub job_title: Option<String>,
    pub team_size: String,
    pub use_case: String,
    pub message: Option<String>,
}

impl DemoRequest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn team_size_label(&self) -> &str {
        TeamSize::from_str(&self.team_size)
            .map_or(self.team_size.as_str(), |size| size.label())
    }

    pub fn use_case_label(&self) -> &str {
        UseCase::from_str(&self.use_case).map_or(self.use_case.as_str(), |use_case| use_case.label())
    }
}

impl Payload for DemoRequestPayload {
    type Inquiry = DemoRequest;

    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "firstName",
        "lastName",
        "email",
        "company",
        "teamSize",
        "useCase",
    ];

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "firstName" => present(&self.first_name),
            "lastName" => present(&self.last_name),
            "email" => present(&self.email),
            "company" => present(&self.company),
            "jobTitle" => present(&self.job_title),
            "teamSize" => present(&self.team_size),
            "useCase" => present(&self.use_case),
            "message" => present(&self.message),
            _ => None,
        }
    }

    fn build(self) -> DemoRequest {
        DemoRequest {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            job_title: optional(self.job_title),
            team_size: self.team_size.unwrap_or_default(),
            use_case: self.use_case.unwrap_or_default(),
            message: optional(self.message),
        }
    }
}

impl Inquiry for DemoRequest {
    fn recipient(&self) -> Recipient {
        Recipient::Sales
    }

    fn subject(&self) -> String {
        format!("Demo Request: {} - {}", self.company, self.full_name())
    }

    fn reply_to(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> DemoRequest {
        DemoRequest {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            company: "Analytical Engines".to_owned(),
            job_title: None,
            team_size: "6-20".to_owned(),
            use_case: "fraud-investigation".to_owned(),
            message: None,
        }
    }

    #[test]
    fn always_routes_to_sales() {
        let mut request = request();
        assert_eq!(request.recipient(), Recipient::Sales);

        request.use_case = "corporate-security".to_owned();
        assert_eq!(request.recipient(), Recipient::Sales);
    }

    #[test]
    fn subject_names_company_and_contact() {
        assert_eq!(
            request().subject(),
            "Demo Request: Analytical Engines - Ada Lovelace"
        );
    }

    #[test]
    fn labels_fall_back_to_raw_values() {
        let mut request = request();
        assert_eq!(request.team_size_label(), "6-20 analysts");
        assert_eq!(request.use_case_label(), "Fraud Investigation");

        request.team_size = "500".to_owned();
        request.use_case = "curiosity".to_owned();
        assert_eq!(request.team_size_label(), "500");
        assert_eq!(request.use_case_label(), "curiosity");
    }
}
