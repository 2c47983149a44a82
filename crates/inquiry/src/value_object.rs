use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Team mailboxes that receive inquiry notifications.
#[derive(Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Recipient {
    Sales,
    Support,
    Security,
    Press,
    General,
}

impl Recipient {
    pub fn address(self) -> &'static str {
        match self {
            Recipient::Sales => "sales@clerint.org",
            Recipient::Support => "support@clerint.org",
            Recipient::Security => "security@clerint.org",
            Recipient::Press => "press@clerint.org",
            Recipient::General => "contact@clerint.org",
        }
    }
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum InquiryType {
    Sales,
    Support,
    Security,
    Press,
    General,
}

impl InquiryType {
    pub fn recipient(self) -> Recipient {
        match self {
            InquiryType::Sales => Recipient::Sales,
            InquiryType::Support => Recipient::Support,
            InquiryType::Security => Recipient::Security,
            InquiryType::Press => Recipient::Press,
            InquiryType::General => Recipient::General,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::Sales => "Product briefings & sales",
            InquiryType::Support => "Customer success",
            InquiryType::Security => "Security & responsible disclosure",
            InquiryType::Press => "Media & partnerships",
            InquiryType::General => "General inquiry",
        }
    }
}

/// Analyst headcount bucket selected on the demo form.
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamSize {
    #[strum(serialize = "1-5")]
    UpToFive,
    #[strum(serialize = "6-20")]
    UpToTwenty,
    #[strum(serialize = "21-50")]
    UpToFifty,
    #[strum(serialize = "51-100")]
    UpToHundred,
    #[strum(serialize = "100+")]
    OverHundred,
}

impl TeamSize {
    pub fn label(self) -> &'static str {
        match self {
            TeamSize::UpToFive => "1-5 analysts",
            TeamSize::UpToTwenty => "6-20 analysts",
            TeamSize::UpToFifty => "21-50 analysts",
            TeamSize::UpToHundred => "51-100 analysts",
            TeamSize::OverHundred => "100+ analysts",
        }
    }
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum UseCase {
    ThreatIntelligence,
    SecurityOperations,
    FraudInvestigation,
    CorporateSecurity,
    GovernmentIntelligence,
    DueDiligence,
    Other,
}

impl UseCase {
    pub fn label(self) -> &'static str {
        match self {
            UseCase::ThreatIntelligence => "Threat Intelligence",
            UseCase::SecurityOperations => "Security Operations",
            UseCase::FraudInvestigation => "Fraud Investigation",
            UseCase::CorporateSecurity => "Corporate Security",
            UseCase::GovernmentIntelligence => "Government Intelligence",
            UseCase::DueDiligence => "Due Diligence / Risk Assessment",
            UseCase::Other => "Other",
        }
    }
}
