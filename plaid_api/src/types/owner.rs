use serde::{Deserialize, Serialize};

/// Identity data for one account holder.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Owner {
    #[serde(default)]
    pub names: Vec<String>,

    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumber>,

    #[serde(default)]
    pub emails: Vec<Email>,

    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl Owner {
    pub fn primary_email(&self) -> Option<&Email> {
        self.emails.iter().find(|e| e.primary)
    }

    pub fn primary_phone_number(&self) -> Option<&PhoneNumber> {
        self.phone_numbers.iter().find(|p| p.primary)
    }

    pub fn primary_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.primary)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PhoneNumber {
    pub data: String,

    #[serde(default)]
    pub primary: bool,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub phone_type: Option<PhoneNumberType>,
}

/// Phone number category. Values this client does not know are kept verbatim
/// in `Unknown` and written back unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum PhoneNumberType {
    Home,
    Work,
    Office,
    Mobile,
    Mobile1,
    Other,
    Unknown(String),
}

impl From<String> for PhoneNumberType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "home" => PhoneNumberType::Home,
            "work" => PhoneNumberType::Work,
            "office" => PhoneNumberType::Office,
            "mobile" => PhoneNumberType::Mobile,
            "mobile1" => PhoneNumberType::Mobile1,
            "other" => PhoneNumberType::Other,
            _ => PhoneNumberType::Unknown(s),
        }
    }
}

impl From<PhoneNumberType> for String {
    fn from(t: PhoneNumberType) -> Self {
        match t {
            PhoneNumberType::Home => "home".to_string(),
            PhoneNumberType::Work => "work".to_string(),
            PhoneNumberType::Office => "office".to_string(),
            PhoneNumberType::Mobile => "mobile".to_string(),
            PhoneNumberType::Mobile1 => "mobile1".to_string(),
            PhoneNumberType::Other => "other".to_string(),
            PhoneNumberType::Unknown(s) => s,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Email {
    pub data: String,

    #[serde(default)]
    pub primary: bool,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub email_type: Option<EmailType>,
}

/// Email category, with the same pass-through for unknown values as
/// [`PhoneNumberType`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum EmailType {
    Primary,
    Secondary,
    Other,
    Unknown(String),
}

impl From<String> for EmailType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "primary" => EmailType::Primary,
            "secondary" => EmailType::Secondary,
            "other" => EmailType::Other,
            _ => EmailType::Unknown(s),
        }
    }
}

impl From<EmailType> for String {
    fn from(t: EmailType) -> Self {
        match t {
            EmailType::Primary => "primary".to_string(),
            EmailType::Secondary => "secondary".to_string(),
            EmailType::Other => "other".to_string(),
            EmailType::Unknown(s) => s,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Address {
    pub data: AddressData,

    #[serde(default)]
    pub primary: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AddressData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default)]
    pub street: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
