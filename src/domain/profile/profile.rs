//! Applicant profile - the factual data used for direct field filling.

use serde::{Deserialize, Serialize};

/// Profile field addressed by the field mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKey {
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    Country,
    Linkedin,
    Portfolio,
    Github,
    Website,
}

impl ProfileKey {
    /// Returns all profile keys.
    pub fn all() -> &'static [ProfileKey] {
        &[
            ProfileKey::FirstName,
            ProfileKey::LastName,
            ProfileKey::FullName,
            ProfileKey::Email,
            ProfileKey::Phone,
            ProfileKey::Address,
            ProfileKey::City,
            ProfileKey::State,
            ProfileKey::ZipCode,
            ProfileKey::Country,
            ProfileKey::Linkedin,
            ProfileKey::Portfolio,
            ProfileKey::Github,
            ProfileKey::Website,
        ]
    }

    /// Returns the storage field name for this key.
    pub fn field_name(&self) -> &'static str {
        match self {
            ProfileKey::FirstName => "first_name",
            ProfileKey::LastName => "last_name",
            ProfileKey::FullName => "full_name",
            ProfileKey::Email => "email",
            ProfileKey::Phone => "phone",
            ProfileKey::Address => "address",
            ProfileKey::City => "city",
            ProfileKey::State => "state",
            ProfileKey::ZipCode => "zip_code",
            ProfileKey::Country => "country",
            ProfileKey::Linkedin => "linkedin",
            ProfileKey::Portfolio => "portfolio",
            ProfileKey::Github => "github",
            ProfileKey::Website => "website",
        }
    }
}

impl std::fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Factual applicant data for direct filling.
///
/// Empty strings mean "not provided"; lookups through [`fill_value`]
/// normalize them to `None` so empty values never overwrite a field.
///
/// [`fill_value`]: ApplicantProfile::fill_value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub portfolio: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub website: String,
}

impl ApplicantProfile {
    /// Returns the stored field for a key, as written.
    ///
    /// This is the value the field mapping gates on; use [`fill_value`]
    /// for the text actually written into a form.
    ///
    /// [`fill_value`]: ApplicantProfile::fill_value
    pub fn stored_value(&self, key: ProfileKey) -> &str {
        match key {
            ProfileKey::FirstName => &self.first_name,
            ProfileKey::LastName => &self.last_name,
            ProfileKey::FullName => &self.full_name,
            ProfileKey::Email => &self.email,
            ProfileKey::Phone => &self.phone,
            ProfileKey::Address => &self.address,
            ProfileKey::City => &self.city,
            ProfileKey::State => &self.state,
            ProfileKey::ZipCode => &self.zip_code,
            ProfileKey::Country => &self.country,
            ProfileKey::Linkedin => &self.linkedin,
            ProfileKey::Portfolio => &self.portfolio,
            ProfileKey::Github => &self.github,
            ProfileKey::Website => &self.website,
        }
    }

    /// Returns the non-empty fill value for a profile key.
    ///
    /// Full names are always derived from first and last name; the
    /// stored `full_name` field only gates the mapping and is never
    /// written out itself.
    pub fn fill_value(&self, key: ProfileKey) -> Option<String> {
        let value = match key {
            ProfileKey::FullName => format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_string(),
            _ => self.stored_value(key).to_string(),
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}
