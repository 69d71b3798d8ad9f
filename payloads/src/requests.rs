use crate::{
    RentalType,
    responses::{UserProfile, UserRole},
    schema::FieldErrors,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Sign-up details. New accounts default to the traveler role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CreateAccount {
    /// Build an account from a single "full name" input. The first word is
    /// the first name and the rest is the last name.
    pub fn from_full_name(
        full_name: &str,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let full_name = full_name.trim();
        let (first_name, last_name) = match full_name.split_once(char::is_whitespace) {
            Some((first, rest)) => (first, rest.trim()),
            None => (full_name, ""),
        };
        Self {
            email: email.into(),
            password: password.into(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            role: UserRole::Traveler,
            phone: None,
        }
    }
}

/// Editable profile fields sent from the settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateProfile {
    pub const NAME_MIN_LEN: usize = 2;

    /// Trim the inputs and check them. Blank phone numbers are dropped.
    pub fn checked(mut self) -> Result<Self, FieldErrors> {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone = self
            .phone
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());

        let mut errors = FieldErrors::new();
        if self.first_name.chars().count() < Self::NAME_MIN_LEN {
            errors.insert("firstName", "First name must be at least 2 characters");
        }
        if self.last_name.chars().count() < Self::NAME_MIN_LEN {
            errors.insert("lastName", "Last name must be at least 2 characters");
        }
        if !is_plausible_email(&self.email) {
            errors.insert("email", "Invalid email");
        }
        if errors.is_empty() { Ok(self) } else { Err(errors) }
    }
}

impl From<&UserProfile> for UpdateProfile {
    fn from(profile: &UserProfile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone(),
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        })
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub struct ChangePassword {
    pub password: String,
}

impl ChangePassword {
    pub const MIN_LEN: usize = 3;

    pub fn new(password: &str, confirmation: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        if password.chars().count() < Self::MIN_LEN {
            errors.insert("newPassword", "Password must be at least 3 characters");
        }
        if password != confirmation {
            errors.insert("confirmPassword", "Passwords do not match");
        }
        if errors.is_empty() {
            Ok(Self {
                password: password.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Query string for the public ad listing.
///
/// Only active, non-deleted ads are ever requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_type: Option<RentalType>,
    pub active: bool,
    pub deleted: bool,
}

impl AdQuery {
    pub const PAGE_SIZE: u32 = 12;

    pub fn page(page: u32) -> Self {
        Self {
            page: page.max(1),
            ..Self::default()
        }
    }

    /// Blank search terms are dropped rather than sent as `search=`.
    pub fn with_search(mut self, search: &str) -> Self {
        let search = search.trim();
        self.search = (!search.is_empty()).then(|| search.to_string());
        self
    }
}

impl Default for AdQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::PAGE_SIZE,
            search: None,
            rental_type: None,
            active: true,
            deleted: false,
        }
    }
}

/// One image file sent as a part of the multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}
