pub mod ads;
pub mod api_client;
pub mod field_path;
pub mod requests;
pub mod responses;
pub mod schema;

pub use ads::{
    AdDraft, Address, Amenities, Capacity, Guests, LivingArea, MeasureSymbol,
    MeasureUnit, Price, PriceUnit, PropertyDraft, PropertyType, RentalType,
};
pub use api_client::{APIClient, ClientError};
pub use field_path::FieldPath;
pub use responses::Ad;
pub use schema::FieldErrors;

use secrecy::{ExposeSecret, SecretBox};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Upload limit for a single listing image (5 MiB).
pub const MAX_IMAGE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME types accepted for listing images.
pub const ACCEPTED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Whether a file with this size and MIME type may be staged for upload.
pub fn is_accepted_image(size: u64, mime_type: &str) -> bool {
    size <= MAX_IMAGE_SIZE && ACCEPTED_IMAGE_TYPES.contains(&mime_type)
}

/// Identifier assigned to an ad by the backend.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct AdId(pub String);

impl From<&str> for AdId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Backend-issued bearer credential.
///
/// The inner value never shows up in `Debug` output.
#[derive(Clone)]
pub struct BearerToken(Arc<SecretBox<String>>);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Arc::new(SecretBox::new(Box::new(token.into()))))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}

impl PartialEq for BearerToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for BearerToken {}
