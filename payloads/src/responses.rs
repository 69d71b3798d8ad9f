use crate::{AdId, PropertyDraft, RentalType};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored file attached to an ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub url: String,
    pub key: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// An ad as returned by the backend.
///
/// Fields the frontend never reads (ratings, owner details, documents) are
/// dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: AdId,
    pub title: String,
    pub description: String,
    pub rental_type: RentalType,
    pub property: PropertyDraft,
    #[serde(default)]
    pub pictures: Vec<MediaInfo>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One page of the public listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdPage {
    pub results: Vec<Ad>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

impl AdPage {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Landlord,
    Traveler,
    ServiceProvider,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub is_email_verified: bool,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Only landlords and admins may publish listings.
    pub fn can_publish_ads(&self) -> bool {
        matches!(self.role, UserRole::Landlord | UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ad_ignores_fields_it_does_not_model() {
        let ad: Ad = serde_json::from_value(json!({
            "id": "66b1f0",
            "title": "Cottage near the lake",
            "description": "Quiet cottage",
            "rentalType": "entire_home",
            "property": {
                "type": "cottage",
                "price": { "amount": 120.0, "currency": "EUR", "unit": "night" },
                "capacity": {
                    "rooms": 3, "beds": 4, "bathrooms": 1,
                    "guests": { "adults": 4, "children": 2 }
                },
                "address": {
                    "country": "France", "city": "Annecy", "street": "1 rue du Lac",
                    "postal_code": 74000, "region": "Haute-Savoie",
                    "additionalInfo": ""
                },
                "livingArea": { "value": 90, "unit": "square_meter", "symbol": "m²" },
                "landArea": { "value": 400, "unit": "square_meter", "symbol": "m²" },
                "amenities": { "wifi": true },
                "ownerInfo": { "id": "u1", "email": "a@b.c", "fullname": "A B" }
            },
            "pictures": [{ "url": "https://cdn/x.png", "key": "x.png" }],
            "documents": [],
            "isVerified": false,
            "active": true,
            "deleted": false,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-02T10:00:00.000Z",
            "__v": 0
        }))
        .unwrap();

        assert_eq!(ad.id, AdId::from("66b1f0"));
        assert!(ad.property.amenities.wifi);
        assert!(!ad.property.amenities.pool);
        assert_eq!(ad.pictures.len(), 1);
        assert!(ad.active);
    }

    #[test]
    fn only_landlords_and_admins_publish() {
        let mut profile = UserProfile {
            id: "u1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            role: UserRole::Traveler,
            phone: None,
            is_email_verified: true,
        };
        assert!(!profile.can_publish_ads());
        profile.role = UserRole::Landlord;
        assert!(profile.can_publish_ads());
        assert_eq!(profile.display_name(), "Ada Lovelace");
    }

    #[test]
    fn listing_page_knows_its_neighbours() {
        let page: AdPage = serde_json::from_value(json!({
            "results": [],
            "totalItems": 25,
            "totalPages": 3,
            "currentPage": 1
        }))
        .unwrap();
        assert!(!page.has_previous());
        assert!(page.has_next());

        let last = AdPage { current_page: 3, ..page };
        assert!(last.has_previous());
        assert!(!last.has_next());
    }
}
