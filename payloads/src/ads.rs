//! Typed ad records as accepted by the `POST /ads` endpoint.

use serde::{Deserialize, Serialize};

/// Defines a closed set of wire values with a display label per member.
///
/// Generates `ALL`, `WIRE_NAMES`, `as_str`, `label`, `from_wire` and a
/// `Display` impl printing the wire value.
macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => ($wire:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
            pub const WIRE_NAMES: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }

            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum! {
    /// How much of the property a guest gets.
    RentalType {
        EntireHome => ("entire_home", "Entire home"),
        PrivateRoom => ("private_room", "Private room"),
        SharedRoom => ("shared_room", "Shared room"),
        SharedHome => ("shared_home", "Shared home"),
    }
}

choice_enum! {
    PropertyType {
        House => ("house", "House"),
        Apartment => ("apartment", "Apartment"),
        Villa => ("villa", "Villa"),
        GuestHouse => ("guest_house", "Guest house"),
        Hotel => ("hotel", "Hotel"),
        Cottage => ("cottage", "Cottage"),
        Motorhome => ("motorhome", "Motorhome"),
    }
}

choice_enum! {
    /// Billing period the price amount refers to.
    PriceUnit {
        Night => ("night", "Night"),
        Day => ("day", "Day"),
        Week => ("week", "Week"),
        Month => ("month", "Month"),
        Year => ("year", "Year"),
    }
}

choice_enum! {
    MeasureUnit {
        SquareMeter => ("square_meter", "Square meters"),
        SquareFeet => ("square_feet", "Square feet"),
        Acre => ("acre", "Acres"),
        Hectare => ("hectare", "Hectares"),
    }
}

choice_enum! {
    MeasureSymbol {
        SquareMeter => ("m²", "m²"),
        SquareFeet => ("ft²", "ft²"),
        Acre => ("acre", "acre"),
        Hectare => ("ha", "ha"),
    }
}

impl MeasureUnit {
    /// The symbol conventionally shown next to a value in this unit.
    pub fn symbol(&self) -> MeasureSymbol {
        match self {
            Self::SquareMeter => MeasureSymbol::SquareMeter,
            Self::SquareFeet => MeasureSymbol::SquareFeet,
            Self::Acre => MeasureSymbol::Acre,
            Self::Hectare => MeasureSymbol::Hectare,
        }
    }
}

/// A fully validated ad ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdDraft {
    pub title: String,
    pub description: String,
    pub rental_type: RentalType,
    pub property: PropertyDraft,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDraft {
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: Price,
    pub capacity: Capacity,
    pub address: Address,
    pub living_area: LivingArea,
    #[serde(default)]
    pub amenities: Amenities,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    pub currency: String,
    pub unit: PriceUnit,
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} / {}",
            self.amount,
            self.currency,
            self.unit.label().to_lowercase()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capacity {
    pub rooms: u32,
    pub beds: u32,
    pub bathrooms: u32,
    pub guests: Guests,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guests {
    pub adults: u32,
    pub children: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub country: String,
    pub city: String,
    pub street: String,
    #[serde(rename = "postal_code")]
    pub postal_code: u32,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LivingArea {
    pub value: f64,
    pub unit: MeasureUnit,
    pub symbol: MeasureSymbol,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Amenities {
    pub wifi: bool,
    pub kitchen: bool,
    pub tv: bool,
    pub air_conditioning: bool,
    pub heating: bool,
    pub parking: bool,
    pub pool: bool,
    pub gym: bool,
    pub pet_friendly: bool,
    pub smoking_allowed: bool,
}

impl Amenities {
    /// Wire names and display labels, in form order.
    pub const FIELDS: &'static [(&'static str, &'static str)] = &[
        ("wifi", "Wifi"),
        ("kitchen", "Kitchen"),
        ("tv", "TV"),
        ("airConditioning", "Air conditioning"),
        ("heating", "Heating"),
        ("parking", "Parking"),
        ("pool", "Pool"),
        ("gym", "Gym"),
        ("petFriendly", "Pets allowed"),
        ("smokingAllowed", "Smoking allowed"),
    ];

    /// Labels of the amenities that are switched on.
    pub fn enabled_labels(&self) -> Vec<&'static str> {
        let flags = [
            self.wifi,
            self.kitchen,
            self.tv,
            self.air_conditioning,
            self.heating,
            self.parking,
            self.pool,
            self.gym,
            self.pet_friendly,
            self.smoking_allowed,
        ];
        Self::FIELDS
            .iter()
            .zip(flags)
            .filter(|(_, enabled)| *enabled)
            .map(|((_, label), _)| *label)
            .collect()
    }
}
