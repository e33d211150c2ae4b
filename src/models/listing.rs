// src/models/listing.rs
use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Food category offered by the listing forms.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Fruits,
    Vegetables,
    Grains,
    Dairy,
    Meat,
    Cooked,
    Packaged,
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Fruits,
        Category::Vegetables,
        Category::Grains,
        Category::Dairy,
        Category::Meat,
        Category::Cooked,
        Category::Packaged,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fruits => "fruits",
            Category::Vegetables => "vegetables",
            Category::Grains => "grains",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Cooked => "cooked",
            Category::Packaged => "packaged",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::Grains => "Grains",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Cooked => "Cooked Food",
            Category::Packaged => "Packaged",
            Category::Other => "Other",
        }
    }

    /// Parses the value of a `<select>`; an empty value means "all categories".
    pub fn from_form_value(value: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    #[default]
    Available,
    Claimed,
    Completed,
    Expired,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Claimed => "claimed",
            ListingStatus::Completed => "completed",
            ListingStatus::Expired => "expired",
        }
    }

    pub fn from_form_value(value: &str) -> Option<ListingStatus> {
        match value {
            "available" => Some(ListingStatus::Available),
            "claimed" => Some(ListingStatus::Claimed),
            "completed" => Some(ListingStatus::Completed),
            "expired" => Some(ListingStatus::Expired),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PickupWindow {
    pub start_time: String, // "HH:MM"
    pub end_time: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PickupLocation {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
}

/// Donor reference as populated on a listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DonorSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_ratings: u32,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl DonorSummary {
    /// "4.5 ★ (12 ratings)", or a placeholder before the first rating.
    pub fn rating_summary(&self) -> String {
        match self.average_rating {
            Some(average) => format!("{average:.1} ★ ({} ratings)", self.total_ratings),
            None => "No ratings yet".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "foodName")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    /// Category exactly as the server sent it; see [`Listing::category`].
    #[serde(rename = "category", default)]
    pub category_name: String,
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub pickup_time: Option<PickupWindow>,
    #[serde(default)]
    pub pickup_location: Option<PickupLocation>,
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub dietary: Vec<String>,
    #[serde(default)]
    pub pickup_instructions: Option<String>,
    pub status: ListingStatus,
    #[serde(default)]
    pub donor: Option<DonorSummary>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Known categories map to their variant, anything else is `Other`.
    pub fn category(&self) -> Category {
        Category::from_form_value(&self.category_name.trim().to_lowercase())
            .unwrap_or(Category::Other)
    }

    pub fn city(&self) -> &str {
        self.pickup_location.as_ref().map(|l| l.city.as_str()).unwrap_or("")
    }

    pub fn state(&self) -> &str {
        self.pickup_location.as_ref().map(|l| l.state.as_str()).unwrap_or("")
    }

    /// Lower-cased text the free-text search runs against.
    pub fn search_haystack(&self) -> String {
        [
            self.name.as_str(),
            self.category_name.as_str(),
            self.description.as_str(),
            self.city(),
            self.state(),
        ]
        .iter()
        .filter(|field| !field.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }

    /// First 100 characters of the description, as shown on cards.
    pub fn short_description(&self) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(100).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.donor.as_ref().is_some_and(|d| d.id == user_id)
    }
}

/// Body of create and update calls.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub food_name: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub category: Category,
    pub expiry_date: NaiveDate,
    pub pickup_time: PickupWindow,
    pub pickup_location: PickupLocation,
    pub allergens: Vec<String>,
    pub dietary: Vec<String>,
    pub pickup_instructions: String,
}

/// Form state shared by the create and edit pages. Numeric and date fields stay
/// as typed until [`ListingDraft::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDraft {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub unit: String,
    pub category: Category,
    pub expiry_date: String,
    pub pickup_time: PickupWindow,
    pub pickup_location: PickupLocation,
    /// Comma-separated, as typed.
    pub allergens: String,
    pub pickup_instructions: String,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            quantity: String::new(),
            unit: "pieces".to_string(),
            category: Category::Fruits,
            expiry_date: String::new(),
            pickup_time: PickupWindow {
                start_time: "09:00".to_string(),
                end_time: "17:00".to_string(),
            },
            pickup_location: PickupLocation::default(),
            allergens: String::new(),
            pickup_instructions: String::new(),
        }
    }
}

impl ListingDraft {
    /// Loads an existing listing for editing.
    pub fn from_listing(listing: &Listing) -> Self {
        let defaults = Self::default();
        Self {
            name: listing.name.clone(),
            description: listing.description.clone(),
            quantity: listing.quantity.to_string(),
            unit: listing.unit.clone(),
            category: listing.category(),
            expiry_date: listing.expiry_date.date_naive().to_string(),
            pickup_time: listing.pickup_time.clone().unwrap_or(defaults.pickup_time),
            pickup_location: listing.pickup_location.clone().unwrap_or_default(),
            allergens: listing.allergens.join(", "),
            pickup_instructions: listing.pickup_instructions.clone().unwrap_or_default(),
        }
    }

    /// Name, a positive quantity and an expiry date are required.
    pub fn validate(&self) -> Result<NewListing, ValidationError> {
        let name = self.name.trim();
        let quantity = self.quantity.trim().parse::<f64>().ok().filter(|q| *q > 0.0);
        let expiry = NaiveDate::parse_from_str(self.expiry_date.trim(), "%Y-%m-%d").ok();
        let (Some(quantity), Some(expiry_date)) = (quantity, expiry) else {
            return Err(ValidationError::MissingRequiredFields);
        };
        if name.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }

        Ok(NewListing {
            food_name: name.to_string(),
            description: self.description.trim().to_string(),
            quantity,
            unit: self.unit.clone(),
            category: self.category,
            expiry_date,
            pickup_time: self.pickup_time.clone(),
            pickup_location: self.pickup_location.clone(),
            allergens: self
                .allergens
                .split(',')
                .map(str::trim)
                .filter(|a| !a.is_empty())
                .map(str::to_string)
                .collect(),
            dietary: Vec::new(),
            pickup_instructions: self.pickup_instructions.trim().to_string(),
        })
    }
}
