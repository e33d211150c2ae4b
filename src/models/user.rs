// src/models/user.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Donor,
    Ngo,
    Recipient,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Donor => "Donor",
            Role::Ngo => "NGO",
            Role::Recipient => "Recipient",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub total_ratings: u32,
}

/// Editable subset sent to `PUT /users/profile`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub phone: String,
    pub bio: String,
    pub address: Address,
}

impl ProfileUpdate {
    /// Form state hydrated from a loaded profile; missing fields become empty.
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            phone: profile.phone.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
            address: profile.address.clone().unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
}

/// Body returned by login and register.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// `{ user }` body returned by profile updates and image uploads.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UserEnvelope {
    pub user: UserProfile,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ngo {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_update_fills_missing_fields_with_blanks() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"_id":"abc","name":"Ravi","role":"ngo"}"#).unwrap();
        assert_eq!(profile.role, Role::Ngo);

        let update = ProfileUpdate::from_profile(&profile);
        assert_eq!(update.name, "Ravi");
        assert_eq!(update.phone, "");
        assert_eq!(update.address, Address::default());
    }

    #[test]
    fn missing_role_defaults_to_donor() {
        let profile: UserProfile = serde_json::from_str(r#"{"_id":"abc","name":"Ravi"}"#).unwrap();
        assert_eq!(profile.role, Role::Donor);
        assert_eq!(profile.total_ratings, 0);
    }
}
