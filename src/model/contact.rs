use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Latitude/longitude pair attached to an address.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A postal address as returned by the directory.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub postal_code: String,
    pub coordinates: Option<Coordinates>,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub department: String,
    pub name: String,
    pub title: String,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Hair {
    pub color: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

/// A remote directory entry. Immutable once fetched.
///
/// Identity and reachability fields are required; everything else is display
/// data and defaults to empty when the service omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Id<Contact>,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub maiden_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub hair: Option<Hair>,
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl Contact {
    /// Minimal contact, mostly useful for fixtures.
    pub fn new(id: u64, first_name: &str, last_name: &str) -> Self {
        Self {
            id: Id::new(id),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            phone: String::new(),
            email: String::new(),
            image: None,
            maiden_name: String::new(),
            username: String::new(),
            age: None,
            gender: String::new(),
            birth_date: String::new(),
            blood_group: String::new(),
            height: None,
            weight: None,
            eye_color: String::new(),
            hair: None,
            university: String::new(),
            address: None,
            company: None,
            role: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
