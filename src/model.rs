// Domain model shared by the store, the services and the orchestrator
//
// Field names serialize in camelCase so the JSON shapes match what the
// web client exchanges (careInstructions, sellerId, fullName, ...).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Kind of animal a listing is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PetType {
    Dog,
    Cat,
    Parrot,
    Rabbit,
    Other,
}

impl PetType {
    pub fn label(&self) -> &'static str {
        match self {
            PetType::Dog => "Dog",
            PetType::Cat => "Cat",
            PetType::Parrot => "Parrot",
            PetType::Rabbit => "Rabbit",
            PetType::Other => "Other",
        }
    }
}

impl Default for PetType {
    fn default() -> Self {
        Self::Dog
    }
}

impl fmt::Display for PetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Default for Gender {
    fn default() -> Self {
        Self::Male
    }
}

/// City/state pair, optionally decorated with a per-request distance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,

    /// Miles from the viewer; only set on snapshots, never on stored records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
}

impl Location {
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            distance: None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}

/// Coordinates reported by the host's location capability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareInstructions {
    pub feeding: String,
    pub grooming: String,
    pub exercise: String,
    pub medical_needs: String,
}

impl CareInstructions {
    pub fn is_empty(&self) -> bool {
        self.feeding.is_empty()
            && self.grooming.is_empty()
            && self.exercise.is_empty()
            && self.medical_needs.is_empty()
    }
}

/// A pet listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: u64,
    pub name: String,
    pub breed: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    /// Whole years; fractional ages are rejected on deserialize
    pub age: u32,
    pub gender: Gender,
    pub location: Location,
    pub description: String,
    pub care_instructions: CareInstructions,
    pub photos: Vec<String>,
    pub seller_id: u64,
}

impl Pet {
    /// Build a stored pet from listing data plus store-assigned identity
    pub fn from_listing(id: u64, seller_id: u64, listing: NewPetListing) -> Self {
        Self {
            id,
            name: listing.name,
            breed: listing.breed,
            pet_type: listing.pet_type,
            age: listing.age,
            gender: listing.gender,
            location: listing.location,
            description: listing.description,
            care_instructions: listing.care_instructions,
            photos: listing.photos,
            seller_id,
        }
    }

    /// Case-insensitive substring match on name, breed and type
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.breed.to_lowercase().contains(&query)
            || self.pet_type.label().to_lowercase().contains(&query)
    }
}

/// Everything needed to list a pet; id and seller are assigned by the service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPetListing {
    pub name: String,
    pub breed: String,
    #[serde(rename = "type")]
    pub pet_type: PetType,
    pub age: u32,
    pub gender: Gender,
    pub location: Location,
    pub description: String,
    pub care_instructions: CareInstructions,
    pub photos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub full_name: String,
    pub location: Location,
    pub contact_number: String,
    pub share_id: String,
    pub listings: Vec<u64>,
    pub purchase_history: Vec<u64>,
}

impl User {
    pub fn avatar_url(&self) -> String {
        format!("https://i.pravatar.cc/150?u={}", self.id)
    }
}

/// Search filter extension point
///
/// Keys are free-form; the mock service accepts any and applies none.
pub type SearchFilters = BTreeMap<String, serde_json::Value>;

/// Top-level pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Home,
    Profile,
    Purchases,
    About,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Profile => "Your Profile",
            Page::Purchases => "Your Pet Purchase List",
            Page::About => "About Us",
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::Home
    }
}
