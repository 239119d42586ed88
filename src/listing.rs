// Sell-form draft
//
// Holds what the user has typed so far and turns it into a NewPetListing.
// The AI helpers need a minimum of input before they are worth calling;
// those checks live here so every front end applies the same rules.

use crate::error::{PetConnectError, Result};
use crate::model::{CareInstructions, Gender, Location, NewPetListing, PetType};

/// In-progress listing as entered in the sell form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingDraft {
    pub name: String,
    pub breed: String,
    pub pet_type: PetType,
    pub age: u32,
    pub gender: Gender,
    /// Free text, expected as "City, ST"
    pub location: String,
    pub description: String,
    pub care_instructions: CareInstructions,
}

impl ListingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Description generation needs a name, a breed and a non-zero age
    pub fn check_description_inputs(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.breed.trim().is_empty() || self.age == 0 {
            return Err(PetConnectError::MissingFields(
                "Pet Name, Breed, and Age to generate a description.".to_string(),
            ));
        }
        Ok(())
    }

    /// Care generation needs a breed (the type always has a value)
    pub fn check_care_inputs(&self) -> Result<()> {
        if self.breed.trim().is_empty() {
            return Err(PetConnectError::MissingFields(
                "Breed and Type to generate care instructions.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn parsed_location(&self) -> Location {
        parse_location(&self.location)
    }

    pub fn photo_url(&self) -> String {
        format!(
            "https://picsum.photos/seed/{}/800/600",
            self.name.trim().to_lowercase()
        )
    }

    /// Snapshot the draft as submission data
    pub fn to_listing(&self) -> NewPetListing {
        NewPetListing {
            name: self.name.trim().to_string(),
            breed: self.breed.trim().to_string(),
            pet_type: self.pet_type,
            age: self.age,
            gender: self.gender,
            location: self.parsed_location(),
            description: self.description.clone(),
            care_instructions: self.care_instructions.clone(),
            photos: vec![self.photo_url()],
        }
    }
}

/// Split "City, ST" into a Location
///
/// Missing city becomes "Unknown", missing state becomes empty.
/// Anything after a second comma is ignored.
pub fn parse_location(text: &str) -> Location {
    let mut parts = text.split(',').map(str::trim);
    let city = parts.next().filter(|c| !c.is_empty()).unwrap_or("Unknown");
    let state = parts.next().unwrap_or("");
    Location::new(city, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rex() -> ListingDraft {
        ListingDraft {
            name: "Rex".to_string(),
            breed: "Mutt".to_string(),
            pet_type: PetType::Dog,
            age: 3,
            location: "Fresno, CA".to_string(),
            ..ListingDraft::new()
        }
    }

    #[test]
    fn test_parse_location() {
        assert_eq!(parse_location("Fresno, CA"), Location::new("Fresno", "CA"));
        assert_eq!(parse_location("  Oakland ,CA "), Location::new("Oakland", "CA"));
        assert_eq!(parse_location("Reno"), Location::new("Reno", ""));
        assert_eq!(parse_location(""), Location::new("Unknown", ""));
        assert_eq!(parse_location(", NV"), Location::new("Unknown", "NV"));
        assert_eq!(parse_location("Austin, TX, USA"), Location::new("Austin", "TX"));
    }

    #[test]
    fn test_to_listing() {
        let listing = rex().to_listing();
        assert_eq!(listing.name, "Rex");
        assert_eq!(listing.location, Location::new("Fresno", "CA"));
        assert_eq!(listing.photos, vec!["https://picsum.photos/seed/rex/800/600".to_string()]);
        assert_eq!(listing.gender, Gender::Male);
    }

    #[test]
    fn test_description_inputs() {
        assert!(rex().check_description_inputs().is_ok());

        let mut draft = rex();
        draft.age = 0;
        assert!(matches!(
            draft.check_description_inputs(),
            Err(PetConnectError::MissingFields(_))
        ));

        let mut draft = rex();
        draft.name = "  ".to_string();
        assert!(draft.check_description_inputs().is_err());
    }

    #[test]
    fn test_care_inputs() {
        assert!(rex().check_care_inputs().is_ok());
        assert!(ListingDraft::new().check_care_inputs().is_err());
    }
}
