// Mock test helpers and common mock patterns
//
// Reusable mock constructors with sensible defaults. Tests override the
// behavior they care about and inherit the rest.
//
// Usage:
//     use crate::services::mocks::test_helpers::*;
//     let mut pets = create_mock_pet_service();
//     pets.expect_get_nearby_pets().returning(|| Ok(vec![]));

#[cfg(test)]
pub mod test_helpers {
    use super::super::pets::LatencyProfile;
    use super::super::traits::*;
    use crate::error::PetConnectError;
    use crate::model::{Geolocation, Location, NewPetListing, PetType};
    use crate::store::MockDataStore;

    /// Mock pet service answering from a seeded store
    ///
    /// Default behavior:
    /// - get_nearby_pets() returns the six seed pets
    /// - get_user_profile() returns user 101
    ///
    /// Add expectations for search/add/get as needed.
    pub fn create_mock_pet_service() -> MockPetService {
        let store = MockDataStore::seeded();
        let pets = store.list_all().to_vec();
        let user = store.user().clone();

        let mut mock = MockPetService::new();
        mock.expect_get_nearby_pets()
            .returning(move || Ok(pets.clone()));
        mock.expect_get_user_profile()
            .returning(move || Ok(user.clone()));
        mock
    }

    /// Mock pet service whose list fetch always fails
    pub fn create_failing_pet_service() -> MockPetService {
        let user = MockDataStore::seeded().user().clone();

        let mut mock = MockPetService::new();
        mock.expect_get_nearby_pets().returning(|| {
            Err(PetConnectError::InvariantViolation("backend down".to_string()))
        });
        mock.expect_get_user_profile()
            .returning(move || Ok(user.clone()));
        mock
    }

    /// Location service resolving to downtown San Francisco
    pub fn create_located_service() -> MockLocationService {
        let mut mock = MockLocationService::new();
        mock.expect_get_user_location().returning(|| {
            Ok(Geolocation {
                latitude: 37.7749,
                longitude: -122.4194,
            })
        });
        mock
    }

    /// Location service that reports a denied permission
    pub fn create_denied_location_service() -> MockLocationService {
        let mut mock = MockLocationService::new();
        mock.expect_get_user_location().returning(|| {
            Err(PetConnectError::LocationDenied(
                "Unable to retrieve your location. Please enable location services.".to_string(),
            ))
        });
        mock
    }

    /// Text generator with fixed successful answers
    pub fn create_mock_generator() -> MockPetTextGenerator {
        let mut mock = MockPetTextGenerator::new();
        mock.expect_generate_pet_description()
            .returning(|name, _, _| Ok(format!("{} is lovely.", name)));
        mock.expect_generate_care_instructions()
            .returning(|_, _| {
                Ok(crate::model::CareInstructions {
                    feeding: "Twice daily".to_string(),
                    grooming: "Weekly".to_string(),
                    exercise: "Daily walks".to_string(),
                    medical_needs: "Annual check-up".to_string(),
                })
            });
        mock
    }

    /// Config service with test defaults
    ///
    /// - get_api_key() returns None (soft degradation)
    /// - get_model() returns "test-model"
    /// - get_latency() returns the instant profile
    /// - get_position() returns None
    pub fn create_mock_config() -> MockConfigService {
        let mut mock = MockConfigService::new();
        mock.expect_get_api_key().returning(|| None);
        mock.expect_get_model()
            .returning(|| "test-model".to_string());
        mock.expect_get_latency()
            .returning(LatencyProfile::instant);
        mock.expect_get_position().returning(|| None);
        mock
    }

    /// The "Rex the Mutt" listing used across tests
    pub fn create_test_listing(name: &str) -> NewPetListing {
        NewPetListing {
            name: name.to_string(),
            breed: "Mutt".to_string(),
            pet_type: PetType::Dog,
            age: 3,
            location: Location::new("Fresno", "CA"),
            photos: vec![format!(
                "https://picsum.photos/seed/{}/800/600",
                name.to_lowercase()
            )],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::traits::*;
    use super::test_helpers::*;
    use crate::model::PetType;

    #[tokio::test]
    async fn test_create_mock_pet_service() {
        let mock = create_mock_pet_service();
        assert_eq!(mock.get_nearby_pets().await.unwrap().len(), 6);
        assert_eq!(mock.get_user_profile().await.unwrap().id, 101);
    }

    #[tokio::test]
    async fn test_create_location_services() {
        assert!(create_located_service().get_user_location().await.is_ok());
        let err = create_denied_location_service()
            .get_user_location()
            .await
            .unwrap_err();
        assert!(err.is_location());
    }

    #[tokio::test]
    async fn test_create_mock_generator() {
        let mock = create_mock_generator();
        let text = mock.generate_pet_description("Rex", "Mutt", 3).await.unwrap();
        assert_eq!(text, "Rex is lovely.");
        let care = mock.generate_care_instructions("Mutt", PetType::Dog).await.unwrap();
        assert!(!care.is_empty());
    }

    #[test]
    fn test_create_mock_config() {
        let mock = create_mock_config();
        assert_eq!(mock.get_api_key(), None);
        assert_eq!(mock.get_model(), "test-model");
    }

    #[test]
    fn test_create_test_listing() {
        let listing = create_test_listing("Rex");
        assert_eq!(listing.photos[0], "https://picsum.photos/seed/rex/800/600");
    }
}
