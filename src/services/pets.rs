// In-memory pet/user service
//
// Simulates the marketplace API on top of an injected MockDataStore.
// Each call sleeps for its configured latency before touching the store,
// and listing results are snapshots: distances are drawn fresh per pet
// per call and never written back.

use super::traits::PetService;
use crate::error::Result;
use crate::model::{NewPetListing, Pet, SearchFilters, User};
use crate::store::MockDataStore;
use async_trait::async_trait;
use rand::Rng;
use std::ops::RangeInclusive;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Distances handed out on snapshots, in miles
pub const DISTANCE_RANGE_MILES: RangeInclusive<u32> = 1..=50;

/// Per-operation simulated latency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub nearby_pets: Duration,
    pub search: Duration,
    pub user_profile: Duration,
    pub add_listing: Duration,
}

impl LatencyProfile {
    /// The delays the web client was built against
    pub fn reference() -> Self {
        Self {
            nearby_pets: Duration::from_millis(1000),
            search: Duration::from_millis(500),
            user_profile: Duration::from_millis(500),
            add_listing: Duration::from_millis(1000),
        }
    }

    /// One millisecond everywhere; still async, fast enough for tests
    pub fn instant() -> Self {
        let tick = Duration::from_millis(1);
        Self {
            nearby_pets: tick,
            search: tick,
            user_profile: tick,
            add_listing: tick,
        }
    }

    /// Parse "reference" or "instant"
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "reference" => Some(Self::reference()),
            "instant" => Some(Self::instant()),
            _ => None,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::reference()
    }
}

/// PetService backed by the in-memory mock store
///
/// The store is shared through an Arc so the same instance can be handed
/// to several services or inspected by tests.
pub struct InMemoryPetService {
    store: Arc<RwLock<MockDataStore>>,
    latency: LatencyProfile,
}

impl InMemoryPetService {
    pub fn new(store: Arc<RwLock<MockDataStore>>, latency: LatencyProfile) -> Self {
        Self { store, latency }
    }

    /// Service over a fresh seeded store
    pub fn seeded(latency: LatencyProfile) -> Self {
        Self::new(Arc::new(RwLock::new(MockDataStore::seeded())), latency)
    }

    /// Handle to the underlying store
    pub fn store(&self) -> Arc<RwLock<MockDataStore>> {
        Arc::clone(&self.store)
    }
}

/// Copy pets, giving each an independent random distance
fn with_random_distance<'a>(pets: impl Iterator<Item = &'a Pet>) -> Vec<Pet> {
    let mut rng = rand::thread_rng();
    pets.map(|pet| {
        let mut snapshot = pet.clone();
        snapshot.location.distance = Some(rng.gen_range(DISTANCE_RANGE_MILES));
        snapshot
    })
    .collect()
}

#[async_trait]
impl PetService for InMemoryPetService {
    async fn get_nearby_pets(&self) -> Result<Vec<Pet>> {
        tokio::time::sleep(self.latency.nearby_pets).await;

        let store = self.store.read().await;
        let pets = with_random_distance(store.list_all().iter());
        tracing::debug!("Fetched {} nearby pets", pets.len());
        Ok(pets)
    }

    async fn search_pets(&self, query: &str, filters: &SearchFilters) -> Result<Vec<Pet>> {
        tokio::time::sleep(self.latency.search).await;

        if !filters.is_empty() {
            tracing::debug!(
                "Ignoring search filters: {:?}",
                filters.keys().collect::<Vec<_>>()
            );
        }

        let store = self.store.read().await;
        let matches = store.list_all().iter().filter(|p| p.matches_query(query));
        let results = with_random_distance(matches);
        tracing::debug!("Search '{}' matched {} pets", query, results.len());
        Ok(results)
    }

    async fn get_user_profile(&self) -> Result<User> {
        tokio::time::sleep(self.latency.user_profile).await;
        Ok(self.store.read().await.user().clone())
    }

    async fn add_pet_listing(&self, listing: NewPetListing) -> Result<Pet> {
        tokio::time::sleep(self.latency.add_listing).await;

        let mut store = self.store.write().await;
        let id = store.next_id()?;
        let seller_id = store.user().id;
        let pet = Pet::from_listing(id, seller_id, listing);
        store.append(pet.clone())?;

        tracing::info!("Listed {} (id {}) for seller {}", pet.name, pet.id, seller_id);
        Ok(pet)
    }

    async fn get_pet(&self, id: u64) -> Result<Pet> {
        let store = self.store.read().await;
        store.find_by_id(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PetConnectError;
    use crate::model::{Gender, Location, PetType};
    use std::collections::BTreeSet;

    fn service() -> InMemoryPetService {
        InMemoryPetService::seeded(LatencyProfile::instant())
    }

    fn rex() -> NewPetListing {
        NewPetListing {
            name: "Rex".to_string(),
            breed: "Mutt".to_string(),
            pet_type: PetType::Dog,
            age: 3,
            gender: Gender::Male,
            location: Location::new("Fresno", "CA"),
            photos: vec!["https://picsum.photos/seed/rex/800/600".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_nearby_pets_distances_and_ids() {
        let service = service();

        for _ in 0..20 {
            let pets = service.get_nearby_pets().await.unwrap();
            assert!(pets
                .iter()
                .all(|p| matches!(p.location.distance, Some(d) if (1..=50).contains(&d))));

            let ids: BTreeSet<u64> = pets.iter().map(|p| p.id).collect();
            assert_eq!(ids, (1..=6).collect());
        }
    }

    #[tokio::test]
    async fn test_distances_not_persisted() {
        let service = service();
        service.get_nearby_pets().await.unwrap();

        let store = service.store();
        let store = store.read().await;
        assert!(store.list_all().iter().all(|p| p.location.distance.is_none()));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_over_fields() {
        let service = service();
        let filters = SearchFilters::new();

        let by_type = service.search_pets("CAT", &filters).await.unwrap();
        let names: Vec<&str> = by_type.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Lucy", "Misty"]);

        let by_breed = service.search_pets("shepherd", &filters).await.unwrap();
        assert_eq!(by_breed.len(), 1);
        assert_eq!(by_breed[0].name, "Max");

        let by_name = service.search_pets("kiw", &filters).await.unwrap();
        assert_eq!(by_name[0].breed, "Parakeet");

        assert!(service.search_pets("iguana", &filters).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_empty_query_and_unknown_filters() {
        let service = service();
        let mut filters = SearchFilters::new();
        filters.insert("ageRange".to_string(), serde_json::json!("1-3"));
        filters.insert("somethingNew".to_string(), serde_json::json!({"x": 1}));

        let results = service.search_pets("", &filters).await.unwrap();
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|p| p.location.distance.is_some()));
    }

    #[tokio::test]
    async fn test_add_listing_assigns_id_and_seller() {
        let service = service();

        let pet = service.add_pet_listing(rex()).await.unwrap();
        assert_eq!(pet.id, 7);
        assert_eq!(pet.seller_id, 101);
        assert_eq!(pet.name, "Rex");

        let nearby = service.get_nearby_pets().await.unwrap();
        assert!(nearby.iter().any(|p| p.id == 7 && p.name == "Rex"));
    }

    #[tokio::test]
    async fn test_sequential_listings_increment_ids() {
        let service = service();

        let first = service.add_pet_listing(rex()).await.unwrap();
        let second = service.add_pet_listing(rex()).await.unwrap();
        let third = service.add_pet_listing(rex()).await.unwrap();

        assert_eq!((first.id, second.id, third.id), (7, 8, 9));
        assert_eq!(service.get_pet(7).await.unwrap().id, 7);
        assert_eq!(service.get_pet(8).await.unwrap().id, 8);
    }

    #[tokio::test]
    async fn test_add_listing_on_empty_store_fails() {
        let user = MockDataStore::seeded().user().clone();
        let store = Arc::new(RwLock::new(MockDataStore::new(vec![], user)));
        let service = InMemoryPetService::new(store, LatencyProfile::instant());

        let result = service.add_pet_listing(rex()).await;
        assert!(matches!(result, Err(PetConnectError::InvariantViolation(_))));
    }

    #[tokio::test]
    async fn test_get_pet_not_found() {
        let result = service().get_pet(404).await;
        assert!(matches!(result, Err(PetConnectError::NotFound(404))));
    }

    #[tokio::test]
    async fn test_user_profile() {
        let user = service().get_user_profile().await.unwrap();
        assert_eq!(user.full_name, "Alex Doe");
        assert_eq!(user.listings, vec![1, 3]);
        assert_eq!(user.purchase_history, vec![2]);
    }

    #[test]
    fn test_latency_profiles() {
        assert_eq!(LatencyProfile::default().nearby_pets, Duration::from_millis(1000));
        assert_eq!(LatencyProfile::reference().search, Duration::from_millis(500));
        assert_eq!(LatencyProfile::from_name(" Instant "), Some(LatencyProfile::instant()));
        assert_eq!(LatencyProfile::from_name("warp"), None);
    }
}
