// In-memory mock data store
//
// Holds the canonical pets and the single user for the lifetime of the
// process. Not synchronized: the pet service owns it behind a lock and is
// the only writer.

use crate::error::{PetConnectError, Result};
use crate::model::{CareInstructions, Gender, Location, Pet, PetType, User};

/// Canonical pet collection plus the mock user
#[derive(Debug, Clone)]
pub struct MockDataStore {
    pets: Vec<Pet>,
    user: User,
}

impl MockDataStore {
    /// Create a store from explicit fixtures
    pub fn new(pets: Vec<Pet>, user: User) -> Self {
        Self { pets, user }
    }

    /// Create a store with the six demo listings and user 101
    pub fn seeded() -> Self {
        Self::new(seed_pets(), seed_user())
    }

    /// All pets in append order
    pub fn list_all(&self) -> &[Pet] {
        &self.pets
    }

    pub fn find_by_id(&self, id: u64) -> Result<&Pet> {
        self.pets
            .iter()
            .find(|p| p.id == id)
            .ok_or(PetConnectError::NotFound(id))
    }

    /// Add a pet at the end of the collection
    ///
    /// # Errors
    /// - InvariantViolation if a pet with the same id is already stored
    pub fn append(&mut self, pet: Pet) -> Result<()> {
        if self.pets.iter().any(|p| p.id == pet.id) {
            return Err(PetConnectError::InvariantViolation(format!(
                "duplicate pet id {}",
                pet.id
            )));
        }
        self.pets.push(pet);
        Ok(())
    }

    /// One greater than the largest stored id
    ///
    /// # Errors
    /// - InvariantViolation if the store holds no pets or the largest id is u64::MAX
    pub fn next_id(&self) -> Result<u64> {
        let max = self.pets.iter().map(|p| p.id).max().ok_or_else(|| {
            PetConnectError::InvariantViolation(
                "cannot assign an id from an empty store; seed it first".to_string(),
            )
        })?;
        max.checked_add(1)
            .ok_or_else(|| PetConnectError::InvariantViolation("id space exhausted".to_string()))
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

impl Default for MockDataStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn photo(seed: &str) -> Vec<String> {
    vec![format!("https://picsum.photos/seed/{}/800/600", seed)]
}

fn care(feeding: &str, grooming: &str, exercise: &str, medical_needs: &str) -> CareInstructions {
    CareInstructions {
        feeding: feeding.to_string(),
        grooming: grooming.to_string(),
        exercise: exercise.to_string(),
        medical_needs: medical_needs.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn seed_pet(
    id: u64,
    name: &str,
    breed: &str,
    pet_type: PetType,
    age: u32,
    gender: Gender,
    city: &str,
    description: &str,
    care_instructions: CareInstructions,
    seller_id: u64,
) -> Pet {
    Pet {
        id,
        name: name.to_string(),
        breed: breed.to_string(),
        pet_type,
        age,
        gender,
        location: Location::new(city, "CA"),
        description: description.to_string(),
        care_instructions,
        photos: photo(&name.to_lowercase()),
        seller_id,
    }
}

fn seed_pets() -> Vec<Pet> {
    vec![
        seed_pet(
            1,
            "Buddy",
            "Golden Retriever",
            PetType::Dog,
            2,
            Gender::Male,
            "San Francisco",
            "Buddy is a friendly and energetic Golden Retriever who loves to play fetch and go for long walks. He is great with kids and other dogs.",
            care(
                "Twice a day with high-quality dog food.",
                "Brush coat 2-3 times a week. Professional grooming every 2 months.",
                "At least 60 minutes of vigorous exercise daily.",
                "Up to date on all vaccinations. Annual check-ups recommended.",
            ),
            101,
        ),
        seed_pet(
            2,
            "Lucy",
            "Siamese",
            PetType::Cat,
            3,
            Gender::Female,
            "San Francisco",
            "Lucy is a beautiful and affectionate Siamese cat. She enjoys cuddling on the couch and chasing laser pointers.",
            care(
                "Free-fed with dry food, wet food once a day.",
                "Minimal grooming needed. Brush weekly.",
                "Interactive toys for 30 minutes daily.",
                "Regular flea and tick prevention.",
            ),
            102,
        ),
        seed_pet(
            3,
            "Kiwi",
            "Parakeet",
            PetType::Parrot,
            1,
            Gender::Male,
            "Oakland",
            "Kiwi is a cheerful and talkative parakeet. He can mimic a few words and loves to sit on your shoulder.",
            care(
                "Seed mix, fresh fruits, and vegetables daily.",
                "Provide a bird bath for self-grooming.",
                "Needs time outside the cage daily in a safe room.",
                "Keep cage clean to prevent illness.",
            ),
            101,
        ),
        seed_pet(
            4,
            "Thumper",
            "Holland Lop",
            PetType::Rabbit,
            1,
            Gender::Male,
            "San Jose",
            "Thumper is a gentle and curious Holland Lop. He is litter-trained and enjoys being petted.",
            care(
                "Unlimited timothy hay, fresh greens, and a small amount of pellets.",
                "Brush weekly, more during shedding seasons.",
                "Several hours of supervised playtime outside his cage.",
                "Nails need regular trimming.",
            ),
            103,
        ),
        seed_pet(
            5,
            "Max",
            "German Shepherd",
            PetType::Dog,
            4,
            Gender::Male,
            "Palo Alto",
            "Max is a loyal and intelligent German Shepherd. He is well-trained and would make a great companion for an active family.",
            care(
                "Two meals a day, high-protein diet.",
                "Regular brushing to manage shedding.",
                "Needs plenty of physical and mental stimulation.",
                "Prone to hip dysplasia, regular vet check-ups are important.",
            ),
            104,
        ),
        seed_pet(
            6,
            "Misty",
            "Persian",
            PetType::Cat,
            5,
            Gender::Female,
            "Berkeley",
            "Misty is a calm and gentle Persian cat with a luxurious long coat. She loves quiet environments and sunbathing.",
            care(
                "Specialized cat food for long-haired breeds.",
                "Daily brushing is essential to prevent matting.",
                "Prefers light play with feather wands.",
                "Regular eye cleaning is required.",
            ),
            102,
        ),
    ]
}

fn seed_user() -> User {
    User {
        id: 101,
        full_name: "Alex Doe".to_string(),
        location: Location::new("San Francisco", "CA"),
        contact_number: "555-123-4567".to_string(),
        share_id: "alexd-12345".to_string(),
        listings: vec![1, 3],
        purchase_history: vec![2],
    }
}
