// App orchestrator
// Single source of truth for what the UI shows: load state, the displayed
// pet list, the user, the resolved position, current page and modals.
// Every user action has a method here; a front end only renders and calls.

use crate::error::{PetConnectError, Result};
use crate::events::{EventBus, EventKind, Modal};
use crate::listing::ListingDraft;
use crate::model::{Geolocation, NewPetListing, Page, Pet, SearchFilters, User};
use crate::services::{LocationService, PetService, PetTextGenerator};
use std::sync::Arc;

const EVENT_SOURCE: &str = "app";

pub const LISTING_FAILED_NOTICE: &str = "There was an error listing your pet. Please try again.";
pub const CARE_FAILED_NOTICE: &str = "Failed to generate care instructions.";

/// Where the current load cycle stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load has been started yet
    Idle,
    Loading,
    /// Data loaded and the location resolved
    Ready,
    /// Data loaded but the location lookup failed; carries the user message
    ReadyWithError(String),
    /// The pets/user fetch failed; previously loaded data is kept
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready | LoadState::ReadyWithError(_))
    }

    /// The single user-visible error of this cycle, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::ReadyWithError(msg) | LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// What the main content area should render
#[derive(Debug, PartialEq)]
pub enum ContentView<'a> {
    Loading,
    /// Error with nothing to show underneath it
    Error(&'a str),
    Home(&'a [Pet]),
    /// None while the profile has not arrived
    Profile(Option<&'a User>),
    Purchases,
    About,
}

pub struct PetConnectApp {
    pet_service: Arc<dyn PetService>,
    location_service: Arc<dyn LocationService>,
    generator: Arc<dyn PetTextGenerator>,
    event_bus: Arc<EventBus>,

    state: LoadState,
    pets: Vec<Pet>,
    user: Option<User>,
    location: Option<Geolocation>,

    page: Page,
    selected_pet: Option<Pet>,
    search_open: bool,
    sell_open: bool,
    menu_open: bool,
}

impl PetConnectApp {
    pub fn new(
        pet_service: Arc<dyn PetService>,
        location_service: Arc<dyn LocationService>,
        generator: Arc<dyn PetTextGenerator>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            pet_service,
            location_service,
            generator,
            event_bus,
            state: LoadState::Idle,
            pets: Vec::new(),
            user: None,
            location: None,
            page: Page::Home,
            selected_pet: None,
            search_open: false,
            sell_open: false,
            menu_open: false,
        }
    }

    fn set_state(&mut self, state: LoadState) {
        tracing::debug!("Load state: {:?} -> {:?}", self.state, state);
        self.state = state.clone();
        self.event_bus.emit(EVENT_SOURCE, EventKind::LoadStateChanged(state));
    }

    fn notify(&self, message: &str) {
        self.event_bus
            .emit(EVENT_SOURCE, EventKind::UserNotice(message.to_string()));
    }

    async fn fetch_pets_and_user(&self) -> Result<(Vec<Pet>, User)> {
        tokio::try_join!(
            self.pet_service.get_nearby_pets(),
            self.pet_service.get_user_profile()
        )
    }

    /// Run one load cycle: location first, then pets and user together
    ///
    /// A failed location lookup does not stop the fetch; it only turns the
    /// end state into ReadyWithError. A failed fetch ends in Failed and
    /// leaves earlier data in place. The position is per cycle and is
    /// cleared before each lookup.
    pub async fn load(&mut self) -> &LoadState {
        self.set_state(LoadState::Loading);
        self.location = None;

        let location_error = match self.location_service.get_user_location().await {
            Ok(position) => {
                self.location = Some(position);
                None
            }
            Err(e) => {
                tracing::warn!("Continuing without location: {}", e);
                Some(e.to_string())
            }
        };

        let next = match self.fetch_pets_and_user().await {
            Ok((pets, user)) => {
                tracing::info!("Loaded {} pets for {}", pets.len(), user.full_name);
                self.pets = pets;
                self.user = Some(user);
                self.event_bus.emit(
                    EVENT_SOURCE,
                    EventKind::PetsUpdated {
                        count: self.pets.len(),
                    },
                );
                match location_error {
                    Some(msg) => LoadState::ReadyWithError(msg),
                    None => LoadState::Ready,
                }
            }
            Err(e) => {
                tracing::error!("Failed to fetch pets/user: {}", e);
                if let Some(msg) = location_error {
                    tracing::debug!("Location error superseded by fetch failure: {}", msg);
                }
                LoadState::Failed(format!("Failed to fetch data: {}", e))
            }
        };

        if let Some(msg) = next.error() {
            self.notify(msg);
        }
        self.set_state(next);
        &self.state
    }

    /// Submit a listing; on success it heads the displayed list
    ///
    /// # Errors
    /// - ListingFailed if the service rejects it; the sell form stays open
    pub async fn submit_listing(&mut self, listing: NewPetListing) -> Result<Pet> {
        match self.pet_service.add_pet_listing(listing).await {
            Ok(pet) => {
                self.pets.insert(0, pet.clone());
                self.event_bus.emit(
                    EVENT_SOURCE,
                    EventKind::ListingAdded {
                        pet_id: pet.id,
                        name: pet.name.clone(),
                    },
                );
                self.event_bus.emit(
                    EVENT_SOURCE,
                    EventKind::PetsUpdated {
                        count: self.pets.len(),
                    },
                );
                self.close_sell();
                self.navigate(Page::Home);
                Ok(pet)
            }
            Err(e) => {
                tracing::error!("Failed to add pet: {}", e);
                self.notify(LISTING_FAILED_NOTICE);
                Err(PetConnectError::ListingFailed(e.to_string()))
            }
        }
    }

    pub async fn submit_draft(&mut self, draft: &ListingDraft) -> Result<Pet> {
        self.submit_listing(draft.to_listing()).await
    }

    /// Fill the draft's description from the generator
    ///
    /// # Errors
    /// - MissingFields when name, breed or age are empty
    pub async fn generate_description(&self, draft: &mut ListingDraft) -> Result<()> {
        if let Err(e) = draft.check_description_inputs() {
            self.notify(&e.to_string());
            return Err(e);
        }
        draft.description = self
            .generator
            .generate_pet_description(&draft.name, &draft.breed, draft.age)
            .await?;
        Ok(())
    }

    /// Fill the draft's care instructions from the generator
    ///
    /// # Errors
    /// - MissingFields when breed is empty
    /// - CareGenerationFailed from the generator; the draft is left as is
    pub async fn generate_care(&self, draft: &mut ListingDraft) -> Result<()> {
        if let Err(e) = draft.check_care_inputs() {
            self.notify(&e.to_string());
            return Err(e);
        }
        match self
            .generator
            .generate_care_instructions(&draft.breed, draft.pet_type)
            .await
        {
            Ok(care) => {
                draft.care_instructions = care;
                Ok(())
            }
            Err(e) => {
                self.notify(CARE_FAILED_NOTICE);
                Err(e)
            }
        }
    }

    /// Replace the displayed list with search results
    pub async fn search(&mut self, query: &str, filters: &SearchFilters) -> Result<usize> {
        self.close_search();
        let results = self.pet_service.search_pets(query, filters).await?;
        self.pets = results;
        self.event_bus.emit(
            EVENT_SOURCE,
            EventKind::PetsUpdated {
                count: self.pets.len(),
            },
        );
        Ok(self.pets.len())
    }

    /// Open the profile modal for a pet
    ///
    /// # Errors
    /// - NotFound if the pet is neither displayed nor known to the service
    pub async fn select_pet(&mut self, id: u64) -> Result<()> {
        let pet = match self.pets.iter().find(|p| p.id == id) {
            Some(pet) => pet.clone(),
            None => self.pet_service.get_pet(id).await?,
        };
        self.selected_pet = Some(pet);
        self.event_bus.emit(
            EVENT_SOURCE,
            EventKind::ModalChanged(Modal::PetProfile { pet_id: Some(id) }),
        );
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_pet = None;
        self.event_bus.emit(
            EVENT_SOURCE,
            EventKind::ModalChanged(Modal::PetProfile { pet_id: None }),
        );
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.menu_open = false;
        self.event_bus.emit(EVENT_SOURCE, EventKind::PageChanged(page));
    }

    pub fn open_search(&mut self) {
        self.set_search(true);
    }

    pub fn close_search(&mut self) {
        self.set_search(false);
    }

    fn set_search(&mut self, open: bool) {
        self.search_open = open;
        self.event_bus
            .emit(EVENT_SOURCE, EventKind::ModalChanged(Modal::Search { open }));
    }

    pub fn open_sell(&mut self) {
        self.set_sell(true);
    }

    pub fn close_sell(&mut self) {
        self.set_sell(false);
    }

    fn set_sell(&mut self, open: bool) {
        self.sell_open = open;
        self.event_bus
            .emit(EVENT_SOURCE, EventKind::ModalChanged(Modal::Sell { open }));
    }

    pub fn open_menu(&mut self) {
        self.set_menu(true);
    }

    pub fn close_menu(&mut self) {
        self.set_menu(false);
    }

    fn set_menu(&mut self, open: bool) {
        self.menu_open = open;
        self.event_bus
            .emit(EVENT_SOURCE, EventKind::ModalChanged(Modal::Menu { open }));
    }

    /// Pick what the content area shows
    pub fn content(&self) -> ContentView<'_> {
        if self.state.is_loading() {
            return ContentView::Loading;
        }
        if let Some(error) = self.state.error() {
            if self.pets.is_empty() {
                return ContentView::Error(error);
            }
        }
        match self.page {
            Page::Home => ContentView::Home(&self.pets),
            Page::Profile => ContentView::Profile(self.user.as_ref()),
            Page::Purchases => ContentView::Purchases,
            Page::About => ContentView::About,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn location(&self) -> Option<Geolocation> {
        self.location
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected_pet(&self) -> Option<&Pet> {
        self.selected_pet.as_ref()
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn is_sell_open(&self) -> bool {
        self.sell_open
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn event_bus(&self) -> Arc<EventBus> {
        Arc::clone(&self.event_bus)
    }
}
