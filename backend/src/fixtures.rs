use shared::models::{Playlist, PremiumPlan};
use crate::store::{PlaylistStore, StoreError};

const PLAYLISTS_JSON: &str = include_str!("../fixtures/playlists.json");
const PLANS_JSON: &str = include_str!("../fixtures/plans.json");

pub fn seed_playlists() -> Result<Vec<Playlist>, StoreError> {
    serde_json::from_str(PLAYLISTS_JSON).map_err(|e| StoreError::Fixtures(format!("playlists: {}", e)))
}

pub fn seed_plans() -> Result<Vec<PremiumPlan>, StoreError> {
    serde_json::from_str(PLANS_JSON).map_err(|e| StoreError::Fixtures(format!("plans: {}", e)))
}

pub fn seeded_store() -> Result<PlaylistStore, StoreError> {
    PlaylistStore::new(seed_playlists()?, seed_plans()?)
}
