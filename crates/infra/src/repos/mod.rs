mod pharmacy;
mod shared;

pub use pharmacy::{IPharmacyRepo, InMemoryPharmacyRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub pharmacies: Arc<dyn IPharmacyRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            pharmacies: Arc::new(InMemoryPharmacyRepo::new()),
        }
    }
}
