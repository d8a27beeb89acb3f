use super::IPharmacyRepo;
use crate::repos::shared::inmemory_repo::*;
use pharmacy_directory_domain::{Pharmacy, ID};

pub struct InMemoryPharmacyRepo {
    pharmacies: std::sync::Mutex<Vec<Pharmacy>>,
}

impl InMemoryPharmacyRepo {
    pub fn new() -> Self {
        Self {
            pharmacies: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPharmacyRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IPharmacyRepo for InMemoryPharmacyRepo {
    async fn insert(&self, pharmacy: &Pharmacy) -> anyhow::Result<()> {
        insert(pharmacy, &self.pharmacies)
    }

    async fn save(&self, pharmacy: &Pharmacy) -> anyhow::Result<()> {
        save(pharmacy, &self.pharmacies)
    }

    async fn find(&self, pharmacy_id: &ID) -> Option<Pharmacy> {
        find(pharmacy_id, &self.pharmacies)
    }

    async fn find_active(&self) -> Vec<Pharmacy> {
        let mut pharmacies = find_by(&self.pharmacies, |pharmacy| pharmacy.is_active);
        pharmacies.sort_by(|p1, p2| p1.name.cmp(&p2.name));
        pharmacies
    }

    async fn find_by_slug(&self, slug: &str) -> Option<Pharmacy> {
        find_by(&self.pharmacies, |pharmacy| pharmacy.slug() == slug)
            .into_iter()
            .next()
    }

    async fn delete(&self, pharmacy_id: &ID) -> Option<Pharmacy> {
        delete(pharmacy_id, &self.pharmacies)
    }
}
