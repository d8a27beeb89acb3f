mod inmemory;

pub use inmemory::InMemoryPharmacyRepo;
use pharmacy_directory_domain::{Pharmacy, ID};

#[async_trait::async_trait]
pub trait IPharmacyRepo: Send + Sync {
    async fn insert(&self, pharmacy: &Pharmacy) -> anyhow::Result<()>;
    async fn save(&self, pharmacy: &Pharmacy) -> anyhow::Result<()>;
    async fn find(&self, pharmacy_id: &ID) -> Option<Pharmacy>;
    /// Active pharmacies ordered by name
    async fn find_active(&self) -> Vec<Pharmacy>;
    async fn find_by_slug(&self, slug: &str) -> Option<Pharmacy>;
    async fn delete(&self, pharmacy_id: &ID) -> Option<Pharmacy>;
}

#[cfg(test)]
mod tests {
    use crate::PharmacyDirectoryContext;
    use chrono::{TimeZone, Utc};
    use pharmacy_directory_domain::{Coordinates, Entity, Pharmacy, WeeklySchedule};

    fn pharmacy(name: &str) -> Pharmacy {
        Pharmacy::new(
            name.into(),
            "Avenue Mohammed V".into(),
            Coordinates::new(33.9716, -6.8498),
            WeeklySchedule::new(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = PharmacyDirectoryContext::create_inmemory();
        let pharmacy = pharmacy("Pharmacie du Port");

        // Insert
        assert!(ctx.repos.pharmacies.insert(&pharmacy).await.is_ok());
        assert!(ctx.repos.pharmacies.insert(&pharmacy).await.is_err());

        // Different find methods
        let res = ctx.repos.pharmacies.find(&pharmacy.id).await.unwrap();
        assert!(res.eq(&pharmacy));
        let res = ctx
            .repos
            .pharmacies
            .find_by_slug("pharmacie-du-port")
            .await
            .unwrap();
        assert!(res.eq(&pharmacy));
        assert!(ctx.repos.pharmacies.find_by_slug("pharmacie").await.is_none());

        // Delete
        let res = ctx.repos.pharmacies.delete(&pharmacy.id).await;
        assert!(res.is_some());
        assert!(res.unwrap().eq(&pharmacy));

        // Find
        assert!(ctx.repos.pharmacies.find(&pharmacy.id).await.is_none());
        assert!(ctx.repos.pharmacies.delete(&pharmacy.id).await.is_none());
    }

    #[tokio::test]
    async fn update() {
        let ctx = PharmacyDirectoryContext::create_inmemory();
        let mut pharmacy = pharmacy("Pharmacie Atlas");

        // Saving something that was never inserted
        assert!(ctx.repos.pharmacies.save(&pharmacy).await.is_err());

        assert!(ctx.repos.pharmacies.insert(&pharmacy).await.is_ok());
        pharmacy.phone = Some("+212537456789".into());
        assert!(ctx.repos.pharmacies.save(&pharmacy).await.is_ok());

        let res = ctx.repos.pharmacies.find(&pharmacy.id).await.unwrap();
        assert_eq!(res.phone, Some("+212537456789".into()));
    }

    #[tokio::test]
    async fn finds_active_pharmacies_ordered_by_name() {
        let ctx = PharmacyDirectoryContext::create_inmemory();
        let mut inactive = pharmacy("Pharmacie Al Amal");
        inactive.is_active = false;
        for pharmacy in [
            pharmacy("Pharmacie du Port"),
            inactive,
            pharmacy("Pharmacie Atlas"),
            pharmacy("Pharmacie Centrale"),
        ] {
            ctx.repos.pharmacies.insert(&pharmacy).await.unwrap();
        }

        let names = ctx
            .repos
            .pharmacies
            .find_active()
            .await
            .into_iter()
            .map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["Pharmacie Atlas", "Pharmacie Centrale", "Pharmacie du Port"]
        );
    }
}
