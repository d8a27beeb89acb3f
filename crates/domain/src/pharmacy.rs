use crate::{
    geo::Coordinates,
    opening_hours::WeeklySchedule,
    shared::entity::{Entity, ID},
    status::{evaluate, OpenStatus},
};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pharmacy {
    pub id: ID,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub opening_hours: WeeklySchedule,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pharmacy {
    pub fn new(
        name: String,
        address: String,
        location: Coordinates,
        opening_hours: WeeklySchedule,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Default::default(),
            name,
            address,
            phone: None,
            opening_hours,
            latitude: location.latitude,
            longitude: location.longitude,
            image_url: None,
            is_active: true,
            created_at,
            updated_at: created_at,
        }
    }

    pub fn location(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn set_location(&mut self, location: Coordinates) {
        self.latitude = location.latitude;
        self.longitude = location.longitude;
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// `now` is the local wall-clock time of the pharmacy
    pub fn status_at(&self, now: &NaiveDateTime) -> OpenStatus {
        evaluate(&self.opening_hours, now)
    }
}

impl Entity for Pharmacy {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Lowercases and joins the alphanumeric runs of `name` with `-`
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn it_slugifies_names() {
        assert_eq!(slugify("Pharmacie Centrale Harhoura"), "pharmacie-centrale-harhoura");
        assert_eq!(slugify("  Pharmacie  du   Port! "), "pharmacie-du-port");
        assert_eq!(slugify("Pharmacie Al-Amal (2)"), "pharmacie-al-amal-2");
        assert_eq!(slugify("Pharmacie Résidence"), "pharmacie-résidence");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn it_deserializes_stored_records_with_legacy_hours() {
        let pharmacy: Pharmacy = serde_json::from_value(json!({
            "id": ID::new().as_string(),
            "name": "Pharmacie du Port",
            "address": "Port de Plaisance Harhoura",
            "phone": "+212537345678",
            "opening_hours": {
                "lun": { "open": "08:30", "close": "19:30" },
                "dim": { "closed": true }
            },
            "latitude": 33.971,
            "longitude": -6.849,
            "image_url": null,
            "is_active": true,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }))
        .expect("To deserialize pharmacy");

        let monday_morning = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(9, 0, 0))
            .unwrap();
        let status = pharmacy.status_at(&monday_morning);
        assert!(status.is_open);
        assert_eq!(
            status.next_change_description(),
            Some("closes at 19:30".to_string())
        );
        assert_eq!(pharmacy.slug(), "pharmacie-du-port");
    }
}
