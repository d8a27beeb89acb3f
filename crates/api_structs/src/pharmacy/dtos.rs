use chrono::{DateTime, Utc};
use pharmacy_directory_domain::{format_phone_number, OpenStatus, Pharmacy, WeeklySchedule, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyDTO {
    pub id: ID,
    pub name: String,
    pub slug: String,
    pub address: String,
    pub phone: Option<String>,
    /// `phone` grouped for display
    pub formatted_phone: Option<String>,
    pub opening_hours: WeeklySchedule,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PharmacyDTO {
    pub fn new(pharmacy: Pharmacy) -> Self {
        Self {
            id: pharmacy.id,
            slug: pharmacy.slug(),
            formatted_phone: pharmacy.phone.as_deref().map(format_phone_number),
            name: pharmacy.name,
            address: pharmacy.address,
            phone: pharmacy.phone,
            opening_hours: pharmacy.opening_hours,
            latitude: pharmacy.latitude,
            longitude: pharmacy.longitude,
            image_url: pharmacy.image_url,
            is_active: pharmacy.is_active,
            created_at: pharmacy.created_at,
            updated_at: pharmacy.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenStatusDTO {
    pub is_open: bool,
    pub label: String,
    pub next_change: Option<String>,
}

impl OpenStatusDTO {
    pub fn new(status: OpenStatus) -> Self {
        Self {
            is_open: status.is_open,
            label: status.label.to_string(),
            next_change: status.next_change_description(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyWithStatusDTO {
    pub pharmacy: PharmacyDTO,
    pub status: OpenStatusDTO,
}

impl PharmacyWithStatusDTO {
    pub fn new(pharmacy: Pharmacy, status: OpenStatus) -> Self {
        Self {
            pharmacy: PharmacyDTO::new(pharmacy),
            status: OpenStatusDTO::new(status),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPharmacyDTO {
    pub pharmacy: PharmacyDTO,
    pub status: OpenStatusDTO,
    pub distance_km: f64,
}

impl NearbyPharmacyDTO {
    pub fn new(pharmacy: Pharmacy, status: OpenStatus, distance_km: f64) -> Self {
        Self {
            pharmacy: PharmacyDTO::new(pharmacy),
            status: OpenStatusDTO::new(status),
            distance_km,
        }
    }
}
