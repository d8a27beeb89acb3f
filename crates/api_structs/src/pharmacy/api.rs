use crate::dtos::{NearbyPharmacyDTO, OpenStatusDTO, PharmacyDTO, PharmacyWithStatusDTO};
use pharmacy_directory_domain::{Pharmacy, WeeklySchedule, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyResponse {
    pub pharmacy: PharmacyDTO,
}

impl PharmacyResponse {
    pub fn new(pharmacy: Pharmacy) -> Self {
        Self {
            pharmacy: PharmacyDTO::new(pharmacy),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PharmacyDetailsResponse {
    pub pharmacy: PharmacyDTO,
    pub status: OpenStatusDTO,
    /// The opening hours rendered one day per line
    pub opening_hours_text: String,
}

pub mod create_pharmacy {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub address: String,
        pub phone: Option<String>,
        #[serde(default)]
        pub opening_hours: WeeklySchedule,
        pub latitude: f64,
        pub longitude: f64,
        pub image_url: Option<String>,
        pub is_active: Option<bool>,
    }

    pub type APIResponse = PharmacyResponse;
}

pub mod update_pharmacy {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pharmacy_id: ID,
    }

    /// Fields left out are kept. An empty `phone` or `imageUrl` clears it.
    #[derive(Debug, Serialize, Deserialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub address: Option<String>,
        pub phone: Option<String>,
        pub opening_hours: Option<WeeklySchedule>,
        pub latitude: Option<f64>,
        pub longitude: Option<f64>,
        pub image_url: Option<String>,
        pub is_active: Option<bool>,
    }

    pub type APIResponse = PharmacyResponse;
}

pub mod delete_pharmacy {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pharmacy_id: ID,
    }

    pub type APIResponse = PharmacyResponse;
}

pub mod get_pharmacy {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pharmacy_id: ID,
    }

    pub type APIResponse = PharmacyDetailsResponse;
}

pub mod get_pharmacy_by_slug {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub slug: String,
    }

    pub type APIResponse = PharmacyDetailsResponse;
}

pub mod get_pharmacy_status {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pharmacy_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub pharmacy_id: ID,
        pub status: OpenStatusDTO,
    }
}

pub mod list_pharmacies {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub pharmacies: Vec<PharmacyWithStatusDTO>,
        /// Set when the store was empty and the demo pharmacies were listed instead
        pub is_demo: bool,
    }
}

pub mod get_nearest_pharmacies {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub lat: f64,
        pub lng: f64,
        pub limit: Option<usize>,
        pub open_now: Option<bool>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub pharmacies: Vec<NearbyPharmacyDTO>,
    }
}

pub mod get_directory_stats {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub total: usize,
        pub open_now: usize,
        pub closed_now: usize,
        pub with_phone: usize,
        pub is_demo: bool,
    }
}
