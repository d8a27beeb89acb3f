mod base;
mod pharmacy;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use pharmacy::PharmacyClient;
pub use pharmacy::{CreatePharmacyInput, GetNearestPharmaciesInput, UpdatePharmacyInput};
pub use pharmacy_directory_api_structs::dtos::*;
pub use pharmacy_directory_domain::{WeeklySchedule, Weekday, ID};
pub use reqwest::StatusCode;
use status::StatusClient;
use std::sync::Arc;

/// Pharmacy Directory Server SDK
///
/// The SDK contains methods for interacting with the pharmacy directory
/// server API.
#[derive(Clone)]
pub struct PharmacyDirectorySDK {
    pub pharmacy: PharmacyClient,
    pub status: StatusClient,
}

impl PharmacyDirectorySDK {
    /// Client for the public routes
    pub fn new(address: String) -> Self {
        Self::from_base(BaseClient::new(address))
    }

    /// Client that is also allowed to use the admin routes
    pub fn with_api_key<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let pharmacy = PharmacyClient::new(base.clone());
        let status = StatusClient::new(base);

        Self { pharmacy, status }
    }
}
