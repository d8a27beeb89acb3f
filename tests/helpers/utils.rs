use chrono::{NaiveDate, NaiveDateTime};
use pharmacy_directory_sdk::{CreatePharmacyInput, WeeklySchedule};
use serde_json::Value;

/// 2024-01-01 is a monday
pub fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("Valid date")
}

pub fn pharmacy_input(name: &str, latitude: f64, longitude: f64, hours: Value) -> CreatePharmacyInput {
    CreatePharmacyInput {
        name: name.into(),
        address: "Harhoura, Temara".into(),
        phone: None,
        opening_hours: WeeklySchedule::from_raw(&hours),
        latitude,
        longitude,
        image_url: None,
        is_active: None,
    }
}
