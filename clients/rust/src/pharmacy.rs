use crate::{APIResponse, BaseClient};
use pharmacy_directory_api_structs::*;
use pharmacy_directory_domain::{WeeklySchedule, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct PharmacyClient {
    base: Arc<BaseClient>,
}

pub struct CreatePharmacyInput {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub opening_hours: WeeklySchedule,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

/// Fields left as `None` are kept. An empty `phone` or `image_url` clears it.
#[derive(Default)]
pub struct UpdatePharmacyInput {
    pub pharmacy_id: ID,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub opening_hours: Option<WeeklySchedule>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

pub struct GetNearestPharmaciesInput {
    pub latitude: f64,
    pub longitude: f64,
    pub limit: Option<usize>,
    pub open_now: bool,
}

impl GetNearestPharmaciesInput {
    pub(crate) fn to_query_string(&self) -> String {
        let mut query = format!(
            "lat={}&lng={}&openNow={}",
            self.latitude, self.longitude, self.open_now
        );
        if let Some(limit) = self.limit {
            query.push_str(&format!("&limit={}", limit));
        }
        query
    }
}

impl PharmacyClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreatePharmacyInput,
    ) -> APIResponse<create_pharmacy::APIResponse> {
        let body = create_pharmacy::RequestBody {
            name: input.name,
            address: input.address,
            phone: input.phone,
            opening_hours: input.opening_hours,
            latitude: input.latitude,
            longitude: input.longitude,
            image_url: input.image_url,
            is_active: input.is_active,
        };
        self.base
            .post(body, "pharmacy".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        input: UpdatePharmacyInput,
    ) -> APIResponse<update_pharmacy::APIResponse> {
        let body = update_pharmacy::RequestBody {
            name: input.name,
            address: input.address,
            phone: input.phone,
            opening_hours: input.opening_hours,
            latitude: input.latitude,
            longitude: input.longitude,
            image_url: input.image_url,
            is_active: input.is_active,
        };
        self.base
            .put(
                body,
                format!("pharmacy/{}", input.pharmacy_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, pharmacy_id: ID) -> APIResponse<delete_pharmacy::APIResponse> {
        self.base
            .delete(format!("pharmacy/{}", pharmacy_id), StatusCode::OK)
            .await
    }

    pub async fn get(&self, pharmacy_id: ID) -> APIResponse<get_pharmacy::APIResponse> {
        self.base
            .get(format!("pharmacy/{}", pharmacy_id), StatusCode::OK)
            .await
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
    ) -> APIResponse<get_pharmacy_by_slug::APIResponse> {
        self.base
            .get(format!("pharmacy/slug/{}", slug), StatusCode::OK)
            .await
    }

    pub async fn get_status(
        &self,
        pharmacy_id: ID,
    ) -> APIResponse<get_pharmacy_status::APIResponse> {
        self.base
            .get(format!("pharmacy/{}/status", pharmacy_id), StatusCode::OK)
            .await
    }

    pub async fn list(&self) -> APIResponse<list_pharmacies::APIResponse> {
        self.base.get("pharmacy".into(), StatusCode::OK).await
    }

    pub async fn nearest(
        &self,
        input: GetNearestPharmaciesInput,
    ) -> APIResponse<get_nearest_pharmacies::APIResponse> {
        self.base
            .get(
                format!("pharmacy/nearest?{}", input.to_query_string()),
                StatusCode::OK,
            )
            .await
    }

    pub async fn stats(&self) -> APIResponse<get_directory_stats::APIResponse> {
        self.base.get("pharmacy/stats".into(), StatusCode::OK).await
    }
}
