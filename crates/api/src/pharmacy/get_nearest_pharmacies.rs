use super::load_directory;
use crate::{
    error::PharmacyDirectoryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use pharmacy_directory_api_structs::dtos::NearbyPharmacyDTO;
use pharmacy_directory_api_structs::get_nearest_pharmacies::{APIResponse, QueryParams};
use pharmacy_directory_domain::{Coordinates, OpenStatus, Pharmacy};
use pharmacy_directory_infra::PharmacyDirectoryContext;

pub const DEFAULT_LIMIT: usize = 5;
pub const MAX_LIMIT: usize = 50;

pub async fn get_nearest_pharmacies_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<PharmacyDirectoryContext>,
) -> Result<HttpResponse, PharmacyDirectoryError> {
    let query = query_params.0;
    let usecase = GetNearestPharmaciesUseCase {
        location: Coordinates::new(query.lat, query.lng),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
        open_now: query.open_now.unwrap_or(false),
    };

    execute(usecase, &ctx)
        .await
        .map(|nearby| {
            HttpResponse::Ok().json(APIResponse {
                pharmacies: nearby
                    .into_iter()
                    .map(|p| NearbyPharmacyDTO::new(p.pharmacy, p.status, p.distance_km))
                    .collect(),
            })
        })
        .map_err(|e| match e {
            UseCaseErrors::InvalidCoordinates(location) => {
                PharmacyDirectoryError::BadClientData(format!(
                    "Invalid coordinates given: ({}, {})",
                    location.latitude, location.longitude
                ))
            }
        })
}

#[derive(Debug)]
pub struct GetNearestPharmaciesUseCase {
    pub location: Coordinates,
    /// Clamped to `1..=MAX_LIMIT`
    pub limit: usize,
    /// Only keep pharmacies that are open at the local time
    pub open_now: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidCoordinates(Coordinates),
}

#[derive(Debug)]
pub struct NearbyPharmacy {
    pub pharmacy: Pharmacy,
    pub status: OpenStatus,
    pub distance_km: f64,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetNearestPharmaciesUseCase {
    /// Closest first
    type Response = Vec<NearbyPharmacy>;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetNearestPharmacies";

    async fn execute(
        &mut self,
        ctx: &PharmacyDirectoryContext,
    ) -> Result<Self::Response, Self::Errors> {
        if !self.location.is_valid() {
            return Err(UseCaseErrors::InvalidCoordinates(self.location));
        }

        let now = ctx.sys.local_now();
        let mut nearby = load_directory(ctx)
            .await
            .pharmacies
            .into_iter()
            .map(|pharmacy| NearbyPharmacy {
                status: pharmacy.status_at(&now),
                distance_km: self.location.distance_km(&pharmacy.location()),
                pharmacy,
            })
            .filter(|nearby| !self.open_now || nearby.status.is_open)
            .collect::<Vec<_>>();

        nearby.sort_by(|p1, p2| p1.distance_km.total_cmp(&p2.distance_km));
        nearby.truncate(self.limit.clamp(1, MAX_LIMIT));

        Ok(nearby)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{local_time, setup_context};
    use chrono::Utc;
    use pharmacy_directory_domain::WeeklySchedule;
    use serde_json::json;

    async fn insert(
        ctx: &PharmacyDirectoryContext,
        name: &str,
        location: Coordinates,
        always_open: bool,
    ) {
        let hours = if always_open {
            json!({
                "lun": { "open": "00:00", "close": "23:59" },
                "mar": { "open": "00:00", "close": "23:59" }
            })
        } else {
            json!({})
        };
        let pharmacy = Pharmacy::new(
            name.into(),
            "Harhoura".into(),
            location,
            WeeklySchedule::from_raw(&hours),
            Utc::now(),
        );
        ctx.repos.pharmacies.insert(&pharmacy).await.unwrap();
    }

    async fn setup() -> PharmacyDirectoryContext {
        let ctx = setup_context(local_time(0, 12, 0), false);
        insert(&ctx, "Far", Coordinates::new(34.02, -6.84), true).await;
        insert(&ctx, "Near", Coordinates::new(33.955, -6.885), false).await;
        insert(&ctx, "Middle", Coordinates::new(33.97, -6.85), true).await;
        ctx
    }

    fn names(nearby: &[NearbyPharmacy]) -> Vec<&str> {
        nearby.iter().map(|p| p.pharmacy.name.as_str()).collect()
    }

    #[actix_web::main]
    #[test]
    async fn it_orders_by_distance() {
        let ctx = setup().await;
        let usecase = GetNearestPharmaciesUseCase {
            location: Coordinates::new(33.9545, -6.8865),
            limit: DEFAULT_LIMIT,
            open_now: false,
        };
        let nearby = execute(usecase, &ctx).await.unwrap();
        assert_eq!(names(&nearby), vec!["Near", "Middle", "Far"]);
        assert!(nearby
            .windows(2)
            .all(|w| w[0].distance_km <= w[1].distance_km));
    }

    #[actix_web::main]
    #[test]
    async fn it_filters_open_pharmacies_and_limits() {
        let ctx = setup().await;
        let usecase = GetNearestPharmaciesUseCase {
            location: Coordinates::new(33.9545, -6.8865),
            limit: 1,
            open_now: true,
        };
        let nearby = execute(usecase, &ctx).await.unwrap();
        assert_eq!(names(&nearby), vec!["Middle"]);

        let usecase = GetNearestPharmaciesUseCase {
            location: Coordinates::new(33.9545, -6.8865),
            limit: 0,
            open_now: false,
        };
        let nearby = execute(usecase, &ctx).await.unwrap();
        assert_eq!(nearby.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_invalid_coordinates() {
        let ctx = setup().await;
        let usecase = GetNearestPharmaciesUseCase {
            location: Coordinates::new(0.0, 200.0),
            limit: DEFAULT_LIMIT,
            open_now: false,
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::InvalidCoordinates(_))
        ));
    }
}
