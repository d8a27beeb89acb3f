use super::load_directory;
use crate::{
    error::PharmacyDirectoryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use pharmacy_directory_api_structs::get_directory_stats::APIResponse;
use pharmacy_directory_infra::PharmacyDirectoryContext;

pub async fn get_directory_stats_controller(
    ctx: web::Data<PharmacyDirectoryContext>,
) -> Result<HttpResponse, PharmacyDirectoryError> {
    execute(GetDirectoryStatsUseCase {}, &ctx)
        .await
        .map(|stats| {
            HttpResponse::Ok().json(APIResponse {
                total: stats.total,
                open_now: stats.open_now,
                closed_now: stats.total - stats.open_now,
                with_phone: stats.with_phone,
                is_demo: stats.is_demo,
            })
        })
        .map_err(|_| PharmacyDirectoryError::InternalError)
}

#[derive(Debug)]
pub struct GetDirectoryStatsUseCase {}

#[derive(Debug, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub open_now: usize,
    pub with_phone: usize,
    pub is_demo: bool,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDirectoryStatsUseCase {
    type Response = DirectoryStats;

    type Errors = ();

    const NAME: &'static str = "GetDirectoryStats";

    async fn execute(
        &mut self,
        ctx: &PharmacyDirectoryContext,
    ) -> Result<Self::Response, Self::Errors> {
        let directory = load_directory(ctx).await;
        let now = ctx.sys.local_now();

        Ok(DirectoryStats {
            total: directory.pharmacies.len(),
            open_now: directory
                .pharmacies
                .iter()
                .filter(|pharmacy| pharmacy.status_at(&now).is_open)
                .count(),
            with_phone: directory
                .pharmacies
                .iter()
                .filter(|pharmacy| pharmacy.phone.is_some())
                .count(),
            is_demo: directory.is_demo,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{local_time, setup_context};

    #[actix_web::main]
    #[test]
    async fn it_counts_the_demo_directory() {
        // Sunday 10:00, most demo pharmacies are closed on sundays
        let ctx = setup_context(local_time(6, 10, 0), true);
        let stats = execute(GetDirectoryStatsUseCase {}, &ctx).await.unwrap();

        let now = ctx.sys.local_now();
        assert!(stats.is_demo);
        assert_eq!(stats.total, ctx.demo_pharmacies.len());
        assert_eq!(
            stats.open_now,
            ctx.demo_pharmacies
                .iter()
                .filter(|p| p.status_at(&now).is_open)
                .count()
        );
        assert!(stats.open_now < stats.total);
        assert!(stats.with_phone <= stats.total);
    }
}
