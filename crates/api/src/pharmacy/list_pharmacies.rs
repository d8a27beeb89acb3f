use super::load_directory;
use crate::{
    error::PharmacyDirectoryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use pharmacy_directory_api_structs::dtos::PharmacyWithStatusDTO;
use pharmacy_directory_api_structs::list_pharmacies::APIResponse;
use pharmacy_directory_domain::{OpenStatus, Pharmacy};
use pharmacy_directory_infra::PharmacyDirectoryContext;

pub async fn list_pharmacies_controller(
    ctx: web::Data<PharmacyDirectoryContext>,
) -> Result<HttpResponse, PharmacyDirectoryError> {
    let usecase = ListPharmaciesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                pharmacies: res
                    .pharmacies
                    .into_iter()
                    .map(|(pharmacy, status)| PharmacyWithStatusDTO::new(pharmacy, status))
                    .collect(),
                is_demo: res.is_demo,
            })
        })
        .map_err(|_| PharmacyDirectoryError::InternalError)
}

#[derive(Debug)]
pub struct ListPharmaciesUseCase {}

#[derive(Debug)]
pub struct UseCaseRes {
    /// Ordered by name
    pub pharmacies: Vec<(Pharmacy, OpenStatus)>,
    pub is_demo: bool,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListPharmaciesUseCase {
    type Response = UseCaseRes;

    type Errors = ();

    const NAME: &'static str = "ListPharmacies";

    async fn execute(
        &mut self,
        ctx: &PharmacyDirectoryContext,
    ) -> Result<Self::Response, Self::Errors> {
        let directory = load_directory(ctx).await;
        let now = ctx.sys.local_now();
        let pharmacies = directory
            .pharmacies
            .into_iter()
            .map(|pharmacy| {
                let status = pharmacy.status_at(&now);
                (pharmacy, status)
            })
            .collect();

        Ok(UseCaseRes {
            pharmacies,
            is_demo: directory.is_demo,
        })
    }
}
