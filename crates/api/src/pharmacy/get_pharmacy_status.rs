use crate::{
    error::PharmacyDirectoryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use pharmacy_directory_api_structs::dtos::OpenStatusDTO;
use pharmacy_directory_api_structs::get_pharmacy_status::{APIResponse, PathParams};
use pharmacy_directory_domain::{OpenStatus, ID};
use pharmacy_directory_infra::PharmacyDirectoryContext;

pub async fn get_pharmacy_status_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PharmacyDirectoryContext>,
) -> Result<HttpResponse, PharmacyDirectoryError> {
    let usecase = GetPharmacyStatusUseCase {
        pharmacy_id: path_params.pharmacy_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|status| {
            HttpResponse::Ok().json(APIResponse {
                pharmacy_id: path_params.pharmacy_id,
                status: OpenStatusDTO::new(status),
            })
        })
        .map_err(|e| match e {
            UseCaseErrors::NotFound(pharmacy_id) => PharmacyDirectoryError::NotFound(format!(
                "The pharmacy with id: {}, was not found.",
                pharmacy_id
            )),
        })
}

#[derive(Debug)]
pub struct GetPharmacyStatusUseCase {
    pub pharmacy_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPharmacyStatusUseCase {
    type Response = OpenStatus;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetPharmacyStatus";

    async fn execute(
        &mut self,
        ctx: &PharmacyDirectoryContext,
    ) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.pharmacies.find(&self.pharmacy_id).await {
            Some(pharmacy) => Ok(pharmacy.status_at(&ctx.sys.local_now())),
            None => Err(UseCaseErrors::NotFound(self.pharmacy_id)),
        }
    }
}
