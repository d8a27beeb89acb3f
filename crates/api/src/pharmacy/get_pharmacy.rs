use crate::{
    error::PharmacyDirectoryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use pharmacy_directory_api_structs::dtos::{OpenStatusDTO, PharmacyDTO};
use pharmacy_directory_api_structs::get_pharmacy::{APIResponse, PathParams};
use pharmacy_directory_domain::{format_opening_hours, OpenStatus, Pharmacy, ID};
use pharmacy_directory_infra::PharmacyDirectoryContext;

pub async fn get_pharmacy_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PharmacyDirectoryContext>,
) -> Result<HttpResponse, PharmacyDirectoryError> {
    let usecase = GetPharmacyUseCase {
        pharmacy_id: path_params.pharmacy_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res.into_response()))
        .map_err(|e| match e {
            UseCaseErrors::NotFound(pharmacy_id) => PharmacyDirectoryError::NotFound(format!(
                "The pharmacy with id: {}, was not found.",
                pharmacy_id
            )),
        })
}

#[derive(Debug)]
pub struct GetPharmacyUseCase {
    pub pharmacy_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

/// A `Pharmacy` together with its status at the time of the lookup
#[derive(Debug)]
pub struct PharmacyDetails {
    pub pharmacy: Pharmacy,
    pub status: OpenStatus,
}

impl PharmacyDetails {
    pub fn new(pharmacy: Pharmacy, ctx: &PharmacyDirectoryContext) -> Self {
        let status = pharmacy.status_at(&ctx.sys.local_now());
        Self { pharmacy, status }
    }

    pub fn into_response(self) -> APIResponse {
        APIResponse {
            opening_hours_text: format_opening_hours(&self.pharmacy.opening_hours),
            status: OpenStatusDTO::new(self.status),
            pharmacy: PharmacyDTO::new(self.pharmacy),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPharmacyUseCase {
    type Response = PharmacyDetails;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetPharmacy";

    async fn execute(
        &mut self,
        ctx: &PharmacyDirectoryContext,
    ) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.pharmacies.find(&self.pharmacy_id).await {
            Some(pharmacy) => Ok(PharmacyDetails::new(pharmacy, ctx)),
            None => Err(UseCaseErrors::NotFound(self.pharmacy_id)),
        }
    }
}
