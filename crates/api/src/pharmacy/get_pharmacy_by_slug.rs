use super::get_pharmacy::PharmacyDetails;
use crate::{
    error::PharmacyDirectoryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use pharmacy_directory_api_structs::get_pharmacy_by_slug::PathParams;
use pharmacy_directory_infra::PharmacyDirectoryContext;

pub async fn get_pharmacy_by_slug_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PharmacyDirectoryContext>,
) -> Result<HttpResponse, PharmacyDirectoryError> {
    let usecase = GetPharmacyBySlugUseCase {
        slug: path_params.into_inner().slug,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(res.into_response()))
        .map_err(|e| match e {
            UseCaseErrors::NotFound(slug) => PharmacyDirectoryError::NotFound(format!(
                "The pharmacy with slug: {}, was not found.",
                slug
            )),
        })
}

#[derive(Debug)]
pub struct GetPharmacyBySlugUseCase {
    pub slug: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(String),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPharmacyBySlugUseCase {
    type Response = PharmacyDetails;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetPharmacyBySlug";

    async fn execute(
        &mut self,
        ctx: &PharmacyDirectoryContext,
    ) -> Result<Self::Response, Self::Errors> {
        let slug = self.slug.to_lowercase();
        match ctx.repos.pharmacies.find_by_slug(&slug).await {
            Some(pharmacy) => Ok(PharmacyDetails::new(pharmacy, ctx)),
            None => Err(UseCaseErrors::NotFound(self.slug.clone())),
        }
    }
}
