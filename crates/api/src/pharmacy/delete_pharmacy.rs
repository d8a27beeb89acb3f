use super::subscribers::{ChangedPharmacy, PublishPharmacyChange};
use crate::shared::auth::protect_admin_route;
use crate::{
    error::PharmacyDirectoryError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use pharmacy_directory_api_structs::delete_pharmacy::{APIResponse, PathParams};
use pharmacy_directory_domain::{Pharmacy, ID};
use pharmacy_directory_infra::{PharmacyChange, PharmacyChangeKind, PharmacyDirectoryContext};

pub async fn delete_pharmacy_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<PharmacyDirectoryContext>,
) -> Result<HttpResponse, PharmacyDirectoryError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = DeletePharmacyUseCase {
        pharmacy_id: path_params.pharmacy_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.pharmacy)))
        .map_err(|e| match e {
            UseCaseErrors::NotFound(pharmacy_id) => PharmacyDirectoryError::NotFound(format!(
                "The pharmacy with id: {}, was not found.",
                pharmacy_id
            )),
        })
}

#[derive(Debug)]
pub struct DeletePharmacyUseCase {
    pub pharmacy_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub pharmacy: Pharmacy,
}

impl ChangedPharmacy for UseCaseRes {
    fn change(&self) -> PharmacyChange {
        PharmacyChange {
            kind: PharmacyChangeKind::Deleted,
            pharmacy_id: self.pharmacy.id,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeletePharmacyUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeletePharmacy";

    async fn execute(
        &mut self,
        ctx: &PharmacyDirectoryContext,
    ) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.pharmacies.delete(&self.pharmacy_id).await {
            Some(pharmacy) => Ok(UseCaseRes { pharmacy }),
            None => Err(UseCaseErrors::NotFound(self.pharmacy_id)),
        }
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PublishPharmacyChange)]
    }
}
