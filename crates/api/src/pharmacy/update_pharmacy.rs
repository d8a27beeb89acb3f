use super::subscribers::{ChangedPharmacy, PublishPharmacyChange};
use super::non_blank;
use crate::shared::auth::protect_admin_route;
use crate::{
    error::PharmacyDirectoryError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use pharmacy_directory_api_structs::update_pharmacy::{APIResponse, PathParams, RequestBody};
use pharmacy_directory_domain::{Coordinates, Pharmacy, WeeklySchedule, ID};
use pharmacy_directory_infra::{PharmacyChange, PharmacyChangeKind, PharmacyDirectoryContext};

fn error_handler(e: UseCaseErrors) -> PharmacyDirectoryError {
    match e {
        UseCaseErrors::NotFound(pharmacy_id) => PharmacyDirectoryError::NotFound(format!(
            "The pharmacy with id: {}, was not found.",
            pharmacy_id
        )),
        UseCaseErrors::MissingField(field) => PharmacyDirectoryError::BadClientData(format!(
            "The pharmacy {} can not be empty",
            field
        )),
        UseCaseErrors::InvalidCoordinates(location) => {
            PharmacyDirectoryError::BadClientData(format!(
                "Invalid coordinates given: ({}, {})",
                location.latitude, location.longitude
            ))
        }
        UseCaseErrors::StorageError => PharmacyDirectoryError::InternalError,
    }
}

pub async fn update_pharmacy_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PharmacyDirectoryContext>,
) -> Result<HttpResponse, PharmacyDirectoryError> {
    protect_admin_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdatePharmacyUseCase {
        pharmacy_id: path_params.pharmacy_id,
        name: body.name,
        address: body.address,
        phone: body.phone,
        opening_hours: body.opening_hours,
        latitude: body.latitude,
        longitude: body.longitude,
        image_url: body.image_url,
        is_active: body.is_active,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.pharmacy)))
        .map_err(error_handler)
}

/// Fields that are `None` keep their stored value
#[derive(Debug, Default)]
pub struct UpdatePharmacyUseCase {
    pub pharmacy_id: ID,
    pub name: Option<String>,
    pub address: Option<String>,
    /// `Some("")` removes the phone number
    pub phone: Option<String>,
    pub opening_hours: Option<WeeklySchedule>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// `Some("")` removes the image
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    MissingField(&'static str),
    InvalidCoordinates(Coordinates),
    StorageError,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub pharmacy: Pharmacy,
}

impl ChangedPharmacy for UseCaseRes {
    fn change(&self) -> PharmacyChange {
        PharmacyChange {
            kind: PharmacyChangeKind::Updated,
            pharmacy_id: self.pharmacy.id,
        }
    }
}

fn required(value: String, field: &'static str) -> Result<String, UseCaseErrors> {
    let value = value.trim();
    if value.is_empty() {
        return Err(UseCaseErrors::MissingField(field));
    }
    Ok(value.to_string())
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdatePharmacyUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "UpdatePharmacy";

    async fn execute(
        &mut self,
        ctx: &PharmacyDirectoryContext,
    ) -> Result<Self::Response, Self::Errors> {
        let mut pharmacy = match ctx.repos.pharmacies.find(&self.pharmacy_id).await {
            Some(pharmacy) => pharmacy,
            None => return Err(UseCaseErrors::NotFound(self.pharmacy_id)),
        };

        if let Some(name) = self.name.take() {
            pharmacy.name = required(name, "name")?;
        }
        if let Some(address) = self.address.take() {
            pharmacy.address = required(address, "address")?;
        }
        if self.latitude.is_some() || self.longitude.is_some() {
            let location = Coordinates::new(
                self.latitude.unwrap_or(pharmacy.latitude),
                self.longitude.unwrap_or(pharmacy.longitude),
            );
            if !location.is_valid() {
                return Err(UseCaseErrors::InvalidCoordinates(location));
            }
            pharmacy.set_location(location);
        }
        if let Some(phone) = self.phone.take() {
            pharmacy.phone = non_blank(Some(phone));
        }
        if let Some(image_url) = self.image_url.take() {
            pharmacy.image_url = non_blank(Some(image_url));
        }
        if let Some(opening_hours) = self.opening_hours.take() {
            pharmacy.opening_hours = opening_hours;
        }
        if let Some(is_active) = self.is_active {
            pharmacy.is_active = is_active;
        }
        pharmacy.updated_at = ctx.sys.now();

        ctx.repos
            .pharmacies
            .save(&pharmacy)
            .await
            .map(|_| UseCaseRes { pharmacy })
            .map_err(|_| UseCaseErrors::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PublishPharmacyChange)]
    }
}
