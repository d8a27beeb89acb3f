use super::subscribers::{ChangedPharmacy, PublishPharmacyChange};
use super::non_blank;
use crate::shared::auth::protect_admin_route;
use crate::{
    error::PharmacyDirectoryError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use pharmacy_directory_api_structs::create_pharmacy::{APIResponse, RequestBody};
use pharmacy_directory_domain::{Coordinates, Pharmacy, WeeklySchedule};
use pharmacy_directory_infra::{PharmacyChange, PharmacyChangeKind, PharmacyDirectoryContext};

fn error_handler(e: UseCaseErrors) -> PharmacyDirectoryError {
    match e {
        UseCaseErrors::StorageError => PharmacyDirectoryError::InternalError,
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
    }
}

pub async fn create_pharmacy_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<PharmacyDirectoryContext>,
) -> Result<HttpResponse, PharmacyDirectoryError> {
    protect_admin_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = CreatePharmacyUseCase {
        name: body.name,
        address: body.address,
        phone: body.phone,
        opening_hours: body.opening_hours,
        location: Coordinates::new(body.latitude, body.longitude),
        image_url: body.image_url,
        is_active: body.is_active.unwrap_or(true),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Created().json(APIResponse::new(res.pharmacy)))
        .map_err(error_handler)
}

#[derive(Debug)]
pub struct CreatePharmacyUseCase {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub opening_hours: WeeklySchedule,
    pub location: Coordinates,
    pub image_url: Option<String>,
    pub is_active: bool,
}

#[derive(Debug)]
pub enum UseCaseErrors {
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
            kind: PharmacyChangeKind::Created,
            pharmacy_id: self.pharmacy.id,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreatePharmacyUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreatePharmacy";

    async fn execute(
        &mut self,
        ctx: &PharmacyDirectoryContext,
    ) -> Result<Self::Response, Self::Errors> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UseCaseErrors::MissingField("name"));
        }
        let address = self.address.trim();
        if address.is_empty() {
            return Err(UseCaseErrors::MissingField("address"));
        }
        if !self.location.is_valid() {
            return Err(UseCaseErrors::InvalidCoordinates(self.location));
        }

        let mut pharmacy = Pharmacy::new(
            name.to_string(),
            address.to_string(),
            self.location,
            self.opening_hours.clone(),
            ctx.sys.now(),
        );
        pharmacy.phone = non_blank(self.phone.take());
        pharmacy.image_url = non_blank(self.image_url.take());
        pharmacy.is_active = self.is_active;

        ctx.repos
            .pharmacies
            .insert(&pharmacy)
            .await
            .map(|_| UseCaseRes { pharmacy })
            .map_err(|_| UseCaseErrors::StorageError)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(PublishPharmacyChange)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shared::test_helpers::{local_time, setup_context};
    use serde_json::json;

    fn usecase(name: &str) -> CreatePharmacyUseCase {
        CreatePharmacyUseCase {
            name: name.into(),
            address: " Avenue Hassan II, Harhoura ".into(),
            phone: Some("+212537123456".into()),
            opening_hours: WeeklySchedule::from_raw(&json!({
                "lun": [{ "open": "08:00", "close": "20:00" }]
            })),
            location: Coordinates::new(33.9545, -6.8865),
            image_url: Some("".into()),
            is_active: true,
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_creates_and_publishes_the_pharmacy() {
        let ctx = setup_context(local_time(0, 10, 0), false);
        let mut changes = ctx.changes.subscribe();

        let res = execute(usecase("Pharmacie Centrale"), &ctx)
            .await
            .expect("To create pharmacy");
        let pharmacy = res.pharmacy;
        assert_eq!(pharmacy.address, "Avenue Hassan II, Harhoura");
        assert_eq!(pharmacy.image_url, None);
        assert!(ctx.repos.pharmacies.find(&pharmacy.id).await.is_some());

        let change = changes.try_recv().expect("To receive a change");
        assert_eq!(change.kind, PharmacyChangeKind::Created);
        assert_eq!(change.pharmacy_id, pharmacy.id);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_blank_names_and_bad_coordinates() {
        let ctx = setup_context(local_time(0, 10, 0), false);
        let mut changes = ctx.changes.subscribe();

        let res = execute(usecase("   "), &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::MissingField("name"))));

        let mut invalid = usecase("Pharmacie Atlas");
        invalid.location = Coordinates::new(91.0, 0.0);
        let res = execute(invalid, &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::InvalidCoordinates(_))));

        assert!(ctx.repos.pharmacies.find_active().await.is_empty());
        assert!(changes.try_recv().is_err());
    }
}
