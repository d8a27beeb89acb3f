use crate::shared::usecase::{Subscriber, UseCase};
use pharmacy_directory_infra::{PharmacyChange, PharmacyDirectoryContext};

/// Response of a `UseCase` that modified a stored `Pharmacy`
pub trait ChangedPharmacy {
    fn change(&self) -> PharmacyChange;
}

/// Tells every listener of the change feed about the modified `Pharmacy`
pub struct PublishPharmacyChange;

#[async_trait::async_trait(?Send)]
impl<U> Subscriber<U> for PublishPharmacyChange
where
    U: UseCase,
    U::Response: ChangedPharmacy,
{
    async fn notify(&self, res: &U::Response, ctx: &PharmacyDirectoryContext) {
        ctx.changes.publish(res.change());
    }
}
