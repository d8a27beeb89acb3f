mod pharmacy;
mod status;

pub mod dtos {
    pub use crate::pharmacy::dtos::*;
}

pub use crate::pharmacy::api::*;
pub use crate::status::api::*;
