use crate::error::PharmacyDirectoryError;
use actix_web::HttpRequest;
use pharmacy_directory_infra::PharmacyDirectoryContext;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Admin routes are guarded by a single api key, the only notion of
/// authentication the directory has.
pub fn protect_admin_route(
    req: &HttpRequest,
    ctx: &PharmacyDirectoryContext,
) -> Result<(), PharmacyDirectoryError> {
    let api_key = match req.headers().get(API_KEY_HEADER) {
        Some(api_key) => match api_key.to_str() {
            Ok(api_key) => api_key,
            Err(_) => {
                return Err(PharmacyDirectoryError::Unauthorized(
                    "Malformed api key provided".to_string(),
                ))
            }
        },
        None => {
            return Err(PharmacyDirectoryError::Unauthorized(format!(
                "Unable to find api-key in {} header",
                API_KEY_HEADER
            )))
        }
    };

    if api_key == ctx.config.admin_api_key {
        Ok(())
    } else {
        Err(PharmacyDirectoryError::Unauthorized(format!(
            "Invalid api-key provided in {} header",
            API_KEY_HEADER
        )))
    }
}
