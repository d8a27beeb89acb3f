mod create_pharmacy;
mod delete_pharmacy;
mod get_directory_stats;
mod get_nearest_pharmacies;
mod get_pharmacy;
mod get_pharmacy_by_slug;
mod get_pharmacy_status;
mod list_pharmacies;
mod subscribers;
mod update_pharmacy;

use actix_web::web;
use create_pharmacy::create_pharmacy_controller;
use delete_pharmacy::delete_pharmacy_controller;
use get_directory_stats::get_directory_stats_controller;
use get_nearest_pharmacies::get_nearest_pharmacies_controller;
use get_pharmacy::get_pharmacy_controller;
use get_pharmacy_by_slug::get_pharmacy_by_slug_controller;
use get_pharmacy_status::get_pharmacy_status_controller;
use list_pharmacies::list_pharmacies_controller;
use pharmacy_directory_domain::Pharmacy;
use pharmacy_directory_infra::PharmacyDirectoryContext;
use update_pharmacy::update_pharmacy_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/pharmacy", web::post().to(create_pharmacy_controller));
    cfg.route("/pharmacy", web::get().to(list_pharmacies_controller));
    // Fixed paths go before `/pharmacy/{pharmacy_id}`
    cfg.route(
        "/pharmacy/stats",
        web::get().to(get_directory_stats_controller),
    );
    cfg.route(
        "/pharmacy/nearest",
        web::get().to(get_nearest_pharmacies_controller),
    );
    cfg.route(
        "/pharmacy/slug/{slug}",
        web::get().to(get_pharmacy_by_slug_controller),
    );
    cfg.route(
        "/pharmacy/{pharmacy_id}",
        web::get().to(get_pharmacy_controller),
    );
    cfg.route(
        "/pharmacy/{pharmacy_id}",
        web::put().to(update_pharmacy_controller),
    );
    cfg.route(
        "/pharmacy/{pharmacy_id}",
        web::delete().to(delete_pharmacy_controller),
    );
    cfg.route(
        "/pharmacy/{pharmacy_id}/status",
        web::get().to(get_pharmacy_status_controller),
    );
}

/// The pharmacies the public directory shows: every active stored `Pharmacy`,
/// or the demo set while the store has none.
pub(crate) struct Directory {
    pub pharmacies: Vec<Pharmacy>,
    pub is_demo: bool,
}

pub(crate) async fn load_directory(ctx: &PharmacyDirectoryContext) -> Directory {
    let pharmacies = ctx.repos.pharmacies.find_active().await;
    if pharmacies.is_empty() && !ctx.demo_pharmacies.is_empty() {
        return Directory {
            pharmacies: ctx.demo_pharmacies.to_vec(),
            is_demo: true,
        };
    }
    Directory {
        pharmacies,
        is_demo: false,
    }
}

/// Trims `value` and maps blank strings to `None`
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
