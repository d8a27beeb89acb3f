mod changes;
mod config;
mod demo_data;
mod repos;
mod system;

pub use changes::{PharmacyChange, PharmacyChangeFeed, PharmacyChangeKind};
pub use config::Config;
pub use demo_data::demo_pharmacies;
pub use repos::{IPharmacyRepo, InMemoryPharmacyRepo, Repos};
use pharmacy_directory_domain::Pharmacy;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::info;

/// Everything a use case needs to talk to the outside world.
///
/// Constructed once at startup and handed down explicitly.
#[derive(Clone)]
pub struct PharmacyDirectoryContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub changes: PharmacyChangeFeed,
    /// Served when the store has no active pharmacy. Empty when demo data is disabled.
    pub demo_pharmacies: Arc<Vec<Pharmacy>>,
}

impl PharmacyDirectoryContext {
    pub fn create_inmemory() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        let sys: Arc<dyn ISys> = Arc::new(RealSys {});
        let demo = if config.demo_data {
            demo_pharmacies(sys.now())
        } else {
            Vec::new()
        };
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys,
            changes: PharmacyChangeFeed::default(),
            demo_pharmacies: Arc::new(demo),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> PharmacyDirectoryContext {
    let ctx = PharmacyDirectoryContext::create_inmemory();
    info!(
        "Using the in-memory pharmacy store. Demo data enabled: {}",
        ctx.config.demo_data
    );
    ctx
}
