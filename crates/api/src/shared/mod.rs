pub mod auth;
pub mod usecase;

#[cfg(test)]
pub mod test_helpers {
    use chrono::{NaiveDate, NaiveDateTime};
    use pharmacy_directory_infra::{Config, PharmacyDirectoryContext, StaticTimeSys};
    use std::sync::Arc;

    /// Monday 2024-01-01 at `hour`:`minute`, shifted by `day_offset` days
    pub fn local_time(day_offset: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1 + day_offset)
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .unwrap()
    }

    pub fn setup_context(local_now: NaiveDateTime, demo_data: bool) -> PharmacyDirectoryContext {
        let mut ctx = PharmacyDirectoryContext::with_config(Config {
            port: 0,
            admin_api_key: "admin".into(),
            demo_data,
        });
        ctx.sys = Arc::new(StaticTimeSys { local_now });
        ctx
    }
}
