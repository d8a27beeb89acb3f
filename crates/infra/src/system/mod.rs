use chrono::{DateTime, Local, NaiveDateTime, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current instant, used for record timestamps
    fn now(&self) -> DateTime<Utc>;
    /// The current wall-clock time of the host, used for opening hours
    fn local_now(&self) -> NaiveDateTime;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// System frozen at a single local wall-clock time
pub struct StaticTimeSys {
    pub local_now: NaiveDateTime,
}
impl ISys for StaticTimeSys {
    fn now(&self) -> DateTime<Utc> {
        self.local_now.and_utc()
    }

    fn local_now(&self) -> NaiveDateTime {
        self.local_now
    }
}
