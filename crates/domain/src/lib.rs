mod geo;
mod opening_hours;
mod pharmacy;
mod phone;
mod shared;
mod status;

pub use geo::Coordinates;
pub use opening_hours::{
    day_key, format_opening_hours, weekday_name, DaySchedule, Interval, InvalidTimeOfDayError,
    TimeOfDay, WeeklySchedule, WEEK,
};
pub use pharmacy::{slugify, Pharmacy};
pub use phone::format_phone_number;
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use status::{evaluate, DayLabel, NextChange, OpenStatus, StatusLabel};

pub use chrono::Weekday;
