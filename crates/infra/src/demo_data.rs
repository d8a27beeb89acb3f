use chrono::{DateTime, Utc};
use pharmacy_directory_domain::{Coordinates, Pharmacy, WeeklySchedule};
use serde_json::json;

/// Hours of a pharmacy open every weekday with the same interval, in the
/// legacy single-interval format
fn weekly_hours(
    open: &str,
    close: &str,
    saturday: (&str, &str),
    sunday: Option<(&str, &str)>,
) -> WeeklySchedule {
    let mut hours = json!({
        "lun": { "open": open, "close": close },
        "mar": { "open": open, "close": close },
        "mer": { "open": open, "close": close },
        "jeu": { "open": open, "close": close },
        "ven": { "open": open, "close": close },
        "sam": { "open": saturday.0, "close": saturday.1 },
        "dim": { "closed": true },
    });
    if let Some((open, close)) = sunday {
        hours["dim"] = json!({ "open": open, "close": close });
    }
    WeeklySchedule::from_raw(&hours)
}

fn demo(
    name: &str,
    address: &str,
    phone: &str,
    location: Coordinates,
    opening_hours: WeeklySchedule,
    created_at: DateTime<Utc>,
) -> Pharmacy {
    let mut pharmacy = Pharmacy::new(
        name.into(),
        address.into(),
        location,
        opening_hours,
        created_at,
    );
    pharmacy.phone = Some(phone.into());
    pharmacy
}

/// Pharmacies listed while the store is empty, ordered by name
pub fn demo_pharmacies(created_at: DateTime<Utc>) -> Vec<Pharmacy> {
    vec![
        demo(
            "Pharmacie Al Amal",
            "Rue des Palmiers, Quartier Résidentiel",
            "+212537789012",
            Coordinates::new(33.972, -6.8505),
            weekly_hours("09:00", "19:00", ("10:00", "17:00"), None),
            created_at,
        ),
        demo(
            "Pharmacie Atlas",
            "Boulevard Atlas, Harhoura",
            "+212537456789",
            Coordinates::new(33.9725, -6.851),
            weekly_hours("08:00", "21:00", ("09:00", "20:00"), Some(("10:00", "14:00"))),
            created_at,
        ),
        demo(
            "Pharmacie Centrale Harhoura",
            "Avenue Mohammed V, Centre Harhoura",
            "+212537123456",
            Coordinates::new(33.9716, -6.8498),
            weekly_hours("08:00", "20:00", ("09:00", "18:00"), None),
            created_at,
        ),
        demo(
            "Pharmacie du Port",
            "Port de Plaisance Harhoura",
            "+212537345678",
            Coordinates::new(33.971, -6.849),
            weekly_hours("08:30", "19:30", ("09:00", "18:00"), Some(("10:00", "16:00"))),
            created_at,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pharmacy_directory_domain::{DaySchedule, Weekday};

    #[test]
    fn demo_pharmacies_are_sorted_and_use_legacy_hours() {
        let pharmacies = demo_pharmacies(Utc::now());
        assert_eq!(pharmacies.len(), 4);

        let mut names = pharmacies.iter().map(|p| p.name.clone()).collect::<Vec<_>>();
        names.sort();
        assert_eq!(
            names,
            pharmacies.iter().map(|p| p.name.clone()).collect::<Vec<_>>()
        );

        for pharmacy in &pharmacies {
            assert!(pharmacy.is_active);
            assert!(pharmacy.location().is_valid());
            assert!(matches!(
                pharmacy.opening_hours.day(Weekday::Wed),
                DaySchedule::SingleInterval(_)
            ));
        }
        assert!(pharmacies[0].opening_hours.day(Weekday::Sun).is_closed());
        assert!(!pharmacies[3].opening_hours.day(Weekday::Sun).is_closed());
    }
}
