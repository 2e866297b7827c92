//! Simulated Vahan registration lookup

use crate::model::vehicle::{known_vehicles, Location, VehicleRecord};
use crate::model::TableView;
use chrono::NaiveDateTime;

/// What a lookup did to the vehicle table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Blank registration number, nothing looked up
    Rejected,
    /// Known vehicle already in the table
    AlreadyListed(String),
    /// Known vehicle added to the front of the table
    Found(String),
    /// Unknown registration, placeholder record added
    Created(String),
}

impl LookupOutcome {
    /// Status bar text
    pub fn message(&self) -> String {
        match self {
            LookupOutcome::Rejected => "Please enter a vehicle registration number.".to_string(),
            LookupOutcome::AlreadyListed(reg) => format!("{} is already listed", reg),
            LookupOutcome::Found(reg) => format!("Found vehicle {}", reg),
            LookupOutcome::Created(reg) => format!("Added new record for {}", reg),
        }
    }
}

/// Look up `registration` and record the result in `view`
pub fn lookup(
    view: &mut TableView<VehicleRecord>,
    registration: &str,
    now: NaiveDateTime,
) -> LookupOutcome {
    let registration = registration.trim();
    if registration.is_empty() {
        return LookupOutcome::Rejected;
    }

    let known = known_vehicles()
        .into_iter()
        .find(|v| v.registration_no.eq_ignore_ascii_case(registration));

    match known {
        Some(record) if view.contains_id(&record.id) => {
            LookupOutcome::AlreadyListed(record.registration_no)
        }
        Some(record) => {
            let reg = record.registration_no.clone();
            view.prepend(record);
            LookupOutcome::Found(reg)
        }
        None => {
            let record = placeholder(registration, now);
            let reg = record.registration_no.clone();
            view.prepend(record);
            LookupOutcome::Created(reg)
        }
    }
}

/// Record for a registration the registry knows nothing about
fn placeholder(registration: &str, now: NaiveDateTime) -> VehicleRecord {
    VehicleRecord {
        id: now.and_utc().timestamp_millis().to_string(),
        registration_no: registration.to_uppercase(),
        owner_name: "New Owner".to_string(),
        registered_date: now.format("%d-%b-%Y").to_string(),
        vehicle_class: "Motor Car".to_string(),
        fuel_type: "Petrol".to_string(),
        maker_model: "Unknown / Unknown".to_string(),
        fitness_upto: "N/A".to_string(),
        insurance_upto: "N/A".to_string(),
        registration_authority: "RTO".to_string(),
        search_date: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        location: Some(Location {
            city: "Unknown".to_string(),
            state: "Unknown".to_string(),
            pincode: Some("N/A".to_string()),
            latitude: None,
            longitude: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 8, 2)
            .unwrap()
            .and_hms_opt(10, 5, 0)
            .unwrap()
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut view = TableView::new(known_vehicles());
        assert_eq!(lookup(&mut view, "   ", now()), LookupOutcome::Rejected);
        assert_eq!(view.records().len(), 5);
    }

    #[test]
    fn test_known_vehicle_not_duplicated() {
        let mut view = TableView::new(known_vehicles());
        let outcome = lookup(&mut view, "mh12cd5678", now());
        assert_eq!(outcome, LookupOutcome::AlreadyListed("MH12CD5678".to_string()));
        assert_eq!(view.records().len(), 5);
    }

    #[test]
    fn test_known_vehicle_prepended_when_missing() {
        let mut view = TableView::new(known_vehicles().into_iter().skip(1).collect());
        let outcome = lookup(&mut view, "DL01AB1234", now());
        assert_eq!(outcome, LookupOutcome::Found("DL01AB1234".to_string()));
        assert_eq!(view.records()[0].id, "1");
        assert_eq!(view.records().len(), 5);
    }

    #[test]
    fn test_unknown_vehicle_creates_placeholder() {
        let mut view = TableView::new(known_vehicles());
        view.set_page(2);

        let outcome = lookup(&mut view, " up32zz0001 ", now());
        assert_eq!(outcome, LookupOutcome::Created("UP32ZZ0001".to_string()));
        assert_eq!(view.page(), 1);

        let record = &view.records()[0];
        assert_eq!(record.registration_no, "UP32ZZ0001");
        assert_eq!(record.owner_name, "New Owner");
        assert_eq!(record.registered_date, "02-Aug-2024");
        assert_eq!(record.search_date, "2024-08-02 10:05:00");
        assert_eq!(record.registration_authority, "RTO");
        assert_eq!(record.location_display(), "Unknown, Unknown");
        assert_eq!(view.compute_stats().searches_this_month, 6);
    }
}
