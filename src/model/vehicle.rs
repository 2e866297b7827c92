//! Vehicle registration records looked up through the Vahan API

use super::table::{Column, Dataset, SearchField, StatCard, StatSummary, TableSchema};

/// Where a vehicle is registered
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub pincode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Location {
    /// "city, state" as shown in the table and the export
    pub fn display(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub id: String,
    pub registration_no: String,
    pub owner_name: String,
    pub registered_date: String,
    pub vehicle_class: String,
    pub fuel_type: String,
    pub maker_model: String,
    pub fitness_upto: String,
    pub insurance_upto: String,
    pub registration_authority: String,
    pub search_date: String,
    pub location: Option<Location>,
}

impl VehicleRecord {
    pub fn location_display(&self) -> String {
        self.location
            .as_ref()
            .map(Location::display)
            .unwrap_or_else(|| "N/A".to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleStats {
    /// Records matching the current search
    pub total_vehicles: usize,
    /// Every lookup made, regardless of the search
    pub searches_this_month: usize,
    /// Same count as `total_vehicles`. Records carry no active/expired
    /// flag yet, so every matching record counts as active.
    pub active_records: usize,
}

impl StatSummary for VehicleStats {
    fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Vehicles", self.total_vehicles.to_string()),
            StatCard::new("Searches This Month", self.searches_this_month.to_string()),
            StatCard::new("Active Records", self.active_records.to_string()),
        ]
    }
}

impl Dataset for VehicleRecord {
    type Stats = VehicleStats;

    fn schema() -> TableSchema<Self> {
        TableSchema {
            label: "vehicle-details",
            title: "Vehicle Details",
            columns: vec![
                Column::new("Registration No", |v: &VehicleRecord| v.registration_no.clone())
                    .searchable(),
                Column::new("Owner Name", |v: &VehicleRecord| v.owner_name.clone()).searchable(),
                Column::new("Registered Date", |v: &VehicleRecord| v.registered_date.clone()),
                Column::new("Vehicle Class", |v: &VehicleRecord| v.vehicle_class.clone())
                    .searchable(),
                Column::new("Fuel Type", |v: &VehicleRecord| v.fuel_type.clone()),
                Column::new("Maker / Model", |v: &VehicleRecord| v.maker_model.clone())
                    .searchable(),
                Column::new("Fitness Upto", |v: &VehicleRecord| v.fitness_upto.clone()),
                Column::new("Insurance Upto", |v: &VehicleRecord| v.insurance_upto.clone()),
                Column::new("Registration Authority", |v: &VehicleRecord| {
                    v.registration_authority.clone()
                }),
                Column::new("Location", |v: &VehicleRecord| v.location_display()),
                Column::new("Search Date", |v: &VehicleRecord| v.search_date.clone()),
            ],
            search_fields: vec![
                SearchField::new("city", |v: &VehicleRecord| {
                    v.location.as_ref().map(|l| l.city.clone())
                }),
                SearchField::new("state", |v: &VehicleRecord| {
                    v.location.as_ref().map(|l| l.state.clone())
                }),
            ],
            filters: Vec::new(),
            page_size: 5,
            empty_message: "No vehicle records found. Press 'v' to look up a vehicle.",
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn stats(filtered: &[&Self], all: &[Self]) -> VehicleStats {
        VehicleStats {
            total_vehicles: filtered.len(),
            searches_this_month: all.len(),
            active_records: filtered.len(),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    registration_no: &str,
    owner_name: &str,
    registered_date: &str,
    fuel_type: &str,
    maker_model: &str,
    fitness_upto: &str,
    insurance_upto: &str,
    city: &str,
    state: &str,
    pincode: &str,
    coordinates: (f64, f64),
    search_date: &str,
) -> VehicleRecord {
    VehicleRecord {
        id: id.to_string(),
        registration_no: registration_no.to_string(),
        owner_name: owner_name.to_string(),
        registered_date: registered_date.to_string(),
        vehicle_class: "Motor Car".to_string(),
        fuel_type: fuel_type.to_string(),
        maker_model: maker_model.to_string(),
        fitness_upto: fitness_upto.to_string(),
        insurance_upto: insurance_upto.to_string(),
        registration_authority: format!("RTO, {}", city),
        search_date: search_date.to_string(),
        location: Some(Location {
            city: city.to_string(),
            state: state.to_string(),
            pincode: Some(pincode.to_string()),
            latitude: Some(coordinates.0),
            longitude: Some(coordinates.1),
        }),
    }
}

/// Vehicles the lookup service knows about. The first five also seed the
/// vehicle details table.
pub fn known_vehicles() -> Vec<VehicleRecord> {
    vec![
        vehicle(
            "1",
            "DL01AB1234",
            "John Doe",
            "15-Jan-2020",
            "Petrol",
            "Maruti Suzuki / Swift Dzire",
            "14-Jan-2035",
            "10-Jan-2025",
            "New Delhi",
            "Delhi",
            "110001",
            (28.6139, 77.2090),
            "2024-07-29 14:32:15",
        ),
        vehicle(
            "2",
            "MH12CD5678",
            "Priya Sharma",
            "22-Mar-2019",
            "Diesel",
            "Hyundai / Creta",
            "21-Mar-2034",
            "15-Mar-2025",
            "Mumbai",
            "Maharashtra",
            "400001",
            (19.0760, 72.8777),
            "2024-07-29 13:20:45",
        ),
        vehicle(
            "3",
            "KA03EF9012",
            "Ramesh Kumar",
            "10-Jun-2021",
            "Electric",
            "Tata / Nexon EV",
            "09-Jun-2036",
            "05-Jun-2025",
            "Bangalore",
            "Karnataka",
            "560001",
            (12.9716, 77.5946),
            "2024-07-28 16:45:30",
        ),
        vehicle(
            "4",
            "TN09GH3456",
            "Lakshmi Nair",
            "05-Aug-2018",
            "Petrol",
            "Honda / City",
            "04-Aug-2033",
            "30-Jul-2024",
            "Chennai",
            "Tamil Nadu",
            "600001",
            (13.0827, 80.2707),
            "2024-07-27 11:30:20",
        ),
        vehicle(
            "5",
            "GJ06IJ7890",
            "Amit Patel",
            "18-Nov-2020",
            "CNG",
            "Maruti Suzuki / WagonR",
            "17-Nov-2035",
            "12-Nov-2025",
            "Ahmedabad",
            "Gujarat",
            "380001",
            (23.0225, 72.5714),
            "2024-07-26 09:15:10",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::{ExportQuoting, TableView};

    #[test]
    fn test_search_covers_location() {
        let mut view = TableView::new(known_vehicles());
        view.set_search_term("karnataka");
        let ids: Vec<&str> = view.filtered().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);

        view.set_search_term("maruti");
        let ids: Vec<&str> = view.filtered().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "5"]);
    }

    #[test]
    fn test_location_parts_searched_separately() {
        let mut view = TableView::new(known_vehicles());
        let mut record = known_vehicles().remove(0);
        record.id = "6".to_string();
        record.registration_no = "HR26XY0001".to_string();
        record.location = None;
        view.prepend(record);

        // The "city, state" display text is not searched as a whole
        view.set_search_term(", ");
        assert!(view.filtered().is_empty());
        view.set_search_term("n/a");
        assert!(view.filtered().is_empty());
        view.set_search_term("mumbai, maha");
        assert!(view.filtered().is_empty());

        view.set_search_term("maharashtra");
        let ids: Vec<&str> = view.filtered().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_search_skips_fuel_type() {
        let mut view = TableView::new(known_vehicles());
        view.set_search_term("cng");
        assert!(view.filtered().is_empty());
    }

    #[test]
    fn test_stats_count_full_collection_for_searches() {
        let mut view = TableView::new(known_vehicles());
        view.set_search_term("petrol owner that does not exist");
        let stats = view.compute_stats();
        assert_eq!(stats.total_vehicles, 0);
        assert_eq!(stats.searches_this_month, 5);
        assert_eq!(stats.active_records, 0);
    }

    #[test]
    fn test_missing_location_renders_na() {
        let mut record = known_vehicles().remove(0);
        record.location = None;
        assert_eq!(record.location_display(), "N/A");
    }

    #[test]
    fn test_export_row_layout() {
        let mut view = TableView::new(known_vehicles());
        view.set_search_term("DL01");
        let csv = String::from_utf8(view.export_csv(ExportQuoting::Verbatim).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Registration No,Owner Name,Registered Date,Vehicle Class,Fuel Type,Maker / Model,\
             Fitness Upto,Insurance Upto,Registration Authority,Location,Search Date"
        );
        assert_eq!(
            lines[1],
            "\"DL01AB1234\",\"John Doe\",\"15-Jan-2020\",\"Motor Car\",\"Petrol\",\
             \"Maruti Suzuki / Swift Dzire\",\"14-Jan-2035\",\"10-Jan-2025\",\"RTO, New Delhi\",\
             \"New Delhi, Delhi\",\"2024-07-29 14:32:15\""
        );
    }
}
