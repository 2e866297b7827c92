//! API hit log records

use super::table::{Column, Dataset, FilterDef, FilterOptions, StatCard, StatSummary, TableSchema};
use std::fmt;

/// Outcome of a single API request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Success,
    Failed,
}

impl LogStatus {
    pub const ALL: &'static [&'static str] = &["Success", "Failed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Success => "Success",
            LogStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request made against an API in the marketplace
#[derive(Debug, Clone, PartialEq)]
pub struct ApiLog {
    pub id: String,
    pub timestamp: String,
    pub api_name: String,
    pub endpoint: String,
    pub status: LogStatus,
    pub status_code: u16,
    pub latency_ms: u32,
}

/// Aggregates shown above the log table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogStats {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    /// Mean latency rounded to the nearest millisecond, 0 when empty
    pub avg_latency_ms: u64,
}

impl StatSummary for LogStats {
    fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Requests", self.total.to_string()),
            StatCard::new("Successful", self.success.to_string()),
            StatCard::new("Failed", self.failed.to_string()),
            StatCard::new("Avg Latency", format!("{}ms", self.avg_latency_ms)),
        ]
    }
}

impl Dataset for ApiLog {
    type Stats = LogStats;

    fn schema() -> TableSchema<Self> {
        TableSchema {
            label: "api-logs",
            title: "API Hit Logs",
            columns: vec![
                Column::new("Timestamp", |l: &ApiLog| l.timestamp.clone()).searchable(),
                Column::new("API Name", |l: &ApiLog| l.api_name.clone()).searchable(),
                Column::new("Endpoint", |l: &ApiLog| l.endpoint.clone()).searchable(),
                Column::new("Status", |l: &ApiLog| l.status.to_string()),
                Column::new("Status Code", |l: &ApiLog| l.status_code.to_string()),
                Column::new("Latency (ms)", |l: &ApiLog| l.latency_ms.to_string()),
            ],
            search_fields: Vec::new(),
            filters: vec![
                FilterDef {
                    key: "status",
                    label: "Status",
                    value: |l: &ApiLog| l.status.to_string(),
                    options: FilterOptions::Fixed(LogStatus::ALL),
                },
                FilterDef {
                    key: "api",
                    label: "API",
                    value: |l: &ApiLog| l.api_name.clone(),
                    options: FilterOptions::Derived,
                },
            ],
            page_size: 10,
            empty_message: "No logs found matching your filters",
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn stats(filtered: &[&Self], _all: &[Self]) -> LogStats {
        let total = filtered.len();
        let success = filtered
            .iter()
            .filter(|l| l.status == LogStatus::Success)
            .count();
        let failed = filtered
            .iter()
            .filter(|l| l.status == LogStatus::Failed)
            .count();
        let avg_latency_ms = if total > 0 {
            let sum: u64 = filtered.iter().map(|l| u64::from(l.latency_ms)).sum();
            (sum as f64 / total as f64).round() as u64
        } else {
            0
        };

        LogStats {
            total,
            success,
            failed,
            avg_latency_ms,
        }
    }
}

fn log(
    id: &str,
    timestamp: &str,
    api_name: &str,
    endpoint: &str,
    status: LogStatus,
    status_code: u16,
    latency_ms: u32,
) -> ApiLog {
    ApiLog {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        api_name: api_name.to_string(),
        endpoint: endpoint.to_string(),
        status,
        status_code,
        latency_ms,
    }
}

/// The seeded request log, newest first
pub fn sample_logs() -> Vec<ApiLog> {
    use LogStatus::{Failed, Success};

    const VAHAN: &str = "/v1/transport/vehicle/info";
    const GSTIN: &str = "/v1/finance/gstin/verify";
    const AADHAAR: &str = "/v1/kyc/aadhaar";
    const UPI: &str = "/v1/upi/payment";

    vec![
        log("1", "2024-07-29 14:32:15", "Vahan API", VAHAN, Success, 200, 150),
        log("2", "2024-07-29 14:31:50", "GSTIN API", GSTIN, Success, 200, 80),
        log("3", "2024-07-29 14:30:05", "Aadhaar e-KYC", AADHAAR, Failed, 401, 45),
        log("4", "2024-07-29 14:29:10", "DigiLocker API", "/v1/digilocker/documents", Success, 200, 220),
        log("5", "2024-07-29 14:28:45", "UPI API", UPI, Success, 200, 110),
        log("6", "2024-07-29 14:28:02", "Vahan API", VAHAN, Success, 200, 145),
        log("7", "2024-07-29 14:27:30", "GSTIN API", GSTIN, Failed, 500, 500),
        log("8", "2024-07-29 13:25:10", "Vahan API", VAHAN, Success, 200, 135),
        log("9", "2024-07-29 13:20:45", "PAN Verification", "/v1/kyc/pan", Success, 200, 95),
        log("10", "2024-07-29 13:15:20", "Aadhaar e-KYC", AADHAAR, Success, 200, 120),
        log("11", "2024-07-29 12:10:30", "UPI API", UPI, Failed, 400, 65),
        log("12", "2024-07-29 11:45:15", "GSTIN API", GSTIN, Success, 200, 88),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::{ExportQuoting, TableView};

    fn view() -> TableView<ApiLog> {
        TableView::new(sample_logs())
    }

    #[test]
    fn test_failed_gstin_is_single_entry() {
        let mut view = view();
        assert!(view.set_filter("status", "Failed"));
        assert!(view.set_filter("api", "GSTIN API"));

        let filtered = view.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "7");
        assert_eq!(filtered[0].timestamp, "2024-07-29 14:27:30");
        assert_eq!(filtered[0].status_code, 500);
        assert_eq!(filtered[0].latency_ms, 500);
    }

    #[test]
    fn test_api_options_in_first_occurrence_order() {
        assert_eq!(
            view().filter_options("api"),
            vec![
                "All",
                "Vahan API",
                "GSTIN API",
                "Aadhaar e-KYC",
                "DigiLocker API",
                "UPI API",
                "PAN Verification",
            ]
        );
        assert_eq!(view().filter_options("status"), vec!["All", "Success", "Failed"]);
    }

    #[test]
    fn test_unfiltered_view_is_full_collection() {
        let view = view();
        let ids: Vec<&str> = view.filtered().iter().map(|l| l.id.as_str()).collect();
        let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.visible().len(), 10);
    }

    #[test]
    fn test_search_by_endpoint() {
        let mut view = view();
        view.set_search_term("/V1/KYC");
        let ids: Vec<&str> = view.filtered().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "9", "10"]);
    }

    #[test]
    fn test_stats() {
        let mut view = view();
        let stats = view.compute_stats();
        assert_eq!(stats.total, 12);
        assert_eq!(stats.success, 9);
        assert_eq!(stats.failed, 3);
        // 1753 / 12 = 146.08
        assert_eq!(stats.avg_latency_ms, 146);

        view.set_search_term("nothing matches this");
        assert_eq!(
            view.compute_stats(),
            LogStats {
                total: 0,
                success: 0,
                failed: 0,
                avg_latency_ms: 0
            }
        );
    }

    #[test]
    fn test_export_header_and_rows() {
        let mut view = view();
        view.set_filter("api", "UPI API");
        let csv = String::from_utf8(view.export_csv(ExportQuoting::Verbatim).unwrap()).unwrap();
        assert!(!csv.ends_with('\n'));
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "Timestamp,API Name,Endpoint,Status,Status Code,Latency (ms)",
                "\"2024-07-29 14:28:45\",\"UPI API\",\"/v1/upi/payment\",\"Success\",\"200\",\"110\"",
                "\"2024-07-29 12:10:30\",\"UPI API\",\"/v1/upi/payment\",\"Failed\",\"400\",\"65\"",
            ]
        );
    }
}
