//! Wallet payment records

use super::table::{Column, Dataset, FilterDef, FilterOptions, StatCard, StatSummary, TableSchema};
use std::fmt;

/// Wallet balance shown on the billing screen
pub const CURRENT_BALANCE: f64 = 98.50;

/// Date of the most recent recharge, as displayed
pub const LAST_RECHARGE: &str = "July 20, 2024";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Completed,
    Pending,
    Failed,
}

impl PaymentStatus {
    pub const ALL: &'static [&'static str] = &["Completed", "Pending", "Failed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wallet recharge
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    /// Amount in USD
    pub amount: f64,
    pub status: PaymentStatus,
    pub transaction_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentStats {
    /// Sum of completed payments
    pub total_spent: f64,
    /// Sum of pending payments
    pub pending: f64,
    pub total_transactions: usize,
}

impl StatSummary for PaymentStats {
    fn cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Spent", format!("${:.2}", self.total_spent)),
            StatCard::new("Pending", format!("${:.2}", self.pending)),
            StatCard::new("Total Transactions", self.total_transactions.to_string()),
        ]
    }
}

impl Dataset for Payment {
    type Stats = PaymentStats;

    fn schema() -> TableSchema<Self> {
        TableSchema {
            label: "payment-history",
            title: "Payment History",
            columns: vec![
                Column::new("Date", |p: &Payment| p.date.clone()).searchable(),
                Column::new("Amount (USD)", |p: &Payment| format!("{:.2}", p.amount)),
                Column::new("Status", |p: &Payment| p.status.to_string()),
                Column::new("Transaction ID", |p: &Payment| p.transaction_id.clone()).searchable(),
            ],
            search_fields: Vec::new(),
            filters: vec![FilterDef {
                key: "status",
                label: "Status",
                value: |p: &Payment| p.status.to_string(),
                options: FilterOptions::Fixed(PaymentStatus::ALL),
            }],
            page_size: 5,
            empty_message: "No payments found",
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn stats(filtered: &[&Self], _all: &[Self]) -> PaymentStats {
        let sum_where = |status: PaymentStatus| -> f64 {
            filtered
                .iter()
                .filter(|p| p.status == status)
                .map(|p| p.amount)
                .sum()
        };

        PaymentStats {
            total_spent: sum_where(PaymentStatus::Completed),
            pending: sum_where(PaymentStatus::Pending),
            total_transactions: filtered.len(),
        }
    }
}

fn payment(id: &str, date: &str, amount: f64, status: PaymentStatus, transaction_id: &str) -> Payment {
    Payment {
        id: id.to_string(),
        date: date.to_string(),
        amount,
        status,
        transaction_id: transaction_id.to_string(),
    }
}

/// The seeded payment history, newest first
pub fn sample_payments() -> Vec<Payment> {
    use PaymentStatus::{Completed, Failed, Pending};

    vec![
        payment("1", "2024-07-29", 50.00, Completed, "txn_1HjK9mN2pQrS3tUvWxYaBcD"),
        payment("2", "2024-07-20", 50.00, Completed, "txn_1GfE8kL1oPqR2sTvUwXyZaBc"),
        payment("3", "2024-06-15", 25.00, Completed, "txn_1FeD7jK0nOpQ1rSuTvWxYzAb"),
        payment("4", "2024-05-18", 100.00, Completed, "txn_1EdC6iJ9mNoP0qRtSuVwXyZa"),
        payment("5", "2024-04-22", 50.00, Completed, "txn_1DcB5hI8lMnO9pQsRtUvWxYz"),
        payment("6", "2024-03-10", 75.00, Completed, "txn_1CbA4gH7kLmN8oPrQsStUvWx"),
        payment("7", "2024-02-15", 30.00, Pending, "txn_1BaZ3fG6jKlM7nOqPrRsStUv"),
        payment("8", "2024-01-20", 50.00, Failed, "txn_1AzY2eF5iJkL6mNpOqQsRtSu"),
    ]
}
