use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cell::{CellValue, TableRow};

/// Bucket size of a usage chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsagePeriod {
    #[default]
    Day,
    Month,
    Year,
}

impl UsagePeriod {
    /// Axis label for a bucket starting at `date`.
    pub fn label(&self, date: NaiveDate) -> String {
        match self {
            UsagePeriod::Day => date.format("%b %d").to_string(),
            UsagePeriod::Month => date.format("%b %Y").to_string(),
            UsagePeriod::Year => date.format("%Y").to_string(),
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            UsagePeriod::Day => "day",
            UsagePeriod::Month => "month",
            UsagePeriod::Year => "year",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "month" => UsagePeriod::Month,
            "year" => UsagePeriod::Year,
            _ => UsagePeriod::Day,
        }
    }
}

/// One bucket of usage data.
///
/// The analytics endpoint is mid-migration: older deployments send
/// `day`/`count`/`users`, newer ones `date`/`requests`/`active_users`.
/// Both shapes deserialize into this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePoint {
    #[serde(alias = "day")]
    pub date: NaiveDate,
    #[serde(default, alias = "count")]
    pub requests: u64,
    #[serde(default, alias = "users")]
    pub active_users: u64,
}

impl UsagePoint {
    pub fn label(&self, period: UsagePeriod) -> String {
        period.label(self.date)
    }
}

impl TableRow for UsagePoint {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "date" => self.date.into(),
            "requests" => (self.requests as i64).into(),
            "active_users" => (self.active_users as i64).into(),
            _ => CellValue::Empty,
        }
    }
}

/// Summary numbers shown on the dashboard landing cards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, alias = "userCount")]
    pub total_users: u64,
    #[serde(default, alias = "customerCount")]
    pub total_customers: u64,
    #[serde(default, alias = "sessions")]
    pub active_sessions: u64,
    #[serde(default, alias = "usageData")]
    pub usage: Vec<UsagePoint>,
}
