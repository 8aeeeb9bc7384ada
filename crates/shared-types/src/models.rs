use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cell::{CellValue, TableRow};

/// Dashboard user role controlling access to admin pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Viewer,
    Editor,
    Admin,
}

impl UserRole {
    /// Parse a role string. Unknown values default to Viewer.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "editor" => UserRole::Editor,
            "admin" => UserRole::Admin,
            _ => UserRole::Viewer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Viewer => "viewer",
            UserRole::Editor => "editor",
            UserRole::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Viewer => "Viewer",
            UserRole::Editor => "Editor",
            UserRole::Admin => "Admin",
        }
    }
}

/// Account state shared by users and customers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Invited,
    Suspended,
}

impl AccountStatus {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "invited" => AccountStatus::Invited,
            "suspended" => AccountStatus::Suspended,
            _ => AccountStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Invited => "invited",
            AccountStatus::Suspended => "suspended",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Invited => "Invited",
            AccountStatus::Suspended => "Suspended",
        }
    }
}

/// A dashboard user as listed on the users page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub created_at: NaiveDate,
}

/// A customer account as listed on the customers page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: String,
    pub company: String,
    pub contact_email: String,
    pub plan: String,
    pub seats: i64,
    pub status: AccountStatus,
    pub renewal_date: Option<NaiveDate>,
}

impl TableRow for UserRecord {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "role" => self.role.as_str().into(),
            "status" => self.status.as_str().into(),
            "created_at" => self.created_at.into(),
            _ => CellValue::Empty,
        }
    }
}

impl TableRow for CustomerRecord {
    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => self.id.as_str().into(),
            "company" => self.company.as_str().into(),
            "contact_email" => self.contact_email.as_str().into(),
            "plan" => self.plan.as_str().into(),
            "seats" => self.seats.into(),
            "status" => self.status.as_str().into(),
            "renewal_date" => self.renewal_date.into(),
            _ => CellValue::Empty,
        }
    }
}
