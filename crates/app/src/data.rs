//! In-memory records standing in for the dashboard's backing services.

use chrono::{Duration, NaiveDate};
use shared_types::{AccountStatus, CustomerRecord, DashboardStats, UserRecord, UserRole};

const FIRST_NAMES: [&str; 12] = [
    "Ada", "Grace", "Linus", "Margaret", "Ken", "Barbara", "Dennis", "Frances", "John", "Radia",
    "Edsger", "Johnny",
];

const LAST_NAMES: [&str; 9] = [
    "Lovelace", "Hopper", "Torvalds", "Hamilton", "Thompson", "Liskov", "Ritchie", "Allen",
    "Backus",
];

const COMPANIES: [&str; 10] = [
    "Acme", "Globex", "Initech", "Umbrella", "Hooli", "Vandelay", "Stark", "Wayne", "Tyrell",
    "Cyberdyne",
];

const SUFFIXES: [&str; 4] = ["Industries", "Labs", "Systems", "Holdings"];

const PLANS: [&str; 3] = ["starter", "pro", "enterprise"];

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// Deterministic roster for the users page.
pub fn seed_users() -> Vec<UserRecord> {
    (0..48)
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i / 2) % LAST_NAMES.len()];
            let role = match i % 7 {
                0 => UserRole::Admin,
                1 | 2 => UserRole::Editor,
                _ => UserRole::Viewer,
            };
            let status = match i % 11 {
                3 => AccountStatus::Invited,
                8 => AccountStatus::Suspended,
                _ => AccountStatus::Active,
            };
            UserRecord {
                id: i as i64 + 1,
                name: format!("{first} {last}"),
                email: format!(
                    "{}.{}{}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    i
                ),
                role,
                status,
                created_at: epoch() + Duration::days((i as i64) * 9),
            }
        })
        .collect()
}

/// Deterministic customer book for the customers service.
pub fn seed_customers() -> Vec<CustomerRecord> {
    (0..64)
        .map(|i| {
            let company = COMPANIES[i % COMPANIES.len()];
            let suffix = SUFFIXES[(i / COMPANIES.len()) % SUFFIXES.len()];
            let status = if i % 9 == 4 {
                AccountStatus::Suspended
            } else {
                AccountStatus::Active
            };
            CustomerRecord {
                id: format!("cus_{:04}", i + 1),
                company: format!("{company} {suffix}"),
                contact_email: format!("billing@{}{}.com", company.to_lowercase(), i),
                plan: PLANS[i % PLANS.len()].to_string(),
                seats: ((i * 7) % 90 + 5) as i64,
                status,
                // Trial accounts have no renewal yet.
                renewal_date: (i % 5 != 0).then(|| epoch() + Duration::days(30 + (i as i64) * 11)),
            }
        })
        .collect()
}

/// Usage payload as the analytics endpoint sends it, still in the legacy
/// field names.
pub const USAGE_PAYLOAD: &str = r#"{
  "userCount": 48,
  "customerCount": 64,
  "sessions": 17,
  "usageData": [
    {"day": "2024-01-15", "count": 1240, "users": 31},
    {"day": "2024-02-15", "count": 1580, "users": 36},
    {"day": "2024-03-15", "count": 1495, "users": 35},
    {"day": "2024-04-15", "count": 1902, "users": 40},
    {"day": "2024-05-15", "count": 2210, "users": 44},
    {"day": "2024-06-15", "count": 2034, "users": 43}
  ]
}"#;

pub fn usage_stats() -> Result<DashboardStats, serde_json::Error> {
    serde_json::from_str(USAGE_PAYLOAD)
}
