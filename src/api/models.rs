//! Data API record types.
//!
//! Fields the browser does not display are omitted. Everything that may be
//! absent in a response carries `#[serde(default)]`, and identifiers accept
//! either JSON strings or numbers since the API mixes both.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Envelope used by every list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountUser {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountInvitation {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub accepted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub fault_count: u64,
    #[serde(default)]
    pub unresolved_fault_count: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Integration {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub events: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Assignee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fault {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub klass: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_notice_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notices_count: u64,
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub ignored: bool,
    #[serde(default)]
    pub assignee: Option<Assignee>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NoticeEnvironment {
    #[serde(default)]
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notice {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub environment_name: String,
    #[serde(default)]
    pub environment: NoticeEnvironment,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AffectedUser {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Deployment {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub revision: String,
    #[serde(default)]
    pub repository: String,
    #[serde(default)]
    pub local_username: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Site {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub frequency: u32,
    #[serde(default)]
    pub match_type: Option<String>,
    #[serde(rename = "match", default)]
    pub match_value: Option<String>,
    #[serde(default)]
    pub last_checked_at: Option<DateTime<Utc>>,
}

impl Site {
    pub fn is_down(&self) -> bool {
        self.state == "down"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Outage {
    #[serde(default)]
    pub down_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub up_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UptimeCheck {
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub duration: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckIn {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub schedule_type: String,
    #[serde(default)]
    pub report_period: Option<String>,
    #[serde(default)]
    pub grace_period: Option<String>,
    #[serde(default)]
    pub cron_schedule: Option<String>,
    #[serde(default)]
    pub cron_timezone: Option<String>,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_check_in_at: Option<DateTime<Utc>>,
}

impl CheckIn {
    /// Report period for simple check-ins, cron expression otherwise.
    pub fn schedule(&self) -> &str {
        self.report_period
            .as_deref()
            .or(self.cron_schedule.as_deref())
            .unwrap_or("-")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Team {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamMember {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamInvitation {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub accepted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPage {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub sites: Vec<serde_json::Value>,
    #[serde(default)]
    pub check_ins: Vec<serde_json::Value>,
}
