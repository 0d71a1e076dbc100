use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A project record as returned by the GraphQL endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub related_person: String,
    /// Kept verbatim; the server is not bound to the three dropdown values.
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_hours")]
    pub time_spent: f64,
    #[serde(default, deserialize_with = "deserialize_hours")]
    pub time_remain: f64,
    pub tags: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Split the comma-joined tag string into trimmed, non-empty tags.
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(self.tags.as_deref().unwrap_or(""))
    }
}

pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Paused,
    Completed,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Active
    }
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Active,
        ProjectStatus::Paused,
        ProjectStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Paused => "paused",
            ProjectStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "paused" => Ok(ProjectStatus::Paused),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(format!("Unknown project status: {}", other)),
        }
    }
}

/// Payload of the `CreateProject` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProjectInput {
    pub name: String,
    pub description: Option<String>,
    pub related_person: String,
    pub status: ProjectStatus,
    #[serde(serialize_with = "serialize_hours")]
    pub time_spent: f64,
    #[serde(serialize_with = "serialize_hours")]
    pub time_remain: f64,
    pub tags: Option<String>,
}

/// Largest magnitude an `f64` carries as an exact integer.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Whole hours go out as integer literals so `Int`-typed inputs accept them.
fn serialize_hours<S>(hours: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if hours.fract() == 0.0 && hours.abs() <= MAX_EXACT_INT {
        serializer.serialize_i64(*hours as i64)
    } else {
        serializer.serialize_f64(*hours)
    }
}

/// Nullable hour columns read as zero.
fn deserialize_hours<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(i64),
    Text(String),
}

/// GraphQL `ID` values arrive either as numbers or as numeric strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IdRepr::deserialize(deserializer)? {
        IdRepr::Number(n) => Ok(n),
        IdRepr::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid project id: {}", s))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    Millis(i64),
    Text(String),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match TimestampRepr::deserialize(deserializer)? {
        TimestampRepr::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
        TimestampRepr::Text(s) => parse_timestamp(&s),
    };
    parsed.ok_or_else(|| serde::de::Error::custom("invalid timestamp"))
}

/// Parse an RFC 3339 timestamp or epoch milliseconds carried as text.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
}
