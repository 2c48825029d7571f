use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DefaultOnError, DefaultOnNull, VecSkipError};

/// Complete dashboard state as returned by one `GET /api/dashboard`.
///
/// Every field tolerates absence: missing or `null` collections decode as
/// empty, malformed records inside a collection are skipped.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub metrics: Metrics,
    #[serde_as(deserialize_as = "DefaultOnNull<VecSkipError<_>>")]
    pub warm_leads: Vec<Lead>,
    #[serde_as(deserialize_as = "DefaultOnNull<VecSkipError<_>>")]
    pub recent_activity: Vec<Activity>,
    #[serde_as(deserialize_as = "DefaultOnNull<VecSkipError<_>>")]
    pub top_opportunities: Vec<Opportunity>,
    #[serde(rename = "last_analyzed")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub last_analyzed_at: Option<String>,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub emails_sent_today: u64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub responses_received: u64,
    #[serde(rename = "response_rate")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub response_rate_percent: f64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub warm_leads_count: u64,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub total_clients: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    EmailSent,
    ResponseReceived,
    #[default]
    #[serde(other)]
    Unknown,
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadContext {
    #[serde_as(deserialize_as = "DefaultOnNull<VecSkipError<_>>")]
    pub key_insights: Vec<String>,
    #[serde_as(deserialize_as = "DefaultOnNull<VecSkipError<_>>")]
    pub pain_points: Vec<String>,
}

/// A contact who replied to an outreach email.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lead {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub client_name: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub client_email: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub priority: Priority,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub sentiment: Sentiment,
    #[serde(rename = "email_sent")]
    pub email_sent_at: Option<String>,
    #[serde(rename = "response_received")]
    pub response_received_at: Option<String>,
    pub response_text: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub engagement_score: Option<f64>,
    pub next_action: Option<String>,
    pub email_subject: Option<String>,
    pub email_body: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub context: LeadContext,
}

/// An outreach candidate ranked by the analysis job.
#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Opportunity {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<String>,
    pub client_name: Option<String>,
    pub client_email: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub priority_score: Option<f64>,
    pub tone: Option<String>,
    pub opportunity_type: Option<String>,
    pub body: Option<String>,
    pub full_content: Option<String>,
    pub preview: Option<String>,
}

impl Opportunity {
    pub const DEFAULT_TONE: &'static str = "Professional";

    pub fn tone_label(&self) -> &str {
        non_empty(self.tone.as_deref()).unwrap_or(Self::DEFAULT_TONE)
    }

    /// Full outreach draft, preferring `full_content` over `body`.
    pub fn draft(&self) -> Option<&str> {
        non_empty(self.full_content.as_deref()).or_else(|| non_empty(self.body.as_deref()))
    }
}

#[serde_as]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Activity {
    #[serde(rename = "type")]
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub kind: ActivityKind,
    pub client: Option<String>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub timestamp: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub sentiment: Option<Sentiment>,
    pub full_content: Option<String>,
    pub response_text: Option<String>,
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(id) => Some(id),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    })
}
