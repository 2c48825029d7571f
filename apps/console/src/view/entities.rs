//! Render-ready shapes derived from the dashboard payload.
//!
//! Everything here is pure and total: missing optional fields fall back to
//! placeholders, nothing panics on a partial snapshot.

use time::OffsetDateTime;

use crate::models::{
    non_empty, Activity, ActivityKind, DashboardSnapshot, Lead, Metrics, Opportunity, Priority,
    Sentiment,
};
use crate::services::notifier::DetailDialog;
use crate::view::relative_time::{format_timestamp, NOT_AVAILABLE};

pub const LEAD_PREVIEW_CHARS: usize = 150;
pub const OPPORTUNITY_PREVIEW_CHARS: usize = 100;
pub const ACTIVITY_FEED_LIMIT: usize = 10;
pub const ELLIPSIS: &str = "...";
pub const UNKNOWN_CLIENT: &str = "Unknown";
pub const NO_EMAIL_CONTENT: &str = "No email content available.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Danger,
    Warning,
    Info,
    Success,
    Muted,
}

impl BadgeTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Danger => "bg-red-100 text-red-700",
            Self::Warning => "bg-amber-100 text-amber-700",
            Self::Info => "bg-sky-100 text-sky-700",
            Self::Success => "bg-emerald-100 text-emerald-700",
            Self::Muted => "bg-slate-100 text-slate-600",
        }
    }
}

pub fn priority_tone(priority: Priority) -> BadgeTone {
    match priority {
        Priority::High => BadgeTone::Danger,
        Priority::Medium => BadgeTone::Warning,
        Priority::Low => BadgeTone::Info,
        Priority::Unknown => BadgeTone::Muted,
    }
}

pub fn sentiment_tone(sentiment: Sentiment) -> BadgeTone {
    match sentiment {
        Sentiment::Positive => BadgeTone::Success,
        Sentiment::Neutral => BadgeTone::Info,
        Sentiment::Negative => BadgeTone::Danger,
        Sentiment::Unknown => BadgeTone::Muted,
    }
}

/// First `max_chars` characters of `text` followed by [`ELLIPSIS`].
///
/// The ellipsis is appended even when nothing was cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let mut preview: String = text.chars().take(max_chars).collect();
    preview.push_str(ELLIPSIS);
    preview
}

/// `None` only when the lead carries no response at all; an empty response
/// still previews as a bare ellipsis.
pub fn lead_response_preview(lead: &Lead) -> Option<String> {
    lead.response_text
        .as_deref()
        .map(|text| truncate_with_ellipsis(text, LEAD_PREVIEW_CHARS))
}

/// Server preview when present, else a truncated body, else empty.
pub fn opportunity_preview(opportunity: &Opportunity) -> String {
    if let Some(preview) = non_empty(opportunity.preview.as_deref()) {
        return preview.to_string();
    }
    non_empty(opportunity.body.as_deref())
        .map(|body| truncate_with_ellipsis(body, OPPORTUNITY_PREVIEW_CHARS))
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityIcon {
    Mail,
    Message,
}

impl ActivityIcon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Mail => "bg-indigo-100 text-indigo-600",
            Self::Message => "bg-violet-100 text-violet-600",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Mail => "✉",
            Self::Message => "💬",
        }
    }
}

pub fn activity_icon(kind: ActivityKind) -> ActivityIcon {
    if kind == ActivityKind::EmailSent {
        ActivityIcon::Mail
    } else {
        ActivityIcon::Message
    }
}

/// Integral scores print without decimals; missing scores read "N/A".
pub fn score_label(score: Option<f64>) -> String {
    match score {
        Some(score) if score.is_finite() => format!("{score}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn out_of(score: Option<f64>, scale: u32) -> String {
    match score.filter(|score| score.is_finite()) {
        Some(_) => format!("{}/{scale}", score_label(score)),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{rate:.0}")
    } else {
        format!("{rate:.1}")
    }
}

fn text_or_na(value: Option<&str>) -> String {
    non_empty(value).unwrap_or(NOT_AVAILABLE).to_string()
}

fn client_label(value: Option<&str>) -> String {
    non_empty(value).unwrap_or(UNKNOWN_CLIENT).to_string()
}

#[derive(Clone, Debug, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub trend: String,
}

pub fn metric_cards(metrics: &Metrics) -> [MetricCard; 4] {
    [
        MetricCard {
            label: "Emails Sent Today",
            value: metrics.emails_sent_today.to_string(),
            trend: "+100%".to_string(),
        },
        MetricCard {
            label: "Responses Received",
            value: metrics.responses_received.to_string(),
            trend: format!("{}% rate", format_rate(metrics.response_rate_percent)),
        },
        MetricCard {
            label: "Warm Leads Ready",
            value: metrics.warm_leads_count.to_string(),
            trend: "High priority".to_string(),
        },
        MetricCard {
            label: "Total Clients",
            value: metrics.total_clients.to_string(),
            trend: "Analyzed".to_string(),
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

pub const NO_LEADS: EmptyState = EmptyState {
    title: "No warm leads yet",
    hint: "Run the overnight analysis to generate leads",
};

pub const NO_OPPORTUNITIES: EmptyState = EmptyState {
    title: "No opportunities identified yet",
    hint: "Run analysis to let Jarvis find the best targets for you",
};

#[derive(Clone, Debug, PartialEq)]
pub struct LeadCard {
    pub key: String,
    pub lead: Lead,
    pub name: String,
    pub company: Option<String>,
    pub priority: String,
    pub priority_tone: BadgeTone,
    pub sentiment: &'static str,
    pub sentiment_tone: BadgeTone,
    pub sent: String,
    pub responded: String,
    pub response_preview: Option<String>,
    pub next_action: Option<String>,
    pub engagement: String,
}

impl LeadCard {
    pub fn build(index: usize, lead: &Lead, now: OffsetDateTime) -> Self {
        Self {
            key: lead.id.clone().unwrap_or_else(|| format!("lead-{index}")),
            lead: lead.clone(),
            name: client_label(lead.client_name.as_deref()),
            company: non_empty(lead.company.as_deref()).map(str::to_string),
            priority: format!("{} priority", lead.priority.label()),
            priority_tone: priority_tone(lead.priority),
            sentiment: lead.sentiment.label(),
            sentiment_tone: sentiment_tone(lead.sentiment),
            sent: format_timestamp(lead.email_sent_at.as_deref(), now),
            responded: format_timestamp(lead.response_received_at.as_deref(), now),
            response_preview: lead_response_preview(lead),
            next_action: non_empty(lead.next_action.as_deref()).map(str::to_string),
            engagement: out_of(lead.engagement_score, 100),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpportunityCard {
    pub key: String,
    pub opportunity: Opportunity,
    pub name: String,
    pub score: String,
    pub tone: String,
    pub opportunity_type: String,
    pub preview: String,
}

impl OpportunityCard {
    pub fn build(index: usize, opportunity: &Opportunity) -> Self {
        Self {
            key: opportunity
                .id
                .clone()
                .unwrap_or_else(|| format!("opportunity-{index}")),
            opportunity: opportunity.clone(),
            name: client_label(opportunity.client_name.as_deref()),
            score: out_of(opportunity.priority_score, 10),
            tone: opportunity.tone_label().to_string(),
            opportunity_type: text_or_na(opportunity.opportunity_type.as_deref()),
            preview: opportunity_preview(opportunity),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityRow {
    pub key: String,
    pub activity: Activity,
    pub icon: ActivityIcon,
    pub description: String,
    pub subject: Option<String>,
    pub time: String,
    pub sentiment: Option<(&'static str, BadgeTone)>,
    /// Whether a click opens a dialog.
    pub clickable: bool,
}

impl ActivityRow {
    pub fn build(index: usize, activity: &Activity, now: OffsetDateTime) -> Self {
        Self {
            key: format!("activity-{index}"),
            activity: activity.clone(),
            icon: activity_icon(activity.kind),
            description: non_empty(activity.description.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| client_label(activity.client.as_deref())),
            subject: non_empty(activity.subject.as_deref()).map(str::to_string),
            time: format_timestamp(activity.timestamp.as_deref(), now),
            sentiment: activity
                .sentiment
                .map(|sentiment| (sentiment.label(), sentiment_tone(sentiment))),
            clickable: activity_dialog(activity).is_some(),
        }
    }
}

/// Whole page derived from one snapshot. `None` renders like an empty one.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub metrics: [MetricCard; 4],
    pub last_analyzed: Option<String>,
    pub leads: Vec<LeadCard>,
    pub opportunities: Vec<OpportunityCard>,
    pub activity: Vec<ActivityRow>,
}

impl DashboardView {
    pub fn build(snapshot: Option<&DashboardSnapshot>, now: OffsetDateTime) -> Self {
        let empty = DashboardSnapshot::default();
        let snapshot = snapshot.unwrap_or(&empty);

        Self {
            metrics: metric_cards(&snapshot.metrics),
            last_analyzed: non_empty(snapshot.last_analyzed_at.as_deref())
                .map(|raw| format_timestamp(Some(raw), now)),
            leads: snapshot
                .warm_leads
                .iter()
                .enumerate()
                .map(|(index, lead)| LeadCard::build(index, lead, now))
                .collect(),
            opportunities: snapshot
                .top_opportunities
                .iter()
                .enumerate()
                .map(|(index, opportunity)| OpportunityCard::build(index, opportunity))
                .collect(),
            activity: snapshot
                .recent_activity
                .iter()
                .take(ACTIVITY_FEED_LIMIT)
                .enumerate()
                .map(|(index, activity)| ActivityRow::build(index, activity, now))
                .collect(),
        }
    }

    pub fn leads_empty_state(&self) -> Option<EmptyState> {
        self.leads.is_empty().then_some(NO_LEADS)
    }

    pub fn opportunities_empty_state(&self) -> Option<EmptyState> {
        self.opportunities.is_empty().then_some(NO_OPPORTUNITIES)
    }
}

/// Detail dialog for an activity row, if its kind and content warrant one.
pub fn activity_dialog(activity: &Activity) -> Option<DetailDialog> {
    let client = client_label(activity.client.as_deref());
    match activity.kind {
        ActivityKind::EmailSent => {
            let content = non_empty(activity.full_content.as_deref())?;
            let title = match non_empty(activity.subject.as_deref()) {
                Some(subject) => format!("Email to {client}: {subject}"),
                None => format!("Email to {client}"),
            };
            Some(DetailDialog {
                title,
                fields: vec![("Subject".to_string(), text_or_na(activity.subject.as_deref()))],
                body_label: None,
                body: Some(content.to_string()),
                confirm_label: "Close".to_string(),
                cancel_label: None,
            })
        }
        ActivityKind::ResponseReceived => {
            let response = non_empty(activity.response_text.as_deref())?;
            Some(DetailDialog {
                title: format!("Response from {client}"),
                fields: Vec::new(),
                body_label: None,
                body: Some(response.to_string()),
                confirm_label: "OK".to_string(),
                cancel_label: None,
            })
        }
        ActivityKind::Unknown => None,
    }
}

pub fn opportunity_dialog(opportunity: &Opportunity) -> DetailDialog {
    DetailDialog {
        title: format!(
            "Opportunity: {}",
            client_label(opportunity.client_name.as_deref())
        ),
        fields: vec![
            (
                "Opportunity".to_string(),
                text_or_na(opportunity.opportunity_type.as_deref()),
            ),
            (
                "Priority Score".to_string(),
                out_of(opportunity.priority_score, 10),
            ),
        ],
        body_label: Some("Drafted Outreach".to_string()),
        body: opportunity.draft().map(str::to_string),
        confirm_label: "Great, let's go!".to_string(),
        cancel_label: Some("Close".to_string()),
    }
}

/// Content of the lead detail modal for both tabs.
#[derive(Clone, Debug, PartialEq)]
pub struct LeadDetailView {
    pub name: String,
    pub badge: String,
    pub badge_tone: BadgeTone,
    pub context_fields: Vec<(&'static str, String)>,
    pub response: Option<String>,
    pub received: String,
    pub key_insights: Vec<String>,
    pub pain_points: Vec<String>,
    pub email_fields: Vec<(&'static str, String)>,
    /// Body split on newlines; `None` when there is no body.
    pub email_lines: Option<Vec<String>>,
    pub next_action: Option<String>,
}

impl LeadDetailView {
    pub fn build(lead: &Lead, now: OffsetDateTime) -> Self {
        let badge_tone = if lead.sentiment == Sentiment::Positive {
            BadgeTone::Success
        } else {
            BadgeTone::Info
        };

        Self {
            name: client_label(lead.client_name.as_deref()),
            badge: format!("{} Interest", lead.sentiment.label()),
            badge_tone,
            context_fields: vec![
                ("Company", text_or_na(lead.company.as_deref())),
                ("Industry", text_or_na(lead.industry.as_deref())),
                ("Email", text_or_na(lead.client_email.as_deref())),
                ("Engagement", out_of(lead.engagement_score, 100)),
            ],
            response: non_empty(lead.response_text.as_deref()).map(str::to_string),
            received: format_timestamp(lead.response_received_at.as_deref(), now),
            key_insights: lead.context.key_insights.clone(),
            pain_points: lead.context.pain_points.clone(),
            email_fields: vec![
                ("To", text_or_na(lead.client_email.as_deref())),
                ("Subject", text_or_na(lead.email_subject.as_deref())),
                ("Sent", format_timestamp(lead.email_sent_at.as_deref(), now)),
            ],
            email_lines: non_empty(lead.email_body.as_deref())
                .map(|body| body.split('\n').map(str::to_string).collect()),
            next_action: non_empty(lead.next_action.as_deref()).map(str::to_string),
        }
    }
}
