use serde_json::{json, Value};

use crate::models::DashboardSnapshot;

/// `data` section of a `GET /api/dashboard` response after one analysis run.
pub fn sample_dashboard_payload() -> Value {
    json!({
        "metrics": {
            "emails_sent_today": 3,
            "responses_received": 1,
            "response_rate": 33.333333333333336,
            "warm_leads_count": 1,
            "total_clients": 12
        },
        "last_analyzed": "2026-10-16T22:15:00Z",
        "warm_leads": [
            {
                "id": "resp_001",
                "client_name": "Dana Whitfield",
                "client_email": "dana@northwind.example",
                "company": "Northwind Traders",
                "industry": "Logistics",
                "email_subject": "Quick check-in - R&D Credits",
                "email_sent": "2026-10-16T22:15:00Z",
                "response_received": "2026-10-17T08:40:00Z",
                "response_text": "Thanks for reaching out. We have been meaning to look at the R&D credit for the warehouse automation project. Could we find 30 minutes next week to go through what documentation you would need from us?",
                "sentiment": "positive",
                "interest_level": "high",
                "priority": "high",
                "next_action": "Schedule discovery call",
                "engagement_score": 82,
                "email_body": "Hi Dana,\n\nI wanted to reach out regarding R&D Credits.\n\nBest regards,\nYour Financial Advisor",
                "context": {
                    "key_insights": ["Automating two warehouses in 2026"],
                    "pain_points": ["Unclaimed R&D credits", "Cash flow during expansion"]
                }
            }
        ],
        "recent_activity": [
            {
                "type": "response_received",
                "timestamp": "2026-10-17T08:40:00Z",
                "description": "Response from Dana Whitfield",
                "client": "Dana Whitfield",
                "sentiment": "positive",
                "response_text": "Thanks for reaching out.",
                "id": "resp_001"
            },
            {
                "type": "email_sent",
                "timestamp": "2026-10-16T22:15:00Z",
                "description": "Sent email to Dana Whitfield",
                "client": "Dana Whitfield",
                "subject": "Quick check-in - R&D Credits",
                "id": "email_003",
                "full_content": "Hi Dana,\n\nI wanted to reach out regarding R&D Credits."
            }
        ],
        "top_opportunities": [
            {
                "id": "email_003",
                "client_name": "Dana Whitfield",
                "client_email": "dana@northwind.example",
                "subject": "Quick check-in - R&D Credits",
                "body": "Hi Dana,\n\nI wanted to reach out regarding R&D Credits.",
                "full_content": "Hi Dana,\n\nI wanted to reach out regarding R&D Credits.",
                "opportunity_type": "R&D Credits",
                "priority_score": 8,
                "tone": "professional"
            }
        ]
    })
}

pub fn sample_snapshot() -> DashboardSnapshot {
    serde_json::from_value(sample_dashboard_payload()).expect("fixture decodes")
}
