use serde::{Deserialize, Serialize};

use super::repo_types::{NewOpportunity, Opportunity, OpportunityKind};
use crate::auth::dto::PublicUser;

/// Query string of `GET /`. `q` is canonical; `query` is still accepted and
/// used when `q` is absent or empty.
#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub q: Option<String>,
    pub query: Option<String>,
}

impl FeedParams {
    pub fn term(&self) -> Option<&str> {
        self.q
            .as_deref()
            .filter(|q| !q.is_empty())
            .or(self.query.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
    /// Offer a link back to the unfiltered feed.
    pub clear_search: bool,
}

impl EmptyState {
    pub fn new(searched: bool) -> Self {
        Self {
            title: "No opportunities found",
            hint: "Try adjusting your search terms.",
            clear_search: searched,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub user: Option<PublicUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showing_results_for: Option<String>,
    pub opportunities: Vec<Opportunity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

/// Body of `POST /post`.
#[derive(Debug, Deserialize)]
pub struct CreateOpportunityForm {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub organization: String,
    pub date: String,
    pub link: String,
    pub description: String,
}

impl From<CreateOpportunityForm> for NewOpportunity {
    fn from(f: CreateOpportunityForm) -> Self {
        Self {
            title: f.title,
            kind: f.kind,
            organization: f.organization,
            date: f.date,
            link: f.link,
            description: f.description,
        }
    }
}

/// What the post form needs to render.
#[derive(Debug, Serialize)]
pub struct PostFormResponse {
    pub user: PublicUser,
    pub types: [OpportunityKind; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q_wins_over_query_alias() {
        let params = FeedParams {
            q: Some("rust".into()),
            query: Some("go".into()),
        };
        assert_eq!(params.term(), Some("rust"));

        let legacy = FeedParams {
            q: None,
            query: Some("go".into()),
        };
        assert_eq!(legacy.term(), Some("go"));
        assert_eq!(FeedParams::default().term(), None);

        let blank_q = FeedParams {
            q: Some(String::new()),
            query: Some("go".into()),
        };
        assert_eq!(blank_q.term(), Some("go"));
    }

    #[test]
    fn opportunity_serializes_kind_as_type() {
        let opp = Opportunity {
            id: uuid::Uuid::new_v4(),
            title: "Rust Hack".into(),
            kind: OpportunityKind::Hackathon,
            organization: "Ferris Inc".into(),
            date: "Dec 25".into(),
            link: "https://example.com".into(),
            description: "hack".into(),
            created_at: time::OffsetDateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&opp).unwrap();
        assert_eq!(json["type"], "Hackathon");
        assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    }
}
