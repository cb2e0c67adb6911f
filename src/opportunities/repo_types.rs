use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::StoreError;

/// Kind of listing. Stored as its name in the `type` column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OpportunityKind {
    Hackathon,
    Job,
    Webinar,
}

impl OpportunityKind {
    pub const ALL: [OpportunityKind; 3] = [
        OpportunityKind::Hackathon,
        OpportunityKind::Job,
        OpportunityKind::Webinar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityKind::Hackathon => "Hackathon",
            OpportunityKind::Job => "Job",
            OpportunityKind::Webinar => "Webinar",
        }
    }
}

impl std::str::FromStr for OpportunityKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hackathon" => Ok(OpportunityKind::Hackathon),
            "Job" => Ok(OpportunityKind::Job),
            "Webinar" => Ok(OpportunityKind::Webinar),
            other => Err(StoreError::Decode(format!(
                "unknown opportunity type `{}`",
                other
            ))),
        }
    }
}

/// Raw `opportunities` row.
#[derive(Debug, FromRow)]
pub struct OpportunityRow {
    pub id: Uuid,
    pub title: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub organization: String,
    pub date: String,
    pub link: String,
    pub description: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Opportunity {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: OpportunityKind,
    pub organization: String,
    /// Free-text label such as "Dec 25"; not a calendar date.
    pub date: String,
    pub link: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl TryFrom<OpportunityRow> for Opportunity {
    type Error = StoreError;

    fn try_from(r: OpportunityRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: r.id,
            title: r.title,
            kind: r.kind.parse()?,
            organization: r.organization,
            date: r.date,
            link: r.link,
            description: r.description,
            created_at: r.created_at,
        })
    }
}

/// Fields of an opportunity before the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOpportunity {
    pub title: String,
    pub kind: OpportunityKind,
    pub organization: String,
    pub date: String,
    pub link: String,
    pub description: String,
}

/// A non-empty feed search term, matched literally and case-insensitively
/// against `title` and `description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// `None` for an absent or empty term, which means "no filter".
    /// Surrounding whitespace is kept as typed.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw {
            Some(s) if !s.is_empty() => Some(Self(s.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `ILIKE` pattern with wildcard characters of the term escaped (`ESCAPE '\'`).
    pub fn ilike_pattern(&self) -> String {
        let mut out = String::with_capacity(self.0.len() + 2);
        out.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('%');
        out
    }
}
