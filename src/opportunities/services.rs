use tracing::{debug, error};

use super::repo_types::{NewOpportunity, Opportunity, SearchTerm};
use crate::error::StoreError;
use crate::store::RecordStore;

/// How a feed was produced. Both variants may carry zero items; only the
/// operator-facing side cares which one it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// The store answered; the items are exactly the matches.
    Listed,
    /// The store failed; the feed was replaced by an empty one.
    Degraded,
}

#[derive(Debug, Clone)]
pub struct Feed {
    pub items: Vec<Opportunity>,
    pub status: FeedStatus,
}

impl Feed {
    pub fn is_degraded(&self) -> bool {
        self.status == FeedStatus::Degraded
    }
}

/// Opportunities matching `term`, newest first. Never fails: a store error is
/// logged and yields an empty, degraded feed.
pub async fn feed_query(store: &dyn RecordStore, term: Option<&SearchTerm>) -> Feed {
    match store.select_opportunities(term).await {
        Ok(items) => {
            debug!(count = items.len(), term = ?term.map(SearchTerm::as_str), "feed listed");
            Feed {
                items,
                status: FeedStatus::Listed,
            }
        }
        Err(e) => {
            error!(error = %e, term = ?term.map(SearchTerm::as_str), "feed query failed");
            Feed {
                items: Vec::new(),
                status: FeedStatus::Degraded,
            }
        }
    }
}

/// Insert a single opportunity. The store assigns `created_at`.
pub async fn create_opportunity(
    store: &dyn RecordStore,
    new: NewOpportunity,
) -> Result<Opportunity, StoreError> {
    store.insert_opportunity(new).await
}
