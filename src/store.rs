use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::StoreError,
    opportunities::{
        repo as opportunity_repo,
        repo_types::{NewOpportunity, Opportunity, SearchTerm},
    },
    profiles::{
        repo as profile_repo,
        repo_types::{Profile, ProfileUpsert},
    },
};

/// Table access for the `opportunities` and `profiles` tables.
///
/// Every call is attempted exactly once; callers decide how to degrade.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All opportunities matching `term` (or all of them), newest first.
    async fn select_opportunities(
        &self,
        term: Option<&SearchTerm>,
    ) -> Result<Vec<Opportunity>, StoreError>;

    async fn insert_opportunity(&self, new: NewOpportunity) -> Result<Opportunity, StoreError>;

    async fn select_profile(&self, id: Uuid) -> Result<Option<Profile>, StoreError>;

    /// Insert-or-overwrite keyed by `profile.id`.
    async fn upsert_profile(&self, profile: ProfileUpsert) -> Result<Profile, StoreError>;
}

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RecordStore for PgStore {
    async fn select_opportunities(
        &self,
        term: Option<&SearchTerm>,
    ) -> Result<Vec<Opportunity>, StoreError> {
        opportunity_repo::list(&self.db, term).await
    }

    async fn insert_opportunity(&self, new: NewOpportunity) -> Result<Opportunity, StoreError> {
        opportunity_repo::insert(&self.db, &new).await
    }

    async fn select_profile(&self, id: Uuid) -> Result<Option<Profile>, StoreError> {
        profile_repo::find_by_id(&self.db, id).await
    }

    async fn upsert_profile(&self, profile: ProfileUpsert) -> Result<Profile, StoreError> {
        profile_repo::upsert(&self.db, &profile).await
    }
}
