use time::OffsetDateTime;
use tracing::{error, info};

use super::repo_types::{Profile, ProfileUpsert};
use crate::auth::gateway::Identity;
use crate::error::StoreError;
use crate::store::RecordStore;

/// Split a comma-separated list, trimming entries and dropping empty ones.
/// Order is preserved.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the record a save writes for `identity` at `now`.
pub fn build_upsert(
    identity: &Identity,
    full_name: &str,
    skills: &str,
    interests: &str,
    now: OffsetDateTime,
) -> ProfileUpsert {
    let full_name = full_name.trim();
    ProfileUpsert {
        id: identity.id,
        full_name: (!full_name.is_empty()).then(|| full_name.to_string()),
        skills: split_list(skills),
        interests: split_list(interests),
        email: Some(identity.email.clone()),
        updated_at: now,
    }
}

pub async fn save_profile(
    store: &dyn RecordStore,
    profile: ProfileUpsert,
) -> Result<Profile, StoreError> {
    let user_id = profile.id;
    let saved = store.upsert_profile(profile).await?;
    info!(%user_id, skills = saved.skills.len(), interests = saved.interests.len(), "profile saved");
    Ok(saved)
}

/// The stored profile, or `None` if there is none yet or the read failed.
pub async fn load_profile(store: &dyn RecordStore, identity: &Identity) -> Option<Profile> {
    match store.select_profile(identity.id).await {
        Ok(profile) => profile,
        Err(e) => {
            error!(error = %e, user_id = %identity.id, "profile read failed");
            None
        }
    }
}
