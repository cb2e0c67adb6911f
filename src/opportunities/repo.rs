use sqlx::PgPool;

use crate::error::StoreError;
use crate::opportunities::repo_types::{NewOpportunity, Opportunity, OpportunityRow, SearchTerm};

/// List opportunities newest first, optionally filtered by title/description.
/// Rows created at the same instant are ordered by `id` so repeated reads agree.
pub async fn list(db: &PgPool, term: Option<&SearchTerm>) -> Result<Vec<Opportunity>, StoreError> {
    let rows = sqlx::query_as::<_, OpportunityRow>(
        r#"
        SELECT id, title, type, organization, date, link, description, created_at
          FROM opportunities
         WHERE $1::text IS NULL
            OR title ILIKE $1 ESCAPE '\'
            OR description ILIKE $1 ESCAPE '\'
         ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(term.map(SearchTerm::ilike_pattern))
    .fetch_all(db)
    .await?;

    rows.into_iter().map(Opportunity::try_from).collect()
}

/// Insert one opportunity; `id` and `created_at` come from the database.
pub async fn insert(db: &PgPool, new: &NewOpportunity) -> Result<Opportunity, StoreError> {
    let row = sqlx::query_as::<_, OpportunityRow>(
        r#"
        INSERT INTO opportunities (title, type, organization, date, link, description)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, type, organization, date, link, description, created_at
        "#,
    )
    .bind(&new.title)
    .bind(new.kind.as_str())
    .bind(&new.organization)
    .bind(&new.date)
    .bind(&new.link)
    .bind(&new.description)
    .fetch_one(db)
    .await?;

    Opportunity::try_from(row)
}
