//! Recommendation card repository

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use health_tracker_shared::{RecommendationCard, RecommendationCardDraft, RecommendationCategory};
use sqlx::PgPool;
use uuid::Uuid;

/// Recommendation card record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecommendationRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<RecommendationRecord> for RecommendationCard {
    type Error = anyhow::Error;

    fn try_from(r: RecommendationRecord) -> Result<Self> {
        let category: RecommendationCategory = r
            .category
            .parse()
            .with_context(|| format!("corrupt category on recommendation {}", r.id))?;

        Ok(RecommendationCard {
            id: r.id,
            user_id: r.user_id,
            category,
            title: r.title,
            content: r.content,
            image_url: r.image_url,
            created_at: r.created_at,
        })
    }
}

/// Recommendation card repository
pub struct RecommendationRepository;

impl RecommendationRepository {
    /// Current deck for a user, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<RecommendationCard>> {
        let records = sqlx::query_as::<_, RecommendationRecord>(
            r#"
            SELECT id, user_id, category, title, content, image_url, created_at
            FROM recommendations
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        records.into_iter().map(RecommendationCard::try_from).collect()
    }

    /// Replace the user's whole deck in one transaction
    ///
    /// Cards get strictly increasing timestamps in draft order, so the
    /// newest-first listing is stable.
    pub async fn replace_for_user(
        pool: &PgPool,
        user_id: Uuid,
        drafts: &[RecommendationCardDraft],
    ) -> Result<Vec<RecommendationCard>> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM recommendations WHERE user_id = $1"#)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let base = Utc::now();
        let mut cards = Vec::with_capacity(drafts.len());
        for (offset, draft) in (0i64..).zip(drafts) {
            let record = sqlx::query_as::<_, RecommendationRecord>(
                r#"
                INSERT INTO recommendations (user_id, category, title, content, image_url, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, user_id, category, title, content, image_url, created_at
                "#,
            )
            .bind(user_id)
            .bind(draft.category.as_str())
            .bind(&draft.title)
            .bind(&draft.content)
            .bind(&draft.image_url)
            .bind(base + Duration::milliseconds(offset))
            .fetch_one(&mut *tx)
            .await?;
            cards.push(RecommendationCard::try_from(record)?);
        }

        tx.commit().await?;

        cards.reverse();
        Ok(cards)
    }
}
