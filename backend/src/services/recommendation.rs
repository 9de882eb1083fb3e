//! Recommendation card service

use crate::error::ApiError;
use crate::repositories::{DailyActivityRepository, RecommendationRepository};
use health_tracker_shared::{build_recommendation_deck, RecommendationCard};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

pub struct RecommendationService;

impl RecommendationService {
    /// Stored deck, newest first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<RecommendationCard>, ApiError> {
        RecommendationRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)
    }

    /// Rebuild the deck from the latest activity and replace the stored one
    pub async fn refresh(pool: &PgPool, user_id: Uuid) -> Result<Vec<RecommendationCard>, ApiError> {
        let latest = DailyActivityRepository::get_latest(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        let drafts = build_recommendation_deck(latest.as_ref());
        let cards = RecommendationRepository::replace_for_user(pool, user_id, &drafts)
            .await
            .map_err(ApiError::Internal)?;

        info!(
            %user_id,
            cards = cards.len(),
            from_activity = latest.is_some(),
            "Refreshed recommendations"
        );
        Ok(cards)
    }
}
