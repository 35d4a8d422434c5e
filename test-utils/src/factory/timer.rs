//! Timer factory for creating test player timers.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a timer for a player, started at `start_point` and not yet stopped.
///
/// # Arguments
/// - `db` - Database connection
/// - `player_id` - Player owning the timer
/// - `start_point` - Instant the game started
/// - `time_limit` - Optional limit in seconds
pub async fn create_timer(
    db: &DatabaseConnection,
    player_id: i32,
    start_point: DateTime<Utc>,
    time_limit: Option<i32>,
) -> Result<entity::timer::Model, DbErr> {
    entity::timer::ActiveModel {
        player_id: ActiveValue::Set(player_id),
        start_point: ActiveValue::Set(Some(start_point)),
        end_point: ActiveValue::Set(Some(start_point)),
        time_limit: ActiveValue::Set(time_limit),
        ..Default::default()
    }
    .insert(db)
    .await
}
