//! Game timer domain model.

use chrono::{DateTime, Utc};

/// Start and stop points of a player's game.
///
/// `end_point` is moved forward every time the player answers, so the elapsed time
/// always covers the game up to the latest answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    pub id: i32,
    pub player_id: i32,
    pub start_point: Option<DateTime<Utc>>,
    pub end_point: Option<DateTime<Utc>>,
    /// Limit in seconds, only set for hard games.
    pub time_limit: Option<i32>,
}

impl Timer {
    pub fn from_entity(entity: entity::timer::Model) -> Self {
        Self {
            id: entity.id,
            player_id: entity.player_id,
            start_point: entity.start_point,
            end_point: entity.end_point,
            time_limit: entity.time_limit,
        }
    }

    /// Whole seconds between start and end point, `None` if either is unset.
    ///
    /// Saturates at `i32::MAX` for spans too long to store.
    pub fn elapsed_seconds(&self) -> Option<i32> {
        let (start, end) = (self.start_point?, self.end_point?);
        let seconds = (end - start).num_seconds().max(0);
        Some(i32::try_from(seconds).unwrap_or(i32::MAX))
    }

    /// Whether a time limit is set and the elapsed time reached it.
    pub fn is_expired(&self) -> bool {
        match (self.time_limit, self.elapsed_seconds()) {
            (Some(limit), Some(elapsed)) => elapsed >= limit,
            _ => false,
        }
    }
}
