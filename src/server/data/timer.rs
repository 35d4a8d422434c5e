//! Timer data repository.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::timer::Timer;

pub struct TimerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts or restarts the timer of a player.
    ///
    /// Sets both start and end point to now, replacing any previous game's timer.
    ///
    /// # Arguments
    /// - `player_id` - Player owning the timer
    /// - `time_limit` - Limit in seconds, `None` for untimed games
    pub async fn start(&self, player_id: i32, time_limit: Option<i32>) -> Result<Timer, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Timer::insert(entity::timer::ActiveModel {
            player_id: ActiveValue::Set(player_id),
            start_point: ActiveValue::Set(Some(now)),
            end_point: ActiveValue::Set(Some(now)),
            time_limit: ActiveValue::Set(time_limit),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::timer::Column::PlayerId)
                .update_columns([
                    entity::timer::Column::StartPoint,
                    entity::timer::Column::EndPoint,
                    entity::timer::Column::TimeLimit,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Timer::from_entity(entity))
    }

    /// Moves the end point of a player's timer to now.
    ///
    /// # Returns
    /// - `Ok(Some(Timer))` - The stopped timer
    /// - `Ok(None)` - Player has no timer
    pub async fn stop(&self, player_id: i32) -> Result<Option<Timer>, DbErr> {
        let Some(timer) = entity::prelude::Timer::find()
            .filter(entity::timer::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut timer: entity::timer::ActiveModel = timer.into();
        timer.end_point = ActiveValue::Set(Some(Utc::now()));
        let timer = timer.update(self.db).await?;

        Ok(Some(Timer::from_entity(timer)))
    }

    pub async fn find_by_player(&self, player_id: i32) -> Result<Option<Timer>, DbErr> {
        let entity = entity::prelude::Timer::find()
            .filter(entity::timer::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Timer::from_entity))
    }
}
