//! Player data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    model::game::{Difficulty, POSITION_MIN},
    server::{
        error::AppError,
        model::player::{CreatePlayerParams, Player},
    },
};

pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a player at the start of the track, playing the first question.
    ///
    /// # Returns
    /// - `Ok(Player)` - The created player
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        let entity = entity::player::ActiveModel {
            quiz_id: ActiveValue::Set(params.quiz_id),
            name: ActiveValue::Set(params.name),
            current_question_id: ActiveValue::Set(Some(params.first_question_id)),
            position: ActiveValue::Set(POSITION_MIN),
            selected_difficulty: ActiveValue::Set(params.difficulty.as_i32()),
            correct_answer: ActiveValue::Set(0),
            wrong_answer: ActiveValue::Set(0),
            is_playing: ActiveValue::Set(true),
            is_failed: ActiveValue::Set(false),
            is_achieved: ActiveValue::Set(false),
            is_timeout: ActiveValue::Set(false),
            has_vote: ActiveValue::Set(true),
            time_spent: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Player::from_entity(entity)
    }

    pub async fn find_by_id(&self, player_id: i32) -> Result<Option<Player>, AppError> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    /// Finds the first player of a quiz with the given name.
    pub async fn find_by_quiz_and_name(
        &self,
        quiz_id: i32,
        name: &str,
    ) -> Result<Option<Player>, AppError> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::QuizId.eq(quiz_id))
            .filter(entity::player::Column::Name.eq(name))
            .order_by_asc(entity::player::Column::Id)
            .one(self.db)
            .await?
            .map(Player::from_entity)
            .transpose()
    }

    /// Writes every mutable field of the player back to the database.
    pub async fn update(&self, player: &Player) -> Result<Player, AppError> {
        let entity = entity::player::ActiveModel {
            id: ActiveValue::Unchanged(player.id),
            quiz_id: ActiveValue::Unchanged(player.quiz_id),
            name: ActiveValue::Set(player.name.clone()),
            current_question_id: ActiveValue::Set(player.current_question_id),
            position: ActiveValue::Set(player.position),
            selected_difficulty: ActiveValue::Set(player.difficulty.as_i32()),
            correct_answer: ActiveValue::Set(player.correct_answer),
            wrong_answer: ActiveValue::Set(player.wrong_answer),
            is_playing: ActiveValue::Set(player.is_playing),
            is_failed: ActiveValue::Set(player.is_failed),
            is_achieved: ActiveValue::Set(player.is_achieved),
            is_timeout: ActiveValue::Set(player.is_timeout),
            has_vote: ActiveValue::Set(player.has_vote),
            time_spent: ActiveValue::Set(player.time_spent),
        }
        .update(self.db)
        .await?;

        Player::from_entity(entity)
    }

    /// Gets players who reached the finish line, fastest first, ties by id.
    pub async fn get_achieved(
        &self,
        quiz_id: i32,
        difficulty: Difficulty,
    ) -> Result<Vec<Player>, AppError> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::QuizId.eq(quiz_id))
            .filter(entity::player::Column::SelectedDifficulty.eq(difficulty.as_i32()))
            .filter(entity::player::Column::IsAchieved.eq(true))
            .order_by_asc(entity::player::Column::TimeSpent)
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Player::from_entity)
            .collect()
    }

    /// Deletes a player together with its timer.
    ///
    /// # Returns
    /// - `Ok(true)` - Player was deleted
    /// - `Ok(false)` - No player with that ID
    pub async fn delete(&self, player_id: i32) -> Result<bool, DbErr> {
        entity::prelude::Timer::delete_many()
            .filter(entity::timer::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Player::delete_by_id(player_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
