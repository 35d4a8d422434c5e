//! Choice data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::quiz::Choice;

pub struct ChoiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChoiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, choice_id: i32) -> Result<Option<Choice>, DbErr> {
        let entity = entity::prelude::Choice::find_by_id(choice_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Choice::from_entity))
    }
}
