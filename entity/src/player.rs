use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub quiz_id: i32,
    pub name: String,
    pub current_question_id: Option<i32>,
    pub position: i32,
    pub selected_difficulty: i32,
    pub correct_answer: i32,
    pub wrong_answer: i32,
    pub is_playing: bool,
    pub is_failed: bool,
    pub is_achieved: bool,
    pub is_timeout: bool,
    pub has_vote: bool,
    /// Seconds spent on the finished game.
    pub time_spent: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quiz::Entity",
        from = "Column::QuizId",
        to = "super::quiz::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Quiz,
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::CurrentQuestionId",
        to = "super::question::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CurrentQuestion,
    #[sea_orm(has_one = "super::timer::Entity")]
    Timer,
}

impl Related<super::quiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CurrentQuestion.def()
    }
}

impl Related<super::timer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Timer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
