use super::*;

/// Tests a question is loaded with its choices in id order.
///
/// Expected: 4 choices, the first one correct
#[tokio::test]
async fn loads_choices_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _quiz, questions) = factory::helpers::create_full_quiz(db, 1).await?;

    let repo = QuestionRepository::new(db);
    let question = repo.get_with_choices(questions[0].id).await?.unwrap();

    assert_eq!(question.choices.len(), 4);
    assert!(question.choices[0].correct);
    assert!(question.choices.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(question.choices[2].text, "Q1 choice 3");

    Ok(())
}

/// Tests a missing question.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_quiz_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);

    assert!(repo.get_with_choices(1).await?.is_none());

    Ok(())
}
