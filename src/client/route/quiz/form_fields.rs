use dioxus::prelude::*;

use crate::model::quiz::SaveQuizDto;

/// Topic input plus one fieldset per question with its choices and a radio button
/// marking the correct one.
#[component]
pub fn QuizFormFields(mut form: Signal<SaveQuizDto>, disabled: bool) -> Element {
    let topic = form.read().topic.clone();
    let questions = form.read().questions.clone();

    rsx!(
        div {
            class: "flex flex-col gap-2",
            label { r#for: "quiz-topic", "Topic" }
            input {
                id: "quiz-topic",
                class: "input",
                r#type: "text",
                maxlength: 200,
                disabled,
                value: "{topic}",
                oninput: move |evt| form.write().topic = evt.value(),
            }
        }
        for (index, question) in questions.into_iter().enumerate() {
            fieldset {
                key: "{index}",
                class: "card flex flex-col gap-2",
                legend { "Question {index + 1}" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Question text",
                    disabled,
                    value: "{question.text}",
                    oninput: move |evt| {
                        if let Some(question) = form.write().questions.get_mut(index) {
                            question.text = evt.value();
                        }
                    },
                }
                for (choice_index, choice) in question.choices.into_iter().enumerate() {
                    div {
                        key: "{index}-{choice_index}",
                        class: "flex gap-2 items-center",
                        input {
                            r#type: "radio",
                            name: "correct-{index}",
                            title: "Correct answer",
                            disabled,
                            checked: question.correct_choice == choice_index as i32 + 1,
                            onchange: move |_| {
                                if let Some(question) = form.write().questions.get_mut(index) {
                                    question.correct_choice = choice_index as i32 + 1;
                                }
                            },
                        }
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Choice {choice_index + 1}",
                            disabled,
                            value: "{choice}",
                            oninput: move |evt| {
                                if let Some(text) = form
                                    .write()
                                    .questions
                                    .get_mut(index)
                                    .and_then(|q| q.choices.get_mut(choice_index))
                                {
                                    *text = evt.value();
                                }
                            },
                        }
                    }
                }
            }
        }
    )
}
