use ctq_core::error::CoreError;
use ctq_core::models::answer::{AnswerSet, Likert, QuestionId};
use ctq_core::models::quiz::{AnswerOption, OptionId, Question, Quiz};
use ctq_core::models::submission::{
    QuizRef, ResultCategory, SubmissionRequest, SubmissionResponse,
};

fn option(id: u64, value: i64) -> AnswerOption {
    AnswerOption {
        id: OptionId(id),
        text: format!("option {value}"),
        value,
    }
}

fn question(id: u32, order: u32, options: Vec<AnswerOption>) -> Question {
    Question {
        id: QuestionId(id),
        text: format!("question {id}"),
        order,
        options,
    }
}

fn quiz(questions: Vec<Question>) -> Quiz {
    Quiz {
        id: 1,
        title: "Childhood Trauma Questionnaire".to_string(),
        slug: "ctq-sf".to_string(),
        description: None,
        questions,
    }
}

#[test]
fn likert_accepts_only_one_through_five() {
    assert!(Likert::new(0).is_none());
    assert!(Likert::new(6).is_none());
    assert!(Likert::new(-3).is_none());
    for raw in 1..=5 {
        assert_eq!(Likert::new(raw).map(Likert::value), Some(raw as u32));
    }
}

#[test]
fn likert_reversal_mirrors_the_scale() {
    let reversed: Vec<u32> = (1..=5)
        .filter_map(Likert::new)
        .map(|l| l.reversed().value())
        .collect();
    assert_eq!(reversed, vec![5, 4, 3, 2, 1]);
}

#[test]
fn likert_deserialization_rejects_out_of_range() {
    assert!(serde_json::from_str::<Likert>("4").is_ok());
    assert!(serde_json::from_str::<Likert>("9").is_err());
}

#[test]
fn answer_set_overwrites_previous_response() {
    let mut answers = AnswerSet::new();
    assert_eq!(answers.record(QuestionId(3), 2), None);
    assert_eq!(answers.record(QuestionId(3), 4), Some(2));
    assert_eq!(answers.len(), 1);
    assert_eq!(answers.raw(QuestionId(3)), Some(4));
}

#[test]
fn answer_set_keeps_invalid_raw_values_but_hides_them_as_responses() {
    let answers: AnswerSet = [(QuestionId(1), 7)].into_iter().collect();
    assert_eq!(answers.raw(QuestionId(1)), Some(7));
    assert_eq!(answers.response(QuestionId(1)), None);
    assert!(answers.contains(QuestionId(1)));
}

#[test]
fn answer_set_reads_json_object_keyed_by_question() {
    let answers: AnswerSet = serde_json::from_str(r#"{"3": 5, "10": 1}"#).unwrap();
    assert_eq!(answers.raw(QuestionId(3)), Some(5));
    assert_eq!(answers.raw(QuestionId(10)), Some(1));
}

#[test]
fn validated_quiz_is_ordered() {
    let quiz = quiz(vec![
        question(2, 2, vec![option(22, 2), option(21, 1)]),
        question(1, 1, vec![option(12, 2), option(11, 1)]),
    ])
    .into_validated()
    .unwrap();

    let ids: Vec<_> = quiz.question_ids().collect();
    assert_eq!(ids, vec![QuestionId(1), QuestionId(2)]);
    let values: Vec<_> = quiz.questions[0].options.iter().map(|o| o.value).collect();
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn quiz_without_questions_is_rejected() {
    let err = quiz(vec![]).into_validated().unwrap_err();
    assert!(matches!(err, CoreError::EmptyQuiz { ref slug } if slug == "ctq-sf"));
}

#[test]
fn question_without_options_is_rejected() {
    let err = quiz(vec![question(1, 1, vec![option(1, 1)]), question(2, 2, vec![])])
        .into_validated()
        .unwrap_err();
    assert!(matches!(
        err,
        CoreError::QuestionWithoutOptions { question_id } if question_id == QuestionId(2)
    ));
}

#[test]
fn repeated_question_id_is_rejected() {
    let err = quiz(vec![
        question(3, 1, vec![option(31, 1)]),
        question(3, 2, vec![option(35, 5)]),
    ])
    .into_validated()
    .unwrap_err();
    assert!(matches!(
        err,
        CoreError::DuplicateQuestion { question_id } if question_id == QuestionId(3)
    ));
}

#[test]
fn option_id_shared_across_questions_is_rejected() {
    let err = quiz(vec![
        question(1, 1, vec![option(11, 1), option(12, 2)]),
        question(2, 2, vec![option(12, 1), option(22, 2)]),
    ])
    .into_validated()
    .unwrap_err();
    assert!(matches!(
        err,
        CoreError::DuplicateOption { option_id } if option_id == OptionId(12)
    ));
}

#[test]
fn question_option_lookup() {
    let q = question(4, 1, vec![option(40, 1), option(41, 2)]);
    assert_eq!(q.option(OptionId(41)).map(|o| o.value), Some(2));
    assert!(q.option(OptionId(99)).is_none());
}

#[test]
fn submission_request_accepts_numeric_or_slug_quiz_id() {
    let by_id: SubmissionRequest = serde_json::from_str(
        r#"{"quizId": 7, "answers": [{"question_id": 1, "selected_option_id": 11}]}"#,
    )
    .unwrap();
    assert_eq!(by_id.quiz_id, Some(QuizRef::Id(7)));
    assert_eq!(by_id.answers[0].selected_option_id, OptionId(11));

    let by_slug: SubmissionRequest =
        serde_json::from_str(r#"{"quizId": "ctq-sf", "answers": []}"#).unwrap();
    assert_eq!(by_slug.quiz_id, Some(QuizRef::Slug("ctq-sf".to_string())));
}

#[test]
fn submission_request_tolerates_missing_fields() {
    let req: SubmissionRequest = serde_json::from_str("{}").unwrap();
    assert!(req.quiz_id.is_none());
    assert!(req.answers.is_empty());
    assert!(QuizRef::Slug("  ".to_string()).is_blank());
    assert!(QuizRef::Id(0).is_blank());
    assert!(!QuizRef::Id(1).is_blank());
}

#[test]
fn submission_response_wire_shape() {
    let body = serde_json::to_value(SubmissionResponse {
        score: 5,
        result_category: ResultCategory::Medium,
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"score": 5, "result_category": "Medium"}));
}
