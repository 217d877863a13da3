mod common;

use common::{MockModel, week_json};
use kidzie_backend::services::chatbot::{
    ChatError, ChatReply, Intent, PICTURE_REPLY, detect_intent, handle_chat,
};
use kidzie_backend::services::model::ResponseFormat;
use kidzie_backend::services::scheduler::{ScheduleError, generate_schedule};

#[test]
fn test_detect_intent() {
    assert_eq!(detect_intent("/IMAGINE a red dog"), Intent::Imagine("a red dog"));
    assert_eq!(detect_intent("/imagine a rocket"), Intent::Imagine("a rocket"));
    assert_eq!(detect_intent("How do bees fly?"), Intent::Explain("How do bees fly?"));
}

#[tokio::test]
async fn test_text_reply_uses_tutor_prompt() {
    let model = MockModel::replying("Bees flap their wings super fast! 🐝");
    let reply = handle_chat(&model, "How do bees fly?", 6).await.unwrap();

    assert!(matches!(reply, ChatReply::Text(ref t) if !t.is_empty()));
    let (prompt, format) = model.last_prompt().unwrap();
    assert_eq!(format, Some(ResponseFormat::Text));
    assert!(prompt.contains("6 year olds"));
    assert!(prompt.contains("How do bees fly?"));
}

#[tokio::test]
async fn test_picture_reply() {
    let model = MockModel::drawing(vec![1, 2, 3]);
    let reply = handle_chat(&model, "/Imagine a dragon", 9).await.unwrap();

    match reply {
        ChatReply::Picture { text, image } => {
            assert_eq!(text, PICTURE_REPLY);
            assert_eq!(image.bytes, vec![1, 2, 3]);
        }
        other => panic!("expected picture, got {other:?}"),
    }

    let (prompt, format) = model.last_prompt().unwrap();
    assert!(format.is_none());
    assert_eq!(prompt, "a dragon");
}

#[tokio::test]
async fn test_model_failure_keeps_branch() {
    let model = MockModel::failing();

    let err = handle_chat(&model, "tell me a joke", 7).await.unwrap_err();
    assert!(matches!(err, ChatError::Explain(_)));

    let err = handle_chat(&model, "/imagine a cat", 7).await.unwrap_err();
    assert!(matches!(err, ChatError::Imagine(_)));
    assert!(err.apology().contains("upstream unreachable"));
}

#[tokio::test]
async fn test_empty_inputs_never_reach_model() {
    let model = MockModel::replying("unused");

    assert!(matches!(
        handle_chat(&model, "", 7).await,
        Err(ChatError::EmptyMessage)
    ));
    assert!(matches!(
        handle_chat(&model, "/imagine   ", 7).await,
        Err(ChatError::EmptyImagePrompt)
    ));
    assert!(model.last_prompt().is_none());
}

#[tokio::test]
async fn test_schedule_is_validated() {
    let model = MockModel::replying(week_json());
    let subjects = vec!["Math".to_string(), " ".to_string(), "Science".to_string()];

    let schedule = generate_schedule(&model, 8, &subjects, "General learning")
        .await
        .unwrap();

    let days: Vec<&str> = schedule.days().iter().map(|(d, _)| *d).collect();
    assert_eq!(
        days,
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );
    assert_eq!(schedule.tuesday[0].subject, "Science");

    let (prompt, format) = model.last_prompt().unwrap();
    assert_eq!(format, Some(ResponseFormat::Json));
    assert!(prompt.contains("Math, Science"));
}

#[tokio::test]
async fn test_schedule_errors() {
    let subjects = vec!["Math".to_string()];

    let model = MockModel::replying("not json at all");
    assert!(matches!(
        generate_schedule(&model, 8, &subjects, "x").await,
        Err(ScheduleError::InvalidJson(_))
    ));

    let model = MockModel::replying("[1, 2, 3]");
    assert!(matches!(
        generate_schedule(&model, 8, &subjects, "x").await,
        Err(ScheduleError::InvalidShape(_))
    ));

    let model = MockModel::failing();
    assert!(matches!(
        generate_schedule(&model, 8, &subjects, "x").await,
        Err(ScheduleError::Model(_))
    ));

    assert!(matches!(
        generate_schedule(&model, 8, &[], "x").await,
        Err(ScheduleError::NoSubjects)
    ));
}
