//! Tests for [`prompt::fold_step_messages`] and the prompt defaults.

use prompt::{
    fold_step_messages, ChatMessage, MessageRole, SummaryKind, SummaryPrompts,
    SECTION_NEXT_PART, SECTION_PREVIOUS_SUMMARY,
};

/// **Test: A single chunk is sent as-is after the system prompt, without part markers.**
#[test]
fn test_single_chunk_is_sent_verbatim() {
    let messages = fold_step_messages("sys", None, "the whole text", 0, 1);
    assert_eq!(
        messages,
        vec![ChatMessage::system("sys"), ChatMessage::user("the whole text")]
    );
}

/// **Test: The first of several chunks carries a part marker but no running summary.**
#[test]
fn test_first_chunk_of_many_has_part_marker() {
    let messages = fold_step_messages("sys", None, "alpha", 0, 3);
    assert_eq!(messages[1].role, MessageRole::User);
    assert_eq!(messages[1].content, "[Part 1/3]\nalpha");
}

/// **Test: Later steps put the running summary before the next chunk.**
#[test]
fn test_later_step_includes_previous_summary_first() {
    let messages = fold_step_messages("sys", Some("summary of alpha"), "beta", 1, 3);
    let body = &messages[1].content;

    let summary_at = body.find("summary of alpha").unwrap();
    let chunk_at = body.find("beta").unwrap();
    assert!(body.starts_with(SECTION_PREVIOUS_SUMMARY));
    assert!(body.contains(SECTION_NEXT_PART));
    assert!(body.contains("[Part 2/3]"));
    assert!(summary_at < chunk_at);
}

/// **Test: SummaryPrompts selects the prompt by kind.**
#[test]
fn test_summary_prompts_for_kind() {
    let prompts = SummaryPrompts {
        video: "v".to_string(),
        website: "w".to_string(),
    };
    assert_eq!(prompts.for_kind(SummaryKind::Video), "v");
    assert_eq!(prompts.for_kind(SummaryKind::Website), "w");
}

/// **Test: Roles serialize to the lowercase API names.**
#[test]
fn test_role_names() {
    assert_eq!(MessageRole::System.as_str(), "system");
    assert_eq!(MessageRole::User.as_str(), "user");
    assert_eq!(MessageRole::Assistant.as_str(), "assistant");
}
