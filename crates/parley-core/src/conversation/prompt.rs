//! Prompt construction from session history.
//!
//! The generator receives the whole history, one `"{role}: {content}"` line
//! per turn, followed by an `"assistant:"` cue line. No system prompt, no
//! truncation, no summarization: prompt length grows with the conversation.

use parley_types::conversation::Turn;

/// Final line of every prompt, cueing the generator to answer as assistant.
pub const ASSISTANT_CUE: &str = "assistant:";

/// Render `turns` into the generator prompt.
pub fn build_prompt(turns: &[Turn]) -> String {
    let mut prompt = String::new();
    for turn in turns {
        prompt.push_str(&turn.to_string());
        prompt.push('\n');
    }
    prompt.push_str(ASSISTANT_CUE);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_user_turn() {
        let prompt = build_prompt(&[Turn::user("hello")]);
        assert_eq!(prompt, "user: hello\nassistant:");
    }

    #[test]
    fn full_history_in_order() {
        let turns = vec![
            Turn::user("hello"),
            Turn::assistant("hi there"),
            Turn::user("[STT failed]"),
        ];
        assert_eq!(
            build_prompt(&turns),
            "user: hello\nassistant: hi there\nuser: [STT failed]\nassistant:"
        );
    }

    #[test]
    fn multiline_content_is_kept_verbatim() {
        let prompt = build_prompt(&[Turn::user("line one\nline two")]);
        assert_eq!(prompt, "user: line one\nline two\nassistant:");
    }

    #[test]
    fn empty_history_is_just_the_cue() {
        assert_eq!(build_prompt(&[]), ASSISTANT_CUE);
    }
}
