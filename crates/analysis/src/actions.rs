//! Action-item detection.

use once_cell::sync::Lazy;
use regex::Regex;

// Whole-word, case-insensitive vocabulary of verbs and urgency markers that
// signal an actionable request.
static ACTION_VOCABULARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(do|need|fix|send|make|complete|finish|urgent|asap|please|assign|follow up|follow-up|review|call|meet|schedule|book)\b",
    )
    .expect("action vocabulary pattern")
});

/// Collects lines that contain a word from the action vocabulary.
///
/// Lines are trimmed and empty lines are skipped; matching lines are kept
/// verbatim and in original order, even when they contain several
/// vocabulary hits. Scanning stops as soon as `max` lines are collected.
pub fn extract_action_items(text: &str, max: usize) -> Vec<String> {
    let mut actions = Vec::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if actions.len() >= max {
            break;
        }
        if ACTION_VOCABULARY.is_match(line) {
            actions.push(line.to_string());
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_matching_lines_in_order() {
        let text = "Please send the report\nHave a nice day\nWe need to book the room";
        assert_eq!(
            extract_action_items(text, 8),
            vec!["Please send the report", "We need to book the room"]
        );
    }

    #[test]
    fn matches_are_case_insensitive() {
        let text = "URGENT: numbers are wrong\nFollow UP with finance";
        assert_eq!(extract_action_items(text, 8).len(), 2);
    }

    #[test]
    fn matches_whole_words_only() {
        // "doing", "sending", and "booked" contain vocabulary words but do
        // not match on a word boundary.
        let text = "doing fine\nsending regards\nbooked already";
        assert!(extract_action_items(text, 8).is_empty());
    }

    #[test]
    fn hyphenated_follow_up_matches() {
        let text = "follow-up on the invoice";
        assert_eq!(extract_action_items(text, 8), vec!["follow-up on the invoice"]);
    }

    #[test]
    fn lines_are_kept_verbatim_with_multiple_hits() {
        let text = "Please fix and send the budget. Then call Bob.";
        assert_eq!(
            extract_action_items(text, 8),
            vec!["Please fix and send the budget. Then call Bob."]
        );
    }

    #[test]
    fn stops_at_the_cap() {
        let text = "fix one\nfix two\nfix three\nfix four";
        let actions = extract_action_items(text, 2);
        assert_eq!(actions, vec!["fix one", "fix two"]);
    }

    #[test]
    fn trims_lines_before_matching() {
        let text = "   please review   \n\n   \n";
        assert_eq!(extract_action_items(text, 8), vec!["please review"]);
    }

    #[test]
    fn empty_input_yields_no_actions() {
        assert!(extract_action_items("", 8).is_empty());
    }

    #[test]
    fn vocabulary_membership_is_pinned() {
        for word in [
            "do", "need", "fix", "send", "make", "complete", "finish", "urgent", "asap",
            "please", "assign", "follow up", "follow-up", "review", "call", "meet", "schedule",
            "book",
        ] {
            assert_eq!(
                extract_action_items(word, 1),
                vec![word.to_string()],
                "vocabulary word should match: {}",
                word
            );
        }
        assert!(extract_action_items("nothing actionable today", 1).is_empty());
    }
}
