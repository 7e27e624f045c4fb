//! Thread locator - finds the prompt's thread root in channel history

use crate::domain::entities::ChannelMessage;

/// Find the timestamp of the message whose text equals the prompt
///
/// History arrives newest first; the first exact match wins. Returns
/// `None` when nothing in the window matches. Exact-string matching ties
/// this to the prompt wording and date format, which is why the prompt
/// formatter is the single source of that string.
pub fn locate(history: &[ChannelMessage], prompt_text: &str) -> Option<String> {
    history
        .iter()
        .find(|msg| msg.text == prompt_text)
        .map(|msg| msg.ts.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_returns_first_exact_match() {
        let history = vec![
            ChannelMessage::new("3.0", "unrelated chatter"),
            ChannelMessage::new("2.0", "Scrum for August 31, 2026"),
            ChannelMessage::new("1.0", "Scrum for August 31, 2026"),
        ];
        assert_eq!(
            locate(&history, "Scrum for August 31, 2026"),
            Some("2.0".to_string())
        );
    }

    #[test]
    fn test_locate_requires_exact_text() {
        let history = vec![ChannelMessage::new("1.0", "scrum for August 31, 2026!")];
        assert_eq!(locate(&history, "Scrum for August 31, 2026"), None);
    }

    #[test]
    fn test_locate_empty_window() {
        assert_eq!(locate(&[], "Scrum for August 31, 2026"), None);
    }
}
