//! Chat transcript types for the conversational mode

/// Speaker of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

/// A single role-tagged turn exchanged with the remote model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a model turn
    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }
}

/// Append-only log of turns, replayed to the model on every chat request
/// to preserve conversational context
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<ChatMessage>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn. Entries are never reordered or rewritten.
    pub fn push(&mut self, message: ChatMessage) {
        self.entries.push(message);
    }

    /// All turns in order
    pub fn entries(&self) -> &[ChatMessage] {
        &self.entries
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all turns
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_preserves_append_order() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::user("first"));
        transcript.push(ChatMessage::model("second"));

        let entries = transcript.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ChatMessage::user("first"));
        assert_eq!(entries[1], ChatMessage::model("second"));
    }

    #[test]
    fn test_clear_empties_the_transcript() {
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::user("hello"));
        assert!(!transcript.is_empty());

        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn test_consecutive_same_role_turns_are_allowed() {
        // Alternation is conceptual, not enforced.
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::user("one"));
        transcript.push(ChatMessage::user("two"));
        assert_eq!(transcript.len(), 2);
    }
}
