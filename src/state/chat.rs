//! Chat transcript state.
//!
//! Pure append-only transcript the chatbot page renders. Message ids are
//! assigned locally and strictly increase, so the view can key on them.

use chrono::Local;

/// Opening message shown before the user has typed anything.
pub const GREETING: &str = "👋 Hello! I'm BrainCare AI Bot, your neurology health assistant. I can help you understand stroke symptoms, prevention, and brain health. What would you like to know?";

/// Canned reply appended when the backend cannot be reached.
pub const APOLOGY: &str = "I'm sorry, I'm having trouble connecting right now. Please try again later or contact support if the issue persists.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
}

/// Append-only conversation log. Messages are never edited or removed once
/// pushed, only added.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u32,
}

/// Local wall-clock time formatted for message bubbles.
pub fn now_label() -> String {
    Local::now().format("%H:%M").to_string()
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh transcript seeded with the bot greeting.
    pub fn with_greeting() -> Self {
        let mut transcript = Self::new();
        transcript.push(GREETING.to_string(), Sender::Bot, now_label());
        transcript
    }

    fn push(&mut self, text: String, sender: Sender, timestamp: String) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp,
        });
        id
    }

    pub fn push_user(&mut self, text: String) -> u32 {
        self.push(text, Sender::User, now_label())
    }

    /// Append a bot reply with the timestamp the server reported.
    pub fn push_bot(&mut self, text: String, timestamp: String) -> u32 {
        self.push(text, Sender::Bot, timestamp)
    }

    pub fn push_bot_now(&mut self, text: String) -> u32 {
        self.push(text, Sender::Bot, now_label())
    }

    pub fn push_apology(&mut self) -> u32 {
        self.push_bot_now(APOLOGY.to_string())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True while the greeting is the only message, i.e. the user has not
    /// engaged yet. Drives the quick-question chips.
    pub fn only_greeting(&self) -> bool {
        self.messages.len() == 1 && self.messages[0].sender == Sender::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_strictly_increase() {
        let mut transcript = Transcript::with_greeting();
        let a = transcript.push_user("What is a stroke?".to_string());
        let b = transcript.push_bot_now("A stroke is...".to_string());
        let c = transcript.push_user("Thanks".to_string());
        assert!(a < b && b < c);

        let ids: Vec<u32> = transcript.messages().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn greeting_seeds_the_transcript() {
        let transcript = Transcript::with_greeting();
        assert_eq!(transcript.len(), 1);
        assert!(transcript.only_greeting());
        assert_eq!(transcript.messages()[0].sender, Sender::Bot);
        assert_eq!(transcript.messages()[0].text, GREETING);
    }

    #[test]
    fn each_exchange_grows_by_two() {
        let mut transcript = Transcript::with_greeting();

        // Successful round trip: user message plus bot reply.
        transcript.push_user("hi".to_string());
        transcript.push_bot("hello".to_string(), "10:15".to_string());
        assert_eq!(transcript.len(), 3);

        // Failed round trip: user message plus apology.
        transcript.push_user("are you there?".to_string());
        transcript.push_apology();
        assert_eq!(transcript.len(), 5);
        assert_eq!(transcript.messages().last().unwrap().text, APOLOGY);
        assert!(!transcript.only_greeting());
    }

    #[test]
    fn server_timestamp_is_kept_verbatim() {
        let mut transcript = Transcript::new();
        transcript.push_bot("reply".to_string(), "14:32".to_string());
        assert_eq!(transcript.messages()[0].timestamp, "14:32");
    }
}
