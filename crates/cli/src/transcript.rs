use serde::Serialize;

/// One chat message, user or bot.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub text: String,
    pub bot: bool,
}

/// Ordered record of a chat session. Host-side state only; the engine never
/// sees it. Lives for one session and is discarded on exit (optionally
/// dumped as JSON first).
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.entries.push(Entry {
            text: text.into(),
            bot: false,
        });
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.entries.push(Entry {
            text: text.into(),
            bot: true,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
