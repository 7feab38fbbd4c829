use serde::Serialize;

/// One rendered item of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatEntry {
    User { text: String },
    /// Markdown text; the page renders it.
    Assistant { text: String },
    /// Object URL of an image reply.
    Image { url: String },
    Error { text: String },
}

/// Ordered conversation log.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Object URLs held by image entries.
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            ChatEntry::Image { url } => Some(url.as_str()),
            _ => None,
        })
    }

    /// Empty the log. Returns the image URLs it held, for the caller to revoke.
    pub fn clear(&mut self) -> Vec<String> {
        self.entries
            .drain(..)
            .filter_map(|entry| match entry {
                ChatEntry::Image { url } => Some(url),
                _ => None,
            })
            .collect()
    }
}
