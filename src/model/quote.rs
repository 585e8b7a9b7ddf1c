use serde::{Deserialize, Serialize};

/// The backend's quote of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Quote {
    /// The text in curly quotes, followed by the author when known.
    pub fn attributed(&self) -> String {
        let author = self.author.trim();
        if author.is_empty() {
            format!("\u{201c}{}\u{201d}", self.text)
        } else {
            format!("\u{201c}{}\u{201d} \u{2014} {}", self.text, author)
        }
    }
}
