//! Common types and data structures

use serde::{Deserialize, Deserializer, Serialize};

/// Page selected in the navigation sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Predict,
    AddComment,
    ViewComments,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Predict, Page::AddComment, Page::ViewComments];

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Predict => "Predict Sentiment",
            Page::AddComment => "Add Comment",
            Page::ViewComments => "View Comments",
        }
    }
}

/// Classifier output. Anything other than the two known labels is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Unknown(String),
}

impl Sentiment {
    pub fn from_label(label: &str) -> Self {
        match label {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            other => Sentiment::Unknown(other.to_string()),
        }
    }

    /// Uppercased label as displayed on the predict view and comment cards
    pub fn display_label(&self) -> String {
        match self {
            Sentiment::Positive => "POSITIVE".to_string(),
            Sentiment::Negative => "NEGATIVE".to_string(),
            Sentiment::Unknown(raw) if raw.trim().is_empty() => "UNKNOWN".to_string(),
            Sentiment::Unknown(raw) => raw.to_uppercase(),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "👍",
            Sentiment::Negative => "👎",
            Sentiment::Unknown(_) => "🤷‍♂️",
        }
    }
}

impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => Sentiment::from_label(&s),
            serde_json::Value::Null => Sentiment::Unknown(String::new()),
            other => Sentiment::Unknown(other.to_string()),
        })
    }
}

/// Comment as returned by `GET /comments`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "scalar_text")]
    pub comment_text: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub commenter_name: String,
    pub prediction: Sentiment,
    #[serde(default, deserialize_with = "scalar_text")]
    pub creation_time: String,
}

/// Text fields come from the API in whatever shape its serializer produces;
/// strings pass through, null is empty, other values keep their JSON text.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Body of `POST /predict`
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub text: &'a str,
}

/// Response of `POST /predict`
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub prediction_label: Sentiment,
}

/// Body of `POST /add_comment`
#[derive(Debug, Serialize)]
pub struct NewComment<'a> {
    pub comment_text: &'a str,
    pub commenter_name: &'a str,
}

/// Two-way split of a comment list. Unknown labels count toward neither side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentCounts {
    pub fn from_comments(comments: &[Comment]) -> Self {
        comments.iter().fold(Self::default(), |mut counts, c| {
            match c.prediction {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Negative => counts.negative += 1,
                Sentiment::Unknown(_) => {}
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }
}

/// Severity of a banner shown under a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}
