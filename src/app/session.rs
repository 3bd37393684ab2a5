//! Navigation and per-view form state
//!
//! Views never talk to the network directly: they call into [`Session`], which
//! validates input and hands back at most one [`ApiRequest`]. Replies come back
//! through [`Session::apply`].

use crate::api::{ApiError, ApiReply, ApiRequest};
use crate::types::*;
use tracing::debug;

pub const EMPTY_PREDICT_WARNING: &str = "Please enter a comment. 📝";
pub const EMPTY_COMMENT_WARNING: &str = "Please enter both a comment and your name. 📝";
pub const COMMENT_ADDED: &str = "Comment added successfully. 🎉";

/// What the predict view shows under its button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictOutcome {
    Label(Sentiment),
    Notice(Notice),
}

#[derive(Debug, Default)]
pub struct PredictForm {
    pub text: String,
    pub pending: bool,
    pub outcome: Option<PredictOutcome>,
    /// Set once `outcome` has been drawn
    pub shown: bool,
}

impl PredictForm {
    pub fn submit(&mut self) -> Option<ApiRequest> {
        if self.pending {
            return None;
        }
        if self.text.is_empty() {
            self.outcome = Some(PredictOutcome::Notice(Notice::warning(EMPTY_PREDICT_WARNING)));
            self.shown = false;
            return None;
        }
        self.pending = true;
        self.outcome = None;
        Some(ApiRequest::Predict { text: self.text.clone() })
    }

    fn resolve(&mut self, result: Result<Sentiment, ApiError>) {
        self.pending = false;
        self.shown = false;
        self.outcome = Some(match result {
            Ok(label) => PredictOutcome::Label(label),
            Err(e) => PredictOutcome::Notice(Notice::error(e.user_message())),
        });
    }
}

#[derive(Debug, Default)]
pub struct AddCommentForm {
    pub comment_text: String,
    pub commenter_name: String,
    pub pending: bool,
    pub notice: Option<Notice>,
    /// Set once `notice` has been drawn
    pub shown: bool,
}

impl AddCommentForm {
    pub fn submit(&mut self) -> Option<ApiRequest> {
        if self.pending {
            return None;
        }
        if self.comment_text.is_empty() || self.commenter_name.is_empty() {
            self.notice = Some(Notice::warning(EMPTY_COMMENT_WARNING));
            self.shown = false;
            return None;
        }
        self.pending = true;
        self.notice = None;
        Some(ApiRequest::AddComment {
            comment_text: self.comment_text.clone(),
            commenter_name: self.commenter_name.clone(),
        })
    }

    /// The form keeps its contents either way.
    fn resolve(&mut self, result: Result<(), ApiError>) {
        self.pending = false;
        self.shown = false;
        self.notice = Some(match result {
            Ok(()) => Notice::success(COMMENT_ADDED),
            Err(e) => Notice::error(e.user_message()),
        });
    }
}

/// A successful fetch, with its derived split
#[derive(Debug, Clone, PartialEq)]
pub struct CommentListing {
    pub comments: Vec<Comment>,
    pub counts: SentimentCounts,
    pub fetched_at: chrono::DateTime<chrono::Local>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListOutcome {
    Loaded(CommentListing),
    Failed(Notice),
}

#[derive(Debug, Default)]
pub struct CommentsView {
    pub pending: bool,
    pub outcome: Option<ListOutcome>,
    /// Set once `outcome` has been drawn
    pub shown: bool,
}

impl CommentsView {
    pub fn retrieve(&mut self) -> Option<ApiRequest> {
        if self.pending {
            return None;
        }
        self.pending = true;
        self.outcome = None;
        Some(ApiRequest::ListComments)
    }

    fn resolve(&mut self, result: Result<Vec<Comment>, ApiError>) {
        self.pending = false;
        self.shown = false;
        self.outcome = Some(match result {
            Ok(comments) => ListOutcome::Loaded(CommentListing {
                counts: SentimentCounts::from_comments(&comments),
                comments,
                fetched_at: chrono::Local::now(),
            }),
            Err(e) => ListOutcome::Failed(Notice::error(e.user_message())),
        });
    }
}

/// Everything the window remembers between frames
#[derive(Debug, Default)]
pub struct Session {
    page: Page,
    pub predict: PredictForm,
    pub add_comment: AddCommentForm,
    pub comments: CommentsView,
}

impl Session {
    pub fn page(&self) -> Page {
        self.page
    }

    /// Switch pages. Returns false when `page` is already shown, in which
    /// case nothing changes. Entering a page drops a result that was already
    /// drawn so it renders fresh; a reply that landed while away is kept, and
    /// typed input is always kept.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        debug!(from = ?self.page, to = ?page, "Navigate");
        self.page = page;
        match page {
            Page::Home => {}
            Page::Predict if self.predict.shown => {
                self.predict.outcome = None;
                self.predict.shown = false;
            }
            Page::AddComment if self.add_comment.shown => {
                self.add_comment.notice = None;
                self.add_comment.shown = false;
            }
            Page::ViewComments if self.comments.shown => {
                self.comments.outcome = None;
                self.comments.shown = false;
            }
            _ => {}
        }
        true
    }

    pub fn apply(&mut self, reply: ApiReply) {
        match reply {
            ApiReply::Predicted(result) => self.predict.resolve(result),
            ApiReply::CommentAdded(result) => self.add_comment.resolve(result),
            ApiReply::CommentsListed(result) => self.comments.resolve(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(name: &str, label: &str) -> Comment {
        Comment {
            comment_text: format!("{} says hi", name),
            commenter_name: name.to_string(),
            prediction: Sentiment::from_label(label),
            creation_time: "2024-05-01 12:00:00".to_string(),
        }
    }

    #[test]
    fn test_empty_predict_warns_without_request() {
        let mut session = Session::default();
        for _ in 0..3 {
            assert_eq!(session.predict.submit(), None);
        }
        assert!(!session.predict.pending);
        assert_eq!(
            session.predict.outcome,
            Some(PredictOutcome::Notice(Notice::warning(EMPTY_PREDICT_WARNING)))
        );
    }

    #[test]
    fn test_predict_issues_exactly_one_request() {
        let mut session = Session::default();
        session.predict.text = "what a lovely day".into();

        let request = session.predict.submit();
        assert_eq!(request, Some(ApiRequest::Predict { text: "what a lovely day".into() }));
        // Still outstanding, so a second click is refused
        assert_eq!(session.predict.submit(), None);

        session.apply(ApiReply::Predicted(Ok(Sentiment::Positive)));
        assert!(!session.predict.pending);
        assert_eq!(session.predict.outcome, Some(PredictOutcome::Label(Sentiment::Positive)));
    }

    #[test]
    fn test_predict_error_shows_status_code() {
        let mut session = Session::default();
        session.predict.text = "hmm".into();
        session.predict.submit();
        session.apply(ApiReply::Predicted(Err(ApiError::Status(502))));
        assert_eq!(
            session.predict.outcome,
            Some(PredictOutcome::Notice(Notice::error("Error: 502 ❌")))
        );
    }

    #[test]
    fn test_predict_unknown_label_is_not_an_error() {
        let mut session = Session::default();
        session.predict.text = "so-so".into();
        session.predict.submit();
        session.apply(ApiReply::Predicted(Ok(Sentiment::from_label("neutral"))));
        let Some(PredictOutcome::Label(label)) = &session.predict.outcome else {
            panic!("expected a label, got {:?}", session.predict.outcome);
        };
        assert_eq!(label.display_label(), "NEUTRAL");
    }

    #[test]
    fn test_add_comment_requires_both_fields() {
        let mut session = Session::default();
        session.add_comment.comment_text = "nice".into();
        assert_eq!(session.add_comment.submit(), None);
        assert_eq!(session.add_comment.notice, Some(Notice::warning(EMPTY_COMMENT_WARNING)));

        session.add_comment.comment_text.clear();
        session.add_comment.commenter_name = "ann".into();
        assert_eq!(session.add_comment.submit(), None);
        assert!(!session.add_comment.pending);
    }

    #[test]
    fn test_add_comment_success_and_failure_banners() {
        let mut session = Session::default();
        session.add_comment.comment_text = "nice".into();
        session.add_comment.commenter_name = "ann".into();

        assert_eq!(
            session.add_comment.submit(),
            Some(ApiRequest::AddComment {
                comment_text: "nice".into(),
                commenter_name: "ann".into(),
            })
        );
        session.apply(ApiReply::CommentAdded(Ok(())));
        assert_eq!(session.add_comment.notice, Some(Notice::success(COMMENT_ADDED)));
        // Form is left as typed
        assert_eq!(session.add_comment.comment_text, "nice");
        assert_eq!(session.add_comment.commenter_name, "ann");

        session.add_comment.submit();
        session.apply(ApiReply::CommentAdded(Err(ApiError::Status(500))));
        assert_eq!(session.add_comment.notice, Some(Notice::error("Error: 500 ❌")));
    }

    #[test]
    fn test_empty_listing() {
        let mut session = Session::default();
        assert_eq!(session.comments.retrieve(), Some(ApiRequest::ListComments));
        session.apply(ApiReply::CommentsListed(Ok(Vec::new())));

        let Some(ListOutcome::Loaded(listing)) = &session.comments.outcome else {
            panic!("expected a listing");
        };
        assert!(listing.comments.is_empty());
        assert_eq!(listing.counts, SentimentCounts { positive: 0, negative: 0 });
    }

    #[test]
    fn test_listing_counts_match_cards() {
        let mut session = Session::default();
        session.comments.retrieve();
        assert_eq!(session.comments.retrieve(), None);

        let comments = vec![
            comment("ann", "positive"),
            comment("bo", "negative"),
            comment("cy", "positive"),
            comment("di", "positive"),
        ];
        session.apply(ApiReply::CommentsListed(Ok(comments.clone())));

        let Some(ListOutcome::Loaded(listing)) = &session.comments.outcome else {
            panic!("expected a listing");
        };
        assert_eq!(listing.comments, comments);
        assert_eq!(listing.counts.total(), comments.len());
        assert_eq!(listing.counts.positive, 3);
    }

    #[test]
    fn test_listing_failure() {
        let mut session = Session::default();
        session.comments.retrieve();
        session.apply(ApiReply::CommentsListed(Err(ApiError::Status(404))));
        assert_eq!(
            session.comments.outcome,
            Some(ListOutcome::Failed(Notice::error("Error: 404 ❌")))
        );
        assert!(!session.comments.pending);
    }

    #[test]
    fn test_navigation_is_idempotent() {
        let mut session = Session::default();
        assert_eq!(session.page(), Page::Home);

        assert!(session.navigate(Page::Predict));
        session.predict.text = "hello".into();
        session.predict.submit();
        session.apply(ApiReply::Predicted(Ok(Sentiment::Negative)));

        for _ in 0..5 {
            assert!(!session.navigate(Page::Predict));
        }
        assert_eq!(session.page(), Page::Predict);
        assert_eq!(session.predict.outcome, Some(PredictOutcome::Label(Sentiment::Negative)));
    }

    #[test]
    fn test_revisiting_page_clears_result_but_keeps_input() {
        let mut session = Session::default();
        session.navigate(Page::Predict);
        session.predict.text = "hello".into();
        session.predict.submit();
        session.apply(ApiReply::Predicted(Ok(Sentiment::Positive)));
        session.predict.shown = true;

        session.navigate(Page::Home);
        session.navigate(Page::Predict);
        assert_eq!(session.predict.outcome, None);
        assert_eq!(session.predict.text, "hello");
    }

    #[test]
    fn test_reply_after_navigating_away_is_kept() {
        let mut session = Session::default();
        session.navigate(Page::ViewComments);
        session.comments.retrieve();
        session.navigate(Page::Home);
        session.navigate(Page::ViewComments);
        assert!(session.comments.pending);

        session.apply(ApiReply::CommentsListed(Ok(vec![comment("ann", "negative")])));
        assert!(matches!(session.comments.outcome, Some(ListOutcome::Loaded(_))));
    }

    #[test]
    fn test_reply_landing_while_away_survives_return() {
        let mut session = Session::default();
        session.navigate(Page::AddComment);
        session.add_comment.comment_text = "nice".into();
        session.add_comment.commenter_name = "ann".into();
        session.add_comment.submit();

        session.navigate(Page::Home);
        session.apply(ApiReply::CommentAdded(Err(ApiError::Status(500))));
        session.navigate(Page::AddComment);
        assert_eq!(session.add_comment.notice, Some(Notice::error("Error: 500 ❌")));

        // Once drawn, the next visit starts fresh
        session.add_comment.shown = true;
        session.navigate(Page::Home);
        session.navigate(Page::AddComment);
        assert_eq!(session.add_comment.notice, None);
    }

    #[test]
    fn test_refetch_drops_stale_listing() {
        let mut session = Session::default();
        session.comments.retrieve();
        session.apply(ApiReply::CommentsListed(Ok(vec![comment("ann", "positive")])));
        assert!(session.comments.outcome.is_some());

        assert_eq!(session.comments.retrieve(), Some(ApiRequest::ListComments));
        assert_eq!(session.comments.outcome, None);
        assert!(session.comments.pending);
    }
}
