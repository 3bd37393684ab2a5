//! Application constants and configuration

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_URL_ENV: &str = "SENTIMENT_API_URL";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "Sentiment Dashboard";
pub const LOG_FILE_NAME: &str = "sentiment-dashboard.log";

/// Remote endpoints, relative to the base URL
pub const PREDICT_PATH: &str = "predict";
pub const ADD_COMMENT_PATH: &str = "add_comment";
pub const COMMENTS_PATH: &str = "comments";
