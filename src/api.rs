//! HTTP client for the sentiment analysis service

use crate::constants::{ADD_COMMENT_PATH, COMMENTS_PATH, PREDICT_PATH};
use crate::types::*;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

/// Failure of a single API call
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a status other than the expected one
    #[error("{0}")]
    Status(u16),
    #[error("service unreachable ({0})")]
    Transport(String),
    #[error("invalid response ({0})")]
    Decode(String),
}

impl ApiError {
    /// Banner text shown to the user
    pub fn user_message(&self) -> String {
        format!("Error: {} ❌", self)
    }
}

/// One request issued by a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Predict { text: String },
    AddComment { comment_text: String, commenter_name: String },
    ListComments,
}

/// Result of an [`ApiRequest`], tagged with the kind of request it answers
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    Predicted(Result<Sentiment, ApiError>),
    CommentAdded(Result<(), ApiError>),
    CommentsListed(Result<Vec<Comment>, ApiError>),
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `POST /predict`, expects 200 with `{"prediction_label": ...}`
    pub async fn predict(&self, text: &str) -> Result<Sentiment, ApiError> {
        let url = self.endpoint(PREDICT_PATH);
        debug!(url = %url, chars = text.chars().count(), "Requesting prediction");
        let response = self
            .http
            .post(&url)
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(transport)?;
        expect_status(&url, &response, StatusCode::OK)?;
        let body: PredictResponse = response.json().await.map_err(decode)?;
        info!(label = ?body.prediction_label, "Prediction received");
        Ok(body.prediction_label)
    }

    /// `POST /add_comment`, expects 201
    pub async fn add_comment(&self, comment_text: &str, commenter_name: &str) -> Result<(), ApiError> {
        let url = self.endpoint(ADD_COMMENT_PATH);
        debug!(url = %url, commenter = %commenter_name, "Submitting comment");
        let response = self
            .http
            .post(&url)
            .json(&NewComment { comment_text, commenter_name })
            .send()
            .await
            .map_err(transport)?;
        expect_status(&url, &response, StatusCode::CREATED)?;
        info!(commenter = %commenter_name, "Comment added");
        Ok(())
    }

    /// `GET /comments`, expects 200 with a JSON array
    pub async fn list_comments(&self) -> Result<Vec<Comment>, ApiError> {
        let url = self.endpoint(COMMENTS_PATH);
        debug!(url = %url, "Fetching comments");
        let response = self.http.get(&url).send().await.map_err(transport)?;
        expect_status(&url, &response, StatusCode::OK)?;
        let comments: Vec<Comment> = response.json().await.map_err(decode)?;
        info!(count = comments.len(), "Comments received");
        Ok(comments)
    }

    pub async fn execute(&self, request: ApiRequest) -> ApiReply {
        match request {
            ApiRequest::Predict { text } => ApiReply::Predicted(self.predict(&text).await),
            ApiRequest::AddComment { comment_text, commenter_name } => {
                ApiReply::CommentAdded(self.add_comment(&comment_text, &commenter_name).await)
            }
            ApiRequest::ListComments => ApiReply::CommentsListed(self.list_comments().await),
        }
    }
}

fn expect_status(url: &str, response: &reqwest::Response, expected: StatusCode) -> Result<(), ApiError> {
    let status = response.status();
    if status == expected {
        Ok(())
    } else {
        warn!(url = %url, status = status.as_u16(), expected = expected.as_u16(), "Unexpected status");
        Err(ApiError::Status(status.as_u16()))
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    warn!(error = %e, "Request failed");
    ApiError::Transport(if e.is_connect() {
        "could not connect".to_string()
    } else if e.is_timeout() {
        "timed out".to_string()
    } else {
        e.to_string()
    })
}

fn decode(e: reqwest::Error) -> ApiError {
    warn!(error = %e, "Failed to decode response body");
    ApiError::Decode(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accept one connection, answer it with `status` and `body`, and hand back
    /// the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (ApiClient, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            request
        });
        (client_for(&format!("http://{}/", addr)), handle)
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
                let content_length = head
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn client_for(base_url: &str) -> ApiClient {
        let http = reqwest::Client::builder().no_proxy().build().unwrap();
        ApiClient::with_client(http, base_url)
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = client_for("http://example.test:5000///");
        assert_eq!(client.base_url(), "http://example.test:5000");
        assert_eq!(client.endpoint(PREDICT_PATH), "http://example.test:5000/predict");
    }

    #[test]
    fn test_user_message_shows_status_code() {
        assert_eq!(ApiError::Status(500).user_message(), "Error: 500 ❌");
        assert_eq!(
            ApiError::Transport("could not connect".into()).user_message(),
            "Error: service unreachable (could not connect) ❌"
        );
    }

    #[tokio::test]
    async fn test_predict_posts_text() {
        let (client, server) = serve_once("200 OK", r#"{"prediction_label": "negative"}"#).await;
        let label = client.predict("awful service").await;
        let request = server.await.unwrap();

        assert_eq!(label, Ok(Sentiment::Negative));
        assert!(request.starts_with("POST /predict HTTP/1.1"));
        assert!(request.contains(r#"{"text":"awful service"}"#));
    }

    #[tokio::test]
    async fn test_predict_rejects_non_200() {
        let (client, server) = serve_once("400 Bad Request", r#"{"error": "no text"}"#).await;
        assert_eq!(client.predict("hi").await, Err(ApiError::Status(400)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_predict_bad_body_is_decode_error() {
        let (client, server) = serve_once("200 OK", r#"{"label": "positive"}"#).await;
        assert!(matches!(client.predict("hi").await, Err(ApiError::Decode(_))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_add_comment_requires_created() {
        let (client, server) = serve_once("201 Created", r#"{"message": "ok"}"#).await;
        assert_eq!(client.add_comment("nice", "ann").await, Ok(()));
        let request = server.await.unwrap();
        assert!(request.starts_with("POST /add_comment HTTP/1.1"));
        assert!(request.contains(r#"{"comment_text":"nice","commenter_name":"ann"}"#));

        // 200 is not the creation status
        let (client, server) = serve_once("200 OK", "{}").await;
        assert_eq!(client.add_comment("nice", "ann").await, Err(ApiError::Status(200)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_list_comments() {
        let body = r#"[
            {"comment_text": "love it", "commenter_name": "ann", "prediction": "positive", "creation_time": "2024-01-01 10:00:00"},
            {"comment_text": "hate it", "commenter_name": "bo", "prediction": "negative", "creation_time": "2024-01-02 11:00:00"}
        ]"#;
        let (client, server) = serve_once("200 OK", body).await;
        let comments = client.list_comments().await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /comments HTTP/1.1"));
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].commenter_name, "bo");
        assert_eq!(comments[1].prediction, Sentiment::Negative);
    }

    #[tokio::test]
    async fn test_execute_tags_reply() {
        let (client, server) = serve_once("503 Service Unavailable", "").await;
        let reply = client.execute(ApiRequest::ListComments).await;
        server.await.unwrap();
        assert_eq!(reply, ApiReply::CommentsListed(Err(ApiError::Status(503))));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(&format!("http://{}", addr));
        assert_eq!(
            client.list_comments().await,
            Err(ApiError::Transport("could not connect".to_string()))
        );
    }
}
