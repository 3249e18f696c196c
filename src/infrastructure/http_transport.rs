//! HTTP 传输 - 基础设施层
//!
//! 持有唯一的 reqwest::Client，只暴露"发送一次 JSON POST"的能力

use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use tracing::debug;

/// JSON 传输能力
///
/// 职责：
/// - 发送一次带 Bearer 令牌的 POST
/// - 非成功状态码视为失败
/// - 不认识 Question / Survey
/// - 不重试
#[async_trait]
pub trait SurveyTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &JsonValue,
    ) -> Result<JsonValue, TransportError>;
}

/// 基于 reqwest 的传输实现
///
/// 不设置客户端超时，失败只由传输层自身报告。
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SurveyTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        bearer_token: &str,
        body: &JsonValue,
    ) -> Result<JsonValue, TransportError> {
        debug!("POST {} Payload: {}", url, body);

        // .json() 会同时设置 Content-Type: application/json
        let response = self
            .client
            .post(url)
            .bearer_auth(bearer_token)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::request_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                endpoint: url.to_string(),
                status: status.as_u16(),
            });
        }

        let result: JsonValue =
            response
                .json()
                .await
                .map_err(|e| TransportError::InvalidBody {
                    endpoint: url.to_string(),
                    source: Box::new(e),
                })?;

        debug!("POST {} 结果: {}", url, result);

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// 只应答一次的本地 HTTP 服务，返回保存地址和收到的原始请求
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8(raw).unwrap()
        });

        (format!("http://{}/api/surveys/save", addr), handle)
    }

    /// 头部结束且正文长度已满足 Content-Length
    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(head_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..head_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= head_end + 4 + content_length
    }

    #[tokio::test]
    async fn test_post_json_sends_bearer_and_json() {
        let (url, server) = serve_once("200 OK", r#"{"id":"survey-1"}"#).await;

        let result = HttpTransport::new()
            .post_json(&url, "tok", &json!({ "title": "t" }))
            .await
            .unwrap();
        assert_eq!(result, json!({ "id": "survey-1" }));

        let request = server.await.unwrap();
        let lower = request.to_lowercase();
        assert!(lower.starts_with("post /api/surveys/save http/1.1\r\n"));
        assert!(lower.contains("\r\nauthorization: bearer tok\r\n"));
        assert!(lower.contains("\r\ncontent-type: application/json\r\n"));
        assert!(request.ends_with(r#"{"title":"t"}"#));
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let (url, server) = serve_once("500 Internal Server Error", "{}").await;

        let err = HttpTransport::new()
            .post_json(&url, "tok", &json!({ "title": "t" }))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500, .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body_is_error() {
        let (url, server) = serve_once("200 OK", "not json").await;

        let err = HttpTransport::new()
            .post_json(&url, "tok", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidBody { .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/api/surveys/save", addr);
        let err = HttpTransport::new()
            .post_json(&url, "tok", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Request { .. }));
    }
}
