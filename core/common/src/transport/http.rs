//! reqwest (blocking) による Transport 実装

use crate::error::Error;
use crate::transport::{Method, Transport};
use serde_json::Value;
use std::path::Path;

/// ベース URL に対して相対エンドポイントを叩く HTTP アダプタ
pub struct HttpTransport {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// ベース URL（末尾スラッシュは除去）からトランスポートを作成
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn handle_response(
        &self,
        method: Method,
        endpoint: &str,
        response: reqwest::blocking::Response,
    ) -> Result<Value, Error> {
        let status = response.status();
        if !status.is_success() {
            // ボディはパース可能と仮定しない。ステータスと汎用メッセージのみ返す。
            return Err(Error::backend(
                status.as_u16(),
                format!("{} {} failed", method, endpoint),
            ));
        }
        let text = response
            .text()
            .map_err(|e| Error::transport(endpoint, format!("failed to read body: {}", e)))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| Error::malformed(endpoint, format!("invalid JSON body: {}", e)))
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Value, Error> {
        let url = self.url(endpoint);
        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }
        let response = builder
            .send()
            .map_err(|e| Error::transport(endpoint, e.to_string()))?;
        self.handle_response(method, endpoint, response)
    }

    fn upload(&self, endpoint: &str, file_path: &Path) -> Result<Value, Error> {
        let form = reqwest::blocking::multipart::Form::new()
            .file("file", file_path)
            .map_err(|e| Error::io_msg(format!("cannot read {}: {}", file_path.display(), e)))?;
        let response = self
            .client
            .post(self.url(endpoint))
            .multipart(form)
            .send()
            .map_err(|e| Error::transport(endpoint, e.to_string()))?;
        self.handle_response(Method::Post, endpoint, response)
    }
}
