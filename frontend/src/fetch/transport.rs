use std::time::Duration;

use gloo_net::http::Request;
use thiserror::Error;

/// Why a single fetch attempt failed.
///
/// The UI only ever sees the flattened `Display` text, the variants exist so
/// the retry loop can log what went wrong.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },
    #[error("Invalid response format: {0}")]
    Shape(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outbound HTTP capability. The browser implementation goes through
/// `gloo-net`; tests plug in scripted responses.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, FetchError>;
}

#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

#[derive(Clone, Copy, Default)]
pub struct BrowserTransport;

impl BrowserTransport {
    async fn read(response: gloo_net::http::Response) -> Result<HttpResponse, FetchError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Self::read(response).await
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, FetchError> {
        let response = Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Self::read(response).await
    }
}

#[derive(Clone, Copy, Default)]
pub struct TimerSleeper;

impl Sleeper for TimerSleeper {
    async fn sleep(&self, duration: Duration) {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays a fixed script of responses and records every requested URL.
    #[derive(Default)]
    pub struct ScriptedTransport {
        script: RefCell<VecDeque<Result<HttpResponse, FetchError>>>,
        pub requests: RefCell<Vec<String>>,
        pub bodies: RefCell<Vec<String>>,
    }

    impl ScriptedTransport {
        pub fn new(script: Vec<Result<HttpResponse, FetchError>>) -> Self {
            Self {
                script: RefCell::new(script.into()),
                ..Default::default()
            }
        }

        pub fn respond(status: u16, body: &str) -> Result<HttpResponse, FetchError> {
            Ok(HttpResponse { status, body: body.to_string() })
        }

        pub fn calls(&self) -> usize {
            self.requests.borrow().len()
        }

        fn next(&self, url: &str) -> Result<HttpResponse, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.script
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Transport("script exhausted".to_string())))
        }
    }

    impl Transport for ScriptedTransport {
        async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
            self.next(url)
        }

        async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, FetchError> {
            self.bodies.borrow_mut().push(body);
            self.next(url)
        }
    }

    /// Records requested delays instead of waiting.
    #[derive(Default)]
    pub struct RecordingSleeper {
        pub delays: RefCell<Vec<Duration>>,
    }

    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.delays.borrow_mut().push(duration);
        }
    }
}
