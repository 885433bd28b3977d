use std::cell::Cell;
use std::future::Future;

use log::{error, info, warn};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::endpoints::Endpoint;
use super::retry::RetryPolicy;
use super::transport::{FetchError, Sleeper, Transport};

/// Final outcome of a collection fetch that ran out of attempts.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Failed to load {label}: {cause}")]
pub struct CollectionError {
    pub label: &'static str,
    pub attempts: u32,
    #[source]
    pub cause: FetchError,
}

/// What a component renders for one collection. Exactly one of the three
/// situations holds at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Vec<T>,
}

impl<T> FetchState<T> {
    pub fn loading() -> Self {
        Self { loading: true, error: None, data: Vec::new() }
    }

    pub fn loaded(data: Vec<T>) -> Self {
        Self { loading: false, error: None, data }
    }

    pub fn failed(message: String) -> Self {
        Self { loading: false, error: Some(message), data: Vec::new() }
    }
}

impl<T> From<Result<Vec<T>, CollectionError>> for FetchState<T> {
    fn from(result: Result<Vec<T>, CollectionError>) -> Self {
        match result {
            Ok(data) => FetchState::loaded(data),
            Err(e) => FetchState::failed(e.to_string()),
        }
    }
}

async fn attempt<R, C>(transport: &C, url: &str, endpoint: &Endpoint) -> Result<Vec<R>, FetchError>
where
    R: DeserializeOwned,
    C: Transport,
{
    let response = transport.get(url).await?;
    if !response.ok() {
        return Err(FetchError::Http { status: response.status });
    }
    endpoint.envelope.unwrap_data(&response.body)
}

/// Read one collection endpoint, retrying transient failures with backoff,
/// and map every raw record into the shape the page renders.
///
/// All-or-nothing: either every record of one successful response is mapped,
/// or the last failure is reported.
pub async fn fetch_collection<R, T, C, S, F>(
    transport: &C,
    sleeper: &S,
    policy: &RetryPolicy,
    base_url: &str,
    endpoint: &Endpoint,
    map: F,
) -> Result<Vec<T>, CollectionError>
where
    R: DeserializeOwned,
    C: Transport,
    S: Sleeper,
    F: Fn(R) -> T,
{
    let url = format!("{}{}", base_url, endpoint.path);
    let mut attempt_no = 0;

    loop {
        match attempt::<R, C>(transport, &url, endpoint).await {
            Ok(records) => {
                info!("Loaded {} {} after {} attempt(s)", records.len(), endpoint.label, attempt_no + 1);
                return Ok(records.into_iter().map(&map).collect());
            }
            Err(cause) if policy.should_retry(attempt_no) => {
                let delay = policy.backoff(attempt_no);
                warn!(
                    "Fetching {} failed (attempt {}/{}): {}, retrying in {:?}",
                    endpoint.label,
                    attempt_no + 1,
                    policy.max_attempts,
                    cause,
                    delay
                );
                sleeper.sleep(delay).await;
                attempt_no += 1;
            }
            Err(cause) => {
                error!("Giving up on {} after {} attempt(s): {}", endpoint.label, attempt_no + 1, cause);
                return Err(CollectionError {
                    label: endpoint.label,
                    attempts: attempt_no + 1,
                    cause,
                });
            }
        }
    }
}

/// Await `load` and hand its outcome to `commit`, unless `alive` was cleared
/// while the request was in flight. Returns whether anything was committed.
pub async fn commit_while_alive<T, L, K>(alive: &Cell<bool>, label: &str, load: L, commit: K) -> bool
where
    L: Future<Output = Result<Vec<T>, CollectionError>>,
    K: FnOnce(FetchState<T>),
{
    let result = load.await;
    if !alive.get() {
        info!("Dropping {} response, component unmounted", label);
        return false;
    }
    commit(result.into());
    true
}
