//! Backend API Client
//!
//! HTTP bindings to the placement backend, organized by domain. Every call
//! carries the session's bearer token, races a fixed timeout, and funnels
//! 401s through one place.

mod tpo;
mod drive;
mod student;
mod scheduler;
mod resume;
mod alumni;
mod upload;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{self, Either};
use gloo_timers::future::TimeoutFuture;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::{extract_detail, ApiError};
use crate::session::SessionStore;

pub use resume::TemplateUpload;
pub use upload::{is_pdf_name, read_file, FileUpload};

/// Characters left as-is in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Invoked after a 401 has cleared the stored session
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    session: SessionStore,
    on_unauthorized: UnauthorizedHook,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: SessionStore, on_unauthorized: UnauthorizedHook) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            timeout: config.request_timeout,
            session,
            on_unauthorized,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// College of the signed-in TPO, empty when signed out
    pub fn college_id(&self) -> String {
        self.session.college_id().unwrap_or_default()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        log::debug!("[API] {} {}", method, path);
        let req = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let resp = with_timeout(req.send(), self.timeout).await??;
        let status = resp.status().as_u16();
        let body = with_timeout(resp.text(), self.timeout).await??;
        self.check_status(status, &body)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Map a response status to the error taxonomy.
    ///
    /// 401 clears the session and fires the hook before returning, so callers
    /// only ever see `Unauthorized` after the app has already moved to login.
    pub(crate) fn check_status(&self, status: u16, body: &str) -> Result<(), ApiError> {
        if status == 401 {
            log::warn!("[API] 401 received, signing out");
            self.session.clear();
            (self.on_unauthorized)();
            return Err(ApiError::Unauthorized);
        }
        if !(200..300).contains(&status) {
            let detail = extract_detail(body);
            log::warn!("[API] {} {}", status, detail.as_deref().unwrap_or(""));
            return Err(ApiError::Server { status, detail });
        }
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::PUT, path)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::DELETE, path)).await
    }

    async fn post_file<T: DeserializeOwned>(&self, path: &str, file: FileUpload) -> Result<T, ApiError> {
        let form = file.into_form()?;
        self.send(self.request(Method::POST, path).multipart(form)).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Percent-encode an id for use as one path segment
pub(crate) fn segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

async fn with_timeout<F: Future>(fut: F, timeout: Duration) -> Result<F::Output, ApiError> {
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    let sleep = TimeoutFuture::new(millis);
    futures::pin_mut!(fut);
    futures::pin_mut!(sleep);
    match future::select(fut, sleep).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::session::Session;

    fn client_with_counter() -> (ApiClient, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let session = SessionStore::in_memory();
        session.save(&Session {
            token: "jwt".into(),
            college_id: "C001".into(),
            name: "Asha".into(),
        });
        let client = ApiClient::new(
            &AppConfig::default(),
            session,
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        (client, hits)
    }

    #[test]
    fn test_unauthorized_clears_session_and_notifies() {
        let (client, hits) = client_with_counter();
        let err = client.check_status(401, r#"{"detail":"Could not validate credentials"}"#).unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(client.session().load(), None);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_other_failures_keep_session() {
        let (client, hits) = client_with_counter();
        match client.check_status(404, r#"{"detail":"Drive not found"}"#) {
            Err(ApiError::Server { status, detail }) => {
                assert_eq!(status, 404);
                assert_eq!(detail.as_deref(), Some("Drive not found"));
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(client.session().load().is_some());
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_success_statuses() {
        let (client, _) = client_with_counter();
        assert!(client.check_status(200, "{}").is_ok());
        assert!(client.check_status(204, "").is_ok());
        assert_eq!(client.college_id(), "C001");
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("65f0c0ffee"), "65f0c0ffee");
        assert_eq!(segment("4NM21 CS/001"), "4NM21%20CS%2F001");
        assert_eq!(segment("a-b_c.d~e"), "a-b_c.d~e");
    }
}
