//! Server-core side of a request: the handle the holder may reconfigure before
//! the servlet runs.

use http::Method;

/// Base request capability handed to
/// [`RequestDispatchHolder::handle`](crate::RequestDispatchHolder::handle).
///
/// The holder calls exactly one operation on it, and only when async dispatch
/// has been disabled for that holder.
pub trait BaseRequest {
    /// Toggle whether this request may suspend and resume asynchronously.
    ///
    /// `cause` names whatever made the change, when known.
    fn set_async_supported(&mut self, enabled: bool, cause: Option<&str>);
}

/// Per-request state kept by the server core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestState {
    pub method: Method,
    pub path: String,
    async_supported: bool,
    async_cause: Option<String>,
}

impl RequestState {
    /// New request state; async dispatch starts enabled.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            async_supported: true,
            async_cause: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_async_supported(&self) -> bool {
        self.async_supported
    }

    /// Cause recorded by the last [`BaseRequest::set_async_supported`] call.
    #[must_use]
    pub fn async_cause(&self) -> Option<&str> {
        self.async_cause.as_deref()
    }
}

impl BaseRequest for RequestState {
    fn set_async_supported(&mut self, enabled: bool, cause: Option<&str>) {
        self.async_supported = enabled;
        self.async_cause = cause.map(str::to_string);
    }
}
