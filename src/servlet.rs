//! # Servlet Module
//!
//! The [`Servlet`] trait is the processing unit a
//! [`RequestDispatchHolder`](crate::RequestDispatchHolder) wraps. It is the only
//! seam between the holder and application code, so tests substitute their own
//! implementations freely.
//!
//! Request and response types are chosen by the implementation: the holder
//! forwards both untouched and never inspects either one.
//!
//! ## Closures
//!
//! Most handlers do not need their own type. [`servlet_fn`] wraps a closure
//! the same way handler functions are registered with the dispatcher:
//!
//! ```rust
//! use brrtrouter_holder::{servlet_fn, Servlet};
//!
//! let hello = servlet_fn("hello", |_req: &mut String, resp: &mut Vec<u8>| {
//!     resp.extend_from_slice(b"hello");
//!     Ok(())
//! });
//!
//! let mut resp = Vec::new();
//! hello.service(&mut String::new(), &mut resp).unwrap();
//! assert_eq!(resp, b"hello");
//! assert_eq!(hello.name(), "hello");
//! ```

use crate::error::ServiceError;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A request processing unit.
///
/// Implementations must be safe to call from many worker coroutines at once;
/// the holder adds no synchronization around [`Servlet::service`].
pub trait Servlet: Send + Sync {
    /// Request view passed through by the holder
    type Request;
    /// Response view passed through by the holder
    type Response;

    /// Process one request, writing into `response`.
    ///
    /// # Errors
    ///
    /// Return [`ServiceError::ClientDisconnect`] when the peer hung up while the
    /// response was being written; the holder swallows that kind. Any other
    /// variant is handed back to the server unchanged.
    fn service(
        &self,
        request: &mut Self::Request,
        response: &mut Self::Response,
    ) -> Result<(), ServiceError>;

    /// One-time setup, run by [`RequestDispatchHolder::initialize`](crate::RequestDispatchHolder::initialize).
    fn init(&self) -> Result<(), ServiceError> {
        Ok(())
    }

    /// Name used in log events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<S> Servlet for Arc<S>
where
    S: Servlet + ?Sized,
{
    type Request = S::Request;
    type Response = S::Response;

    fn service(
        &self,
        request: &mut Self::Request,
        response: &mut Self::Response,
    ) -> Result<(), ServiceError> {
        (**self).service(request, response)
    }

    fn init(&self) -> Result<(), ServiceError> {
        (**self).init()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Closure-backed [`Servlet`]. Build one with [`servlet_fn`].
pub struct ServletFn<F, Req, Resp> {
    name: String,
    f: F,
    _views: PhantomData<fn(&mut Req, &mut Resp)>,
}

impl<F: Clone, Req, Resp> Clone for ServletFn<F, Req, Resp> {
    fn clone(&self) -> Self {
        ServletFn {
            name: self.name.clone(),
            f: self.f.clone(),
            _views: PhantomData,
        }
    }
}

impl<F, Req, Resp> fmt::Debug for ServletFn<F, Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServletFn").field("name", &self.name).finish()
    }
}

/// Wrap `f` as a named [`Servlet`].
pub fn servlet_fn<F, Req, Resp>(name: &str, f: F) -> ServletFn<F, Req, Resp>
where
    F: Fn(&mut Req, &mut Resp) -> Result<(), ServiceError> + Send + Sync,
{
    ServletFn {
        name: name.to_string(),
        f,
        _views: PhantomData,
    }
}

impl<F, Req, Resp> Servlet for ServletFn<F, Req, Resp>
where
    F: Fn(&mut Req, &mut Resp) -> Result<(), ServiceError> + Send + Sync,
{
    type Request = Req;
    type Response = Resp;

    #[inline]
    fn service(&self, request: &mut Req, response: &mut Resp) -> Result<(), ServiceError> {
        (self.f)(request, response)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
