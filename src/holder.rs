//! # Holder Module
//!
//! [`RequestDispatchHolder`] owns a reference to one [`Servlet`] and sits between
//! the server core and that servlet for every request.
//!
//! ## Dispatch
//!
//! ```text
//! handle(base, request, response)
//!   ├─ async disabled?  base.set_async_supported(false, None)
//!   ├─ servlet.service(request, response)
//!   └─ ClientDisconnect → Ok(())   anything else → Err(unchanged)
//! ```
//!
//! ## Eager initialization
//!
//! [`RequestDispatchHolder::init_order`] is always [`EAGER_INIT_ORDER`], telling
//! the owning server to ready this servlet at startup, ahead of lazily started
//! ones. The server does that by calling [`RequestDispatchHolder::initialize`].
//!
//! ## Sharing
//!
//! A holder is `Send + Sync` whenever its servlet is, so one instance can be
//! wrapped in an `Arc` and called from every worker coroutine. The async flag
//! is an atomic; it is meant to be set during setup, before traffic starts.

use crate::config::HolderConfig;
use crate::error::ServiceError;
use crate::request::BaseRequest;
use crate::servlet::Servlet;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, trace};

/// Init order reported by every holder: start immediately, first in line.
pub const EAGER_INIT_ORDER: i32 = 1;

/// Dispatch wrapper around a single [`Servlet`].
pub struct RequestDispatchHolder<S> {
    servlet: Arc<S>,
    async_supported: AtomicBool,
    initialized: AtomicBool,
    init_lock: Mutex<()>,
}

impl<S: Servlet> RequestDispatchHolder<S> {
    /// Wrap a shared servlet. Async dispatch starts enabled.
    pub fn new(servlet: Arc<S>) -> Self {
        debug!(
            servlet = %servlet.name(),
            init_order = EAGER_INIT_ORDER,
            "servlet holder created"
        );
        Self {
            servlet,
            async_supported: AtomicBool::new(true),
            initialized: AtomicBool::new(false),
            init_lock: Mutex::new(()),
        }
    }

    /// Wrap a servlet the caller does not need to keep a handle to.
    pub fn from_servlet(servlet: S) -> Self {
        Self::new(Arc::new(servlet))
    }

    /// Wrap a shared servlet and apply `config` before returning.
    pub fn with_config(servlet: Arc<S>, config: &HolderConfig) -> Self {
        let holder = Self::new(servlet);
        config.apply(&holder);
        holder
    }

    /// The servlet passed at construction (same allocation, not a copy).
    #[inline]
    #[must_use]
    pub fn servlet(&self) -> &Arc<S> {
        &self.servlet
    }

    #[inline]
    #[must_use]
    pub fn init_order(&self) -> i32 {
        EAGER_INIT_ORDER
    }

    pub fn set_async_supported(&self, supported: bool) {
        let previous = self.async_supported.swap(supported, Ordering::Release);
        if previous != supported {
            debug!(
                servlet = %self.servlet.name(),
                async_supported = supported,
                "servlet holder async support changed"
            );
        }
    }

    #[inline]
    #[must_use]
    pub fn is_async_supported(&self) -> bool {
        self.async_supported.load(Ordering::Acquire)
    }

    /// Run [`Servlet::init`] unless it has already succeeded for this holder.
    ///
    /// Concurrent callers are serialized; a failed init leaves the holder
    /// uninitialized so the server may retry.
    ///
    /// # Errors
    ///
    /// Whatever the servlet's `init` returns.
    pub fn initialize(&self) -> Result<(), ServiceError> {
        if self.initialized.load(Ordering::Acquire) {
            return Ok(());
        }
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.initialized.load(Ordering::Acquire) {
            return Ok(());
        }
        self.servlet.init()?;
        self.initialized.store(true, Ordering::Release);
        debug!(servlet = %self.servlet.name(), "servlet initialized");
        Ok(())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Dispatch one request to the servlet.
    ///
    /// When async support is off, `base` is told so before the servlet runs.
    /// When it is on, `base` is not touched at all.
    ///
    /// # Errors
    ///
    /// Any servlet failure other than [`ServiceError::ClientDisconnect`], as is.
    pub fn handle<B>(
        &self,
        base: &mut B,
        request: &mut S::Request,
        response: &mut S::Response,
    ) -> Result<(), ServiceError>
    where
        B: BaseRequest + ?Sized,
    {
        if !self.is_async_supported() {
            trace!(servlet = %self.servlet.name(), "disabling async for request");
            base.set_async_supported(false, None);
        }

        match self.servlet.service(request, response) {
            Err(err) if err.is_client_disconnect() => Ok(()),
            other => other,
        }
    }
}

impl<S: Servlet> fmt::Debug for RequestDispatchHolder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDispatchHolder")
            .field("servlet", &self.servlet.name())
            .field("init_order", &EAGER_INIT_ORDER)
            .field("async_supported", &self.is_async_supported())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
