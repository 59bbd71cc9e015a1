//! # BRRTRouter Holder
//!
//! Servlet-style dispatch holder for BRRTRouter services.
//!
//! ## Overview
//!
//! A [`RequestDispatchHolder`] wraps one [`Servlet`] and mediates every request
//! the server core hands to it:
//!
//! - reports an eager init order ([`EAGER_INIT_ORDER`]) so the servlet is
//!   readied at startup, and runs its [`Servlet::init`] hook once
//! - when async dispatch is disabled for the holder, clears the async flag on
//!   the [`BaseRequest`] before the servlet runs
//! - swallows client disconnects ([`ServiceError::ClientDisconnect`]) and
//!   returns every other failure unchanged
//!
//! ## Modules
//!
//! - **[`holder`]** - the dispatch holder
//! - **[`servlet`]** - the processing-unit trait and closure adapter
//! - **[`request`]** - base request capability and server-side request state
//! - **[`error`]** - failure taxonomy and write-error classification
//! - **[`config`]** - environment and YAML configuration
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ## Example
//!
//! ```rust
//! use brrtrouter_holder::{servlet_fn, RequestDispatchHolder, RequestState, ServiceError};
//! use http::Method;
//! use std::sync::Arc;
//!
//! let servlet = Arc::new(servlet_fn("greet", |name: &mut String, out: &mut String| {
//!     out.push_str("hello ");
//!     out.push_str(name);
//!     Ok(())
//! }));
//! let holder = RequestDispatchHolder::new(Arc::clone(&servlet));
//! holder.set_async_supported(false);
//!
//! let mut base = RequestState::new(Method::GET, "/greet");
//! let mut out = String::new();
//! holder.handle(&mut base, &mut "brrt".to_string(), &mut out)?;
//!
//! assert_eq!(out, "hello brrt");
//! assert!(!base.is_async_supported());
//! assert!(Arc::ptr_eq(holder.servlet(), &servlet));
//! # Ok::<(), ServiceError>(())
//! ```

pub mod config;
pub mod error;
pub mod holder;
pub mod logging;
pub mod request;
pub mod servlet;

pub use config::HolderConfig;
pub use error::{FailureKind, ServiceError};
pub use holder::{RequestDispatchHolder, EAGER_INIT_ORDER};
pub use request::{BaseRequest, RequestState};
pub use servlet::{servlet_fn, Servlet, ServletFn};
