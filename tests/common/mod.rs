//! Recording collaborators shared by the holder integration tests.
//!
//! Every double appends to one [`CallLog`], so a test can assert on the
//! relative order of calls made to different objects.

#![allow(dead_code)]

use brrtrouter_holder::{BaseRequest, ServiceError, Servlet};
use parking_lot::Mutex;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetAsyncSupported {
        enabled: bool,
        cause: Option<String>,
    },
    Service {
        request: u32,
        response: u32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: Call) {
        self.0.lock().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().clone()
    }

    pub fn service_calls(&self) -> usize {
        self.0
            .lock()
            .iter()
            .filter(|c| matches!(c, Call::Service { .. }))
            .count()
    }

    pub fn async_calls(&self) -> usize {
        self.0
            .lock()
            .iter()
            .filter(|c| matches!(c, Call::SetAsyncSupported { .. }))
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockRequest {
    pub id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockResponse {
    pub id: u32,
}

/// What [`MockServlet`] does after recording a `service` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Succeed,
    Eof,
    Io(io::ErrorKind),
    Unexpected(&'static str),
}

pub struct MockServlet {
    log: CallLog,
    outcome: Mutex<Outcome>,
    pub inits: AtomicUsize,
}

impl MockServlet {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            outcome: Mutex::new(Outcome::Succeed),
            inits: AtomicUsize::new(0),
        }
    }

    pub fn failing_with(log: &CallLog, outcome: Outcome) -> Self {
        let servlet = Self::new(log);
        servlet.set_outcome(outcome);
        servlet
    }

    pub fn set_outcome(&self, outcome: Outcome) {
        *self.outcome.lock() = outcome;
    }

    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }
}

impl Servlet for MockServlet {
    type Request = MockRequest;
    type Response = MockResponse;

    fn service(
        &self,
        request: &mut MockRequest,
        response: &mut MockResponse,
    ) -> Result<(), ServiceError> {
        self.log.push(Call::Service {
            request: request.id,
            response: response.id,
        });
        let outcome = *self.outcome.lock();
        match outcome {
            Outcome::Succeed => Ok(()),
            Outcome::Eof => Err(ServiceError::eof()),
            Outcome::Io(kind) => Err(io::Error::new(kind, "mock io failure").into()),
            Outcome::Unexpected(msg) => Err(anyhow::anyhow!(msg).into()),
        }
    }

    fn init(&self) -> Result<(), ServiceError> {
        self.inits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

pub struct MockBaseRequest {
    log: CallLog,
}

impl MockBaseRequest {
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl BaseRequest for MockBaseRequest {
    fn set_async_supported(&mut self, enabled: bool, cause: Option<&str>) {
        self.log.push(Call::SetAsyncSupported {
            enabled,
            cause: cause.map(str::to_string),
        });
    }
}
