//! Scripted collaborators and log capture shared by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Once;

use futures::channel::oneshot;

use crate::backend::{AuthBackend, Navigator, UserLookup};
use crate::error::BackendError;
use crate::manager::{SessionConfig, SessionManager};
use crate::state::User;

// =============================================================================
// Fixtures
// =============================================================================

pub(crate) fn user(id: &str, email: &str, name: &str) -> User {
    User {
        id: id.to_owned(),
        email: email.to_owned(),
        display_name: name.to_owned(),
        avatar_url: None,
        email_verified: true,
    }
}

pub(crate) fn alice() -> User {
    user("u1", "a@b.com", "A")
}

pub(crate) fn test_config() -> SessionConfig {
    SessionConfig {
        login_return_to: "https://app.test/auth/callback".to_owned(),
        logout_return_to: "https://app.test/login".to_owned(),
    }
}

pub(crate) fn manager_with(backend: &Rc<MockBackend>, navigator: &Rc<RecordingNavigator>) -> SessionManager {
    SessionManager::new(backend.clone(), navigator.clone(), test_config())
}

// =============================================================================
// MockBackend
// =============================================================================

/// A response that is either available immediately or released later.
pub(crate) enum Scripted<T> {
    Ready(T),
    Held(oneshot::Receiver<T>),
}

type Lookup = Result<UserLookup, BackendError>;

#[derive(Default)]
pub(crate) struct MockBackend {
    lookups: RefCell<VecDeque<Scripted<Lookup>>>,
    logins: RefCell<VecDeque<Result<String, BackendError>>>,
    logouts: RefCell<VecDeque<Result<Option<String>, BackendError>>>,
    pub(crate) lookup_calls: Cell<usize>,
    pub(crate) login_calls: Cell<usize>,
    pub(crate) logout_calls: Cell<usize>,
    pub(crate) return_tos: RefCell<Vec<String>>,
}

impl MockBackend {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn push_lookup(&self, result: Lookup) {
        self.lookups.borrow_mut().push_back(Scripted::Ready(result));
    }

    pub(crate) fn push_user(&self, user: User) {
        self.push_lookup(Ok(UserLookup::Authenticated(user)));
    }

    pub(crate) fn push_unauthenticated(&self) {
        self.push_lookup(Ok(UserLookup::Unauthenticated));
    }

    pub(crate) fn push_transport_error(&self) {
        self.push_lookup(Err(BackendError::Transport("connection refused".to_owned())));
    }

    /// Queue a lookup that stays pending until the returned sender fires.
    pub(crate) fn hold_lookup(&self) -> oneshot::Sender<Lookup> {
        let (tx, rx) = oneshot::channel();
        self.lookups.borrow_mut().push_back(Scripted::Held(rx));
        tx
    }

    pub(crate) fn push_login(&self, result: Result<String, BackendError>) {
        self.logins.borrow_mut().push_back(result);
    }

    pub(crate) fn push_logout(&self, result: Result<Option<String>, BackendError>) {
        self.logouts.borrow_mut().push_back(result);
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for MockBackend {
    async fn current_user(&self) -> Result<UserLookup, BackendError> {
        self.lookup_calls.set(self.lookup_calls.get() + 1);
        let next = self.lookups.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Held(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(BackendError::Transport("held lookup dropped".to_owned()))),
            None => Ok(UserLookup::Unauthenticated),
        }
    }

    async fn begin_login(&self, return_to: &str) -> Result<String, BackendError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.return_tos.borrow_mut().push(return_to.to_owned());
        let next = self.logins.borrow_mut().pop_front();
        next.unwrap_or(Err(BackendError::Rejected("login")))
    }

    async fn end_session(&self, return_to: &str) -> Result<Option<String>, BackendError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.return_tos.borrow_mut().push(return_to.to_owned());
        let next = self.logouts.borrow_mut().pop_front();
        next.unwrap_or(Ok(None))
    }
}

// =============================================================================
// RecordingNavigator
// =============================================================================

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub(crate) fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visited.borrow_mut().push(url.to_owned());
    }
}

// =============================================================================
// Log capture
// =============================================================================
//
// `log` allows one global logger per process. Records are kept per thread so
// tests running in parallel do not see each other's output.

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        RECORDS.with(|records| records.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Install the capturing logger (once) and clear this thread's records.
pub(crate) fn capture_logs() {
    INSTALL.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Number of error-level records on this thread starting with `tag`.
pub(crate) fn errors_tagged(tag: &str) -> usize {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, message)| *level == log::Level::Error && message.starts_with(tag))
            .count()
    })
}

/// Number of error-level records on this thread.
pub(crate) fn error_count() -> usize {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, _)| *level == log::Level::Error)
            .count()
    })
}
