use super::*;
use futures::executor::block_on;
use std::sync::atomic::{AtomicUsize, Ordering};

fn ada() -> User {
    User { id: "u1".to_owned(), name: "Ada".to_owned(), email: "ada@example.com".to_owned(), avatar_url: None }
}

struct FakeProvider {
    current: Result<Option<User>, AuthError>,
    sign_out_result: Result<(), AuthError>,
    sign_out_calls: AtomicUsize,
}

impl FakeProvider {
    fn new(current: Result<Option<User>, AuthError>) -> Self {
        Self { current, sign_out_result: Ok(()), sign_out_calls: AtomicUsize::new(0) }
    }
}

#[async_trait(?Send)]
impl AuthProvider for FakeProvider {
    async fn current_user(&self) -> Result<Option<User>, AuthError> {
        self.current.clone()
    }

    async fn sign_in(&self, request: &SignInRequest) -> Result<User, AuthError> {
        if request.password == "correct-horse" {
            Ok(ada())
        } else {
            Err(AuthError::Status { status: 401 })
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, AuthError> {
        Ok(User { name: request.name.clone(), email: request.email.clone(), ..ada() })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.sign_out_result.clone()
    }
}

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.set();
    f()
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_default_is_resolving() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn session_state_signed_in_is_authenticated() {
    let state = SessionState::signed_in(ada());
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

// =============================================================
// resolve_with_deadline / apply_resolution
// =============================================================

#[test]
fn resolve_with_deadline_returns_lookup_result() {
    let result = block_on(resolve_with_deadline(async { Ok(Some(ada())) }, future::pending(), 100));
    assert_eq!(result, Ok(Some(ada())));
}

#[test]
fn resolve_with_deadline_times_out_when_lookup_hangs() {
    let result = block_on(resolve_with_deadline(future::pending(), async {}, 250));
    assert_eq!(result, Err(AuthError::Timeout { after_ms: 250 }));
}

#[test]
fn apply_resolution_stores_user_and_ends_loading() {
    let mut state = SessionState::resolving();
    apply_resolution(&mut state, Ok(Some(ada())));
    assert_eq!(state, SessionState::signed_in(ada()));
}

#[test]
fn apply_resolution_error_means_signed_out() {
    let mut state = SessionState::signed_in(ada());
    state.loading = true;
    apply_resolution(&mut state, Err(AuthError::Timeout { after_ms: 10 }));
    assert_eq!(state, SessionState::signed_out());
}

// =============================================================
// Session handle
// =============================================================

#[test]
fn resolve_adopts_provider_user() {
    with_owner(|| {
        let session = Session::new(Arc::new(FakeProvider::new(Ok(Some(ada())))));
        assert!(session.state_untracked().loading);
        block_on(session.resolve(1_000));
        assert_eq!(session.state_untracked(), SessionState::signed_in(ada()));
    });
}

#[test]
fn resolve_failure_ends_loading_signed_out() {
    with_owner(|| {
        let session = Session::new(Arc::new(FakeProvider::new(Err(AuthError::Status { status: 500 }))));
        block_on(session.resolve(1_000));
        assert_eq!(session.state_untracked(), SessionState::signed_out());
    });
}

#[test]
fn sign_in_rejection_leaves_state_untouched() {
    with_owner(|| {
        let session = Session::new(Arc::new(FakeProvider::new(Ok(None))));
        block_on(session.resolve(1_000));
        let request = SignInRequest { email: "ada@example.com".to_owned(), password: "wrong".to_owned() };
        assert_eq!(block_on(session.sign_in(request)), Err(AuthError::Status { status: 401 }));
        assert_eq!(session.state_untracked(), SessionState::signed_out());
    });
}

#[test]
fn sign_in_success_authenticates() {
    with_owner(|| {
        let session = Session::new(Arc::new(FakeProvider::new(Ok(None))));
        block_on(session.resolve(1_000));
        let request = SignInRequest { email: "ada@example.com".to_owned(), password: "correct-horse".to_owned() };
        assert_eq!(block_on(session.sign_in(request)), Ok(()));
        assert!(session.state_untracked().is_authenticated());
    });
}

#[test]
fn register_success_adopts_new_user() {
    with_owner(|| {
        let session = Session::new(Arc::new(FakeProvider::new(Ok(None))));
        let request = RegisterRequest {
            name: "Grace".to_owned(),
            email: "grace@example.com".to_owned(),
            password: "correct-horse".to_owned(),
        };
        assert_eq!(block_on(session.register(request)), Ok(()));
        assert_eq!(session.state_untracked().user.map(|u| u.name), Some("Grace".to_owned()));
    });
}

#[test]
fn sign_out_failure_keeps_user() {
    with_owner(|| {
        let provider = FakeProvider {
            sign_out_result: Err(AuthError::Request("offline".to_owned())),
            ..FakeProvider::new(Ok(Some(ada())))
        };
        let session = Session::new(Arc::new(provider));
        block_on(session.resolve(1_000));
        assert!(block_on(session.sign_out()).is_err());
        assert!(session.state_untracked().is_authenticated());
    });
}

#[test]
fn sign_out_success_clears_user() {
    with_owner(|| {
        let provider = Arc::new(FakeProvider::new(Ok(Some(ada()))));
        let session = Session::new(provider.clone());
        block_on(session.resolve(1_000));
        assert_eq!(block_on(session.sign_out()), Ok(()));
        assert_eq!(session.state_untracked(), SessionState::signed_out());
        assert_eq!(provider.sign_out_calls.load(Ordering::SeqCst), 1);
    });
}
