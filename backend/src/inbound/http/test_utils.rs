//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::{Cookie, Key};
use actix_web::test as actix_test;

use crate::domain::ports::{
    MockDashboardQuery, MockExpensesCommand, MockExpensesQuery, MockLoginService,
    MockRecommendationsCommand, MockRecommendationsQuery, MockTripsCommand, MockTripsQuery,
    MockUserOnboarding,
};
use crate::domain::UserId;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::CredentialsBody;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Build an `HttpState` where every port is an expectation-free mock; any
/// call a test did not explicitly stub panics.
pub fn mock_state() -> HttpState {
    HttpState {
        login: Arc::new(MockLoginService::new()),
        onboarding: Arc::new(MockUserOnboarding::new()),
        trips: Arc::new(MockTripsCommand::new()),
        trips_query: Arc::new(MockTripsQuery::new()),
        expenses: Arc::new(MockExpensesCommand::new()),
        expenses_query: Arc::new(MockExpensesQuery::new()),
        recommendations: Arc::new(MockRecommendationsCommand::new()),
        recommendations_query: Arc::new(MockRecommendationsQuery::new()),
        dashboard: Arc::new(MockDashboardQuery::new()),
    }
}

/// Build a mock state whose login service accepts any credentials and
/// authenticates as `user_id`.
pub fn mock_state_logged_in_as(user_id: UserId) -> HttpState {
    let mut login = MockLoginService::new();
    login.expect_authenticate().returning(move |_| Ok(user_id));

    let mut state = mock_state();
    state.login = Arc::new(login);
    state
}

/// Log in through the wired `users::login` handler and return the session
/// cookie. The app must carry a login service that accepts the fixture
/// credentials.
pub async fn login_and_get_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> Cookie<'static> {
    let login_req = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(CredentialsBody {
            email: "ada@example.com".to_owned(),
            password: "hunter2".to_owned(),
        })
        .to_request();
    let login_res = actix_test::call_service(app, login_req).await;
    assert!(login_res.status().is_success());
    login_res
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}
