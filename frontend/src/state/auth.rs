use crate::{
    api::{client, ApiClient, ApiError, LoginRequest, Role, UserResponse},
    pages::login::repository as login_repository,
};
use chrono::Utc;
use leptos::*;

pub type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Single authorization predicate for guards and conditional rendering.
/// An empty `required` slice means any signed-in identity passes; roles are
/// matched exactly (an admin does not implicitly pass a `User` requirement).
pub fn is_allowed(role: Option<Role>, required: &[Role]) -> bool {
    match role {
        Some(role) => required.is_empty() || required.contains(&role),
        None => false,
    }
}

/// Rebuilds the session from `localStorage`. A missing, stale, or
/// undecodable token yields the logged-out state and wipes both keys, so a
/// restored expired session is indistinguishable from a fresh logout.
pub fn restore_session() -> AuthState {
    let token = match client::stored_token() {
        Some(token) => token,
        None => {
            client::clear_session();
            return AuthState::default();
        }
    };
    if !client::token_is_fresh(&token, Utc::now()) {
        client::clear_session();
        return AuthState::default();
    }
    match client::stored_user() {
        Some(user) => AuthState {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        },
        None => {
            client::clear_session();
            AuthState::default()
        }
    }
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(restore_session());

    // Refresh the cached profile from the backend; the locally restored
    // snapshot stays in place unless the token is actually rejected.
    #[cfg(target_arch = "wasm32")]
    if auth_state.get_untracked().is_authenticated {
        let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        spawn_local(async move {
            match api_client.get_me().await {
                Ok(user) => set_auth_state.update(|state| state.user = Some(user)),
                Err(err) if err.is_unauthorized() => {
                    set_auth_state.update(|state| {
                        state.user = None;
                        state.is_authenticated = false;
                    });
                }
                Err(_) => {}
            }
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &login_repository::LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            set_auth_state.update(|state| {
                state.user = Some(response.user);
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Purely local: wipes the persisted session and resets the identity signal.
/// Always succeeds and may be called any number of times.
pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    client::clear_session();
    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{expired_token, fresh_token, regular_user, seed_session};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn restore_recovers_a_fresh_persisted_session() {
        seed_session(&fresh_token(), &regular_user());
        let state = restore_session();
        assert!(state.is_authenticated);
        assert_eq!(state.role(), Some(Role::User));
        client::clear_session();
    }

    #[test]
    fn restoring_an_expired_session_equals_fresh_logout() {
        seed_session(&expired_token(), &regular_user());
        let state = restore_session();
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        // Storage is wiped as part of the restore.
        assert!(client::stored_token().is_none());
        assert!(client::stored_user().is_none());
    }

    #[test]
    fn restore_rejects_token_without_exp_claim() {
        seed_session("header.e30.sig", &regular_user());
        let state = restore_session();
        assert!(!state.is_authenticated);
    }

    #[test]
    fn logout_clears_storage_and_identity() {
        with_runtime(|| {
            seed_session(&fresh_token(), &regular_user());
            let (state, set_state) = create_signal(restore_session());
            assert!(state.get().is_authenticated);

            logout(set_state);
            assert!(!state.get().is_authenticated);
            assert!(state.get().user.is_none());
            assert!(client::stored_token().is_none());
            assert!(client::stored_user().is_none());

            // Idempotent.
            logout(set_state);
            assert!(!state.get().is_authenticated);
        });
    }

    #[tokio::test]
    async fn login_updates_auth_state_and_failure_leaves_it_alone() {
        use crate::api::test_support::mock::*;

        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/accounts/login");
            then.status(200).json_body(serde_json::json!({
                "token": fresh_token(),
                "type": "Bearer",
                "user": {
                    "id": 2,
                    "firstName": "Marie",
                    "lastName": "Curie",
                    "email": "marie@example.com",
                    "role": "USER"
                }
            }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let repo = login_repository::LoginRepository::new_with_client(std::rc::Rc::new(api));

        login_request(
            LoginRequest {
                email: "marie@example.com".into(),
                password: "secret".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.role(), Some(Role::User));

        // A failed login must not replace the active session.
        server.mock(|when, then| {
            when.method(POST).path("/api/accounts/login");
            then.status(401)
                .json_body(serde_json::json!({ "error": "Bad credentials" }));
        });
        let err = login_request(
            LoginRequest {
                email: "marie@example.com".into(),
                password: "wrong".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "Bad credentials");
        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert!(snapshot.user.is_some());

        client::clear_session();
        runtime.dispose();
    }
}
