#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, UserResponse};
    use crate::state::auth::AuthState;
    use crate::utils::storage;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use chrono::Utc;
    use leptos::*;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Martin".into(),
            email: "ada@example.com".into(),
            role: Role::Admin,
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: 2,
            first_name: "Jean".into(),
            last_name: "Dupont".into(),
            email: "jean@example.com".into(),
            role: Role::User,
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let is_authenticated = user.is_some();
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    /// Builds a structurally valid JWT whose payload carries only `exp`.
    /// The signature is junk; only the middle segment is ever decoded.
    pub fn token_with_exp(exp: i64) -> String {
        let payload = URL_SAFE_NO_PAD.encode(format!("{{\"exp\":{}}}", exp));
        format!("header.{}.sig", payload)
    }

    pub fn fresh_token() -> String {
        token_with_exp(Utc::now().timestamp() + 3_600)
    }

    pub fn expired_token() -> String {
        token_with_exp(Utc::now().timestamp() - 3_600)
    }

    pub fn seed_session(token: &str, user: &UserResponse) {
        storage::set_item(storage::TOKEN_KEY, token).unwrap();
        let user_json = serde_json::to_string(user).unwrap();
        storage::set_item(storage::USER_KEY, &user_json).unwrap();
    }
}
