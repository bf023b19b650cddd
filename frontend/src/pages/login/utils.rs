use crate::api::{ApiError, LoginRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn reset(&self) {
        self.email.set(String::new());
        self.password.set(String::new());
    }

    pub fn to_payload(self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get().trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::validation("Enter a valid email address."));
        }
        let password = self.password.get();
        if password.is_empty() {
            return Err(ApiError::validation("Enter your password."));
        }
        Ok(LoginRequest { email, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn rejects_missing_or_malformed_email() {
        with_runtime(|| {
            let form = LoginFormState::default();
            form.password.set("secret".into());
            assert!(form.to_payload().unwrap_err().is_validation());

            form.email.set("not-an-email".into());
            assert!(form.to_payload().unwrap_err().is_validation());
        });
    }

    #[test]
    fn builds_payload_from_trimmed_email() {
        with_runtime(|| {
            let form = LoginFormState::default();
            form.email.set("  jean@example.com ".into());
            form.password.set("secret".into());
            let payload = form.to_payload().unwrap();
            assert_eq!(payload.email, "jean@example.com");
        });
    }
}
