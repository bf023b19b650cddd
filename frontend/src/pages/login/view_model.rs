use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    let form_copy = form;
    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form_copy.reset();
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/landing");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

impl LoginViewModel {
    /// Validation failures stay local; the action is only dispatched with a
    /// well-formed payload.
    pub fn submit(&self) {
        match self.form.to_payload() {
            Ok(payload) => {
                self.error.set(None);
                self.login_action.dispatch(payload);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.email.get().is_empty());
        });
    }

    #[test]
    fn submit_with_invalid_form_sets_local_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.submit();
            let err = vm.error.get().unwrap();
            assert!(err.is_validation());
            // Nothing was dispatched.
            assert!(vm.login_action.value().get().is_none());
        });
    }
}
