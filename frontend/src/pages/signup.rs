use crate::api::{ApiClient, ApiError, RegisterRequest};
use leptos::*;

const PASSWORD_MIN_LEN: usize = 6;

#[derive(Clone, Copy)]
pub struct SignupFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl SignupFormState {
    pub fn to_payload(self) -> Result<RegisterRequest, ApiError> {
        let first_name = self.first_name.get().trim().to_string();
        let last_name = self.last_name.get().trim().to_string();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(ApiError::validation("Enter your first and last name."));
        }
        let email = self.email.get().trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::validation("Enter a valid email address."));
        }
        let password = self.password.get();
        if password.chars().count() < PASSWORD_MIN_LEN {
            return Err(ApiError::validation(format!(
                "Passwords must be at least {} characters long.",
                PASSWORD_MIN_LEN
            )));
        }
        Ok(RegisterRequest {
            first_name,
            last_name,
            email,
            password,
        })
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let form = SignupFormState::default();
    let error = create_rw_signal(None::<ApiError>);

    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let client = store_value(api);
    let register_action = create_action(move |payload: &RegisterRequest| {
        let api = client.get_value();
        let payload = payload.clone();
        async move { api.register(payload).await }
    });
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match form.to_payload() {
            Ok(payload) => {
                error.set(None);
                register_action.dispatch(payload);
            }
            Err(err) => error.set(Some(err)),
        }
    };

    view! {
        <div class="min-h-screen bg-slate-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-semibold text-slate-900 text-center">"Create your account"</h1>
                <Show when=move || error.get().is_some()>
                    <div class="mt-4 bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded text-sm">
                        {move || error.get().map(|err| err.to_string()).unwrap_or_default()}
                    </div>
                </Show>
                <form class="mt-6 space-y-4" on:submit=on_submit>
                    <div class="grid grid-cols-2 gap-3">
                        <div>
                            <label class="block text-sm font-medium text-slate-700" for="first-name">"First name"</label>
                            <input
                                id="first-name"
                                class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                                prop:value=move || form.first_name.get()
                                on:input=move |ev| form.first_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-slate-700" for="last-name">"Last name"</label>
                            <input
                                id="last-name"
                                class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                                prop:value=move || form.last_name.get()
                                on:input=move |ev| form.last_name.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700" for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                            prop:value=move || form.email.get()
                            on:input=move |ev| form.email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-700" for="password">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            class="mt-1 block w-full rounded-md border border-slate-300 px-3 py-2"
                            prop:value=move || form.password.get()
                            on:input=move |ev| form.password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full py-2 px-4 rounded-md bg-sky-600 text-white font-medium hover:bg-sky-700 disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Creating..." } else { "Create account" }}
                    </button>
                </form>
                <p class="mt-4 text-sm text-center text-slate-500">
                    "Already registered? "
                    <a href="/login" class="text-sky-600 hover:underline">"Sign in"</a>
                </p>
            </div>
        </div>
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

    fn filled_form() -> SignupFormState {
        let form = SignupFormState::default();
        form.first_name.set("Jean".into());
        form.last_name.set("Dupont".into());
        form.email.set("jean@example.com".into());
        form.password.set("secret1".into());
        form
    }

    #[test]
    fn accepts_a_complete_form() {
        with_runtime(|| {
            let payload = filled_form().to_payload().unwrap();
            assert_eq!(payload.first_name, "Jean");
            assert_eq!(payload.email, "jean@example.com");
        });
    }

    #[test]
    fn rejects_blank_names() {
        with_runtime(|| {
            let form = filled_form();
            form.last_name.set("   ".into());
            assert!(form.to_payload().unwrap_err().is_validation());
        });
    }

    #[test]
    fn rejects_short_password() {
        with_runtime(|| {
            let form = filled_form();
            form.password.set("abc".into());
            assert!(form.to_payload().unwrap_err().is_validation());
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_registration_form() {
        let html = render_to_string(move || view! { <SignupPage /> });
        assert!(html.contains("Create account"));
        assert!(html.contains("First name"));
    }
}
