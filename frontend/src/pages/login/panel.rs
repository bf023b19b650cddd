use super::view_model::use_login_view_model;
use leptos::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;
    let error = vm.error;
    let pending = vm.login_action.pending();

    let vm_submit = vm.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        vm_submit.submit();
    };

    view! {
        <div class="min-h-screen bg-slate-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-semibold text-slate-900 text-center">"Avis de Vol"</h1>
                <p class="mt-1 text-sm text-slate-500 text-center">"Sign in to your account"</p>
                <Show when=move || error.get().is_some()>
                    <div class="mt-4 bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded text-sm">
                        {move || error.get().map(|err| err.to_string()).unwrap_or_default()}
                    </div>
                </Show>
                <form class="mt-6 space-y-4" on:submit=on_submit>
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
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="mt-4 text-sm text-center text-slate-500">
                    "No account yet? "
                    <a href="/signup" class="text-sky-600 hover:underline">"Create one"</a>
                </p>
            </div>
        </div>
    }
}
