use crate::{
    api::Role,
    components::guard::HasRole,
    components::notify::Snackbar,
    state::auth::{self, use_auth},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let is_authenticated = move || auth.get().is_authenticated;
    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.display_name())
            .unwrap_or_default()
    };
    let on_logout = move |_| {
        auth::logout(set_auth);
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };
    view! {
        <header class="bg-white shadow-sm border-b border-slate-200">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-slate-900">
                        <a href="/landing">"Avis de Vol"</a>
                    </h1>
                    <nav class="flex items-center space-x-4">
                        <Show when=is_authenticated fallback=move || view! {
                            <a href="/reviews" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                "Reviews"
                            </a>
                            <a href="/login" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                "Log in"
                            </a>
                        }>
                            <a href="/flights" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                "Flights"
                            </a>
                            <a href="/make-review" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                "Write a review"
                            </a>
                            <a href="/reviews" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                "Reviews"
                            </a>
                            <HasRole roles=vec![Role::Admin]>
                                {move || view! {
                                    <a href="/admin" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                        "Admin"
                                    </a>
                                    <a href="/admin/reviews" class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium">
                                        "Moderation"
                                    </a>
                                }}
                            </HasRole>
                            <span class="text-sm text-slate-500">{user_name}</span>
                            <button
                                on:click=on_logout
                                class="text-slate-600 hover:text-slate-900 px-3 py-2 rounded-md text-sm font-medium"
                            >
                                "Log out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50">
            <Header/>
            <Snackbar/>
            <main class="max-w-6xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 py-4 text-center text-sm text-slate-400">
            "Avis de Vol, share your flight experience"
        </footer>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-sky-600"></div>
        </div>
    }
}
