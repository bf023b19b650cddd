use crate::{
    api::{ApiClient, Role, UserResponse},
    components::guard::HasRole,
    components::layout::Layout,
    state::auth::use_auth,
};
use leptos::*;

pub fn greeting(user: Option<&UserResponse>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}!", user.display_name()),
        None => "Welcome!".to_string(),
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let client = store_value(api);

    let review_count = create_resource(
        || (),
        move |_| {
            let api = client.get_value();
            async move { api.review_count().await.unwrap_or(0) }
        },
    );
    let flight_count = create_resource(
        || (),
        move |_| {
            let api = client.get_value();
            async move { api.flight_count().await.unwrap_or(0) }
        },
    );
    let company_count = create_resource(
        || (),
        move |_| {
            let api = client.get_value();
            async move { api.company_count().await.unwrap_or(0) }
        },
    );

    let count_or_dash = move |resource: Resource<(), i64>| {
        resource
            .get()
            .map(|count| count.to_string())
            .unwrap_or_else(|| "–".to_string())
    };

    view! {
        <Layout>
            <div class="px-4">
                <h2 class="text-2xl font-semibold text-slate-900">
                    {move || greeting(auth.get().user.as_ref())}
                </h2>
                <p class="mt-1 text-slate-500">
                    "Browse flights, share your experience, and read what other travellers say."
                </p>

                <div class="mt-6 grid grid-cols-1 sm:grid-cols-3 gap-4">
                    <div class="bg-white rounded-lg shadow p-6 text-center">
                        <p class="text-3xl font-semibold text-sky-600">
                            {move || count_or_dash(review_count)}
                        </p>
                        <p class="mt-1 text-sm text-slate-500">"Reviews"</p>
                    </div>
                    <div class="bg-white rounded-lg shadow p-6 text-center">
                        <p class="text-3xl font-semibold text-sky-600">
                            {move || count_or_dash(flight_count)}
                        </p>
                        <p class="mt-1 text-sm text-slate-500">"Flights"</p>
                    </div>
                    <div class="bg-white rounded-lg shadow p-6 text-center">
                        <p class="text-3xl font-semibold text-sky-600">
                            {move || count_or_dash(company_count)}
                        </p>
                        <p class="mt-1 text-sm text-slate-500">"Airlines"</p>
                    </div>
                </div>

                <div class="mt-8 grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <a href="/make-review" class="block bg-white rounded-lg shadow p-6 hover:shadow-md">
                        <h3 class="font-medium text-slate-900">"Write a review"</h3>
                        <p class="mt-1 text-sm text-slate-500">"Pick a flight and rate your trip."</p>
                    </a>
                    <a href="/reviews" class="block bg-white rounded-lg shadow p-6 hover:shadow-md">
                        <h3 class="font-medium text-slate-900">"Read reviews"</h3>
                        <p class="mt-1 text-sm text-slate-500">"Published traveller feedback."</p>
                    </a>
                </div>

                <HasRole roles=vec![Role::Admin]>
                    {move || view! {
                        <div class="mt-8">
                            <h3 class="text-lg font-medium text-slate-900">"Administration"</h3>
                            <div class="mt-3 grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <a href="/admin/reviews" class="block bg-white rounded-lg shadow p-6 hover:shadow-md">
                                    <h3 class="font-medium text-slate-900">"Moderate reviews"</h3>
                                    <p class="mt-1 text-sm text-slate-500">"Publish or reject pending reviews."</p>
                                </a>
                                <a href="/admin/flights" class="block bg-white rounded-lg shadow p-6 hover:shadow-md">
                                    <h3 class="font-medium text-slate-900">"Manage flights"</h3>
                                    <p class="mt-1 text-sm text-slate-500">"Create, edit, and remove flights."</p>
                                </a>
                            </div>
                        </div>
                    }}
                </HasRole>
            </div>
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn landing_greets_the_signed_in_user() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! { <LandingPage /> }
        });
        assert!(html.contains("Welcome back"));
        assert!(!html.contains("Moderate reviews"));
    }

    #[test]
    fn landing_shows_admin_cards_to_admins() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <LandingPage /> }
        });
        assert!(html.contains("Moderate reviews"));
        assert!(html.contains("Manage flights"));
    }
}
