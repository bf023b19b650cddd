use crate::api::ApiClient;
use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AdminPage() -> impl IntoView {
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
            <div class="px-4 max-w-4xl mx-auto">
                <h2 class="text-2xl font-semibold text-slate-900">"Administration"</h2>

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
                    <a href="/admin/reviews" class="block bg-white rounded-lg shadow p-6 hover:shadow-md">
                        <h3 class="font-medium text-slate-900">"Review moderation"</h3>
                        <p class="mt-1 text-sm text-slate-500">"Publish or reject pending reviews."</p>
                    </a>
                    <a href="/admin/flights" class="block bg-white rounded-lg shadow p-6 hover:shadow-md">
                        <h3 class="font-medium text-slate-900">"Flight manager"</h3>
                        <p class="mt-1 text-sm text-slate-500">"Create, edit, and remove flights."</p>
                    </a>
                </div>
            </div>
        </Layout>
    }
}
