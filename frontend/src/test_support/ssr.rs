use leptos::*;

/// Runs a test body inside a throwaway reactive runtime. Resource loading
/// is suppressed for the duration so host tests never reach the network.
pub fn with_runtime<T>(body: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    leptos_reactive::suppress_resource_load(true);
    let value = body();
    leptos_reactive::suppress_resource_load(false);
    runtime.dispose();
    value
}

/// Renders a page or component to its SSR string. Resource loading is
/// suppressed for the duration so view tests never reach the network.
pub fn render_to_string<F, N>(build: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(move || {
        leptos_reactive::suppress_resource_load(true);
        let html = build().into_view().render_to_string().to_string();
        leptos_reactive::suppress_resource_load(false);
        html
    })
}
