use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    state::auth::{is_allowed, use_auth},
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| is_allowed(auth.get().role(), &[Role::Admin]));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if state.is_authenticated && is_allowed(state.role(), &[Role::Admin]) {
            return;
        }
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

/// Renders children only while the current identity satisfies one of the
/// given roles. Purely cosmetic; the backend stays authoritative.
#[component]
pub fn HasRole(roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let roles = store_value(roles);
    view! {
        <Show when=move || {
            let state = auth.get();
            state.is_authenticated && is_allowed(state.role(), &roles.get_value())
        }>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::{should_render_admin_children, should_render_children};

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn admin_guard_blocks_non_admins() {
        assert!(!should_render_admin_children(false, true, false));
        assert!(!should_render_admin_children(false, false, true));
        assert!(!should_render_admin_children(true, true, true));
        assert!(!should_render_admin_children(true, false, false));
        assert!(should_render_admin_children(true, false, true));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{HasRole, RequireAdmin, RequireAuth};
    use crate::api::Role;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, provide_auth, regular_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn provide_auth_state(is_authenticated: bool, loading: bool) {
        let (auth, set_auth) = create_signal(AuthState {
            user: if is_authenticated {
                Some(regular_user())
            } else {
                None
            },
            is_authenticated,
            loading,
        });
        provide_context((auth, set_auth));
    }

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth_state(true, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth_state(false, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_auth_state(false, true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn require_admin_renders_children_for_admin_user() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_hides_children_for_regular_user() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }

    #[test]
    fn has_role_is_reactive_over_required_roles() {
        let html = render_to_string(move || {
            provide_auth(Some(regular_user()));
            view! {
                <div>
                    <HasRole roles=vec![Role::User]>
                        {|| view! { <span>"user-slot"</span> }}
                    </HasRole>
                    <HasRole roles=vec![Role::Admin]>
                        {|| view! { <span>"admin-slot"</span> }}
                    </HasRole>
                </div>
            }
        });
        assert!(html.contains("user-slot"));
        assert!(!html.contains("admin-slot"));
    }

    #[test]
    fn has_role_renders_nothing_without_identity() {
        let html = render_to_string(move || {
            provide_auth(None);
            view! {
                <HasRole roles=vec![Role::Admin]>
                    {|| view! { <span>"admin-slot"</span> }}
                </HasRole>
            }
        });
        assert!(!html.contains("admin-slot"));
    }
}
