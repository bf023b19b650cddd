use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth},
    components::notify::provide_notifier,
    pages::{
        admin::AdminPage, admin_reviews::AdminReviewsPage, flight_manager::FlightManagerPage,
        flights::FlightsPage, landing::LandingPage, login::LoginPage,
        review_form::ReviewFormPage, reviews::ReviewsPage, signup::SignupPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/landing",
    "/flights",
    "/make-review",
    "/review-form/:flight_id",
    "/reviews",
    "/admin",
    "/admin/flights",
    "/admin/reviews",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/landing",
    "/flights",
    "/make-review",
    "/review-form/:flight_id",
    "/admin",
    "/admin/flights",
    "/admin/reviews",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin", "/admin/flights", "/admin/reviews"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/signup", "/reviews"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_notifier();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path="/login"/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/landing" view=ProtectedLanding/>
                    <Route path="/flights" view=ProtectedFlights/>
                    <Route path="/make-review" view=ProtectedMakeReview/>
                    <Route path="/review-form/:flight_id" view=ProtectedReviewForm/>
                    <Route path="/reviews" view=ReviewsPage/>
                    <Route path="/admin" view=ProtectedAdmin/>
                    <Route path="/admin/flights" view=ProtectedFlightManager/>
                    <Route path="/admin/reviews" view=ProtectedAdminReviews/>
                    <Route path="/*any" view=|| view! { <Redirect path="/login"/> }/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedLanding() -> impl IntoView {
    view! { <RequireAuth><LandingPage/></RequireAuth> }
}

#[component]
fn ProtectedFlights() -> impl IntoView {
    view! { <RequireAuth><FlightsPage/></RequireAuth> }
}

#[component]
fn ProtectedMakeReview() -> impl IntoView {
    view! { <RequireAuth><FlightsPage review_mode=true/></RequireAuth> }
}

#[component]
fn ProtectedReviewForm() -> impl IntoView {
    view! { <RequireAuth><ReviewFormPage/></RequireAuth> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireAdmin><AdminPage/></RequireAdmin> }
}

#[component]
fn ProtectedFlightManager() -> impl IntoView {
    view! { <RequireAdmin><FlightManagerPage/></RequireAdmin> }
}

#[component]
fn ProtectedAdminReviews() -> impl IntoView {
    view! { <RequireAdmin><AdminReviewsPage/></RequireAdmin> }
}
