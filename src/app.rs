/// Root component for FoodRescue.
/// Builds the application context once and hands it to every page.
use crate::components::auth_pages::{LoginPage, RegisterPage};
use crate::components::dashboard_page::{DashboardPage, DashboardTab};
use crate::components::home_page::HomePage;
use crate::components::listing_details_page::ListingDetailsPage;
use crate::components::listing_form::{CreateListingPage, EditListingPage};
use crate::components::listings_page::ListingsPage;
use crate::components::my_requests_page::MyRequestsPage;
use crate::components::navbar::Navbar;
use crate::components::profile_page::ProfilePage;
use crate::components::ratings_page::RatingsPage;
use crate::config::ClientConfig;
use crate::context::AppContext;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

fn public(ctx: &AppContext, page: fn(AppContext) -> View) -> impl Fn() -> View + 'static {
    let ctx = ctx.clone();
    move || page(ctx.clone())
}

/// Renders `page` for a signed-in user, otherwise sends them to the login page.
/// Signing out while the page is open redirects too.
fn protected<V: IntoView>(
    ctx: &AppContext,
    page: impl Fn(AppContext) -> V + 'static,
) -> impl Fn() -> View + 'static {
    let ctx = ctx.clone();
    let page = Rc::new(page);
    move || {
        let signed_in = ctx.signed_in();
        let ctx = ctx.clone();
        let page = Rc::clone(&page);
        (move || {
            if signed_in.get() {
                page(ctx.clone()).into_view()
            } else {
                view! { <Redirect path="/login"/> }.into_view()
            }
        })
        .into_view()
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let ctx = AppContext::browser(ClientConfig::load());
    let nav_ctx = ctx.clone();

    view! {
        <Title text="FoodRescue"/>
        <Router>
            <Navbar ctx=nav_ctx/>
            <main class="main-content">
                <Routes>
                    <Route path="/" view=public(&ctx, |ctx| view! { <HomePage ctx=ctx/> }.into_view())/>
                    <Route path="/login" view=public(&ctx, |ctx| view! { <LoginPage ctx=ctx/> }.into_view())/>
                    <Route path="/register" view=public(&ctx, |ctx| view! { <RegisterPage ctx=ctx/> }.into_view())/>
                    <Route path="/listings" view=public(&ctx, |ctx| view! { <ListingsPage ctx=ctx/> }.into_view())/>
                    <Route path="/listings/:id" view=public(&ctx, |ctx| view! { <ListingDetailsPage ctx=ctx/> }.into_view())/>
                    <Route path="/dashboard" view=protected(&ctx, |ctx| view! { <DashboardPage ctx=ctx/> })/>
                    <Route
                        path="/my-listings"
                        view=protected(&ctx, |ctx| view! { <DashboardPage ctx=ctx initial_tab=DashboardTab::Listings/> })
                    />
                    <Route path="/create-listing" view=protected(&ctx, |ctx| view! { <CreateListingPage ctx=ctx/> })/>
                    <Route path="/edit-listing/:id" view=protected(&ctx, |ctx| view! { <EditListingPage ctx=ctx/> })/>
                    <Route path="/my-requests" view=protected(&ctx, |ctx| view! { <MyRequestsPage ctx=ctx/> })/>
                    <Route path="/ratings" view=protected(&ctx, |ctx| view! { <RatingsPage ctx=ctx/> })/>
                    <Route path="/profile" view=protected(&ctx, |ctx| view! { <ProfilePage ctx=ctx/> })/>
                    <Route path="/*any" view=|| view! { <p class="not-found">"Page not found"</p> }/>
                </Routes>
            </main>
        </Router>
    }
}
