use crate::context::AppContext;
use leptos::*;
use leptos_router::*;

#[component]
pub fn Navbar(ctx: AppContext) -> impl IntoView {
    let session = ctx.session();
    let navigate = use_navigate();
    let logout = move |_| {
        ctx.logout();
        navigate("/", Default::default());
    };

    view! {
        <nav class="navbar">
            <A href="/" class="navbar-brand">"FoodRescue"</A>
            <div class="nav-links">
                <A href="/" class="nav-link">"Home"</A>
                <A href="/listings" class="nav-link">"Available Food"</A>
                <Show
                    when=move || session.with(Option::is_some)
                    fallback=|| view! {
                        <A href="/login" class="nav-link">"Login"</A>
                        <A href="/register" class="nav-link">"Register"</A>
                    }
                >
                    <A href="/dashboard" class="nav-link">"Dashboard"</A>
                    <A href="/my-requests" class="nav-link">"My Requests"</A>
                    <A href="/ratings" class="nav-link">"Ratings"</A>
                    <A href="/profile" class="nav-link">
                        {move || session.with(|s| s.as_ref().map(|s| s.user.name.clone()).unwrap_or_default())}
                    </A>
                    <button class="nav-link logout-btn" on:click=logout.clone()>"Logout"</button>
                </Show>
            </div>
        </nav>
    }
}
