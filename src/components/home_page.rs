use crate::components::food_card::FoodCard;
use crate::context::AppContext;
use crate::models::listing::{Listing, ListingStatus};
use leptos::logging::error;
use leptos::*;
use leptos_router::*;

const RECENT_LIMIT: usize = 6;

#[component]
pub fn HomePage(ctx: AppContext) -> impl IntoView {
    let navigate = use_navigate();
    let (recent, set_recent) = create_signal(Vec::<Listing>::new());
    let (loading, set_loading) = create_signal(true);

    let api = ctx.api.clone();
    spawn_local(async move {
        match api.list_listings(Some(ListingStatus::Available)).await {
            Ok(mut listings) => {
                listings.truncate(RECENT_LIMIT);
                set_recent.set(listings);
            }
            Err(err) => error!("[HOME] Error fetching listings: {}", err),
        }
        set_loading.set(false);
    });

    let on_view_details = Callback::new(move |id: String| {
        navigate(&format!("/listings/{id}"), Default::default());
    });

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero-title">"Rescue Food, Save Lives"</h1>
                <p class="hero-subtitle">
                    "Connect surplus edible food with people and organizations in need"
                </p>
                <div class="hero-buttons">
                    <A href="/register" class="btn-primary btn-lg">"Get Started Free"</A>
                    <A href="/listings" class="btn-secondary btn-lg">"Browse Food"</A>
                </div>
            </section>
            <section class="recent-listings">
                <h2>"Recently Shared"</h2>
                <Show when=move || !loading.get() fallback=|| view! { <div class="loading-spinner"></div> }>
                    <div class="listings-grid">
                        {move || {
                            recent
                                .get()
                                .into_iter()
                                .map(|listing| view! { <FoodCard listing=listing on_view_details=on_view_details/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>
        </div>
    }
}
