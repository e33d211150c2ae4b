use crate::components::food_card::FoodCard;
use crate::context::AppContext;
use crate::filters::ListingFilter;
use crate::models::listing::{Category, Listing, ListingStatus};
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::*;

const DEFAULT_STATUS: Option<ListingStatus> = Some(ListingStatus::Available);

/// Browse listings. Status is filtered by the server; category, city and
/// free-text search run over the fetched list.
#[component]
pub fn ListingsPage(ctx: AppContext) -> impl IntoView {
    let navigate = use_navigate();
    let (fetched, set_fetched) = create_signal(Vec::<Listing>::new());
    let (loading, set_loading) = create_signal(true);

    let status = create_rw_signal(DEFAULT_STATUS);
    let category = create_rw_signal(None::<Category>);
    let city = create_rw_signal(String::new());
    let search = create_rw_signal(String::new());

    let api = ctx.api.clone();
    create_effect(move |_| {
        let status = status.get();
        let api = api.clone();
        set_loading.set(true);
        spawn_local(async move {
            match api.list_listings(status).await {
                Ok(listings) => {
                    log!("[LISTINGS] Fetched {} listings", listings.len());
                    set_fetched.set(listings);
                }
                Err(err) => error!("[LISTINGS] Error fetching listings: {}", err),
            }
            set_loading.set(false);
        });
    });

    let visible = create_memo(move |_| {
        let filter = ListingFilter::default()
            .category(category.get())
            .city_contains(city.get())
            .query(search.get());
        fetched.with(|listings| filter.apply(listings))
    });

    let reset = move |_| {
        status.set(DEFAULT_STATUS);
        category.set(None);
        city.set(String::new());
        search.set(String::new());
    };

    let on_view_details = Callback::new(move |id: String| {
        navigate(&format!("/listings/{id}"), Default::default());
    });

    view! {
        <div class="listings-page">
            <div class="listings-header">
                <h1>"Available Food Nearby"</h1>
                <p>"Find food items being shared in your community"</p>
            </div>

            <div class="filters-section">
                <div class="filter-group">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search for food..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                </div>
                <div class="filter-group">
                    <label>"Category"</label>
                    <select
                        class="input-field"
                        on:change=move |ev| category.set(Category::from_form_value(&event_target_value(&ev)))
                    >
                        <option value="" selected=move || category.get().is_none()>"All Categories"</option>
                        {Category::ALL
                            .into_iter()
                            .map(|c| view! {
                                <option value=c.as_str() selected=move || category.get() == Some(c)>
                                    {c.label()}
                                </option>
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="filter-group">
                    <label>"City"</label>
                    <input
                        type="text"
                        class="input-field"
                        placeholder="Filter by city..."
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev))
                    />
                </div>
                <div class="filter-group">
                    <label>"Status"</label>
                    <select
                        class="input-field"
                        on:change=move |ev| status.set(ListingStatus::from_form_value(&event_target_value(&ev)))
                    >
                        <option value="available" selected=move || status.get() == Some(ListingStatus::Available)>"Available"</option>
                        <option value="claimed" selected=move || status.get() == Some(ListingStatus::Claimed)>"Claimed"</option>
                        <option value="" selected=move || status.get().is_none()>"All"</option>
                    </select>
                </div>
                <button class="btn-secondary reset-btn" on:click=reset>"Reset Filters"</button>
            </div>

            <div class="listings-results">
                {move || {
                    if loading.get() {
                        return view! { <div class="loading-spinner"></div> }.into_view();
                    }
                    let listings = visible.get();
                    if listings.is_empty() {
                        return view! {
                            <div class="no-results">
                                <p>"No listings found matching your criteria"</p>
                                <A href="/" class="btn-primary">"Back to Home"</A>
                            </div>
                        }
                        .into_view();
                    }
                    let count = listings.len();
                    let noun = if count == 1 { "listing" } else { "listings" };
                    view! {
                        <div class="results-info">
                            <p>{format!("{count} {noun} found")}</p>
                        </div>
                        <div class="listings-grid">
                            {listings
                                .into_iter()
                                .map(|listing| view! { <FoodCard listing=listing on_view_details=on_view_details/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_view()
                }}
            </div>
        </div>
    }
}
