use crate::context::AppContext;
use crate::models::listing::Listing;
use crate::models::rating::RatingDraft;
use crate::models::request::RequestDraft;
use crate::utils::dialog::alert;
use leptos::logging::error;
use leptos::*;
use leptos_router::*;

#[component]
pub fn ListingDetailsPage(ctx: AppContext) -> impl IntoView {
    let params = use_params_map();
    let listing_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let (listing, set_listing) = create_signal(None::<Listing>);
    let (loading, set_loading) = create_signal(true);

    let api = ctx.api.clone();
    create_effect(move |_| {
        let id = listing_id();
        let api = api.clone();
        spawn_local(async move {
            match api.get_listing(&id).await {
                Ok(found) => set_listing.set(Some(found)),
                Err(err) => error!("[LISTING] Error fetching listing {}: {}", id, err),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="listing-details-page">
            <A href="/listings" class="back-btn">"← Back to Listings"</A>
            {move || {
                if loading.get() {
                    return view! { <div class="loading-spinner"></div> }.into_view();
                }
                match listing.get() {
                    None => view! { <p class="not-found">"Listing not found"</p> }.into_view(),
                    Some(found) if found.donor.is_some() => {
                        view! { <ListingDetails ctx=ctx.clone() listing=found/> }.into_view()
                    }
                    Some(_) => {
                        view! { <p class="not-found">"Donor information not available"</p> }.into_view()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn ListingDetails(ctx: AppContext, listing: Listing) -> impl IntoView {
    let location = listing.pickup_location.clone().unwrap_or_default();
    let window = listing
        .pickup_time
        .as_ref()
        .map(|w| format!("{} - {}", w.start_time, w.end_time))
        .unwrap_or_default();
    let donor = listing.donor.clone().unwrap_or_default();
    let is_owner = ctx.current_user_id().is_some_and(|id| listing.is_owned_by(&id));
    let edit_href = format!("/edit-listing/{}", listing.id);
    let allergens = listing.allergens.clone();
    let instructions = listing.pickup_instructions.clone().filter(|i| !i.is_empty());
    let status = listing.status.as_str();
    let posted = listing
        .created_at
        .map(|at| at.format("%d %b %Y").to_string())
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="details-layout">
            <div class="details-column">
                <div class="listing-header">
                    <h1>{listing.name.clone()}</h1>
                    <span class=format!("status-badge status-{status}")>{status.to_uppercase()}</span>
                </div>
                <div class="listing-info-grid">
                    <div class="info-item">
                        <span class="label">"Quantity"</span>
                        <span class="value">{format!("{} {}", listing.quantity, listing.unit)}</span>
                    </div>
                    <div class="info-item">
                        <span class="label">"Category"</span>
                        <span class="value">{listing.category().label()}</span>
                    </div>
                    <div class="info-item">
                        <span class="label">"Expires"</span>
                        <span class="value">{listing.expiry_date.format("%d %b %Y %H:%M").to_string()}</span>
                    </div>
                    <div class="info-item">
                        <span class="label">"Posted"</span>
                        <span class="value">{posted}</span>
                    </div>
                </div>
                <div class="description-section">
                    <h3>"Description"</h3>
                    <p>{listing.description.clone()}</p>
                </div>
                <Show when={
                    let empty = allergens.is_empty();
                    move || !empty
                }>
                    <div class="allergens-section">
                        <h3>"Allergens"</h3>
                        <div class="allergen-list">
                            {allergens
                                .iter()
                                .map(|a| view! { <span class="allergen-tag">{a.clone()}</span> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </Show>
                <div class="pickup-section">
                    <h3>"Pickup Details"</h3>
                    <p><strong>"Time Window: "</strong>{window}</p>
                    <p>
                        {location.street.clone()}<br/>
                        {format!("{}, {} {}", location.city, location.state, location.zip_code)}
                    </p>
                    {instructions.map(|text| view! {
                        <div class="instructions">
                            <strong>"Special Instructions:"</strong>
                            <p>{text}</p>
                        </div>
                    })}
                </div>
            </div>

            <div class="sidebar-column">
                <div class="donor-card">
                    <h3>{donor.name.clone()}</h3>
                    <p class="donor-rating">
                        {donor.rating_summary()}
                    </p>
                    {donor.phone.clone().map(|phone| view! { <p class="donor-phone">{phone}</p> })}
                </div>
                {if is_owner {
                    view! { <A href=edit_href class="btn-primary">"Edit Listing"</A> }.into_view()
                } else {
                    view! {
                        <RequestForm ctx=ctx.clone() listing=listing.clone()/>
                        <RateDonorForm ctx=ctx listing=listing/>
                    }
                    .into_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn RequestForm(ctx: AppContext, listing: Listing) -> impl IntoView {
    let navigate = use_navigate();
    let (open, set_open) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);
    let draft = create_rw_signal(RequestDraft::default());
    let max_quantity = listing.quantity;
    let unit = listing.unit.clone();

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !ctx.is_authenticated() {
            navigate("/login", Default::default());
            return;
        }
        let payload = match draft.get_untracked().validate(&listing, ctx.current_role()) {
            Ok(payload) => payload,
            Err(err) => {
                alert(&err.to_string());
                return;
            }
        };

        let api = ctx.api.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match api.create_request(&payload).await {
                Ok(()) => {
                    alert("Request submitted successfully!");
                    set_open.set(false);
                    draft.set(RequestDraft::default());
                }
                Err(err) => alert(&format!(
                    "Error submitting request: {}",
                    err.user_message("please try again")
                )),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="request-section">
            <Show
                when=move || open.get()
                fallback=move || view! {
                    <button class="btn-primary" on:click=move |_| set_open.set(true)>"Request This Food"</button>
                }
            >
                <form class="request-form" on:submit=submit.clone()>
                    <div class="form-group">
                        <label>{format!("Quantity ({}, max {})", unit, max_quantity)}</label>
                        <input
                            type="number"
                            step="0.1"
                            min="0"
                            required
                            prop:value=move || draft.with(|d| d.quantity_requested.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.quantity_requested = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"Pickup Date"</label>
                        <input
                            type="date"
                            required
                            prop:value=move || draft.with(|d| d.pickup_date.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.pickup_date = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"Pickup Time"</label>
                        <input
                            type="time"
                            prop:value=move || draft.with(|d| d.pickup_time.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.pickup_time = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label>"Notes"</label>
                        <textarea
                            rows="3"
                            prop:value=move || draft.with(|d| d.notes.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.notes = value);
                            }
                        ></textarea>
                    </div>
                    <div class="form-actions">
                        <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                        </button>
                        <button type="button" class="btn-secondary" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn RateDonorForm(ctx: AppContext, listing: Listing) -> impl IntoView {
    let navigate = use_navigate();
    let (open, set_open) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);
    let score = create_rw_signal(5u8);
    let review = create_rw_signal(String::new());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(rater_id) = ctx.current_user_id() else {
            navigate("/login", Default::default());
            return;
        };
        let Some(draft) =
            RatingDraft::for_listing_donor(&listing, score.get_untracked(), &review.get_untracked())
        else {
            alert("Donor information not available");
            return;
        };

        let api = ctx.api.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match api.submit_rating(&rater_id, &draft).await {
                Ok(()) => {
                    alert("Rating submitted successfully!");
                    set_open.set(false);
                    score.set(5);
                    review.set(String::new());
                }
                Err(err) => alert(&err.user_message("Error submitting rating")),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="rating-section">
            <button class="btn-secondary" on:click=move |_| set_open.update(|o| *o = !*o)>"Rate Donor"</button>
            <Show when=move || open.get()>
                <form class="rating-form" on:submit=submit.clone()>
                    <div class="stars-input">
                        {(1..=5u8)
                            .map(|star| view! {
                                <span
                                    class=move || if star <= score.get() { "star-filled" } else { "star-empty" }
                                    on:click=move |_| score.set(star)
                                >
                                    "★"
                                </span>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <textarea
                        rows="3"
                        placeholder="Share your experience..."
                        prop:value=move || review.get()
                        on:input=move |ev| review.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                        "Submit Rating"
                    </button>
                </form>
            </Show>
        </div>
    }
}
