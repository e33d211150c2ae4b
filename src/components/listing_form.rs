use crate::components::location_fields::{LocationFields, LocationPicker};
use crate::context::AppContext;
use crate::lookup::UNITS;
use crate::models::listing::{Category, ListingDraft, NewListing};
use crate::utils::dialog::alert;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::*;

/// Fields shared by the create and edit pages. The picked location is folded
/// into the draft before validation; only a valid payload reaches `on_submit`.
#[component]
pub fn ListingForm(
    draft: RwSignal<ListingDraft>,
    picker: RwSignal<LocationPicker>,
    error: RwSignal<Option<String>>,
    #[prop(into)] submitting: Signal<bool>,
    submit_label: &'static str,
    on_submit: Callback<NewListing>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let location = picker.with_untracked(|p| p.location.clone());
        draft.update(|d| d.pickup_location = location);
        match draft.with_untracked(ListingDraft::validate) {
            Ok(payload) => {
                error.set(None);
                on_submit.call(payload);
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    // Text inputs all write through the same way.
    let bind = move |apply: fn(&mut ListingDraft, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            draft.update(|d| apply(d, value));
        }
    };

    view! {
        <form class="listing-form" on:submit=submit>
            {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}

            <div class="form-group">
                <label>"Food Name *"</label>
                <input
                    type="text"
                    class="input-field"
                    placeholder="e.g., Fresh Apples"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=bind(|d, v| d.name = v)
                />
            </div>

            <div class="form-group">
                <label>"Description"</label>
                <textarea
                    class="input-field"
                    rows="3"
                    placeholder="Describe the food item"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=bind(|d, v| d.description = v)
                ></textarea>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Quantity *"</label>
                    <input
                        type="number"
                        class="input-field"
                        step="0.1"
                        min="0"
                        prop:value=move || draft.with(|d| d.quantity.clone())
                        on:input=bind(|d, v| d.quantity = v)
                    />
                </div>
                <div class="form-group">
                    <label>"Unit"</label>
                    <select
                        class="input-field"
                        prop:value=move || draft.with(|d| d.unit.clone())
                        on:change=bind(|d, v| d.unit = v)
                    >
                        {UNITS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"Category"</label>
                    <select
                        class="input-field"
                        prop:value=move || draft.with(|d| d.category.as_str())
                        on:change=bind(|d, v| {
                            if let Some(category) = Category::from_form_value(&v) {
                                d.category = category;
                            }
                        })
                    >
                        {Category::ALL
                            .iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label>"Expiry Date *"</label>
                    <input
                        type="date"
                        class="input-field"
                        prop:value=move || draft.with(|d| d.expiry_date.clone())
                        on:input=bind(|d, v| d.expiry_date = v)
                    />
                </div>
                <div class="form-group">
                    <label>"Pickup From"</label>
                    <input
                        type="time"
                        class="input-field"
                        prop:value=move || draft.with(|d| d.pickup_time.start_time.clone())
                        on:input=bind(|d, v| d.pickup_time.start_time = v)
                    />
                </div>
                <div class="form-group">
                    <label>"Pickup Until"</label>
                    <input
                        type="time"
                        class="input-field"
                        prop:value=move || draft.with(|d| d.pickup_time.end_time.clone())
                        on:input=bind(|d, v| d.pickup_time.end_time = v)
                    />
                </div>
            </div>

            <LocationFields picker=picker/>

            <div class="form-group">
                <label>"Allergens (comma separated)"</label>
                <input
                    type="text"
                    class="input-field"
                    placeholder="e.g., nuts, dairy, gluten"
                    prop:value=move || draft.with(|d| d.allergens.clone())
                    on:input=bind(|d, v| d.allergens = v)
                />
            </div>

            <div class="form-group">
                <label>"Pickup Instructions"</label>
                <textarea
                    class="input-field"
                    rows="2"
                    placeholder="Any special instructions for pickup"
                    prop:value=move || draft.with(|d| d.pickup_instructions.clone())
                    on:input=bind(|d, v| d.pickup_instructions = v)
                ></textarea>
            </div>

            <div class="form-actions">
                <button type="button" class="btn-secondary" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { submit_label }}
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn CreateListingPage(ctx: AppContext) -> impl IntoView {
    let navigate = use_navigate();
    let draft = create_rw_signal(ListingDraft::default());
    let picker = create_rw_signal(LocationPicker::default());
    let error = create_rw_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = {
        let navigate = navigate.clone();
        Callback::new(move |payload: NewListing| {
            let api = ctx.api.clone();
            let navigate = navigate.clone();
            set_submitting.set(true);
            spawn_local(async move {
                match api.create_listing(&payload).await {
                    Ok(()) => {
                        log!("[LISTINGS] Created listing {}", payload.food_name);
                        navigate("/dashboard", Default::default());
                    }
                    Err(err) => error.set(Some(err.user_message("Error creating listing"))),
                }
                set_submitting.set(false);
            });
        })
    };
    let on_cancel = Callback::new(move |_: ()| navigate("/dashboard", Default::default()));

    view! {
        <div class="create-listing-page">
            <h1>"Create Food Listing"</h1>
            <ListingForm
                draft=draft
                picker=picker
                error=error
                submitting=submitting
                submit_label="Create Listing"
                on_submit=on_submit
                on_cancel=on_cancel
            />
        </div>
    }
}

#[component]
pub fn EditListingPage(ctx: AppContext) -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();
    let listing_id = params.with_untracked(|p| p.get("id").cloned().unwrap_or_default());

    let draft = create_rw_signal(ListingDraft::default());
    let picker = create_rw_signal(LocationPicker::default());
    let error = create_rw_signal(None::<String>);
    let (loading, set_loading) = create_signal(true);
    let (submitting, set_submitting) = create_signal(false);

    {
        let api = ctx.api.clone();
        let id = listing_id.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.get_listing(&id).await {
                Ok(listing) => {
                    draft.set(ListingDraft::from_listing(&listing));
                    picker.set(LocationPicker::from_location(
                        listing.pickup_location.clone().unwrap_or_default(),
                    ));
                }
                Err(err) => {
                    error!("[LISTINGS] Error loading listing {}: {}", id, err);
                    alert(&format!("Error loading listing: {}", err.user_message("not found")));
                    navigate("/my-listings", Default::default());
                }
            }
            set_loading.set(false);
        });
    }

    let on_submit = {
        let navigate = navigate.clone();
        Callback::new(move |payload: NewListing| {
            let api = ctx.api.clone();
            let id = listing_id.clone();
            let navigate = navigate.clone();
            set_submitting.set(true);
            spawn_local(async move {
                match api.update_listing(&id, &payload).await {
                    Ok(()) => {
                        alert("Listing updated successfully!");
                        navigate("/my-listings", Default::default());
                    }
                    Err(err) => error.set(Some(err.user_message("Error updating listing"))),
                }
                set_submitting.set(false);
            });
        })
    };
    let on_cancel = Callback::new(move |_: ()| navigate("/my-listings", Default::default()));

    view! {
        <div class="edit-listing-page">
            <h1>"Edit Food Listing"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-spinner"></div> }
            >
                <ListingForm
                    draft=draft
                    picker=picker
                    error=error
                    submitting=submitting
                    submit_label="Update Listing"
                    on_submit=on_submit
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
