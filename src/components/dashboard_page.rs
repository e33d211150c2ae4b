use crate::api::{ApiClient, Transport};
use crate::components::food_card::FoodCard;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::listing::Listing;
use crate::models::request::{Request, RequestAction, Viewer};
use crate::utils::dialog::{alert, confirm};
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::*;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardData {
    pub my_listings: Vec<Listing>,
    pub my_requests: Vec<Request>,
    /// Requests other users made against my listings.
    pub incoming_requests: Vec<Request>,
}

/// The three dashboard reads, issued together. Any failure fails the whole load.
pub async fn load_dashboard<T: Transport>(api: &ApiClient<T>) -> Result<DashboardData, ApiError> {
    let (my_listings, my_requests, incoming_requests) = futures::try_join!(
        api.my_listings(),
        api.my_requests(),
        api.requests_for_my_listings()
    )?;
    Ok(DashboardData { my_listings, my_requests, incoming_requests })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardTab {
    Listings,
    Incoming,
    Requests,
}

fn action_notice(action: &RequestAction) -> &'static str {
    match action {
        RequestAction::Accept => "Request accepted!",
        RequestAction::Reject { .. } => "Request rejected!",
        RequestAction::Complete => "Request marked as completed!",
        RequestAction::Cancel { .. } => "Request cancelled!",
    }
}

#[component]
pub fn DashboardPage(
    ctx: AppContext,
    #[prop(default = DashboardTab::Listings)] initial_tab: DashboardTab,
) -> impl IntoView {
    let navigate = use_navigate();
    let data = create_rw_signal(DashboardData::default());
    let (loading, set_loading) = create_signal(true);
    let tab = create_rw_signal(initial_tab);
    let user_name = ctx.current_user().map(|u| u.name).unwrap_or_default();

    let reload = {
        let api = ctx.api.clone();
        Callback::new(move |_: ()| {
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                match load_dashboard(&api).await {
                    Ok(loaded) => {
                        log!(
                            "[DASHBOARD] {} listings, {} requests, {} incoming",
                            loaded.my_listings.len(),
                            loaded.my_requests.len(),
                            loaded.incoming_requests.len()
                        );
                        data.set(loaded);
                    }
                    Err(err) => error!("[DASHBOARD] Error fetching data: {}", err),
                }
                set_loading.set(false);
            });
        })
    };
    reload.call(());

    let delete_listing = {
        let api = ctx.api.clone();
        Callback::new(move |id: String| {
            if !confirm("Are you sure you want to delete this listing?") {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.delete_listing(&id).await {
                    Ok(()) => data.update(|d| d.my_listings.retain(|l| l.id != id)),
                    Err(_) => alert("Error deleting listing"),
                }
            });
        })
    };

    let act = {
        let api = ctx.api.clone();
        Callback::new(move |(id, action): (String, RequestAction)| {
            let api = api.clone();
            spawn_local(async move {
                match api.apply_action(&id, &action).await {
                    Ok(()) => {
                        alert(action_notice(&action));
                        reload.call(());
                    }
                    Err(err) => alert(&format!(
                        "Error updating request: {}",
                        err.user_message("please try again")
                    )),
                }
            });
        })
    };

    let view_listing = Callback::new(move |id: String| {
        navigate(&format!("/listings/{id}"), Default::default());
    });

    let tab_button = move |target: DashboardTab, label: &'static str, count: fn(&DashboardData) -> usize| {
        view! {
            <button
                class=move || if tab.get() == target { "tab-btn active" } else { "tab-btn" }
                on:click=move |_| tab.set(target)
            >
                {move || format!("{label} ({})", data.with(count))}
            </button>
        }
    };

    view! {
        <div class="dashboard-page">
            <div class="dashboard-header">
                <h1>{format!("Welcome, {user_name}!")}</h1>
                <A href="/create-listing" class="btn-primary">"Create New Listing"</A>
            </div>
            <div class="dashboard-tabs">
                {tab_button(DashboardTab::Listings, "My Listings", |d| d.my_listings.len())}
                {tab_button(DashboardTab::Incoming, "Requests for My Food", |d| d.incoming_requests.len())}
                {tab_button(DashboardTab::Requests, "My Requests", |d| d.my_requests.len())}
            </div>
            <div class="dashboard-content">
                {move || {
                    if loading.get() {
                        return view! { <div class="loading-spinner"></div> }.into_view();
                    }
                    match tab.get() {
                        DashboardTab::Listings => data.with(|d| {
                            if d.my_listings.is_empty() {
                                return view! { <p class="empty-state">"You have not listed any food yet."</p> }.into_view();
                            }
                            d.my_listings
                                .iter()
                                .cloned()
                                .map(|listing| {
                                    let id = listing.id.clone();
                                    let edit_href = format!("/edit-listing/{id}");
                                    view! {
                                        <div class="listing-with-actions">
                                            <FoodCard listing=listing on_view_details=view_listing/>
                                            <div class="listing-actions">
                                                <A href=edit_href class="btn-secondary">"Edit"</A>
                                                <button class="btn-danger" on:click=move |_| delete_listing.call(id.clone())>
                                                    "Delete"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_view()
                        }),
                        DashboardTab::Incoming => data.with(|d| {
                            request_cards(&d.incoming_requests, Viewer::Owner, act)
                        }),
                        DashboardTab::Requests => data.with(|d| {
                            request_cards(&d.my_requests, Viewer::Requester, act)
                        }),
                    }
                }}
            </div>
        </div>
    }
}

/// Request cards with whatever controls `viewer` may use. Cancel is left to
/// the My Requests page, which collects a reason first.
fn request_cards(
    requests: &[Request],
    viewer: Viewer,
    act: Callback<(String, RequestAction)>,
) -> View {
    if requests.is_empty() {
        return view! { <p class="empty-state">"No requests yet."</p> }.into_view();
    }
    requests
        .iter()
        .map(|request| {
            let actions: Vec<RequestAction> = RequestAction::exposed_for(request.status, viewer)
                .into_iter()
                .filter(|a| !matches!(a, RequestAction::Cancel { .. }))
                .collect();
            let requester = request
                .requester
                .as_ref()
                .map(|r| r.name.clone())
                .unwrap_or_default();
            let id = request.id.clone();
            view! {
                <div class="request-card">
                    <h4>{request.listing_name().to_string()}</h4>
                    <span class=format!("status-badge status-{}", request.status.as_str())>
                        {request.status.label()}
                    </span>
                    <p>{format!("Quantity: {} {}", request.quantity_requested, request.unit())}</p>
                    <p>{format!("Pickup: {} {}", request.pickup_date.format("%d %b %Y"), request.pickup_time.clone().unwrap_or_default())}</p>
                    {(!requester.is_empty()).then(|| view! { <p>{format!("Requested by: {requester}")}</p> })}
                    {request.notes.clone().map(|notes| view! { <p class="request-notes">{notes}</p> })}
                    <div class="request-actions">
                        {actions
                            .into_iter()
                            .map(|action| {
                                let id = id.clone();
                                let label = action.label();
                                view! {
                                    <button class="btn-primary" on:click=move |_| act.call((id.clone(), action.clone()))>
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            }
        })
        .collect::<Vec<_>>()
        .into_view()
}
