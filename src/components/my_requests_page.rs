use crate::components::modal_prompt::ModalPrompt;
use crate::context::AppContext;
use crate::models::request::Request;
use crate::utils::dialog::alert;
use leptos::*;
use leptos_router::*;

/// Requests the signed-in user has placed, with cancellation while still open.
#[component]
pub fn MyRequestsPage(ctx: AppContext) -> impl IntoView {
    let (requests, set_requests) = create_signal(Vec::<Request>::new());
    let (loading, set_loading) = create_signal(true);
    let (error, set_error) = create_signal(None::<String>);
    let cancel_target = create_rw_signal(None::<String>);
    let cancel_reason = create_rw_signal(String::new());

    let fetch_requests = {
        let api = ctx.api.clone();
        Callback::new(move |_: ()| {
            let api = api.clone();
            set_loading.set(true);
            set_error.set(None);
            spawn_local(async move {
                match api.my_requests().await {
                    Ok(found) => set_requests.set(found),
                    Err(err) => set_error.set(Some(err.user_message("Unable to load requests"))),
                }
                set_loading.set(false);
            });
        })
    };
    fetch_requests.call(());

    let open_cancel = move |id: String| {
        cancel_target.set(Some(id));
        cancel_reason.set(String::new());
    };
    let close_cancel = Callback::new(move |_: ()| {
        cancel_target.set(None);
        cancel_reason.set(String::new());
    });
    let confirm_cancel = {
        let api = ctx.api.clone();
        Callback::new(move |_: ()| {
            let Some(id) = cancel_target.get_untracked() else {
                return;
            };
            let reason = cancel_reason.get_untracked();
            let api = api.clone();
            spawn_local(async move {
                match api.cancel_request(&id, &reason).await {
                    Ok(()) => {
                        close_cancel.call(());
                        fetch_requests.call(());
                    }
                    Err(err) => alert(&err.user_message("Unable to cancel request")),
                }
            });
        })
    };

    view! {
        <div class="my-requests-page">
            <A href="/dashboard" class="back-btn">"Back to Dashboard"</A>
            <div class="requests-header">
                <div>
                    <h1>"My Requests"</h1>
                    <p>"Track the food requests you have placed"</p>
                </div>
                <button class="btn-secondary" on:click=move |_| fetch_requests.call(())>"Refresh"</button>
            </div>

            {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}

            <div class="requests-content">
                {move || {
                    if loading.get() {
                        return view! { <div class="loading-spinner"></div> }.into_view();
                    }
                    let found = requests.get();
                    if found.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <p>"No requests yet. Start by browsing available food."</p>
                                <A href="/listings" class="btn-primary">"Browse Food"</A>
                            </div>
                        }
                        .into_view();
                    }
                    view! {
                        <div class="requests-grid">
                            {found
                                .into_iter()
                                .map(|request| view! { <RequestCard request=request on_cancel=open_cancel/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_view()
                }}
            </div>

            <ModalPrompt
                is_open=Signal::derive(move || cancel_target.with(Option::is_some))
                title="Cancel request"
                message="Reason for canceling? (optional)"
                placeholder="Add a short reason"
                value=cancel_reason
                on_change=Callback::new(move |text: String| cancel_reason.set(text))
                on_confirm=confirm_cancel
                on_cancel=close_cancel
                confirm_label="Cancel Request"
            />
        </div>
    }
}

#[component]
fn RequestCard(request: Request, #[prop(into)] on_cancel: Callback<String>) -> impl IntoView {
    let listing_href = request
        .food_listing
        .as_ref()
        .map(|l| format!("/listings/{}", l.id));
    let city = request
        .food_listing
        .as_ref()
        .and_then(|l| l.pickup_location.as_ref())
        .map(|loc| loc.city.clone())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "Location unavailable".to_string());
    let id = request.id.clone();
    let cancellable = request.status.can_cancel();

    view! {
        <div class="request-card">
            <div class="request-card-header">
                <div>
                    <h3>{request.listing_name().to_string()}</h3>
                    <span class=format!("status-badge status-{}", request.status.as_str())>
                        {request.status.label()}
                    </span>
                </div>
                {listing_href.map(|href| view! { <A href=href class="btn-primary">"View Listing"</A> })}
            </div>
            <div class="request-details">
                <p>{format!("Requested: {} {}", request.quantity_requested, request.unit())}</p>
                <p>
                    {format!(
                        "Pickup: {} {}",
                        request.pickup_date.format("%d %b %Y"),
                        request.pickup_time.clone().unwrap_or_default()
                    )}
                </p>
                <p>{city}</p>
            </div>
            {request.notes.clone().filter(|n| !n.is_empty()).map(|notes| view! {
                <div class="request-notes"><p>{notes}</p></div>
            })}
            {request.response_message.clone().map(|message| view! {
                <div class="response-message"><strong>"Response: "</strong>{message}</div>
            })}
            {cancellable.then(|| view! {
                <button class="btn-secondary cancel-btn" on:click=move |_| on_cancel.call(id.clone())>
                    "Cancel Request"
                </button>
            })}
        </div>
    }
}
