use crate::models::listing::Listing;
use leptos::*;

/// Summary card for one listing.
#[component]
pub fn FoodCard(listing: Listing, on_view_details: Callback<String>) -> impl IntoView {
    let id = listing.id.clone();
    let status = listing.status.as_str();
    let (city, state) = (listing.city().to_string(), listing.state().to_string());
    let window = listing
        .pickup_time
        .as_ref()
        .map(|w| format!("{} - {}", w.start_time, w.end_time))
        .unwrap_or_default();
    let (donor_name, donor_rating) = match &listing.donor {
        Some(donor) => (
            donor.name.clone(),
            donor.average_rating.map(|r| format!("{r:.1}")).unwrap_or_else(|| "N/A".to_string()),
        ),
        None => ("Unknown donor".to_string(), "N/A".to_string()),
    };

    view! {
        <div class="food-card">
            <div class="food-card-header">
                <span class=format!("status-badge status-{status}")>{status.to_uppercase()}</span>
                <div class="food-category">{listing.category().label()}</div>
            </div>
            <h3 class="food-name">{listing.name.clone()}</h3>
            <p class="food-description">{listing.short_description()}</p>
            <div class="food-details">
                <div class="detail-item">
                    <span class="label">"Quantity:"</span>
                    <span class="value">{format!("{} {}", listing.quantity, listing.unit)}</span>
                </div>
                <div class="detail-item">
                    <span class="label">"Expires:"</span>
                    <span class="value">{listing.expiry_date.format("%d %b %Y").to_string()}</span>
                </div>
            </div>
            <div class="donor-info">
                <p class="donor-name">{donor_name}</p>
                <span class="donor-rating">{donor_rating}</span>
            </div>
            <div class="location-info">{format!("{city}, {state}")}</div>
            <div class="pickup-time">{window}</div>
            <button class="btn-primary view-details-btn" on:click=move |_| on_view_details.call(id.clone())>
                "View Details & Request"
            </button>
        </div>
    }
}
