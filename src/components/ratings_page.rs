use crate::context::AppContext;
use crate::models::rating::{star_counts, Rating, RatingDraft};
use crate::models::user::UserProfile;
use crate::utils::dialog::alert;
use leptos::logging::error;
use leptos::*;

fn stars(score: f64) -> String {
    let (filled, empty) = star_counts(score);
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[component]
pub fn RatingsPage(ctx: AppContext) -> impl IntoView {
    let (ratings, set_ratings) = create_signal(Vec::<Rating>::new());
    let (profile, set_profile) = create_signal(None::<UserProfile>);
    let (loading, set_loading) = create_signal(true);
    let (submitting, set_submitting) = create_signal(false);
    let rated_user_id = create_rw_signal(String::new());
    let score = create_rw_signal(5u8);
    let review = create_rw_signal(String::new());

    let fetch = {
        let api = ctx.api.clone();
        let me = ctx.current_user_id().unwrap_or_default();
        Callback::new(move |_: ()| {
            let api = api.clone();
            let me = me.clone();
            set_loading.set(true);
            spawn_local(async move {
                match api.ratings_for_user(&me).await {
                    Ok(found) => set_ratings.set(found),
                    Err(err) => error!("[RATINGS] Error fetching ratings: {}", err),
                }
                match api.profile().await {
                    Ok(found) => set_profile.set(Some(found)),
                    Err(err) => error!("[RATINGS] Error fetching profile: {}", err),
                }
                set_loading.set(false);
            });
        })
    };
    fetch.call(());

    let submit = {
        let ctx = ctx.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let Some(rater_id) = ctx.current_user_id() else {
                alert("Please log in to submit a rating");
                return;
            };
            let draft = match RatingDraft::for_user_id(
                &rated_user_id.get_untracked(),
                score.get_untracked(),
                &review.get_untracked(),
            ) {
                Ok(draft) => draft,
                Err(err) => {
                    alert(&err.to_string());
                    return;
                }
            };

            let api = ctx.api.clone();
            set_submitting.set(true);
            spawn_local(async move {
                match api.submit_rating(&rater_id, &draft).await {
                    Ok(()) => {
                        alert("Rating submitted successfully!");
                        rated_user_id.set(String::new());
                        score.set(5);
                        review.set(String::new());
                        fetch.call(());
                    }
                    Err(err) => {
                        alert(&err.user_message("Error submitting rating. Please check the user ID."))
                    }
                }
                set_submitting.set(false);
            });
        }
    };

    let my_id = ctx.current_user_id().unwrap_or_default();

    view! {
        <div class="ratings-page">
            <h1>"Ratings & Reviews"</h1>

            <div class="rating-summary">
                {move || profile.get().map(|p| {
                    let average = p.average_rating.unwrap_or(0.0);
                    view! {
                        <div class="average-rating">
                            <span class="rating-number">{format!("{average:.1}")}</span>
                            <span class="stars">{stars(average)}</span>
                            <p>{format!("Based on {} ratings", p.total_ratings)}</p>
                        </div>
                    }
                })}
                <p class="user-id-hint">"Your user ID: "<code>{my_id}</code></p>
            </div>

            <form class="rating-form" on:submit=submit>
                <h2>"Rate a User"</h2>
                <div class="form-group">
                    <label>"User ID"</label>
                    <input
                        type="text"
                        placeholder="24 character user ID"
                        prop:value=move || rated_user_id.get()
                        on:input=move |ev| rated_user_id.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Rating"</label>
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
                </div>
                <div class="form-group">
                    <label>"Review"</label>
                    <textarea
                        rows="4"
                        placeholder="Share your experience..."
                        prop:value=move || review.get()
                        on:input=move |ev| review.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit Rating" }}
                </button>
            </form>

            <div class="ratings-list">
                <h2>"Ratings Received"</h2>
                {move || {
                    if loading.get() {
                        return view! { <div class="loading-spinner"></div> }.into_view();
                    }
                    let received = ratings.get();
                    if received.is_empty() {
                        return view! {
                            <p class="empty-state">"No ratings yet. Great interactions start here!"</p>
                        }
                        .into_view();
                    }
                    received
                        .into_iter()
                        .map(|rating| view! {
                            <div class="rating-card">
                                <div class="rating-header">
                                    <strong>{rating.rater_name().to_string()}</strong>
                                    <span class="stars">{stars(f64::from(rating.rating))}</span>
                                    <span class="rating-date">{rating.created_at.format("%d %b %Y").to_string()}</span>
                                </div>
                                {rating.review.clone().filter(|r| !r.is_empty()).map(|text| view! {
                                    <p class="review-text">{text}</p>
                                })}
                            </div>
                        })
                        .collect::<Vec<_>>()
                        .into_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::stars;

    #[test]
    fn stars_render_filled_then_empty() {
        assert_eq!(stars(3.7), "★★★☆☆");
        assert_eq!(stars(0.0), "☆☆☆☆☆");
        assert_eq!(stars(5.0), "★★★★★");
    }
}
