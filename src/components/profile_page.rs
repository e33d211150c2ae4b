use crate::api::ImageUpload;
use crate::context::AppContext;
use crate::models::user::{ProfileUpdate, UserProfile};
use crate::utils::dialog::alert;
use leptos::logging::{error, log};
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

/// Reads the picked file fully into memory. `None` when nothing was picked.
async fn read_picked_image(input: &HtmlInputElement) -> Option<Result<ImageUpload, String>> {
    let file = input.files()?.get(0)?;
    // checked before the bytes are read
    if let Err(err) = ImageUpload::new(file.name(), file.type_(), Vec::new()) {
        return Some(Err(err.to_string()));
    }
    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(err) => return Some(Err(format!("Could not read file: {err:?}"))),
    };
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Some(ImageUpload::new(file.name(), file.type_(), bytes).map_err(|e| e.to_string()))
}

#[component]
pub fn ProfilePage(ctx: AppContext) -> impl IntoView {
    let (profile, set_profile) = create_signal(None::<UserProfile>);
    let form = create_rw_signal(ProfileUpdate::default());
    let (loading, set_loading) = create_signal(true);
    let (editing, set_editing) = create_signal(false);
    let (saving, set_saving) = create_signal(false);
    let (uploading, set_uploading) = create_signal(false);
    let (error_text, set_error_text) = create_signal(None::<String>);

    {
        let api = ctx.api.clone();
        spawn_local(async move {
            match api.profile().await {
                Ok(found) => {
                    form.set(ProfileUpdate::from_profile(&found));
                    set_profile.set(Some(found));
                }
                Err(err) => {
                    error!("[PROFILE] Error fetching profile: {}", err);
                    set_error_text.set(Some(err.user_message("Unable to load profile")));
                }
            }
            set_loading.set(false);
        });
    }

    let save = {
        let ctx = ctx.clone();
        Callback::new(move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let update = form.get_untracked();
            let ctx = ctx.clone();
            set_saving.set(true);
            spawn_local(async move {
                match ctx.api.update_profile(&update).await {
                    Ok(user) => {
                        log!("[PROFILE] Updated profile for {}", user.name);
                        form.set(ProfileUpdate::from_profile(&user));
                        set_profile.set(Some(user.clone()));
                        ctx.refresh_user(user);
                        set_editing.set(false);
                        alert("Profile updated successfully!");
                    }
                    Err(err) => alert(&err.user_message("Error updating profile")),
                }
                set_saving.set(false);
            });
        })
    };

    let cancel = move |_| {
        if let Some(loaded) = profile.get_untracked() {
            form.set(ProfileUpdate::from_profile(&loaded));
        }
        set_editing.set(false);
    };

    let upload = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let ctx = ctx.clone();
        spawn_local(async move {
            let upload = match read_picked_image(&input).await {
                None => return,
                Some(Ok(upload)) => upload,
                Some(Err(message)) => {
                    alert(&message);
                    return;
                }
            };
            set_uploading.set(true);
            match ctx.api.upload_profile_image(upload).await {
                Ok(user) => {
                    set_profile.set(Some(user.clone()));
                    ctx.refresh_user(user);
                    alert("Profile image updated successfully!");
                }
                Err(err) => alert(&err.user_message("Error uploading image")),
            }
            set_uploading.set(false);
        });
    };

    // Text inputs all write through the same way.
    let bind = move |apply: fn(&mut ProfileUpdate, String)| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            form.update(|f| apply(f, value));
        }
    };

    view! {
        <div class="profile-page">
            {move || error_text.get().map(|message| view! { <div class="error-message">{message}</div> })}
            <Show when=move || !loading.get() fallback=|| view! { <div class="loading-spinner"></div> }>
                <div class="profile-header">
                    <div class="profile-image-section">
                        {move || {
                            let current = profile.get();
                            match current.as_ref().and_then(|p| p.profile_image.clone()) {
                                Some(src) => view! { <img class="profile-image" src=src alt="Profile"/> }.into_view(),
                                None => {
                                    let initial = current
                                        .and_then(|p| p.name.chars().next())
                                        .map(|c| c.to_uppercase().to_string())
                                        .unwrap_or_default();
                                    view! { <div class="profile-placeholder">{initial}</div> }.into_view()
                                }
                            }
                        }}
                        <label class="upload-btn">
                            {move || if uploading.get() { "Uploading..." } else { "Change Photo" }}
                            <input type="file" accept="image/*" hidden on:change=upload.clone()/>
                        </label>
                    </div>
                    <div class="profile-info">
                        {move || profile.get().map(|p| view! {
                            <h1>{p.name.clone()}</h1>
                            <p class="role-badge">{p.role.label()}</p>
                            <p>{p.email.clone()}</p>
                            <p class="rating">
                                {p.average_rating
                                    .map(|r| format!("{r:.1} ★ ({} ratings)", p.total_ratings))
                                    .unwrap_or_else(|| "No ratings yet".to_string())}
                            </p>
                        })}
                    </div>
                </div>

                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div class="profile-details">
                            {move || profile.get().map(|p| {
                                let address = p.address.clone().unwrap_or_default();
                                view! {
                                    <p><strong>"Phone: "</strong>{p.phone.clone().unwrap_or_else(|| "-".to_string())}</p>
                                    <p><strong>"Bio: "</strong>{p.bio.clone().unwrap_or_else(|| "-".to_string())}</p>
                                    <p>
                                        <strong>"Address: "</strong>
                                        {format!("{}, {}, {} {}", address.street, address.city, address.state, address.zip_code)}
                                    </p>
                                }
                            })}
                            <button class="btn-primary" on:click=move |_| set_editing.set(true)>"Edit Profile"</button>
                        </div>
                    }
                >
                    <form class="profile-form" on:submit=move |ev| save.call(ev)>
                        <div class="form-group">
                            <label>"Name"</label>
                            <input
                                type="text"
                                class="input-field"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=bind(|f, v| f.name = v)
                            />
                        </div>
                        <div class="form-group">
                            <label>"Phone"</label>
                            <input
                                type="tel"
                                class="input-field"
                                prop:value=move || form.with(|f| f.phone.clone())
                                on:input=bind(|f, v| f.phone = v)
                            />
                        </div>
                        <div class="form-group">
                            <label>"Bio"</label>
                            <textarea
                                class="input-field"
                                rows="3"
                                prop:value=move || form.with(|f| f.bio.clone())
                                on:input=bind(|f, v| f.bio = v)
                            ></textarea>
                        </div>
                        <fieldset>
                            <legend>"Address"</legend>
                            <input
                                type="text"
                                class="input-field"
                                placeholder="Street"
                                prop:value=move || form.with(|f| f.address.street.clone())
                                on:input=bind(|f, v| f.address.street = v)
                            />
                            <input
                                type="text"
                                class="input-field"
                                placeholder="City"
                                prop:value=move || form.with(|f| f.address.city.clone())
                                on:input=bind(|f, v| f.address.city = v)
                            />
                            <input
                                type="text"
                                class="input-field"
                                placeholder="State"
                                prop:value=move || form.with(|f| f.address.state.clone())
                                on:input=bind(|f, v| f.address.state = v)
                            />
                            <input
                                type="text"
                                class="input-field"
                                placeholder="Zip Code"
                                prop:value=move || form.with(|f| f.address.zip_code.clone())
                                on:input=bind(|f, v| f.address.zip_code = v)
                            />
                            <input
                                type="text"
                                class="input-field"
                                placeholder="Country"
                                prop:value=move || form.with(|f| f.address.country.clone())
                                on:input=bind(|f, v| f.address.country = v)
                            />
                        </fieldset>
                        <div class="form-actions">
                            <button type="button" class="btn-secondary" on:click=cancel>"Cancel"</button>
                            <button type="submit" class="btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </Show>
            </Show>
        </div>
    }
}
