use crate::context::AppContext;
use crate::models::user::{Credentials, Registration, Role};
use leptos::*;
use leptos_router::*;

#[component]
pub fn LoginPage(ctx: AppContext) -> impl IntoView {
    let navigate = use_navigate();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match ctx.login(&credentials).await {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(err) => set_error.set(Some(err.user_message("Login failed"))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=submit>
                <h1>"Welcome Back"</h1>
                {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        class="input-field"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        class="input-field"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="auth-switch">"Don't have an account? "<A href="/register">"Register"</A></p>
            </form>
        </div>
    }
}

#[component]
pub fn RegisterPage(ctx: AppContext) -> impl IntoView {
    let navigate = use_navigate();
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal(Role::Donor);
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let registration = Registration {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            phone: phone.get_untracked().trim().to_string(),
            role: role.get_untracked(),
        };
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match ctx.register(&registration).await {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(err) => set_error.set(Some(err.user_message("Registration failed"))),
            }
            set_submitting.set(false);
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, signal: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=kind
                    class="input-field"
                    required=kind != "tel"
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=submit>
                <h1>"Join FoodRescue"</h1>
                {move || error.get().map(|message| view! { <div class="error-message">{message}</div> })}
                {text_field("Name", "text", name)}
                {text_field("Email", "email", email)}
                {text_field("Phone", "tel", phone)}
                {text_field("Password", "password", password)}
                <div class="form-group">
                    <label>"I am a"</label>
                    <select
                        class="input-field"
                        on:change=move |ev| {
                            let picked = match event_target_value(&ev).as_str() {
                                "ngo" => Role::Ngo,
                                "recipient" => Role::Recipient,
                                _ => Role::Donor,
                            };
                            role.set(picked);
                        }
                    >
                        {[Role::Donor, Role::Ngo, Role::Recipient]
                            .into_iter()
                            .map(|r| {
                                let value = r.label().to_lowercase();
                                view! { <option value=value selected=move || role.get() == r>{r.label()}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
                <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-switch">"Already have an account? "<A href="/login">"Login"</A></p>
            </form>
        </div>
    }
}
