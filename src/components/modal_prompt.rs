use leptos::*;

/// Modal with a single free-text field and confirm/cancel buttons.
#[component]
pub fn ModalPrompt(
    #[prop(into)] is_open: Signal<bool>,
    title: &'static str,
    message: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(default = "Confirm")] confirm_label: &'static str,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.call(())>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <h3>{title}</h3>
                    <p>{message}</p>
                    <textarea
                        class="input-field"
                        rows="3"
                        placeholder=placeholder
                        prop:value=move || value.get()
                        on:input=move |ev| on_change.call(event_target_value(&ev))
                    ></textarea>
                    <div class="modal-actions">
                        <button class="btn-secondary" on:click=move |_| on_cancel.call(())>"Close"</button>
                        <button class="btn-primary" on:click=move |_| on_confirm.call(())>{confirm_label}</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
