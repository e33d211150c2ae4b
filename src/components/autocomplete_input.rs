use leptos::logging::log;
use leptos::*;
use std::time::Duration;

/// Text input with a suggestion dropdown. The caller owns the suggestions:
/// `on_input` recomputes them, `on_select` and `on_dismiss` close them.
#[component]
pub fn AutocompleteInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] suggestions: Signal<Vec<String>>,
    on_input: Callback<String>,
    on_select: Callback<String>,
    on_dismiss: Callback<()>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let list_id = format!("autocomplete-{}", uuid::Uuid::new_v4());
    let dropdown_id = list_id.clone();

    view! {
        <div class="autocomplete-wrapper">
            <input
                type="text"
                class="input-field"
                autocomplete="off"
                placeholder=placeholder
                aria-controls=list_id
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                on:blur=move |_| {
                    // a click on a suggestion fires after blur
                    spawn_local(async move {
                        gloo_timers::future::sleep(Duration::from_millis(150)).await;
                        on_dismiss.call(());
                    });
                }
            />
            <Show when=move || suggestions.with(|s| !s.is_empty())>
                <ul class="autocomplete-dropdown" role="listbox" id=dropdown_id.clone()>
                    {move || {
                        suggestions
                            .get()
                            .into_iter()
                            .map(|suggestion| {
                                let label = suggestion.clone();
                                view! {
                                    <li
                                        class="autocomplete-item"
                                        role="option"
                                        on:click=move |_| {
                                            log!("[AUTOCOMPLETE] Selected {}", suggestion);
                                            on_select.call(suggestion.clone());
                                        }
                                    >
                                        {label}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}
