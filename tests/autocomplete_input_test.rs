#![cfg(target_arch = "wasm32")]

use foodrescue::components::autocomplete_input::AutocompleteInput;
use foodrescue::components::location_fields::{LocationFields, LocationPicker};
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into()
}

fn suggestion_items(root: &web_sys::HtmlElement) -> Vec<web_sys::HtmlElement> {
    let nodes = root.query_selector_all(".autocomplete-dropdown li").unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.unchecked_into())
        .collect()
}

#[wasm_bindgen_test]
async fn test_dropdown_lists_suggestions_and_selects() {
    let root = container("autocomplete-select");
    let value = create_rw_signal(String::new());
    let suggestions = create_rw_signal(vec!["Goa".to_string(), "Gujarat".to_string()]);
    let selected = create_rw_signal(None::<String>);

    mount_to(root.clone(), move || {
        view! {
            <AutocompleteInput
                value=value
                suggestions=suggestions
                on_input=Callback::new(move |typed: String| value.set(typed))
                on_select=Callback::new(move |picked: String| {
                    selected.set(Some(picked.clone()));
                    value.set(picked);
                    suggestions.set(Vec::new());
                })
                on_dismiss=Callback::new(move |_: ()| suggestions.set(Vec::new()))
            />
        }
    });
    sleep(Duration::from_millis(50)).await;

    let items = suggestion_items(&root);
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].text_content().unwrap_or_default(), "Gujarat");

    items[1].click();
    sleep(Duration::from_millis(50)).await;

    assert_eq!(selected.get_untracked().as_deref(), Some("Gujarat"));
    assert!(suggestion_items(&root).is_empty());
}

#[wasm_bindgen_test]
async fn test_city_input_disabled_until_state_chosen() {
    let root = container("location-fields");
    let picker = create_rw_signal(LocationPicker::default());

    mount_to(root.clone(), move || view! { <LocationFields picker=picker/> });
    sleep(Duration::from_millis(50)).await;

    let city_input = || -> web_sys::HtmlInputElement {
        root.query_selector_all("input.input-field")
            .unwrap()
            .item(2)
            .unwrap()
            .unchecked_into()
    };
    assert!(city_input().disabled());

    picker.update(|p| p.select_state("Maharashtra"));
    sleep(Duration::from_millis(50)).await;

    assert!(!city_input().disabled());
    assert_eq!(picker.get_untracked().location.zip_code, "400001");
}
