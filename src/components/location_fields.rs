use crate::components::autocomplete_input::AutocompleteInput;
use crate::filters::filter_by_prefix;
use crate::lookup::{cities_for, zip_code_for, STATES};
use crate::models::listing::PickupLocation;
use leptos::*;

/// Pickup address with cascading state and city suggestions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPicker {
    pub location: PickupLocation,
    pub state_suggestions: Vec<String>,
    pub city_suggestions: Vec<String>,
}

impl LocationPicker {
    pub fn from_location(location: PickupLocation) -> Self {
        Self { location, ..Default::default() }
    }

    /// Typing a state invalidates the city.
    pub fn type_state(&mut self, value: &str) {
        self.location.state = value.to_string();
        self.location.city.clear();
        self.state_suggestions = filter_by_prefix(STATES, value);
        self.city_suggestions.clear();
    }

    pub fn select_state(&mut self, state: &str) {
        self.location.state = state.to_string();
        self.location.city.clear();
        self.location.zip_code = zip_code_for(state).unwrap_or_default().to_string();
        self.state_suggestions.clear();
        self.city_suggestions.clear();
    }

    pub fn type_city(&mut self, value: &str) {
        self.location.city = value.to_string();
        self.city_suggestions = if self.city_enabled() {
            filter_by_prefix(cities_for(&self.location.state), value)
        } else {
            Vec::new()
        };
    }

    pub fn select_city(&mut self, city: &str) {
        self.location.city = city.to_string();
        self.city_suggestions.clear();
    }

    pub fn dismiss(&mut self) {
        self.state_suggestions.clear();
        self.city_suggestions.clear();
    }

    pub fn city_enabled(&self) -> bool {
        !self.location.state.trim().is_empty()
    }
}

#[component]
pub fn LocationFields(picker: RwSignal<LocationPicker>) -> impl IntoView {
    let state_value = Signal::derive(move || picker.with(|p| p.location.state.clone()));
    let city_value = Signal::derive(move || picker.with(|p| p.location.city.clone()));
    let state_suggestions = Signal::derive(move || picker.with(|p| p.state_suggestions.clone()));
    let city_suggestions = Signal::derive(move || picker.with(|p| p.city_suggestions.clone()));
    let city_disabled = Signal::derive(move || picker.with(|p| !p.city_enabled()));
    let dismiss = Callback::new(move |_: ()| picker.update(LocationPicker::dismiss));

    view! {
        <fieldset>
            <legend>"Pickup Location"</legend>
            <div class="form-group">
                <label>"Street"</label>
                <input
                    type="text"
                    class="input-field"
                    prop:value=move || picker.with(|p| p.location.street.clone())
                    on:input=move |ev| {
                        let street = event_target_value(&ev);
                        picker.update(|p| p.location.street = street);
                    }
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label>"State"</label>
                    <AutocompleteInput
                        value=state_value
                        suggestions=state_suggestions
                        on_input=Callback::new(move |typed: String| picker.update(|p| p.type_state(&typed)))
                        on_select=Callback::new(move |state: String| picker.update(|p| p.select_state(&state)))
                        on_dismiss=dismiss
                        placeholder="Start typing a state"
                    />
                </div>
                <div class="form-group">
                    <label>"City"</label>
                    <AutocompleteInput
                        value=city_value
                        suggestions=city_suggestions
                        on_input=Callback::new(move |typed: String| picker.update(|p| p.type_city(&typed)))
                        on_select=Callback::new(move |city: String| picker.update(|p| p.select_city(&city)))
                        on_dismiss=dismiss
                        disabled=city_disabled
                        placeholder="Choose a state first"
                    />
                </div>
                <div class="form-group">
                    <label>"Zip Code"</label>
                    <input
                        type="text"
                        class="input-field"
                        prop:value=move || picker.with(|p| p.location.zip_code.clone())
                        on:input=move |ev| {
                            let zip = event_target_value(&ev);
                            picker.update(|p| p.location.zip_code = zip);
                        }
                    />
                </div>
            </div>
        </fieldset>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_a_state_suggests_and_clears_city() {
        let mut picker = LocationPicker::default();
        picker.select_state("Maharashtra");
        picker.select_city("Pune");

        picker.type_state("ma");
        assert_eq!(picker.state_suggestions, vec!["Madhya Pradesh", "Maharashtra", "Manipur"]);
        assert_eq!(picker.location.city, "");
        assert!(picker.city_suggestions.is_empty());
    }

    #[test]
    fn selecting_a_state_fills_zip_and_closes_lists() {
        let mut picker = LocationPicker::default();
        picker.type_state("kar");
        picker.select_state("Karnataka");
        assert_eq!(picker.location.state, "Karnataka");
        assert_eq!(picker.location.zip_code, "560001");
        assert!(picker.state_suggestions.is_empty());
        assert!(picker.city_enabled());
    }

    #[test]
    fn city_suggestions_come_from_the_chosen_state() {
        let mut picker = LocationPicker::default();
        picker.select_state("Rajasthan");
        picker.type_city("j");
        assert_eq!(picker.city_suggestions, vec!["Jaipur", "Jodhpur"]);

        picker.select_city("Jaipur");
        assert_eq!(picker.location.city, "Jaipur");
        assert!(picker.city_suggestions.is_empty());
    }

    #[test]
    fn city_without_state_has_no_candidates() {
        let mut picker = LocationPicker::default();
        assert!(!picker.city_enabled());
        picker.type_city("Pu");
        assert!(picker.city_suggestions.is_empty());
    }

    #[test]
    fn empty_input_closes_suggestions() {
        let mut picker = LocationPicker::default();
        picker.type_state("g");
        assert!(!picker.state_suggestions.is_empty());
        picker.type_state("");
        assert!(picker.state_suggestions.is_empty());
    }
}
