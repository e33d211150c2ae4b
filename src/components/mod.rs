pub mod auth_pages;
pub mod autocomplete_input;
pub mod dashboard_page;
pub mod food_card;
pub mod home_page;
pub mod listing_details_page;
pub mod listing_form;
pub mod listings_page;
pub mod location_fields;
pub mod modal_prompt;
pub mod my_requests_page;
pub mod navbar;
pub mod profile_page;
pub mod ratings_page;
