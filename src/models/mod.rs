pub mod listing;
pub mod rating;
pub mod request;
pub mod user;
