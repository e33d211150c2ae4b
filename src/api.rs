//! REST façade over the FoodRescue backend.
//!
//! Every call reads the persisted session and attaches its bearer token, the way
//! a request interceptor would. Failures come back as [`ApiError`] carrying the
//! HTTP status and the server's `error` text, if any.

use crate::config::ClientConfig;
use crate::error::{ApiError, AppError, ValidationError};
use crate::models::listing::{Listing, ListingStatus, NewListing};
use crate::models::rating::{Rating, RatingDraft};
use crate::models::request::{NewRequest, Request, RequestAction};
use crate::models::user::{
    AuthResponse, Credentials, Ngo, ProfileUpdate, Registration, UserEnvelope, UserProfile,
};
use crate::session::SessionStore;
use gloo_net::http::Request as HttpRequest;
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// An image file ready to be sent as the multipart `image` field.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        let content_type = content_type.into();
        if !content_type.starts_with("image/") {
            return Err(ValidationError::NotAnImage);
        }
        Ok(Self { file_name: file_name.into(), content_type, bytes })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Image(ImageUpload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub bearer: Option<String>,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one request over the wire.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// `fetch` through `gloo-net`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => HttpRequest::get(&request.url),
            Method::Post => HttpRequest::post(&request.url),
            Method::Put => HttpRequest::put(&request.url),
            Method::Delete => HttpRequest::delete(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        let outgoing = match &request.body {
            Body::Empty => builder.build()?,
            Body::Json(value) => builder.json(value)?,
            Body::Image(upload) => builder.body(multipart_image(upload)?)?,
        };

        let response = outgoing.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}

fn multipart_image(upload: &ImageUpload) -> Result<web_sys::FormData, ApiError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(upload.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;

    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("image", &blob, &upload.file_name)
        .map_err(js_error)?;
    Ok(form)
}

fn js_error(err: JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[derive(Serialize)]
struct RejectBody<'a> {
    reason: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CancelBody<'a> {
    cancel_reason: &'a str,
}

pub struct ApiClient<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: Rc<T>,
    sessions: Rc<dyn SessionStore>,
}

impl<T: Transport> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: Rc::clone(&self.transport),
            sessions: Rc::clone(&self.sessions),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ClientConfig, transport: T, sessions: Rc<dyn SessionStore>) -> Self {
        Self { config, transport: Rc::new(transport), sessions }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest {
            method,
            url: self.config.endpoint(path),
            query: Vec::new(),
            bearer: self.sessions.load().map(|s| s.token),
            body: Body::Empty,
        }
    }

    fn with_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiRequest, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let mut request = self.request(method, path);
        request.body = Body::Json(value);
        Ok(request)
    }

    async fn exchange(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method = request.method;
        let url = request.url.clone();
        log!("[API] {:?} {}", method, url);

        let response = self.transport.send(request).await.map_err(|err| {
            error!("[API] {:?} {} failed: {}", method, url, err);
            err
        })?;
        if !response.is_success() {
            let err = ApiError::from_response(response.status, &response.body);
            error!("[API] {:?} {} returned {}: {:?}", method, url, response.status, err);
            return Err(err);
        }
        Ok(response)
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.exchange(request).await?;
        serde_json::from_str(&response.body).map_err(|err| {
            error!("[API] Could not decode response: {}", err);
            ApiError::Decode(err.to_string())
        })
    }

    async fn execute(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.exchange(request).await.map(|_| ())
    }

    // ---- auth ----

    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ApiError> {
        self.fetch(self.with_json(Method::Post, "/users/register", registration)?).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ApiError> {
        self.fetch(self.with_json(Method::Post, "/users/login", credentials)?).await
    }

    // ---- listings ----

    pub async fn create_listing(&self, listing: &NewListing) -> Result<(), ApiError> {
        self.execute(self.with_json(Method::Post, "/food-listings", listing)?).await
    }

    /// Server-side filtering is by status only; `None` lists every status.
    pub async fn list_listings(
        &self,
        status: Option<ListingStatus>,
    ) -> Result<Vec<Listing>, ApiError> {
        let mut request = self.request(Method::Get, "/food-listings");
        if let Some(status) = status {
            request.query.push(("status".to_string(), status.as_str().to_string()));
        }
        self.fetch(request).await
    }

    pub async fn get_listing(&self, id: &str) -> Result<Listing, ApiError> {
        self.fetch(self.request(Method::Get, &format!("/food-listings/{}", segment(id))))
            .await
    }

    pub async fn update_listing(&self, id: &str, listing: &NewListing) -> Result<(), ApiError> {
        let path = format!("/food-listings/{}", segment(id));
        self.execute(self.with_json(Method::Put, &path, listing)?).await
    }

    pub async fn delete_listing(&self, id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::Delete, &format!("/food-listings/{}", segment(id))))
            .await
    }

    pub async fn my_listings(&self) -> Result<Vec<Listing>, ApiError> {
        self.fetch(self.request(Method::Get, "/food-listings/my-listings")).await
    }

    // ---- requests ----

    pub async fn create_request(&self, request: &NewRequest) -> Result<(), ApiError> {
        self.execute(self.with_json(Method::Post, "/requests", request)?).await
    }

    pub async fn get_request(&self, id: &str) -> Result<Request, ApiError> {
        self.fetch(self.request(Method::Get, &format!("/requests/{}", segment(id)))).await
    }

    pub async fn my_requests(&self) -> Result<Vec<Request>, ApiError> {
        self.fetch(self.request(Method::Get, "/requests/my-requests")).await
    }

    pub async fn requests_for_my_listings(&self) -> Result<Vec<Request>, ApiError> {
        self.fetch(self.request(Method::Get, "/requests/my-listings-requests")).await
    }

    /// Proposes a lifecycle transition. Legality is the server's call.
    pub async fn apply_action(&self, id: &str, action: &RequestAction) -> Result<(), ApiError> {
        let id = segment(id);
        let request = match action {
            RequestAction::Accept => self.request(Method::Put, &format!("/requests/{id}/accept")),
            RequestAction::Complete => {
                self.request(Method::Put, &format!("/requests/{id}/complete"))
            }
            RequestAction::Reject { reason } => self.with_json(
                Method::Put,
                &format!("/requests/{id}/reject"),
                &RejectBody { reason },
            )?,
            RequestAction::Cancel { reason } => self.with_json(
                Method::Put,
                &format!("/requests/{id}/cancel"),
                &CancelBody { cancel_reason: reason },
            )?,
        };
        self.execute(request).await
    }

    pub async fn accept_request(&self, id: &str) -> Result<(), ApiError> {
        self.apply_action(id, &RequestAction::Accept).await
    }

    pub async fn reject_request(&self, id: &str, reason: &str) -> Result<(), ApiError> {
        self.apply_action(id, &RequestAction::reject(reason)).await
    }

    pub async fn complete_request(&self, id: &str) -> Result<(), ApiError> {
        self.apply_action(id, &RequestAction::Complete).await
    }

    pub async fn cancel_request(&self, id: &str, reason: &str) -> Result<(), ApiError> {
        self.apply_action(id, &RequestAction::cancel(reason)).await
    }

    // ---- ratings ----

    /// Runs the client-side guards for `rater_id` and only then posts the rating.
    pub async fn submit_rating(&self, rater_id: &str, draft: &RatingDraft) -> Result<(), AppError> {
        draft.check(rater_id)?;
        self.execute(self.with_json(Method::Post, "/ratings", draft)?).await?;
        Ok(())
    }

    pub async fn ratings_for_user(&self, user_id: &str) -> Result<Vec<Rating>, ApiError> {
        self.fetch(self.request(Method::Get, &format!("/ratings/{}", segment(user_id))))
            .await
    }

    // ---- profile ----

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.fetch(self.request(Method::Get, "/users/profile")).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let envelope: UserEnvelope =
            self.fetch(self.with_json(Method::Put, "/users/profile", update)?).await?;
        Ok(envelope.user)
    }

    pub async fn upload_profile_image(&self, upload: ImageUpload) -> Result<UserProfile, ApiError> {
        let mut request = self.request(Method::Post, "/users/profile-image");
        request.body = Body::Image(upload);
        let envelope: UserEnvelope = self.fetch(request).await?;
        Ok(envelope.user)
    }

    // ---- NGOs ----

    pub async fn register_ngo(&self, ngo: &Ngo) -> Result<Ngo, ApiError> {
        self.fetch(self.with_json(Method::Post, "/ngos", ngo)?).await
    }

    pub async fn list_ngos(&self, verified_only: bool) -> Result<Vec<Ngo>, ApiError> {
        let mut request = self.request(Method::Get, "/ngos");
        if verified_only {
            request.query.push(("verified".to_string(), "true".to_string()));
        }
        self.fetch(request).await
    }

    pub async fn get_ngo(&self, id: &str) -> Result<Ngo, ApiError> {
        self.fetch(self.request(Method::Get, &format!("/ngos/{}", segment(id)))).await
    }

    pub async fn update_ngo(&self, id: &str, ngo: &Ngo) -> Result<Ngo, ApiError> {
        self.fetch(self.with_json(Method::Put, &format!("/ngos/{}", segment(id)), ngo)?)
            .await
    }

    pub async fn verify_ngo(&self, id: &str) -> Result<(), ApiError> {
        self.execute(self.request(Method::Put, &format!("/ngos/{}/verify", segment(id))))
            .await
    }

    pub async fn my_ngo(&self) -> Result<Ngo, ApiError> {
        self.fetch(self.request(Method::Get, "/ngos/ngo/my-ngo")).await
    }
}
