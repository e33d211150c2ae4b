use foodrescue::api::{ApiClient, ApiRequest, ApiResponse, Body, ImageUpload, Method, Transport};
use foodrescue::components::dashboard_page::load_dashboard;
use foodrescue::config::ClientConfig;
use foodrescue::context::AppContext;
use foodrescue::error::{ApiError, AppError, ValidationError};
use foodrescue::models::listing::ListingStatus;
use foodrescue::models::rating::RatingDraft;
use foodrescue::models::request::RequestAction;
use foodrescue::models::user::{Credentials, UserProfile};
use foodrescue::session::{MemoryStore, Session, SessionStore};
use serde_json::json;
use leptos::{create_effect, SignalGet, SignalGetUntracked};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const BASE: &str = "http://api.test/api";
const ME: &str = "64b7f0c2a1b2c3d4e5f60718";

/// Records every request and answers from a table of `(path suffix, response)`.
/// Unrouted paths get `200 {}`.
#[derive(Default)]
struct RecordingTransport {
    sent: RefCell<Vec<ApiRequest>>,
    routes: Vec<(String, ApiResponse)>,
}

impl RecordingTransport {
    fn route(mut self, suffix: &str, status: u16, body: &str) -> Self {
        self.routes.push((
            suffix.to_string(),
            ApiResponse { status, body: body.to_string() },
        ));
        self
    }

    fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self
            .routes
            .iter()
            .find(|(suffix, _)| request.url.ends_with(suffix.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or(ApiResponse { status: 200, body: "{}".to_string() });
        self.sent.borrow_mut().push(request);
        Ok(response)
    }
}

fn session() -> Session {
    Session {
        token: "secret-token".to_string(),
        user: UserProfile { id: ME.to_string(), name: "Asha".to_string(), ..Default::default() },
    }
}

fn client(transport: RecordingTransport, signed_in: bool) -> ApiClient<RecordingTransport> {
    let store: Rc<dyn SessionStore> = if signed_in {
        Rc::new(MemoryStore::with_session(session()))
    } else {
        Rc::new(MemoryStore::default())
    };
    ApiClient::new(ClientConfig::with_base_url(BASE), transport, store)
}

fn listing_json(id: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "foodName": "Rice",
        "quantity": 10.0,
        "unit": "kg",
        "category": "grains",
        "expiryDate": "2030-01-01T00:00:00Z",
        "status": "available"
    })
}

#[tokio::test]
async fn bearer_token_follows_the_session() {
    let api = client(RecordingTransport::default(), true);
    api.profile().await.ok();
    let anonymous = client(RecordingTransport::default(), false);
    anonymous.profile().await.ok();

    assert_eq!(api.transport().sent()[0].bearer.as_deref(), Some("secret-token"));
    assert_eq!(anonymous.transport().sent()[0].bearer, None);
}

#[tokio::test]
async fn listing_status_is_sent_only_when_chosen() {
    let transport = RecordingTransport::default().route("/food-listings", 200, "[]");
    let api = client(transport, false);

    api.list_listings(Some(ListingStatus::Available)).await.unwrap();
    api.list_listings(None).await.unwrap();

    let sent = api.transport().sent();
    assert_eq!(sent[0].url, format!("{BASE}/food-listings"));
    assert_eq!(sent[0].query, vec![("status".to_string(), "available".to_string())]);
    assert!(sent[1].query.is_empty());
}

#[tokio::test]
async fn blank_cancel_reason_is_replaced_with_the_default() {
    let api = client(RecordingTransport::default(), true);
    api.cancel_request("r1", "   ").await.unwrap();

    let sent = api.transport().sent();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].url, format!("{BASE}/requests/r1/cancel"));
    assert_eq!(sent[0].body, Body::Json(json!({ "cancelReason": "Cancelled by user" })));
}

#[tokio::test]
async fn owner_actions_hit_their_endpoints() {
    let api = client(RecordingTransport::default(), true);
    api.reject_request("r2", "Already given away").await.unwrap();
    api.apply_action("r3", &RequestAction::Accept).await.unwrap();
    api.complete_request("r3").await.unwrap();

    let sent = api.transport().sent();
    assert_eq!(sent[0].url, format!("{BASE}/requests/r2/reject"));
    assert_eq!(sent[0].body, Body::Json(json!({ "reason": "Already given away" })));
    assert_eq!(sent[1].url, format!("{BASE}/requests/r3/accept"));
    assert_eq!(sent[1].body, Body::Empty);
    assert_eq!(sent[2].url, format!("{BASE}/requests/r3/complete"));
}

#[tokio::test]
async fn self_rating_never_reaches_the_network() {
    let api = client(RecordingTransport::default(), true);
    let draft = RatingDraft::for_user_id(ME, 5, "Me again").unwrap();

    let result = api.submit_rating(ME, &draft).await;

    assert_eq!(result, Err(AppError::Validation(ValidationError::SelfRating)));
    assert!(api.transport().sent().is_empty());
}

#[tokio::test]
async fn rating_for_someone_else_is_posted() {
    let api = client(RecordingTransport::default(), true);
    let other = "64b7f0c2a1b2c3d4e5f60000";
    let draft = RatingDraft::for_user_id(other, 4, "Smooth pickup").unwrap();

    api.submit_rating(ME, &draft).await.unwrap();

    let sent = api.transport().sent();
    assert_eq!(sent[0].url, format!("{BASE}/ratings"));
    assert_eq!(
        sent[0].body,
        Body::Json(json!({ "ratedUserId": other, "rating": 4, "review": "Smooth pickup" }))
    );
}

#[tokio::test]
async fn server_error_text_reaches_the_caller() {
    let transport = RecordingTransport::default()
        .route("/requests/my-requests", 400, r#"{"error":"Requested quantity exceeds available"}"#)
        .route("/users/profile", 500, "Internal Server Error");
    let api = client(transport, true);

    let err = api.my_requests().await.unwrap_err();
    let rejected = api.profile().await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message("fallback"), "Requested quantity exceeds available");
    assert_eq!(rejected.user_message("Unable to load profile"), "Unable to load profile");
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let transport = RecordingTransport::default().route("/food-listings/abc", 200, "not json");
    let api = client(transport, false);

    let err = api.get_listing("abc").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn path_ids_are_url_encoded() {
    let api = client(RecordingTransport::default(), false);
    api.delete_listing("a b/c").await.ok();

    let sent = api.transport().sent();
    assert_eq!(sent[0].method, Method::Delete);
    assert_eq!(sent[0].url, format!("{BASE}/food-listings/a%20b%2Fc"));
}

#[tokio::test]
async fn dashboard_joins_all_three_reads() {
    let listings = json!([listing_json("l1"), listing_json("l2")]).to_string();
    let transport = RecordingTransport::default()
        .route("/food-listings/my-listings", 200, &listings)
        .route("/requests/my-requests", 200, "[]")
        .route("/requests/my-listings-requests", 200, "[]");
    let api = client(transport, true);

    let data = load_dashboard(&api).await.unwrap();

    assert_eq!(data.my_listings.len(), 2);
    assert!(data.my_requests.is_empty());
    assert_eq!(api.transport().sent().len(), 3);
}

#[tokio::test]
async fn dashboard_fails_when_any_read_fails() {
    let transport = RecordingTransport::default()
        .route("/food-listings/my-listings", 200, "[]")
        .route("/requests/my-requests", 503, "")
        .route("/requests/my-listings-requests", 200, "[]");
    let api = client(transport, true);

    let err = load_dashboard(&api).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn profile_image_must_be_an_image() {
    assert_eq!(
        ImageUpload::new("notes.pdf", "application/pdf", vec![1, 2, 3]),
        Err(ValidationError::NotAnImage)
    );

    let user = json!({ "user": { "_id": ME, "name": "Asha", "profileImage": "/img/asha.png" } });
    let transport =
        RecordingTransport::default().route("/users/profile-image", 200, &user.to_string());
    let api = client(transport, true);
    let upload = ImageUpload::new("asha.png", "image/png", vec![137, 80, 78, 71]).unwrap();

    let updated = api.upload_profile_image(upload.clone()).await.unwrap();

    assert_eq!(updated.profile_image.as_deref(), Some("/img/asha.png"));
    assert_eq!(api.transport().sent()[0].body, Body::Image(upload));
}

#[tokio::test]
async fn ngo_directory_can_filter_to_verified() {
    let transport = RecordingTransport::default().route("/ngos", 200, "[]");
    let api = client(transport, true);

    api.list_ngos(true).await.unwrap();
    api.list_ngos(false).await.unwrap();

    let sent = api.transport().sent();
    assert_eq!(sent[0].query, vec![("verified".to_string(), "true".to_string())]);
    assert!(sent[1].query.is_empty());
}

#[tokio::test]
async fn login_persists_the_session_and_logout_forgets_it() {
    let runtime = leptos::create_runtime();

    let auth = json!({
        "token": "fresh-token",
        "user": { "_id": ME, "name": "Asha", "role": "ngo" }
    });
    let transport = RecordingTransport::default().route("/users/login", 200, &auth.to_string());
    let store = Rc::new(MemoryStore::default());
    let ctx = AppContext::new(ClientConfig::with_base_url(BASE), transport, store.clone());
    assert!(!ctx.is_authenticated());

    let credentials = Credentials { email: "asha@example.com".into(), password: "pw".into() };
    let user = ctx.login(&credentials).await.unwrap();

    assert_eq!(user.name, "Asha");
    assert!(ctx.is_authenticated());
    assert_eq!(store.load().map(|s| s.token), Some("fresh-token".to_string()));

    ctx.api.profile().await.ok();
    assert_eq!(ctx.api.transport().sent()[1].bearer.as_deref(), Some("fresh-token"));

    ctx.logout();
    assert!(!ctx.is_authenticated());
    assert!(store.load().is_none());

    runtime.dispose();
}

#[test]
fn signed_in_flips_on_login_and_logout_but_not_on_profile_refresh() {
    let runtime = leptos::create_runtime();

    let store = Rc::new(MemoryStore::default());
    let ctx = AppContext::new(ClientConfig::with_base_url(BASE), RecordingTransport::default(), store);
    let signed_in = ctx.signed_in();
    let runs = Rc::new(Cell::new(0));
    {
        let runs = Rc::clone(&runs);
        create_effect(move |_| {
            signed_in.get();
            runs.set(runs.get() + 1);
        });
    }
    assert!(!signed_in.get_untracked());

    ctx.establish(session());
    assert!(signed_in.get_untracked());

    ctx.refresh_user(UserProfile { name: "Asha K".to_string(), ..session().user });
    assert_eq!(ctx.current_user().map(|u| u.name), Some("Asha K".to_string()));

    ctx.logout();
    assert!(!signed_in.get_untracked());
    // initial run, sign in, sign out
    assert_eq!(runs.get(), 3);

    runtime.dispose();
}
