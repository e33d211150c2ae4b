// src/models/request.rs
use crate::error::ValidationError;
use crate::models::listing::{Listing, PickupLocation};
use crate::models::user::Role;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CANCEL_REASON: &str = "Cancelled by user";
pub const DEFAULT_REJECT_REASON: &str = "Rejected by donor";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Completed => "Completed",
            RequestStatus::Cancelled => "Cancelled",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Rejected => "rejected",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }

    /// Whether the requester is offered a cancel control.
    pub fn can_cancel(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::Accepted)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestStatus::Rejected | RequestStatus::Completed | RequestStatus::Cancelled
        )
    }
}

/// Who is looking at a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    /// Owner of the listing the request targets.
    Owner,
    Requester,
}

/// A transition the client can propose. The server decides whether it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestAction {
    Accept,
    Reject { reason: String },
    Complete,
    Cancel { reason: String },
}

impl RequestAction {
    pub fn reject(reason: &str) -> Self {
        let reason = reason.trim();
        RequestAction::Reject {
            reason: if reason.is_empty() {
                DEFAULT_REJECT_REASON.to_string()
            } else {
                reason.to_string()
            },
        }
    }

    /// Blank reasons are replaced with the default wording.
    pub fn cancel(reason: &str) -> Self {
        let reason = reason.trim();
        RequestAction::Cancel {
            reason: if reason.is_empty() {
                DEFAULT_CANCEL_REASON.to_string()
            } else {
                reason.to_string()
            },
        }
    }

    pub fn actor(&self) -> Viewer {
        match self {
            RequestAction::Cancel { .. } => Viewer::Requester,
            _ => Viewer::Owner,
        }
    }

    pub fn target_status(&self) -> RequestStatus {
        match self {
            RequestAction::Accept => RequestStatus::Accepted,
            RequestAction::Reject { .. } => RequestStatus::Rejected,
            RequestAction::Complete => RequestStatus::Completed,
            RequestAction::Cancel { .. } => RequestStatus::Cancelled,
        }
    }

    pub fn is_allowed_from(&self, status: RequestStatus) -> bool {
        match self {
            RequestAction::Accept | RequestAction::Reject { .. } => {
                status == RequestStatus::Pending
            }
            RequestAction::Complete => status == RequestStatus::Accepted,
            RequestAction::Cancel { .. } => status.can_cancel(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestAction::Accept => "Accept",
            RequestAction::Reject { .. } => "Reject",
            RequestAction::Complete => "Mark Completed",
            RequestAction::Cancel { .. } => "Cancel Request",
        }
    }

    /// Controls shown to `viewer` for a request in `status`. Reasons carry the defaults.
    pub fn exposed_for(status: RequestStatus, viewer: Viewer) -> Vec<RequestAction> {
        let candidates = match viewer {
            Viewer::Owner => vec![
                RequestAction::Accept,
                RequestAction::reject(""),
                RequestAction::Complete,
            ],
            Viewer::Requester => vec![RequestAction::cancel("")],
        };
        candidates
            .into_iter()
            .filter(|action| action.is_allowed_from(status))
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    Personal,
    Organization,
}

impl RequestType {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Ngo => RequestType::Organization,
            _ => RequestType::Personal,
        }
    }
}

/// Requester reference as populated on a request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RequesterSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Listing reference as populated on a request. The server may send only a
/// few fields, so every one of them is optional.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "foodName", default)]
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub pickup_location: Option<PickupLocation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub food_listing: Option<ListingSummary>,
    #[serde(default)]
    pub requester: Option<RequesterSummary>,
    pub quantity_requested: f64,
    pub pickup_date: DateTime<Utc>,
    #[serde(default)]
    pub pickup_time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: RequestStatus,
    #[serde(default)]
    pub request_type: Option<RequestType>,
    #[serde(default)]
    pub response_message: Option<String>,
    #[serde(default)]
    pub cancel_reason: Option<String>,
}

impl Request {
    pub fn listing_name(&self) -> &str {
        self.food_listing
            .as_ref()
            .map(|l| l.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Listing Unavailable")
    }

    pub fn unit(&self) -> &str {
        self.food_listing
            .as_ref()
            .map(|l| l.unit.as_str())
            .filter(|unit| !unit.is_empty())
            .unwrap_or("items")
    }
}

/// Body of `POST /requests`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRequest {
    pub food_listing_id: String,
    pub request_type: RequestType,
    pub quantity_requested: f64,
    pub pickup_date: NaiveDate,
    pub pickup_time: String,
    pub notes: String,
}

/// Request form state on the listing page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestDraft {
    pub quantity_requested: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub notes: String,
}

impl RequestDraft {
    /// Advisory checks against the listing; the server re-checks quantity.
    pub fn validate(&self, listing: &Listing, role: Role) -> Result<NewRequest, ValidationError> {
        let quantity = self
            .quantity_requested
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|q| *q > 0.0)
            .ok_or(ValidationError::InvalidQuantity)?;
        if quantity > listing.quantity {
            return Err(ValidationError::QuantityExceedsAvailable {
                requested: quantity,
                available: listing.quantity,
            });
        }
        let pickup_date = NaiveDate::parse_from_str(self.pickup_date.trim(), "%Y-%m-%d")
            .map_err(|_| ValidationError::MissingRequiredFields)?;

        Ok(NewRequest {
            food_listing_id: listing.id.clone(),
            request_type: RequestType::for_role(role),
            quantity_requested: quantity,
            pickup_date,
            pickup_time: self.pickup_time.trim().to_string(),
            notes: self.notes.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RequestStatus; 5] = [
        RequestStatus::Pending,
        RequestStatus::Accepted,
        RequestStatus::Rejected,
        RequestStatus::Completed,
        RequestStatus::Cancelled,
    ];

    #[test]
    fn terminal_states_never_expose_cancel() {
        for status in ALL {
            if status.is_terminal() {
                assert!(!status.can_cancel(), "{status:?} exposes cancel");
                assert!(RequestAction::exposed_for(status, Viewer::Requester).is_empty());
                assert!(RequestAction::exposed_for(status, Viewer::Owner).is_empty());
            }
        }
    }

    #[test]
    fn cancel_exposed_only_while_pending_or_accepted() {
        let cancellable: Vec<_> = ALL.into_iter().filter(|s| s.can_cancel()).collect();
        assert_eq!(cancellable, vec![RequestStatus::Pending, RequestStatus::Accepted]);
    }

    #[test]
    fn owner_controls_follow_status() {
        assert_eq!(
            RequestAction::exposed_for(RequestStatus::Pending, Viewer::Owner),
            vec![
                RequestAction::Accept,
                RequestAction::Reject { reason: DEFAULT_REJECT_REASON.into() }
            ]
        );
        assert_eq!(
            RequestAction::exposed_for(RequestStatus::Accepted, Viewer::Owner),
            vec![RequestAction::Complete]
        );
    }

    #[test]
    fn blank_cancel_reason_uses_default() {
        assert_eq!(
            RequestAction::cancel("   "),
            RequestAction::Cancel { reason: "Cancelled by user".into() }
        );
        assert_eq!(
            RequestAction::cancel(" moved away "),
            RequestAction::Cancel { reason: "moved away".into() }
        );
        assert_eq!(RequestAction::cancel("").target_status(), RequestStatus::Cancelled);
        assert_eq!(RequestAction::cancel("").actor(), Viewer::Requester);
    }

    #[test]
    fn ngo_requests_are_typed_as_organization() {
        assert_eq!(RequestType::for_role(Role::Ngo), RequestType::Organization);
        assert_eq!(RequestType::for_role(Role::Recipient), RequestType::Personal);
    }

    fn listing(quantity: f64) -> Listing {
        serde_json::from_value(serde_json::json!({
            "_id": "L1", "foodName": "Rice", "quantity": quantity, "unit": "kg",
            "category": "grains", "expiryDate": "2026-11-01T00:00:00Z", "status": "available"
        }))
        .unwrap()
    }

    fn draft(quantity: &str) -> RequestDraft {
        RequestDraft {
            quantity_requested: quantity.into(),
            pickup_date: "2026-10-25".into(),
            pickup_time: "10:30".into(),
            notes: " ring the bell ".into(),
        }
    }

    #[test]
    fn request_within_available_quantity_is_built() {
        let payload = draft("2").validate(&listing(5.0), Role::Ngo).unwrap();
        assert_eq!(payload.food_listing_id, "L1");
        assert_eq!(payload.request_type, RequestType::Organization);
        assert_eq!(payload.notes, "ring the bell");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["foodListingId"], "L1");
        assert_eq!(json["requestType"], "organization");
        assert_eq!(json["pickupDate"], "2026-10-25");
    }

    #[test]
    fn quantity_may_not_exceed_listing() {
        assert_eq!(
            draft("6").validate(&listing(5.0), Role::Recipient),
            Err(ValidationError::QuantityExceedsAvailable { requested: 6.0, available: 5.0 })
        );
        assert!(draft("5").validate(&listing(5.0), Role::Recipient).is_ok());
    }

    #[test]
    fn quantity_and_date_are_required() {
        assert_eq!(
            draft("").validate(&listing(5.0), Role::Donor),
            Err(ValidationError::InvalidQuantity)
        );
        assert_eq!(
            draft("-1").validate(&listing(5.0), Role::Donor),
            Err(ValidationError::InvalidQuantity)
        );
        let no_date = RequestDraft { pickup_date: String::new(), ..draft("1") };
        assert_eq!(
            no_date.validate(&listing(5.0), Role::Donor),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn request_payload_deserializes_with_populated_listing() {
        let request: Request = serde_json::from_value(serde_json::json!({
            "_id": "R1",
            "quantityRequested": 2,
            "pickupDate": "2026-10-25T00:00:00.000Z",
            "status": "accepted",
            "responseMessage": "See you at 10"
        }))
        .unwrap();
        assert_eq!(request.listing_name(), "Listing Unavailable");
        assert_eq!(request.unit(), "items");
        assert!(request.status.can_cancel());
    }

    #[test]
    fn partially_populated_listing_still_decodes() {
        let requests: Vec<Request> = serde_json::from_value(serde_json::json!([{
            "_id": "R1",
            "quantityRequested": 2,
            "pickupDate": "2026-10-25T00:00:00.000Z",
            "status": "pending",
            "foodListing": {
                "_id": "L1", "foodName": "Rice", "unit": "kg",
                "pickupLocation": { "city": "Pune" }
            }
        }]))
        .unwrap();

        let listing = requests[0].food_listing.as_ref().unwrap();
        assert_eq!(listing.id, "L1");
        assert_eq!(listing.pickup_location.as_ref().unwrap().city, "Pune");
        assert_eq!(requests[0].listing_name(), "Rice");
        assert_eq!(requests[0].unit(), "kg");
    }
}
