use chrono::{DateTime, Duration, Utc};
use poem_openapi::Object;

use business::domain::pantry_item::errors::PantryItemError;
use business::domain::pantry_item::value_objects::{Category, ExpiryInput, Unit};
use business::domain::policy::PantryPolicy;
use business::domain::session::cart::{DecisionChoice, Resolution, SubmissionOutcome};
use business::domain::shopping_item::model::NewItemProps;

#[derive(Debug, Clone, Object)]
pub struct NewItemRequest {
    /// Item name (cannot be blank)
    pub name: String,
    /// Category label, "General" when omitted
    pub category: Option<String>,
    /// Positive amount, 1 when omitted
    pub quantity: Option<f64>,
    /// Unit label, "pcs" when omitted
    pub unit: Option<String>,
    /// `YYYY-MM-DD` or RFC 3339 instant, a week from now when omitted
    pub expires_at: Option<String>,
}

impl NewItemRequest {
    pub fn into_props(
        self,
        now: DateTime<Utc>,
        policy: &PantryPolicy,
    ) -> Result<NewItemProps, PantryItemError> {
        let category = match self.category.as_deref() {
            Some(label) => label.parse::<Category>()?,
            None => Category::default(),
        };
        let unit = match self.unit.as_deref() {
            Some(label) => label.parse::<Unit>()?,
            None => Unit::default(),
        };
        let expires_at = match self.expires_at.as_deref() {
            Some(text) => text.parse::<ExpiryInput>()?,
            None => ExpiryInput::Timestamp(now + Duration::days(policy.default_expiry_days)),
        };

        Ok(NewItemProps {
            name: self.name,
            category,
            quantity: self.quantity.unwrap_or(1.0),
            unit,
            expires_at,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct SubmitItemResponseBody {
    /// "added", "duplicate" or "awaiting_decision"
    pub outcome: String,
    /// Healthier alternative awaiting a decision
    #[oai(skip_serializing_if_is_none)]
    pub suggested_name: Option<String>,
}

impl From<SubmissionOutcome> for SubmitItemResponseBody {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::DirectlyAdded { added: true } => Self {
                outcome: "added".to_string(),
                suggested_name: None,
            },
            SubmissionOutcome::DirectlyAdded { added: false } => Self {
                outcome: "duplicate".to_string(),
                suggested_name: None,
            },
            SubmissionOutcome::AwaitingHealthDecision { suggested_name } => Self {
                outcome: "awaiting_decision".to_string(),
                suggested_name: Some(suggested_name),
            },
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ResolvePendingRequest {
    /// Take the healthier alternative instead of the submitted item
    pub accept: bool,
}

#[derive(Debug, Clone, Object)]
pub struct ResolutionResponse {
    /// "swapped" or "kept"
    pub choice: String,
    /// Name of the entry that went to the list
    pub name: String,
    /// False when an entry with that name was already listed
    pub added: bool,
}

impl From<Resolution> for ResolutionResponse {
    fn from(resolution: Resolution) -> Self {
        let choice = match resolution.choice {
            DecisionChoice::Swapped => "swapped",
            DecisionChoice::Kept => "kept",
        };
        Self {
            choice: choice.to_string(),
            name: resolution.name,
            added: resolution.added,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddToListResponse {
    /// False when the name was already on the list
    pub added: bool,
}
