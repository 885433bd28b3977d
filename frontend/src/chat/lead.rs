use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::window;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    BusinessType,
    Phone,
    Service,
    Location,
    Email,
}

impl LeadField {
    pub fn label(self) -> &'static str {
        match self {
            LeadField::Name => "Name",
            LeadField::BusinessType => "Business Type",
            LeadField::Phone => "Phone",
            LeadField::Service => "Service Needed",
            LeadField::Location => "Location",
            LeadField::Email => "Email",
        }
    }
}

/// Everything the chat widget has collected so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl LeadData {
    fn slot(&mut self, field: LeadField) -> &mut Option<String> {
        match field {
            LeadField::Name => &mut self.name,
            LeadField::BusinessType => &mut self.business_type,
            LeadField::Phone => &mut self.phone,
            LeadField::Service => &mut self.service,
            LeadField::Location => &mut self.location,
            LeadField::Email => &mut self.email,
        }
    }

    pub fn set(&mut self, field: LeadField, value: impl Into<String>) {
        *self.slot(field) = Some(value.into());
    }

    pub fn get(&self, field: LeadField) -> Option<&str> {
        let value = match field {
            LeadField::Name => &self.name,
            LeadField::BusinessType => &self.business_type,
            LeadField::Phone => &self.phone,
            LeadField::Service => &self.service,
            LeadField::Location => &self.location,
            LeadField::Email => &self.email,
        };
        value.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        *self == LeadData::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadAction {
    ApplyNow,
    TalkToExpert,
}

impl LeadAction {
    pub fn button_label(self) -> &'static str {
        match self {
            LeadAction::ApplyNow => "Apply Now",
            LeadAction::TalkToExpert => "Talk to an Expert",
        }
    }

    /// Page the visitor is sent to once the lead is stored.
    pub fn destination(self) -> &'static str {
        match self {
            LeadAction::ApplyNow => "/services",
            LeadAction::TalkToExpert => "/contact",
        }
    }

    pub fn closing_message(self) -> &'static str {
        match self {
            LeadAction::ApplyNow => "Perfect! Taking you to our services so you can start your application...",
            LeadAction::TalkToExpert => "Thank you! One of our experts will call you shortly. Taking you to our contact page...",
        }
    }
}

/// The record written to local storage on a terminal action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLead {
    #[serde(flatten)]
    pub lead: LeadData,
    pub timestamp: DateTime<Utc>,
    pub action: LeadAction,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to serialize lead: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write lead to storage")]
    Write,
}

pub trait LeadStore {
    fn save(&self, lead: &StoredLead) -> Result<(), StorageError>;
}

pub trait Navigate {
    fn navigate(&self, path: &str);
}

#[derive(Clone, Copy, Default)]
pub struct LocalStorageLeadStore;

impl LeadStore for LocalStorageLeadStore {
    fn save(&self, lead: &StoredLead) -> Result<(), StorageError> {
        let storage = window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)?;
        let json = serde_json::to_string(lead)?;
        storage
            .set_item(config::LEAD_STORAGE_KEY, &json)
            .map_err(|_| StorageError::Write)
    }
}

#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigate for BrowserNavigator {
    fn navigate(&self, path: &str) {
        if let Some(window) = window() {
            let _ = window.location().set_href(path);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn set_and_get_round_through_fields() {
        let mut lead = LeadData::default();
        assert!(lead.is_empty());
        lead.set(LeadField::BusinessType, "LLP");
        assert_eq!(lead.get(LeadField::BusinessType), Some("LLP"));
        assert_eq!(lead.get(LeadField::Email), None);
        assert!(!lead.is_empty());
    }

    #[test]
    fn stored_lead_is_flat_with_action_tag() {
        let mut lead = LeadData::default();
        lead.set(LeadField::Name, "Asha");
        lead.set(LeadField::Phone, "9000000000");
        let stored = StoredLead {
            lead,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 5, 10, 30, 0).unwrap(),
            action: LeadAction::TalkToExpert,
        };

        let json: serde_json::Value = serde_json::to_value(&stored).unwrap();
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["phone"], "9000000000");
        assert_eq!(json["action"], "talk_to_expert");
        assert!(json["timestamp"].as_str().unwrap().starts_with("2026-01-05T10:30:00"));
        assert!(json.get("email").is_none());
    }

    #[test]
    fn actions_route_to_their_pages() {
        assert_eq!(LeadAction::ApplyNow.destination(), "/services");
        assert_eq!(LeadAction::TalkToExpert.destination(), "/contact");
    }
}
