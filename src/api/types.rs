//! API Wire Contracts
//!
//! Typed request and response payloads for the WaBulk REST API. Every
//! payload crossing the gateway boundary is deserialized into one of these
//! types; fields the backend may omit carry `#[serde(default)]`.

use serde::{Deserialize, Serialize};

/// WhatsApp connectivity status of a place
///
/// `NotConnected` is assigned at bulk import; the dashboard only offers
/// transitions out of it. The server may still hold other transitions, so
/// all states deserialize both ways.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlaceStatus {
    /// Number confirmed reachable on WhatsApp
    Connected,
    /// Not yet checked (initial state)
    NotConnected,
    /// Number confirmed unable to receive messages
    Unsupported,
}

impl PlaceStatus {
    /// Wire value, as sent in bodies and query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceStatus::Connected => "connected",
            PlaceStatus::NotConnected => "not_connected",
            PlaceStatus::Unsupported => "unsupported",
        }
    }

    /// Human-readable label for cards and chips
    pub fn label(&self) -> &'static str {
        match self {
            PlaceStatus::Connected => "Connected",
            PlaceStatus::NotConnected => "Not Connected",
            PlaceStatus::Unsupported => "Unsupported",
        }
    }
}

impl std::fmt::Display for PlaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status filter for the place feed
///
/// One tab per status plus `All`. `All` maps to an omitted `status` query
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    NotConnected,
    Connected,
    Unsupported,
    All,
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::NotConnected
    }
}

impl StatusFilter {
    /// Filter tabs in display order
    pub fn tabs() -> &'static [StatusFilter] {
        &[
            StatusFilter::NotConnected,
            StatusFilter::Connected,
            StatusFilter::Unsupported,
            StatusFilter::All,
        ]
    }

    /// Value for the `status` query parameter, `None` when unfiltered
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            StatusFilter::Connected => Some("connected"),
            StatusFilter::NotConnected => Some("not_connected"),
            StatusFilter::Unsupported => Some("unsupported"),
            StatusFilter::All => None,
        }
    }

    /// Whether a place with the given status is visible under this filter
    pub fn matches(&self, status: PlaceStatus) -> bool {
        match self {
            StatusFilter::Connected => status == PlaceStatus::Connected,
            StatusFilter::NotConnected => status == PlaceStatus::NotConnected,
            StatusFilter::Unsupported => status == PlaceStatus::Unsupported,
            StatusFilter::All => true,
        }
    }

    /// Chip label
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Connected => "Connected",
            StatusFilter::NotConnected => "Not Connected",
            StatusFilter::Unsupported => "Unsupported",
            StatusFilter::All => "All",
        }
    }
}

/// A named collection of places sharing one message template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct List {
    pub id: u64,
    pub name: String,
    pub message_template: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A single contact record within a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub id: u64,
    pub name: String,
    /// Normalized phone in `+20...` form
    pub phone: String,
    #[serde(default)]
    pub facebook_url: Option<String>,
    pub status: PlaceStatus,
    /// Template with placeholders substituted server-side
    #[serde(default)]
    pub formatted_message: Option<String>,
}

/// Per-status tallies returned with every page of places
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCounts {
    #[serde(default)]
    pub connected: u32,
    #[serde(default)]
    pub not_connected: u32,
    #[serde(default)]
    pub unsupported: u32,
}

impl StatusCounts {
    /// Count for a single status
    pub fn get(&self, status: PlaceStatus) -> u32 {
        match status {
            PlaceStatus::Connected => self.connected,
            PlaceStatus::NotConnected => self.not_connected,
            PlaceStatus::Unsupported => self.unsupported,
        }
    }

    /// Sum across all statuses
    pub fn total(&self) -> u32 {
        self.connected + self.not_connected + self.unsupported
    }

    /// Count shown on a filter chip (`All` shows the total)
    pub fn for_filter(&self, filter: StatusFilter) -> u32 {
        match filter {
            StatusFilter::Connected => self.connected,
            StatusFilter::NotConnected => self.not_connected,
            StatusFilter::Unsupported => self.unsupported,
            StatusFilter::All => self.total(),
        }
    }

    pub fn increment(&mut self, status: PlaceStatus) {
        match status {
            PlaceStatus::Connected => self.connected += 1,
            PlaceStatus::NotConnected => self.not_connected += 1,
            PlaceStatus::Unsupported => self.unsupported += 1,
        }
    }

    /// Decrement, saturating at zero
    pub fn decrement(&mut self, status: PlaceStatus) {
        match status {
            PlaceStatus::Connected => self.connected = self.connected.saturating_sub(1),
            PlaceStatus::NotConnected => {
                self.not_connected = self.not_connected.saturating_sub(1)
            }
            PlaceStatus::Unsupported => self.unsupported = self.unsupported.saturating_sub(1),
        }
    }
}

/// One page of places for a (list, status, search) query
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlacesPage {
    pub places: Vec<Place>,
    #[serde(default)]
    pub status_counts: StatusCounts,
    pub pagination: PageInfo,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct PageInfo {
    pub has_next: bool,
}

/// A place as uploaded in a create-list request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UploadPlace {
    pub name: String,
    pub phone: String,
    pub facebook_url: String,
}

/// Body of `POST /api/lists`
#[derive(Debug, Clone, Serialize)]
pub struct CreateListRequest {
    pub name: String,
    pub message_template: String,
    pub places: Vec<UploadPlace>,
}

/// Body of `PUT /api/lists/{id}/message-template`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTemplateRequest {
    pub message_template: String,
}

/// Body of `PUT /api/places/{id}/status`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: PlaceStatus,
}

/// Error body the backend returns on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&PlaceStatus::NotConnected).unwrap();
        assert_eq!(json, "\"not_connected\"");

        let status: PlaceStatus = serde_json::from_str("\"unsupported\"").unwrap();
        assert_eq!(status, PlaceStatus::Unsupported);
    }

    #[test]
    fn test_place_tolerates_missing_optional_fields() {
        let json = r#"{"id": 7, "name": "Cafe", "phone": "+20101234567", "status": "not_connected"}"#;
        let place: Place = serde_json::from_str(json).unwrap();

        assert_eq!(place.id, 7);
        assert_eq!(place.facebook_url, None);
        assert_eq!(place.formatted_message, None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(StatusFilter::All.matches(PlaceStatus::Connected));
        assert!(StatusFilter::All.matches(PlaceStatus::Unsupported));
        assert!(StatusFilter::NotConnected.matches(PlaceStatus::NotConnected));
        assert!(!StatusFilter::NotConnected.matches(PlaceStatus::Connected));
        assert_eq!(StatusFilter::All.query_value(), None);
        assert_eq!(StatusFilter::Connected.query_value(), Some("connected"));
    }

    #[test]
    fn test_counts_adjust_and_saturate() {
        let mut counts = StatusCounts {
            connected: 1,
            not_connected: 2,
            unsupported: 0,
        };

        counts.decrement(PlaceStatus::NotConnected);
        counts.increment(PlaceStatus::Connected);
        assert_eq!(counts.not_connected, 1);
        assert_eq!(counts.connected, 2);
        assert_eq!(counts.total(), 3);

        // Never goes below zero
        counts.decrement(PlaceStatus::Unsupported);
        assert_eq!(counts.unsupported, 0);

        assert_eq!(counts.for_filter(StatusFilter::All), 3);
        assert_eq!(counts.for_filter(StatusFilter::Connected), 2);
    }
}
