//! Curated support content: crisis lines, resource collections, events.
//!
//! These are read-only catalogue types. They are serialised directly by
//! the HTTP adapter, so serde and OpenAPI derives live on the types
//! themselves.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A crisis support service surfaced in the site-wide banner and on the
/// resources page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrisisLine {
    /// Service name, e.g. "988 Suicide & Crisis Lifeline".
    pub name: String,
    /// One-line description of who the service is for.
    pub description: String,
    /// Human-readable contact instruction, e.g. "Call or text 988".
    pub contact: String,
    /// Link target (tel: or https:).
    pub link: String,
}

/// A labelled external link inside a [`ResourceCollection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLink {
    /// Display label.
    pub label: String,
    /// Link target.
    pub url: String,
}

/// A themed collection of support resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCollection {
    /// Collection title, e.g. "Coming Out Resources".
    pub title: String,
    /// One-line description of the collection.
    pub description: String,
    /// Recommended links in presentation order.
    pub links: Vec<ResourceLink>,
}

/// Kind of community event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// Social meetups and gatherings.
    Community,
    /// Structured workshops.
    Workshop,
    /// Film nights, talks, and discussion groups.
    Discussion,
}

/// An upcoming community event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunityEvent {
    /// Event name.
    pub name: String,
    /// Calendar date in ISO `YYYY-MM-DD` form.
    pub date: String,
    /// Venue.
    pub location: String,
    /// Event kind.
    pub kind: EventKind,
    /// Link with details and registration.
    pub link: String,
    /// Whether the event is open to all ages.
    pub all_ages: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_uses_kebab_case_on_the_wire() {
        let value = serde_json::to_value(EventKind::Workshop).expect("serialise kind");
        assert_eq!(value, "workshop");
    }

    #[test]
    fn crisis_line_serialises_camel_case_fields() {
        let line = CrisisLine {
            name: "Trans Lifeline".to_owned(),
            description: "Support for trans and questioning individuals".to_owned(),
            contact: "1-877-565-8860".to_owned(),
            link: "tel:1-877-565-8860".to_owned(),
        };
        let value = serde_json::to_value(&line).expect("serialise line");
        assert_eq!(value["contact"], "1-877-565-8860");
    }
}
