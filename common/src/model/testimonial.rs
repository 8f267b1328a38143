use serde::{Deserialize, Serialize};

/// A client testimonial shown on the public site.
///
/// The collection keeps insertion order and that order is the display
/// order. Only entries with `active` set are shown publicly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Opaque identifier, unique within the collection. Empty on a new
    /// editor draft; assigned by the repository on first save.
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub quote: String,
    /// Short outcome label, e.g. "15 Hours Saved Weekly".
    pub result_badge: String,
    pub photo_url: String,
    pub active: bool,
}
