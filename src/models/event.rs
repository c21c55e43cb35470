use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Event record as the backend sends it. Every field tolerates absence:
/// the transform layer must map a sparse record, not reject it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub judul_kegiatan: String,
    pub deskripsi_kegiatan: String,
    pub lokasi_kegiatan: String,
    pub waktu_mulai: String,
    pub waktu_berakhir: String,
    pub slug: String,
    pub gambar_kegiatan: Option<String>,
    pub flyer_kegiatan: Option<String>,
    pub sertifikat_kegiatan: Option<String>,
    pub attendee_count: Option<u32>,
    pub kapasitas_peserta: Option<u32>,
}

/// The backend is inconsistent about id types (numeric in the list
/// endpoint, string elsewhere); both land as a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Lifecycle status derived from the event's start/end instants at
/// observation time. Never stored; always recomputed by the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }
}

/// Normalized, UI-facing event. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// `None` when the backend sent a malformed or missing timestamp.
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// 24-hour HH:MM display string derived from `start_date`; empty when
    /// the start instant is unknown. Display-only.
    pub time: String,
    /// Absolute media URLs, or `""` when the backend has no asset.
    pub image_url: String,
    pub flyer_url: String,
    pub certificate_url: String,
    pub participants: u32,
    pub capacity: u32,
    pub status: EventStatus,
}

/// Query filter for the list endpoint. Absent fields are omitted from the
/// outgoing query string; no defaults are injected.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub search: Option<String>,
    pub upcoming: Option<bool>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

impl EventFilter {
    /// Query pairs in the order the backend documents them.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        if let Some(upcoming) = self.upcoming {
            query.push(("upcoming", upcoming.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        query
    }
}

/// Media attachment on a create submission: either a pointer to an asset
/// the backend already stores, or a fresh binary upload.
#[derive(Debug, Clone)]
pub enum AssetRef {
    /// Keep the existing stored asset; the create gateway omits the field
    /// so the backend does not overwrite it.
    Keep(String),
    /// New upload, subject to size/type validation.
    Upload {
        file_name: String,
        mime_type: String,
        bytes: Vec<u8>,
    },
}

/// Candidate create-event submission as collected from the form. Field
/// values stay strings until validation; the create gateway maps them to
/// the backend's wire names.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub capacity: Option<i64>,
    pub price: Option<f64>,
    pub image: Option<AssetRef>,
    pub flyer: Option<AssetRef>,
    pub certificate: Option<AssetRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_event_accepts_numeric_id() {
        let raw: RawEvent = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(raw.id, "42");
    }

    #[test]
    fn raw_event_accepts_string_id() {
        let raw: RawEvent = serde_json::from_str(r#"{"id": "abc-1"}"#).unwrap();
        assert_eq!(raw.id, "abc-1");
    }

    #[test]
    fn raw_event_tolerates_sparse_record() {
        let raw: RawEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(raw.id, "");
        assert_eq!(raw.judul_kegiatan, "");
        assert!(raw.attendee_count.is_none());
        assert!(raw.gambar_kegiatan.is_none());
    }

    #[test]
    fn filter_omits_absent_fields() {
        let filter = EventFilter {
            search: Some("workshop".to_string()),
            upcoming: None,
            limit: Some(20),
            page: None,
        };
        let query = filter.to_query();
        assert_eq!(
            query,
            vec![
                ("search", "workshop".to_string()),
                ("limit", "20".to_string())
            ]
        );
    }

    #[test]
    fn empty_filter_builds_empty_query() {
        assert!(EventFilter::default().to_query().is_empty());
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EventStatus::Ongoing).unwrap(),
            "\"ongoing\""
        );
    }
}
