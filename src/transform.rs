//! Pure mapping from backend event records to the UI-facing [`Event`]
//! model: lenient timestamp parsing, derived lifecycle status and absolute
//! media URLs. No I/O; the only inputs are the record, the asset
//! configuration and the clock reading.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::config::AssetConfig;
use crate::models::{Event, EventStatus, RawEvent};

/// Transform a raw backend record into an [`Event`], deriving status from
/// the current instant.
pub fn transform(raw: &RawEvent, assets: &AssetConfig) -> Event {
    transform_at(raw, assets, Utc::now())
}

/// Same as [`transform`] with an explicit observation instant. Status is a
/// function of (start, end, now) and must never be cached, so the same
/// record yields a different status at a different `now`.
pub fn transform_at(raw: &RawEvent, assets: &AssetConfig, now: DateTime<Utc>) -> Event {
    let start_date = parse_instant(&raw.waktu_mulai);
    let end_date = parse_instant(&raw.waktu_berakhir);

    Event {
        id: raw.id.clone(),
        slug: raw.slug.clone(),
        title: raw.judul_kegiatan.clone(),
        description: raw.deskripsi_kegiatan.clone(),
        location: raw.lokasi_kegiatan.clone(),
        start_date,
        end_date,
        time: start_date
            .map(|s| s.format("%H:%M").to_string())
            .unwrap_or_default(),
        image_url: asset_url(assets, &assets.image_dir, raw.gambar_kegiatan.as_deref()),
        flyer_url: asset_url(assets, &assets.flyer_dir, raw.flyer_kegiatan.as_deref()),
        certificate_url: asset_url(
            assets,
            &assets.certificate_dir,
            raw.sertifikat_kegiatan.as_deref(),
        ),
        participants: raw.attendee_count.unwrap_or(0),
        capacity: raw.kapasitas_peserta.unwrap_or(0),
        status: derive_status(start_date, end_date, now),
    }
}

/// Parse a backend or form timestamp into a UTC instant.
///
/// Accepts RFC 3339 as well as the naive `datetime-local` shapes the form
/// produces (`2024-05-10T09:00`, with or without seconds, `T` or space
/// separated); naive values are taken as UTC. Returns None if parsing
/// fails; a malformed timestamp is data to carry, not an error to raise.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// Lifecycle status at `now`. An unknown instant never satisfies a
/// comparison, so records with unparsable timestamps stay `Upcoming`.
pub fn derive_status(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> EventStatus {
    match (start, end) {
        (Some(start), Some(end)) if start <= now && now <= end => EventStatus::Ongoing,
        (_, Some(end)) if end < now => EventStatus::Completed,
        _ => EventStatus::Upcoming,
    }
}

/// Absolute URL for a stored asset, or `""` when the backend has none.
/// Joins base URL, kind subdirectory and filename with single slashes no
/// matter how the configured pieces are delimited.
fn asset_url(assets: &AssetConfig, dir: &str, reference: Option<&str>) -> String {
    let name = match reference {
        Some(name) if !name.trim().is_empty() => name.trim_start_matches('/'),
        _ => return String::new(),
    };

    let base = assets.base_url.trim_end_matches('/');
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        format!("{}/{}", base, name)
    } else {
        format!("{}/{}/{}", base, dir, name)
    }
}
