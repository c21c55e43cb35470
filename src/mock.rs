//! Embedded fallback data set: raw event records compiled into the
//! binary and run through the real transform on demand. Used by callers
//! when the backend is unreachable, so even offline data carries derived
//! statuses and configured asset URLs instead of stale stored ones.

use std::sync::OnceLock;

use crate::config::AssetConfig;
use crate::models::{Event, RawEvent};
use crate::transform;

static MOCK_EVENTS: OnceLock<Vec<RawEvent>> = OnceLock::new();

const MOCK_JSON: &str = r#"
[
  {
    "id": 1,
    "slug": "workshop-digital-marketing-2024",
    "judul_kegiatan": "Workshop Digital Marketing 2024",
    "deskripsi_kegiatan": "Workshop komprehensif tentang strategi digital marketing untuk UMKM",
    "lokasi_kegiatan": "Hotel Grand Ballroom Jakarta",
    "waktu_mulai": "2024-01-15T09:00:00+07:00",
    "waktu_berakhir": "2024-01-15T16:00:00+07:00",
    "gambar_kegiatan": "workshop-digital-marketing.jpg",
    "flyer_kegiatan": "workshop-digital-marketing-flyer.jpg",
    "sertifikat_kegiatan": "sertifikat-umum.png",
    "attendee_count": 150,
    "kapasitas_peserta": 200
  },
  {
    "id": 2,
    "slug": "seminar-entrepreneurship-summit",
    "judul_kegiatan": "Seminar Entrepreneurship Summit",
    "deskripsi_kegiatan": "Seminar inspiratif dengan para pengusaha sukses Indonesia",
    "lokasi_kegiatan": "Convention Center Surabaya",
    "waktu_mulai": "2024-02-20T13:00:00+07:00",
    "waktu_berakhir": "2024-02-20T17:30:00+07:00",
    "gambar_kegiatan": "entrepreneurship-summit.jpg",
    "attendee_count": 300,
    "kapasitas_peserta": 350
  },
  {
    "id": 3,
    "slug": "training-leadership-excellence",
    "judul_kegiatan": "Training Leadership Excellence",
    "deskripsi_kegiatan": "Pelatihan kepemimpinan untuk generasi muda",
    "lokasi_kegiatan": "Auditorium Universitas Indonesia",
    "waktu_mulai": "2024-03-10T08:30:00+07:00",
    "waktu_berakhir": "2024-03-10T15:00:00+07:00",
    "gambar_kegiatan": "leadership-excellence.jpg",
    "sertifikat_kegiatan": "sertifikat-leadership.png",
    "attendee_count": 200,
    "kapasitas_peserta": 200
  },
  {
    "id": 4,
    "slug": "conference-tech-innovation",
    "judul_kegiatan": "Conference Tech Innovation 2024",
    "deskripsi_kegiatan": "Konferensi teknologi dan inovasi terbesar di Indonesia",
    "lokasi_kegiatan": "ICE BSD Tangerang",
    "waktu_mulai": "2024-04-25T10:00:00+07:00",
    "waktu_berakhir": "2024-04-26T17:00:00+07:00",
    "gambar_kegiatan": "tech-innovation.jpg",
    "flyer_kegiatan": "tech-innovation-flyer.jpg",
    "attendee_count": 500,
    "kapasitas_peserta": 600
  },
  {
    "id": 5,
    "slug": "workshop-content-creation",
    "judul_kegiatan": "Workshop Content Creation",
    "deskripsi_kegiatan": "Pelatihan membuat konten kreatif untuk media sosial",
    "lokasi_kegiatan": "Co-working Space Bandung",
    "waktu_mulai": "2024-05-12T14:00:00+07:00",
    "waktu_berakhir": "2024-05-12T18:00:00+07:00",
    "attendee_count": 75,
    "kapasitas_peserta": 80
  },
  {
    "id": 6,
    "slug": "expo-startup-indonesia",
    "judul_kegiatan": "Expo Startup Indonesia",
    "deskripsi_kegiatan": "Pameran startup terbesar dengan investor dan mentor terbaik",
    "lokasi_kegiatan": "JCC Senayan Jakarta",
    "waktu_mulai": "2030-06-18T09:00:00+07:00",
    "waktu_berakhir": "2030-06-19T18:00:00+07:00",
    "gambar_kegiatan": "expo-startup.jpg",
    "flyer_kegiatan": "expo-startup-flyer.jpg",
    "kapasitas_peserta": 800
  }
]
"#;

/// The embedded raw records, parsed once.
pub fn mock_raw_events() -> &'static [RawEvent] {
    MOCK_EVENTS
        .get_or_init(|| {
            serde_json::from_str(MOCK_JSON).unwrap_or_else(|e| {
                panic!("failed to parse MOCK_JSON in mock module: {}", e);
            })
        })
        .as_slice()
}

/// Fallback event list for callers that could not reach the backend.
/// Statuses and asset URLs are derived at call time through the real
/// transform, never stored in the data set.
pub fn fallback_events(assets: &AssetConfig) -> Vec<Event> {
    mock_raw_events()
        .iter()
        .map(|raw| transform::transform(raw, assets))
        .collect()
}
