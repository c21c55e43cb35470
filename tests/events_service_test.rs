//! Gateway tests against an in-process stub backend. Each test spins an
//! axum router on a loopback listener, points an `EventService` at it and
//! drives the real HTTP path, including the multipart encoding.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::extract::{Multipart, Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use event_admin::{
    ApiConfig, AssetConfig, AssetRef, Config, EventDraft, EventFilter, EventService, EventStatus,
};

async fn spawn_backend(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn service_for(addr: SocketAddr) -> EventService {
    let config = Config {
        api: ApiConfig {
            base_url: format!("http://{}", addr),
        },
        assets: AssetConfig {
            base_url: "http://assets.local".to_string(),
            ..AssetConfig::default()
        },
    };
    EventService::new(&config).unwrap()
}

fn raw_record(id: u32, title: &str) -> Value {
    json!({
        "id": id,
        "slug": format!("acara-{}", id),
        "judul_kegiatan": title,
        "deskripsi_kegiatan": "Deskripsi",
        "lokasi_kegiatan": "Jakarta",
        "waktu_mulai": "2024-05-10T09:00:00Z",
        "waktu_berakhir": "2024-05-10T17:00:00Z",
        "gambar_kegiatan": "poster.jpg",
        "attendee_count": 12,
        "kapasitas_peserta": 100
    })
}

// ---------------------------------------------------------------------------
// list_events
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_events_transforms_records_in_backend_order() {
    let router = Router::new().route(
        "/event",
        get(|| async {
            Json(json!({
                "data": [raw_record(2, "Seminar"), raw_record(1, "Workshop")]
            }))
        }),
    );
    let service = service_for(spawn_backend(router).await);

    let events = service.list_events(&EventFilter::default()).await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "2");
    assert_eq!(events[1].id, "1");
    assert_eq!(events[0].title, "Seminar");
    assert_eq!(events[0].status, EventStatus::Completed);
    assert_eq!(
        events[0].image_url,
        "http://assets.local/uploads/gambar/poster.jpg"
    );
}

#[tokio::test]
async fn list_events_passes_only_present_filter_fields() {
    let router = Router::new().route(
        "/event",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let expected = params.get("search").map(String::as_str) == Some("workshop")
                && params.get("upcoming").map(String::as_str) == Some("true")
                && params.get("limit").map(String::as_str) == Some("5")
                && !params.contains_key("page");
            if expected {
                Json(json!({ "data": [raw_record(1, "Workshop")] })).into_response()
            } else {
                (StatusCode::INTERNAL_SERVER_ERROR, "unexpected query").into_response()
            }
        }),
    );
    let service = service_for(spawn_backend(router).await);

    let filter = EventFilter {
        search: Some("workshop".to_string()),
        upcoming: Some(true),
        limit: Some(5),
        page: None,
    };
    let events = service.list_events(&filter).await.unwrap();
    assert_eq!(events.len(), 1);
}

#[tokio::test]
async fn list_events_maps_500_to_server_error() {
    let router = Router::new().route(
        "/event",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let service = service_for(spawn_backend(router).await);

    let err = service
        .list_events(&EventFilter::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "SERVER_ERROR");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn list_events_maps_missing_data_array_to_api_error() {
    let router = Router::new().route(
        "/event",
        get(|| async { Json(json!({ "events": [] })) }),
    );
    let service = service_for(spawn_backend(router).await);

    let err = service
        .list_events(&EventFilter::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "API_ERROR");
}

#[tokio::test]
async fn list_events_maps_non_json_body_to_api_error() {
    let router = Router::new().route("/event", get(|| async { "<html>maintenance</html>" }));
    let service = service_for(spawn_backend(router).await);

    let err = service
        .list_events(&EventFilter::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "API_ERROR");
}

#[tokio::test]
async fn unreachable_backend_maps_to_network_error() {
    // Bind and immediately drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = service_for(addr);
    let err = service
        .list_events(&EventFilter::default())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "NETWORK_ERROR");
}

// ---------------------------------------------------------------------------
// get_event_by_id / get_event_by_slug
// ---------------------------------------------------------------------------

fn single_event_router() -> Router {
    Router::new()
        .route(
            "/event/:id",
            get(|Path(id): Path<String>| async move {
                if id == "999" {
                    return (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "message": "Event tidak ditemukan" })),
                    )
                        .into_response();
                }
                if id == "troublesome" {
                    return (StatusCode::SERVICE_UNAVAILABLE, "down").into_response();
                }
                Json(raw_record(1, "Workshop")).into_response()
            }),
        )
        .route(
            "/event/slug/:slug",
            get(|Path(slug): Path<String>| async move {
                if slug == "acara-1" {
                    Json(raw_record(1, "Workshop")).into_response()
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "message": "Event tidak ditemukan" })),
                    )
                        .into_response()
                }
            }),
        )
}

#[tokio::test]
async fn get_event_by_id_returns_transformed_event() {
    let service = service_for(spawn_backend(single_event_router()).await);

    let event = service.get_event_by_id("1").await.unwrap();
    assert_eq!(event.id, "1");
    assert_eq!(event.title, "Workshop");
    assert_eq!(event.time, "09:00");
    assert_eq!(event.participants, 12);
}

#[tokio::test]
async fn get_event_by_id_maps_404_to_not_found() {
    let service = service_for(spawn_backend(single_event_router()).await);

    let err = service.get_event_by_id("999").await.unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn get_event_by_id_carries_status_of_other_http_errors() {
    let service = service_for(spawn_backend(single_event_router()).await);

    let err = service.get_event_by_id("troublesome").await.unwrap_err();
    assert_eq!(err.code(), "SERVER_ERROR");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn get_event_by_slug_round_trips() {
    let service = service_for(spawn_backend(single_event_router()).await);

    let event = service.get_event_by_slug("acara-1").await.unwrap();
    assert_eq!(event.slug, "acara-1");

    let err = service.get_event_by_slug("tidak-ada").await.unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn get_event_by_id_maps_undecodable_body_to_api_error() {
    let router = Router::new().route("/event/:id", get(|| async { Json(json!([1, 2, 3])) }));
    let service = service_for(spawn_backend(router).await);

    let err = service.get_event_by_id("1").await.unwrap_err();
    assert_eq!(err.code(), "API_ERROR");
}

// ---------------------------------------------------------------------------
// create_event
// ---------------------------------------------------------------------------

/// Echoes the multipart field names and text values back so tests can
/// assert on exactly what went over the wire.
async fn echo_create(mut multipart: Multipart) -> Json<Value> {
    let mut fields = Vec::new();
    let mut texts = HashMap::new();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        fields.push(name.clone());
        if field.file_name().is_some() {
            files.push(name);
        } else {
            texts.insert(name, field.text().await.unwrap());
        }
    }

    Json(json!({ "fields": fields, "texts": texts, "files": files }))
}

fn draft() -> EventDraft {
    EventDraft {
        title: "Workshop Baru".to_string(),
        description: "Deskripsi".to_string(),
        location: "Bandung".to_string(),
        start_time: "2030-01-10T09:00".to_string(),
        end_time: "2030-01-10T17:00".to_string(),
        ..EventDraft::default()
    }
}

#[tokio::test]
async fn create_event_sends_required_fields_and_defaults() {
    let router = Router::new().route("/event", axum::routing::post(echo_create));
    let service = service_for(spawn_backend(router).await);

    let ack = service.create_event(&draft()).await.unwrap();

    let texts = &ack["texts"];
    assert_eq!(texts["judul_kegiatan"], "Workshop Baru");
    assert_eq!(texts["lokasi_kegiatan"], "Bandung");
    assert_eq!(texts["waktu_mulai"], "2030-01-10T09:00");
    // Backend requires these even when the form left them empty.
    assert_eq!(texts["kapasitas_peserta"], "0");
    assert_eq!(texts["harga"], "0");
    // Optional identifiers are omitted, not sent empty.
    assert!(texts.get("slug").is_none());
    assert!(texts.get("kategori").is_none());
}

#[tokio::test]
async fn create_event_omits_kept_assets_and_uploads_new_ones() {
    let router = Router::new().route("/event", axum::routing::post(echo_create));
    let service = service_for(spawn_backend(router).await);

    let mut submission = draft();
    // A string reference means "keep the stored asset": no field at all.
    submission.image = Some(AssetRef::Keep("uploads/gambar/lama.jpg".to_string()));
    submission.flyer = Some(AssetRef::Upload {
        file_name: "brosur.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![0u8; 64],
    });

    let ack = service.create_event(&submission).await.unwrap();

    let fields: Vec<&str> = ack["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(!fields.contains(&"gambar_kegiatan"));
    assert!(!fields.contains(&"sertifikat_kegiatan"));
    assert!(fields.contains(&"flyer_kegiatan"));
    assert_eq!(ack["files"], json!(["flyer_kegiatan"]));
}

#[tokio::test]
async fn create_event_sends_optional_fields_when_present() {
    let router = Router::new().route("/event", axum::routing::post(echo_create));
    let service = service_for(spawn_backend(router).await);

    let mut submission = draft();
    submission.slug = Some("workshop-baru".to_string());
    submission.category = Some("pelatihan".to_string());
    submission.capacity = Some(120);
    submission.price = Some(50000.0);

    let ack = service.create_event(&submission).await.unwrap();
    let texts = &ack["texts"];
    assert_eq!(texts["slug"], "workshop-baru");
    assert_eq!(texts["kategori"], "pelatihan");
    assert_eq!(texts["kapasitas_peserta"], "120");
    assert_eq!(texts["harga"], "50000");
}

#[tokio::test]
async fn create_event_surfaces_backend_message_on_failure() {
    let router = Router::new().route(
        "/event",
        axum::routing::post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": "Judul sudah digunakan" })),
            )
        }),
    );
    let service = service_for(spawn_backend(router).await);

    let err = service.create_event(&draft()).await.unwrap_err();
    assert_eq!(err.code(), "SERVER_ERROR");
    assert_eq!(err.status(), Some(422));
    assert!(err.to_string().contains("Judul sudah digunakan"));
}

#[tokio::test]
async fn create_event_synthesizes_message_when_body_is_opaque() {
    let router = Router::new().route(
        "/event",
        axum::routing::post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "<html></html>") }),
    );
    let service = service_for(spawn_backend(router).await);

    let err = service.create_event(&draft()).await.unwrap_err();
    match err {
        event_admin::AppError::Server { status, message } => {
            assert_eq!(status, 500);
            assert!(!message.is_empty());
            assert!(message.contains("500"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
