use reqwest::multipart;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::config::{AssetConfig, Config};
use crate::error::{AppError, AppResult};
use crate::models::{AssetRef, Event, EventDraft, EventFilter, RawEvent};
use crate::transform;

/// Client for the events backend. Cheap to clone (shared connection
/// pool); every call composes its own request, so concurrent use needs no
/// coordination.
#[derive(Debug, Clone)]
pub struct EventService {
    client: reqwest::Client,
    api_base: String,
    assets: AssetConfig,
}

#[derive(Debug, Deserialize)]
struct EventListResponse {
    data: Vec<RawEvent>,
}

impl EventService {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Internal(e.into()))?;

        Ok(Self {
            client,
            api_base: config.api.base_url.clone(),
            assets: config.assets.clone(),
        })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), endpoint)
    }

    /// Fetch the event list, mapping every record through the transform in
    /// backend order. One attempt, no caching.
    pub async fn list_events(&self, filter: &EventFilter) -> AppResult<Vec<Event>> {
        let url = self.api_url("/event");

        let response = self
            .client
            .get(&url)
            .query(&filter.to_query())
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(server_error(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let list: EventListResponse = serde_json::from_str(&body)
            .map_err(|_| AppError::Api("list response is missing a data array".to_string()))?;

        tracing::debug!("Fetched {} events from {}", list.data.len(), url);

        Ok(list
            .data
            .iter()
            .map(|raw| transform::transform(raw, &self.assets))
            .collect())
    }

    /// Fetch one event by backend id. 404 maps to `NOT_FOUND`.
    pub async fn get_event_by_id(&self, id: &str) -> AppResult<Event> {
        let url = self.api_url(&format!("/event/{}", urlencoding::encode(id)));
        self.get_single(&url, id).await
    }

    /// Fetch one event by its slug. 404 maps to `NOT_FOUND`.
    pub async fn get_event_by_slug(&self, slug: &str) -> AppResult<Event> {
        let url = self.api_url(&format!("/event/slug/{}", urlencoding::encode(slug)));
        self.get_single(&url, slug).await
    }

    async fn get_single(&self, url: &str, key: &str) -> AppResult<Event> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("Event {} not found", key)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(server_error(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;
        let raw: RawEvent = serde_json::from_str(&body)
            .map_err(|_| AppError::Api("event response body is not an event record".to_string()))?;

        Ok(transform::transform(&raw, &self.assets))
    }

    /// Submit a new event as a multipart form. Expects an already
    /// validated draft and does not re-validate; returns the backend's
    /// acknowledgement body verbatim.
    ///
    /// `kapasitas_peserta` and `harga` are always sent (the backend
    /// requires their presence) and default to 0. File parts are attached
    /// only for fresh uploads: an [`AssetRef::Keep`] reference means the
    /// stored asset stays untouched, so its field is omitted entirely.
    /// Content-Type is left to the transport, which must compute the
    /// multipart boundary.
    pub async fn create_event(&self, draft: &EventDraft) -> AppResult<Value> {
        let mut form = multipart::Form::new()
            .text("judul_kegiatan", draft.title.clone())
            .text("deskripsi_kegiatan", draft.description.clone())
            .text("lokasi_kegiatan", draft.location.clone())
            .text("waktu_mulai", draft.start_time.clone())
            .text("waktu_berakhir", draft.end_time.clone())
            .text("kapasitas_peserta", draft.capacity.unwrap_or(0).to_string())
            .text("harga", draft.price.unwrap_or(0.0).to_string());

        if let Some(slug) = &draft.slug {
            form = form.text("slug", slug.clone());
        }
        if let Some(category) = &draft.category {
            form = form.text("kategori", category.clone());
        }

        form = attach_upload(form, "gambar_kegiatan", draft.image.as_ref())?;
        form = attach_upload(form, "flyer_kegiatan", draft.flyer.as_ref())?;
        form = attach_upload(form, "sertifikat_kegiatan", draft.certificate.as_ref())?;

        let url = self.api_url("/event");
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(server_error(status, &body));
        }

        let ack = response
            .json::<Value>()
            .await
            .map_err(|_| AppError::Api("create response body is not JSON".to_string()))?;

        tracing::info!("Created event '{}'", draft.title);
        Ok(ack)
    }
}

/// Append a multipart file part when (and only when) the asset is a fresh
/// binary upload.
fn attach_upload(
    form: multipart::Form,
    field: &'static str,
    asset: Option<&AssetRef>,
) -> AppResult<multipart::Form> {
    let Some(AssetRef::Upload {
        file_name,
        mime_type,
        bytes,
    }) = asset
    else {
        return Ok(form);
    };

    let part = multipart::Part::bytes(bytes.clone())
        .file_name(file_name.clone())
        .mime_str(mime_type)
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "invalid MIME type '{}' for {}: {}",
                mime_type,
                field,
                e
            ))
        })?;

    Ok(form.part(field, part))
}

/// Build a `Server` failure from a non-2xx response, preferring a
/// human-readable message from a structured error body and synthesizing
/// one from the status line when there is none.
fn server_error(status: StatusCode, body: &str) -> AppError {
    let message = parse_error_message(body).unwrap_or_else(|| {
        format!(
            "HTTP {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("error")
        )
    });

    tracing::warn!("Events API error ({}): {}", status, message);
    AppError::Server {
        status: status.as_u16(),
        message,
    }
}

/// Probe an error body for the message shapes the backend is known to
/// produce: `{"message": ...}`, `{"error": "..."}` or
/// `{"error": {"message": ...}}`.
fn parse_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;

    let message = json
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| json.get("error").and_then(Value::as_str))
        .or_else(|| {
            json.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })?;

    let message = message.trim();
    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}
