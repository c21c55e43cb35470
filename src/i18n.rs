/*
Simple i18n helper for the event admin core.

This module provides:
- A tiny embedded translations store for ID/EN (compile-time embedded JSON).
- A simple `tr` function to lookup translations by key + optional params.
- A `t` convenience wrapper using the default language (DEFAULT_LANG).

Usage:
    use crate::i18n;
    let msg = i18n::t("validation.title.required");
    let msg_with = i18n::tr(None, "validation.file.too_large", Some(&[("max", "10")]));

Notes:
- Placeholders in translation strings use single-brace format: `{name}`.
- Default language is `id` (the backend and its operators are Indonesian).
  If a key is missing for the requested language, the fallback language
  will be used.
*/

use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_LANG: &str = "id";

static TRANSLATIONS: OnceLock<HashMap<String, HashMap<String, String>>> = OnceLock::new();

const ID_JSON: &str = r#"
{
  "validation.title.required": "Judul kegiatan wajib diisi",
  "validation.title.too_long": "Judul kegiatan maksimal {max} karakter",
  "validation.description.required": "Deskripsi kegiatan wajib diisi",
  "validation.location.required": "Lokasi kegiatan wajib diisi",
  "validation.start.required": "Waktu mulai wajib diisi",
  "validation.start.invalid": "Format waktu mulai tidak valid",
  "validation.end.required": "Waktu berakhir wajib diisi",
  "validation.end.invalid": "Format waktu berakhir tidak valid",
  "validation.end.before_start": "Waktu berakhir tidak boleh sebelum waktu mulai",
  "validation.capacity.negative": "Kapasitas peserta tidak boleh negatif",
  "validation.price.negative": "Harga tidak boleh negatif",
  "validation.file.too_large": "Ukuran berkas maksimal {max} MB",
  "validation.file.unsupported_type": "Format berkas harus JPG, PNG, atau WebP",
  "cli.using_fallback": "Backend tidak dapat dijangkau, menampilkan data contoh",
  "cli.no_events": "Belum ada kegiatan",
  "cli.fetch_failed": "Gagal memuat daftar kegiatan: {err}",
  "app.name": "Admin Kegiatan"
}
"#;

const EN_JSON: &str = r#"
{
  "validation.title.required": "Event title is required",
  "validation.title.too_long": "Event title must be at most {max} characters",
  "validation.description.required": "Event description is required",
  "validation.location.required": "Event location is required",
  "validation.start.required": "Start time is required",
  "validation.start.invalid": "Start time format is invalid",
  "validation.end.required": "End time is required",
  "validation.end.invalid": "End time format is invalid",
  "validation.end.before_start": "End time must not be before start time",
  "validation.capacity.negative": "Participant capacity must not be negative",
  "validation.price.negative": "Price must not be negative",
  "validation.file.too_large": "File size must be at most {max} MB",
  "validation.file.unsupported_type": "File format must be JPG, PNG or WebP",
  "cli.using_fallback": "Backend unreachable, showing sample data",
  "cli.no_events": "No events yet",
  "cli.fetch_failed": "Failed to load events: {err}",
  "app.name": "Event Admin"
}
"#;

/// Initialize translations map (lazy).
fn build_translations() -> HashMap<String, HashMap<String, String>> {
    let mut out: HashMap<String, HashMap<String, String>> = HashMap::new();

    let id_map: HashMap<String, String> = serde_json::from_str(ID_JSON).unwrap_or_else(|e| {
        panic!("failed to parse ID_JSON in i18n module: {}", e);
    });
    out.insert("id".to_string(), id_map);

    let en_map: HashMap<String, String> = serde_json::from_str(EN_JSON).unwrap_or_else(|e| {
        panic!("failed to parse EN_JSON in i18n module: {}", e);
    });
    out.insert("en".to_string(), en_map);

    out
}

/// Returns the global translations map (lang -> (key -> message)).
fn translations() -> &'static HashMap<String, HashMap<String, String>> {
    TRANSLATIONS.get_or_init(build_translations)
}

/// Normalize a language tag into a short, lowercase code (e.g. "id-ID" -> "id").
pub fn normalize_language(lang: &str) -> String {
    lang.split('-').next().unwrap_or(lang).to_lowercase()
}

/// Returns true if the given language code has an embedded translation
/// table (e.g. "id", "en").
pub fn is_supported_language(lang: &str) -> bool {
    translations().contains_key(lang)
}

/// Translate a key using an explicit language (or default if None).
///
/// - `lang`: optional language code (`"id"`, `"en"`, ...). If None, DEFAULT_LANG is used.
/// - `key`: translation key (flat string, e.g. "validation.title.required").
/// - `params`: optional slice of (name, value) for placeholder replacement.
///
/// Returns the translated and parameter-substituted string. If no translation
/// is found, returns the default language value or the key itself.
pub fn tr(lang: Option<&str>, key: &str, params: Option<&[(&str, &str)]>) -> String {
    let map = translations();

    let desired = lang.unwrap_or(DEFAULT_LANG);

    let val = map
        .get(desired)
        .and_then(|m| m.get(key))
        .cloned()
        .or_else(|| map.get(DEFAULT_LANG).and_then(|m| m.get(key)).cloned())
        .unwrap_or_else(|| key.to_string());

    if let Some(params) = params {
        let mut s = val;
        for (k, v) in params {
            s = s.replace(&format!("{{{}}}", k), v);
        }
        s
    } else {
        val
    }
}

/// Convenience wrapper: translate using default language (DEFAULT_LANG).
pub fn t(key: &str) -> String {
    tr(None, key, None)
}

/// Convenience wrapper with params (default language).
pub fn t_with(key: &str, params: &[(&str, &str)]) -> String {
    tr(None, key, Some(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tr_basic() {
        let s = tr(Some("id"), "validation.title.required", None);
        assert!(s.contains("Judul"));
    }

    #[test]
    fn test_t_with_params() {
        let s = t_with("validation.file.too_large", &[("max", "10")]);
        assert!(s.contains("10"));
    }

    #[test]
    fn test_fallback_to_default() {
        // Unknown language falls back to default (id)
        let s = tr(Some("fr"), "validation.location.required", None);
        assert!(s.contains("Lokasi"));
    }

    #[test]
    fn missing_key_returns_key() {
        let k = "non.existent.key";
        let s = t(k);
        assert_eq!(s, k.to_string());
    }

    #[test]
    fn test_is_supported_language() {
        assert!(is_supported_language("id"));
        assert!(is_supported_language("en"));
        assert!(!is_supported_language("fr"));
    }

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("id-ID"), "id");
        assert_eq!(normalize_language("en"), "en");
        assert_eq!(normalize_language("EN-us"), "en");
    }
}
