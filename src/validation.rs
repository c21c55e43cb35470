//! Create-event form validation. Pure and synchronous: every rule is
//! checked independently, all violations are reported together in a
//! field-keyed map, and the caller decides what to do with them. Nothing
//! here ever fails; validation problems are data, not errors.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::i18n;
use crate::models::{AssetRef, EventDraft};
use crate::transform::parse_instant;

pub const MAX_TITLE_CHARS: usize = 255;
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// MIME types the backend accepts for event media uploads.
pub const ALLOWED_UPLOAD_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Field-keyed validation outcome. `errors` is empty iff the draft may be
/// submitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    fn flag(&mut self, field: &str, message: String) {
        self.errors.insert(field.to_string(), message);
    }
}

/// Validate a candidate create-event draft.
///
/// Rules are independent; a draft with several problems reports all of
/// them in one pass. The exception is within a single field: a file that
/// fails the size check skips the type check, and an unparsable end time
/// skips the ordering check.
pub fn validate(draft: &EventDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.title.trim().is_empty() {
        report.flag("title", i18n::t("validation.title.required"));
    } else if draft.title.chars().count() > MAX_TITLE_CHARS {
        report.flag(
            "title",
            i18n::t_with("validation.title.too_long", &[("max", "255")]),
        );
    }

    if draft.description.trim().is_empty() {
        report.flag("description", i18n::t("validation.description.required"));
    }

    if draft.location.trim().is_empty() {
        report.flag("location", i18n::t("validation.location.required"));
    }

    let start = if draft.start_time.trim().is_empty() {
        report.flag("start_time", i18n::t("validation.start.required"));
        None
    } else {
        let parsed = parse_instant(&draft.start_time);
        if parsed.is_none() {
            report.flag("start_time", i18n::t("validation.start.invalid"));
        }
        parsed
    };

    if draft.end_time.trim().is_empty() {
        report.flag("end_time", i18n::t("validation.end.required"));
    } else {
        match parse_instant(&draft.end_time) {
            None => report.flag("end_time", i18n::t("validation.end.invalid")),
            Some(end) => {
                if let Some(start) = start {
                    if end < start {
                        report.flag("end_time", i18n::t("validation.end.before_start"));
                    }
                }
            }
        }
    }

    if matches!(draft.capacity, Some(capacity) if capacity < 0) {
        report.flag("capacity", i18n::t("validation.capacity.negative"));
    }

    if matches!(draft.price, Some(price) if price < 0.0) {
        report.flag("price", i18n::t("validation.price.negative"));
    }

    check_upload(&mut report, "image", draft.image.as_ref());
    check_upload(&mut report, "flyer", draft.flyer.as_ref());
    check_upload(&mut report, "certificate", draft.certificate.as_ref());

    report
}

/// Size and type checks apply only to fresh binary uploads; a stored
/// reference (`AssetRef::Keep`) is exempt. Size is checked first and a
/// size failure skips the type check for that field.
fn check_upload(report: &mut ValidationReport, field: &str, asset: Option<&AssetRef>) {
    let Some(AssetRef::Upload {
        mime_type, bytes, ..
    }) = asset
    else {
        return;
    };

    if bytes.len() > MAX_UPLOAD_BYTES {
        report.flag(field, i18n::t_with("validation.file.too_large", &[("max", "10")]));
    } else if !is_allowed_type(mime_type) {
        report.flag(field, i18n::t("validation.file.unsupported_type"));
    }
}

fn is_allowed_type(mime_type: &str) -> bool {
    ALLOWED_UPLOAD_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(mime_type.trim()))
}
