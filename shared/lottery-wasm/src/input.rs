//! Raw form input and its conversion into a validated `DrawRequest`.

use serde::Deserialize;

use crate::error::{DrawError, Field};
use crate::types::DrawRequest;

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`).
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Text fields as typed by the user, plus the "allow repeats" checkbox.
///
/// Deserializes from the JS object `{ count, start, end, allowRepeats }`.
/// Missing keys are treated as empty fields so they surface as
/// `MissingField` rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDrawInput {
    pub count: String,
    pub start: String,
    pub end: String,
    pub allow_repeats: bool,
}

impl RawDrawInput {
    pub fn new(
        count: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        allow_repeats: bool,
    ) -> Self {
        Self {
            count: count.into(),
            start: start.into(),
            end: end.into(),
            allow_repeats,
        }
    }

    /// Parse and validate all fields.
    ///
    /// Emptiness is checked for every field before any of them is parsed, then
    /// the numbers go through `DrawRequest::new`. Values a JS number cannot
    /// represent exactly are `NotANumber`, so every drawn value can be handed
    /// back to the page.
    pub fn parse(&self) -> Result<DrawRequest, DrawError> {
        let fields = [
            (Field::Count, self.count.trim()),
            (Field::Start, self.start.trim()),
            (Field::End, self.end.trim()),
        ];

        if let Some(&(field, _)) = fields.iter().find(|(_, text)| text.is_empty()) {
            tracing::debug!(%field, "draw input incomplete");
            return Err(DrawError::MissingField(field));
        }

        let [count, start, end] = fields.map(|(field, text)| parse_field(field, text));
        let (count, start, end) = (count?, start?, end?);
        let request = DrawRequest::new(start, end, count, self.allow_repeats);
        if let Err(e) = &request {
            tracing::debug!(code = e.code(), error = %e, "draw input rejected");
        }
        request
    }
}

fn parse_field(field: Field, text: &str) -> Result<i64, DrawError> {
    text.parse::<i64>()
        .ok()
        .filter(|v| (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(v))
        .ok_or_else(|| DrawError::NotANumber {
            field,
            value: text.to_string(),
        })
}
