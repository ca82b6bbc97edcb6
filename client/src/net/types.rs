//! Wire DTOs for the publisher's timeline endpoint.
//!
//! DESIGN
//! ======
//! Keys mirror the PascalCase JSON emitted by the publisher. The endpoint is a
//! PHP script that occasionally quotes numbers, so numeric fields accept both
//! JSON numbers and numeric strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Fixed endpoint returning the [`TimelineData`] envelope.
pub const TIMELINE_ENDPOINT: &str = "https://arthurfrost.qflo.co.za/php/getTimeline.php";

/// Base URL that every image, icon, and audio path is resolved against.
pub const ASSET_BASE_URL: &str = "https://arthurfrost.qflo.co.za/";

/// Resolve a response path against [`ASSET_BASE_URL`].
///
/// The path is appended verbatim; a broken path degrades to a broken asset in
/// the browser rather than an error here.
pub fn asset_url(path: &str) -> String {
    format!("{ASSET_BASE_URL}{path}")
}

/// Root response envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineData {
    /// About-section blocks. Only the first is displayed.
    #[serde(rename = "Body", default)]
    pub body: Vec<BodyContent>,
    /// Playable media entries.
    #[serde(rename = "Timeline", default)]
    pub timeline: Vec<TimelineItem>,
}

impl TimelineData {
    /// The about block to display, if the response carried any.
    #[must_use]
    pub fn about(&self) -> Option<&BodyContent> {
        self.body.first()
    }

    #[must_use]
    pub fn is_empty_timeline(&self) -> bool {
        self.timeline.is_empty()
    }
}

/// One playable media entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimelineItem {
    /// Identifier, unique within one response.
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub id: i64,
    /// Episode label shown as "Episode {n}".
    #[serde(default, deserialize_with = "deserialize_string_lenient")]
    pub episode: String,
    /// Display title.
    pub title: String,
    /// Media type code, if present.
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub media: Option<i64>,
    /// Free-text description; blank values are not rendered.
    #[serde(default)]
    pub description: Option<String>,
    /// Card image path relative to [`ASSET_BASE_URL`].
    #[serde(default)]
    pub image: String,
    /// Round icon path relative to [`ASSET_BASE_URL`].
    #[serde(default)]
    pub icon: String,
    /// Audio asset path relative to [`ASSET_BASE_URL`].
    #[serde(default)]
    pub audio: String,
    /// Upstream identifier of the media item.
    #[serde(default)]
    pub remote_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub status: Option<i64>,
    #[serde(rename = "isActive", default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub is_active: Option<i64>,
    #[serde(rename = "inId", default)]
    pub in_id: Option<String>,
    /// Creation date, already formatted for display by the publisher.
    #[serde(default)]
    pub create_date: String,
    /// Human-readable media label (e.g. an audio file name).
    #[serde(default)]
    pub media_name: Option<String>,
    /// Category label used to pick the badge colors.
    #[serde(default)]
    pub category: String,
    /// Creation time in seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub epoch: Option<i64>,
    /// Size of the audio asset in bytes.
    #[serde(default, deserialize_with = "deserialize_u64_lenient")]
    pub audio_size: u64,
}

impl TimelineItem {
    /// Whether the description holds anything worth rendering.
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}

/// One about-section block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BodyContent {
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub id: Option<i64>,
    /// Background image path relative to [`ASSET_BASE_URL`].
    #[serde(default)]
    pub background: String,
    /// Overlay darkness as a percentage (0-100).
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub background_opacity: f64,
    /// Rich-text HTML body.
    #[serde(default)]
    pub about: String,
    /// Embedded script payload. Never executed.
    #[serde(rename = "JS", default)]
    pub js: Option<String>,
    /// Embedded style payload. Not applied.
    #[serde(rename = "CSS", default)]
    pub css: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub status: Option<i64>,
    #[serde(rename = "createDate", default)]
    pub create_date: Option<PhpDate>,
    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    pub epoch: Option<i64>,
}

/// A PHP `DateTime` serialized with `json_encode`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhpDate {
    pub date: String,
    #[serde(default)]
    pub timezone_type: Option<i64>,
    #[serde(default)]
    pub timezone: Option<String>,
}

fn number_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<f64, E> {
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| E::custom("expected finite number")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("expected numeric string, got {raw:?}"))),
        _ => Err(E::custom("expected number")),
    }
}

fn integer_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<i64, E> {
    if let serde_json::Value::Number(number) = value
        && let Some(int) = number.as_i64()
    {
        return Ok(int);
    }
    let float = number_from_value::<E>(value)?;
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if float.is_finite() && float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        return Ok(float as i64);
    }
    Err(E::custom("expected integer-compatible number"))
}

fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    integer_from_value::<D::Error>(&value)
}

fn deserialize_opt_i64_lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(raw) if raw.trim().is_empty() => Ok(None),
        other => integer_from_value::<D::Error>(other).map(Some),
    }
}

fn deserialize_u64_lenient<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0);
    }
    let int = integer_from_value::<D::Error>(&value)?;
    u64::try_from(int).map_err(|_| D::Error::custom(format!("value {int} must not be negative")))
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(0.0);
    }
    number_from_value::<D::Error>(&value)
}

fn deserialize_string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
