use crate::utils::date::parse_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One journal record as written by the exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub uuid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    /// `None` when the field is missing, null or not a valid timestamp.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub modified_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub starred: bool,
    #[serde(default)]
    pub journal_name: Option<String>,
    #[serde(default)]
    pub journal_uuid: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub weather: Option<Weather>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// `None` when the exporter could not find the media file.
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub original_filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub place_name: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub admin_area: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub temp_celsius: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

impl Attachment {
    /// Filename, if present and non-empty.
    pub fn file(&self) -> Option<&str> {
        self.filename.as_deref().filter(|f| !f.is_empty())
    }

    /// Attachment type used by the media filter (`"photo"` when missing).
    pub fn media_type(&self) -> &str {
        match self.kind.as_deref() {
            Some(k) if !k.is_empty() => k,
            _ => "photo",
        }
    }
}

impl Location {
    /// Both coordinates, when present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }
}

impl Entry {
    pub fn first_attachment(&self) -> Option<&Attachment> {
        self.attachments.first()
    }

    /// Filename of attachment 0, if it has one.
    pub fn thumbnail(&self) -> Option<&str> {
        self.first_attachment().and_then(Attachment::file)
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.location.as_ref().and_then(Location::coordinates)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

fn lenient_timestamp<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(d)?;
    let parsed = raw.as_str().and_then(parse_timestamp);
    if parsed.is_none() && !raw.is_null() && raw.as_str() != Some("") {
        tracing::debug!(value = %raw, "ignoring malformed timestamp");
    }
    Ok(parsed)
}
