// Domain rules - Coercion of untyped probe data and source reconciliation

use serde_json::{Map, Number, Value};

use crate::domain::errors::*;
use crate::domain::model::*;

/// Per-field coercion of untyped JSON values.
///
/// Every function handles exactly one field so a malformed value only ever
/// affects the field it belongs to. Missing and `null` values take the
/// field's default.
pub struct FieldCoercion;

impl FieldCoercion {
    /// Unsigned integer from a JSON number or a numeric string, default 0
    pub fn integer<T: TryFrom<u64>>(value: Option<&Value>, field: &str) -> Result<T, DomainError> {
        let raw = match value {
            None | Some(Value::Null) => 0,
            Some(Value::Number(number)) => Self::number_to_u64(number, field)?,
            Some(Value::String(text)) => text.trim().parse::<u64>().map_err(|_| {
                DomainError::invalid_field(field, format!("'{}' is not an unsigned integer", text))
            })?,
            Some(other) => {
                return Err(DomainError::invalid_field(
                    field,
                    format!("expected an integer, got {}", json_type_name(other)),
                ))
            }
        };

        T::try_from(raw)
            .map_err(|_| DomainError::invalid_field(field, format!("{} is out of range", raw)))
    }

    /// Floating point value from a JSON number or a numeric string, default 0.0
    pub fn float(value: Option<&Value>, field: &str) -> Result<f64, DomainError> {
        match value {
            None | Some(Value::Null) => Ok(0.0),
            Some(Value::Number(number)) => number.as_f64().ok_or_else(|| {
                DomainError::invalid_field(field, format!("{} is not representable as f64", number))
            }),
            Some(Value::String(text)) => text.trim().parse::<f64>().map_err(|_| {
                DomainError::invalid_field(field, format!("'{}' is not a number", text))
            }),
            Some(other) => Err(DomainError::invalid_field(
                field,
                format!("expected a number, got {}", json_type_name(other)),
            )),
        }
    }

    /// String value, default `"N/A"`
    pub fn text(value: Option<&Value>, field: &str) -> Result<String, DomainError> {
        match value {
            None | Some(Value::Null) => Ok(NOT_AVAILABLE.to_string()),
            Some(Value::String(text)) => Ok(text.clone()),
            Some(other) => Err(DomainError::invalid_field(
                field,
                format!("expected a string, got {}", json_type_name(other)),
            )),
        }
    }

    /// Frame rate from a `"numerator/denominator"` string.
    ///
    /// A missing value reads as `"0/1"`. A zero denominator yields 0.0.
    pub fn frame_rate(value: Option<&Value>, field: &str) -> Result<f64, DomainError> {
        let text = match value {
            None | Some(Value::Null) => return Ok(0.0),
            Some(Value::String(text)) => text,
            Some(other) => {
                return Err(DomainError::invalid_field(
                    field,
                    format!("expected a N/D string, got {}", json_type_name(other)),
                ))
            }
        };

        let (num, den) = text
            .split_once('/')
            .ok_or_else(|| DomainError::invalid_field(field, format!("'{}' is not N/D", text)))?;
        let parse = |part: &str| {
            part.trim().parse::<i64>().map_err(|_| {
                DomainError::invalid_field(field, format!("'{}' has a non-integer part", text))
            })
        };
        let (num, den) = (parse(num)?, parse(den)?);

        if den == 0 {
            Ok(0.0)
        } else {
            Ok(num as f64 / den as f64)
        }
    }

    fn number_to_u64(number: &Number, field: &str) -> Result<u64, DomainError> {
        if let Some(value) = number.as_u64() {
            return Ok(value);
        }
        match number.as_f64() {
            Some(f) if f >= 0.0 && f.fract() == 0.0 && f < u64::MAX as f64 => Ok(f as u64),
            _ => Err(DomainError::invalid_field(
                field,
                format!("{} is not a non-negative integer", number),
            )),
        }
    }
}

/// Declared type of a probe stream entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Video,
    Audio,
    Other,
}

/// Maps a single raw probe stream onto a typed stream record
pub struct StreamMapper;

impl StreamMapper {
    /// Classify an entry by its `codec_type`
    pub fn classify(stream: &Value) -> Result<StreamKind, DomainError> {
        let entry = Self::entry(stream)?;
        Ok(match entry.get("codec_type").and_then(Value::as_str) {
            Some("video") => StreamKind::Video,
            Some("audio") => StreamKind::Audio,
            _ => StreamKind::Other,
        })
    }

    pub fn video(stream: &Value) -> Result<VideoStreamInfo, DomainError> {
        let entry = Self::entry(stream)?;
        Ok(VideoStreamInfo {
            codec_name: FieldCoercion::text(entry.get("codec_name"), "codec_name")?,
            profile: FieldCoercion::text(entry.get("profile"), "profile")?,
            width: FieldCoercion::integer(entry.get("width"), "width")?,
            height: FieldCoercion::integer(entry.get("height"), "height")?,
            bit_rate: FieldCoercion::integer(entry.get("bit_rate"), "bit_rate")?,
            avg_frame_rate: FieldCoercion::frame_rate(
                entry.get("avg_frame_rate"),
                "avg_frame_rate",
            )?,
            pixel_format: FieldCoercion::text(entry.get("pix_fmt"), "pix_fmt")?,
        })
    }

    pub fn audio(stream: &Value) -> Result<AudioStreamInfo, DomainError> {
        let entry = Self::entry(stream)?;
        Ok(AudioStreamInfo {
            codec_name: FieldCoercion::text(entry.get("codec_name"), "codec_name")?,
            sample_rate: FieldCoercion::integer(entry.get("sample_rate"), "sample_rate")?,
            channels: FieldCoercion::integer(entry.get("channels"), "channels")?,
            bit_rate: FieldCoercion::integer(entry.get("bit_rate"), "bit_rate")?,
            channel_layout: FieldCoercion::text(entry.get("channel_layout"), "channel_layout")?,
        })
    }

    fn entry(stream: &Value) -> Result<&Map<String, Value>, DomainError> {
        stream.as_object().ok_or_else(|| {
            DomainError::invalid_field(
                "stream",
                format!("expected an object, got {}", json_type_name(stream)),
            )
        })
    }
}

/// Source a reconciled duration was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationSource {
    /// Container-level duration reported by the probe tool
    Probe,
    /// Duration reported by the tag reader
    Tags,
    /// Nothing usable; 0.0
    Default,
}

/// Order in which duration sources are consulted
pub const DURATION_PRECEDENCE: [DurationSource; 3] =
    [DurationSource::Probe, DurationSource::Tags, DurationSource::Default];

/// Chooses the duration of a file among the probe and tag sources
pub struct DurationReconciler;

impl DurationReconciler {
    /// Parse the format-level duration; absence reads as 0.0
    pub fn probe_duration(document: &ProbeDocument) -> Result<f64, DomainError> {
        FieldCoercion::float(document.format_field("duration"), "format.duration")
    }

    /// Walk [`DURATION_PRECEDENCE`] and return the first accepted candidate
    pub fn reconcile(probe_duration: f64, tags: Option<&TagInfo>) -> (f64, DurationSource) {
        DURATION_PRECEDENCE
            .iter()
            .find_map(|&source| Self::candidate(source, probe_duration, tags).map(|d| (d, source)))
            .unwrap_or((0.0, DurationSource::Default))
    }

    fn candidate(
        source: DurationSource,
        probe_duration: f64,
        tags: Option<&TagInfo>,
    ) -> Option<f64> {
        match source {
            DurationSource::Probe => (probe_duration > 0.0).then_some(probe_duration),
            DurationSource::Tags => tags.and_then(|tags| tags.duration_seconds),
            DurationSource::Default => Some(0.0),
        }
    }
}

/// Container-level bitrate in kbps from the probe `format.bit_rate` field
pub fn overall_bitrate_kbps(document: &ProbeDocument) -> Result<u64, DomainError> {
    let bits: u64 = FieldCoercion::integer(document.format_field("bit_rate"), "format.bit_rate")?;
    Ok(bits / 1000)
}

/// Schema checks applied to an assembled record
pub struct RecordValidator;

impl RecordValidator {
    /// Coerce the format-level `tags` value into a passthrough map
    pub fn raw_tags(value: Option<&Value>) -> Result<RawTags, DomainError> {
        match value {
            None | Some(Value::Null) => Ok(RawTags::new()),
            Some(Value::Object(tags)) => Ok(tags.clone()),
            Some(other) => Err(DomainError::ValidationFailed(format!(
                "raw_tags: expected a mapping, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// Required-field and range checks on a complete record
    pub fn validate(record: &MediaRecord) -> Result<(), DomainError> {
        if !record.file_path.is_absolute() {
            return Err(DomainError::ValidationFailed(format!(
                "file_path must be absolute: {}",
                record.file_path.display()
            )));
        }
        if record.filename.is_empty() {
            return Err(DomainError::ValidationFailed("filename cannot be empty".to_string()));
        }
        if !record.duration_seconds.is_finite() || record.duration_seconds < 0.0 {
            return Err(DomainError::ValidationFailed(format!(
                "duration_seconds must be a finite non-negative number, got {}",
                record.duration_seconds
            )));
        }
        Ok(())
    }
}
