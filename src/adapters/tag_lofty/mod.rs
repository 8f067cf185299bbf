// Lofty tag adapter - Embedded tag reading

use std::path::Path;
use std::time::Duration;

use lofty::prelude::*;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Tag reader backed by the `lofty` crate
#[derive(Debug, Default)]
pub struct LoftyTagAdapter;

impl LoftyTagAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl TagPort for LoftyTagAdapter {
    fn read_tags(&self, file_path: &Path) -> Result<TagInfo, DomainError> {
        let tagged_file = lofty::read_from_path(file_path)
            .map_err(|e| DomainError::TagReadFail(format!("{}: {}", file_path.display(), e)))?;

        let duration_seconds = known_duration(tagged_file.properties().duration());

        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag());

        Ok(TagInfo {
            title: tag.and_then(|t| t.title()).map(|s| s.into_owned()),
            artist: tag.and_then(|t| t.artist()).map(|s| s.into_owned()),
            year: tag.and_then(|t| t.year()).map(|y| y.to_string()),
            duration_seconds,
        })
    }
}

/// lofty reports an unknown duration as zero
fn known_duration(duration: Duration) -> Option<f64> {
    (!duration.is_zero()).then(|| duration.as_secs_f64())
}
