//! Video link -> thumbnail URL resolution
//!
//! Recognizes the two link shapes YouTube hands out (`youtube.com/watch?v=`
//! and `youtu.be/`) and builds the max-resolution thumbnail URL. No I/O.

use serde::Serialize;
use thiserror::Error;

/// Marker for a canonical watch-page link
pub const WATCH_MARKER: &str = "youtube.com/watch?v=";

/// Marker for a short link
pub const SHORT_MARKER: &str = "youtu.be/";

/// Message shown to the user whenever resolution fails
pub const INVALID_LINK_PROMPT: &str =
    "Please enter a valid YouTube URL (youtube.com or youtu.be).";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("{}", INVALID_LINK_PROMPT)]
    EmptyInput,
    #[error("{}", INVALID_LINK_PROMPT)]
    UnrecognizedFormat,
    #[error("{}", INVALID_LINK_PROMPT)]
    EmptyIdentifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Watch,
    Short,
}

impl LinkKind {
    fn marker(self) -> &'static str {
        match self {
            LinkKind::Watch => WATCH_MARKER,
            LinkKind::Short => SHORT_MARKER,
        }
    }

    /// Which link shape the input contains; watch links take priority
    pub fn detect(input: &str) -> Option<Self> {
        [LinkKind::Watch, LinkKind::Short]
            .into_iter()
            .find(|kind| input.contains(kind.marker()))
    }
}

/// A successfully resolved thumbnail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub kind: LinkKind,
    pub video_id: String,
    pub url: String,
}

/// Pull the candidate identifier out of `input`.
///
/// The identifier is whatever follows the first marker occurrence, up to the
/// first `&` or `?`. Its characters are not checked.
pub fn extract_video_id(input: &str) -> Option<&str> {
    let marker = LinkKind::detect(input)?.marker();
    let (_, rest) = input.split_once(marker)?;
    let id = rest.split(['&', '?']).next().unwrap_or(rest);
    (!id.is_empty()).then_some(id)
}

/// Max-resolution thumbnail URL for a video identifier
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}

pub fn resolve(input: &str) -> Result<Thumbnail, ResolveError> {
    if input.is_empty() {
        return Err(ResolveError::EmptyInput);
    }

    let kind = LinkKind::detect(input).ok_or(ResolveError::UnrecognizedFormat)?;
    let video_id = extract_video_id(input).ok_or(ResolveError::EmptyIdentifier)?;

    Ok(Thumbnail {
        kind,
        video_id: video_id.to_string(),
        url: thumbnail_url(video_id),
    })
}
