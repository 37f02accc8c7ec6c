use regex::Regex;
use std::sync::LazyLock;

use crate::capabilities::join_path;

pub const YOUTUBE_ID_LENGTH: usize = 11;
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Known YouTube URL shapes. The greedy prefix makes the last marker in the
/// URL win; the id runs until `#`, `&` or `?`.
static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*")
        .expect("Invalid YouTube URL regex")
});

/// Extracts the 11-character video id from a YouTube link.
///
/// Returns `None` for anything that does not yield exactly eleven
/// URL-safe characters, so callers can treat the post as having no video.
pub fn youtube_video_id(url: &str) -> Option<&str> {
    let captures = YOUTUBE_URL.captures(url)?;
    let id = captures.get(2)?.as_str();

    let well_formed = id.chars().count() == YOUTUBE_ID_LENGTH
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    well_formed.then_some(id)
}

pub fn youtube_embed_url(video_link: &str) -> Option<String> {
    youtube_video_id(video_link).map(|id| format!("{YOUTUBE_EMBED_BASE}{id}"))
}

/// Resolves an image path from the API against the asset host.
///
/// Paths that are already absolute http(s) URLs are passed through; blank
/// paths yield `None`.
pub fn asset_url(host: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if is_absolute_http(path) {
        return Some(path.to_string());
    }
    Some(join_path(host, path))
}

/// Resolves a profile image path under the storage root.
pub fn storage_url(storage_root: &str, path: Option<&str>) -> Option<String> {
    asset_url(storage_root, path?)
}

fn is_absolute_http(path: &str) -> bool {
    let lower = path.get(..8).unwrap_or(path).to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}
