//! YouTube reference resolution for news videos
//!
//! A news item's `videoUrl` is either a YouTube link (embed it) or a direct
//! media file (play it). The site decides which by trying to pull a video id
//! out of the URL.

use regex::Regex;

/// Extract the 11-character YouTube video id from a URL
///
/// Recognizes the usual shapes: `youtu.be/<id>`, `/v/<id>`, `/u/<n>/<id>`,
/// `/embed/<id>`, `watch?v=<id>` and a `v=` query parameter anywhere in the
/// string. Returns `None` for anything else (including a captured id that is
/// not exactly 11 characters), which tells the caller to fall back to direct
/// file playback.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    let pattern = Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").ok()?;
    let captures = pattern.captures(url)?;
    let id = captures.get(2)?.as_str();
    if id.len() == 11 {
        Some(id)
    } else {
        None
    }
}
