//! Video identifier resolution from the watch-page URL.

use crate::defaults;
use reqwest::Url;

/// Extract the video identifier from a watch-page URL's `v` query parameter.
///
/// Returns `None` for unparseable URLs, a missing parameter, or an empty
/// value.
pub fn video_id_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == defaults::VIDEO_ID_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
