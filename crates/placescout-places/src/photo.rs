//! Photo URL construction. Pure: no network access.

use placescout_core::config::DEFAULT_PLACES_BASE_URL;
use reqwest::Url;

pub(crate) const PHOTO_ENDPOINT: &str = "photo";

/// Builds a renderable image URL for `photo_ref` against the default
/// provider host.
///
/// Returns `None` when `photo_ref` or `credential` is absent or empty.
#[must_use]
pub fn build_photo_url(
    photo_ref: Option<&str>,
    max_width: u32,
    credential: Option<&str>,
) -> Option<String> {
    let base = Url::parse(DEFAULT_PLACES_BASE_URL).ok()?;
    photo_url_from_base(&base, photo_ref, max_width, credential)
}

/// Same as [`build_photo_url`] against an explicit base URL, which must end
/// in `/`.
pub(crate) fn photo_url_from_base(
    base: &Url,
    photo_ref: Option<&str>,
    max_width: u32,
    credential: Option<&str>,
) -> Option<String> {
    let photo_ref = photo_ref.filter(|r| !r.is_empty())?;
    let credential = credential.filter(|c| !c.is_empty())?;

    let mut url = base.join(PHOTO_ENDPOINT).ok()?;
    url.query_pairs_mut()
        .append_pair("maxwidth", &max_width.to_string())
        .append_pair("photoreference", photo_ref)
        .append_pair("key", credential);
    Some(url.into())
}
