use tracing::instrument;

use crate::consts::cover_url;
use crate::locale;
use crate::models::{Work, WorkStatus, is_mature};
use crate::raw::RawManga;
use crate::settings::Settings;

/// Converts a raw manga record into a [`Work`].
///
/// Titles and description resolve against the preferred language only (see
/// [`locale`]). A work without cover art has no primary image; that is an
/// expected state, not an error.
#[instrument(skip_all, fields(work_id = %raw.id, language = settings.language()))]
pub fn normalize_work(raw: &RawManga, settings: &Settings) -> Work {
    let attributes = &raw.attributes;
    let preferred = settings.language();
    let titles = locale::resolve_titles(&attributes.title, &attributes.alt_titles, preferred);
    let all_images: Vec<String> = raw.cover_file_names().map(cover_url).collect();
    tracing::trace!(titles = titles.len(), covers = all_images.len(), "Resolved work");
    Work {
        id: raw.id.clone(),
        titles,
        primary_image: all_images.first().cloned(),
        all_images,
        status: attributes.status.as_deref().map(WorkStatus::from_raw).unwrap_or_default(),
        description: locale::resolve(&attributes.description, preferred).map(str::to_string),
        last_updated: attributes.updated_at,
        is_mature: is_mature(attributes.content_rating()),
    }
}
