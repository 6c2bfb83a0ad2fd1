//! MP4 metadata tag writing.
//!
//! Assembles the full set of iTunes-style atoms for a movie and persists
//! them in a single save. All fields are staged on the in-memory tag before
//! the one `write_to_path` commit; a failed save leaves the file's tag
//! state indeterminate.

use std::path::Path;

use mp4ameta::{Data, Fourcc, Img, ImgFmt, MediaType, Tag};
use tracing::debug;

use crate::error::{Error, Result};
use crate::metadata::provider::{parse_year, MovieDetail};

/// Overview length at which the short description gets truncated.
const SHORT_DESCRIPTION_LIMIT: usize = 251;

const LONG_DESCRIPTION: Fourcc = Fourcc(*b"ldes");
const RELEASE_DATE: Fourcc = Fourcc(*b"tdrl");
const HD_VIDEO: Fourcc = Fourcc(*b"hdvd");

/// The target tag state written into a file's metadata atoms.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    pub title: String,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub release_date: Option<String>,
    pub year: Option<u16>,
    pub genre: Option<String>,
    pub performers: Vec<String>,
    pub hd: bool,
    pub artwork: Option<Vec<u8>>,
}

impl TagSet {
    /// Build the tag state for a movie.
    ///
    /// The genre is the first one the service listed; an empty genre list
    /// simply leaves the atom unset. A missing release date leaves both the
    /// date and year atoms unset.
    pub fn from_detail(detail: &MovieDetail, hd: bool, artwork: Option<Vec<u8>>) -> Self {
        Self {
            title: detail.title.clone(),
            short_description: detail.overview.as_deref().map(short_description),
            long_description: detail.overview.clone(),
            release_date: detail.release_date.clone(),
            year: parse_year(detail.release_date.as_deref()),
            genre: detail.genres.first().cloned(),
            performers: detail.cast.clone(),
            hd,
            artwork,
        }
    }
}

/// Truncate an overview for the `desc` atom.
///
/// Overviews of 251 characters or more are cut to 251 characters plus a
/// three-character ellipsis (254 total); shorter ones pass through
/// unchanged.
pub fn short_description(overview: &str) -> String {
    if overview.chars().count() < SHORT_DESCRIPTION_LIMIT {
        return overview.to_string();
    }
    let mut truncated: String = overview.chars().take(SHORT_DESCRIPTION_LIMIT).collect();
    truncated.push_str("...");
    truncated
}

/// Persist a [`TagSet`] into the file's metadata atoms with one save.
///
/// The media-type marker is always set to Movie, replacing any prior
/// value. The HD atom is only written when the flag is true; an existing
/// value is otherwise left untouched. Artwork replaces all existing
/// pictures.
pub fn write_tags(path: &Path, tags: &TagSet) -> Result<()> {
    let mut tag =
        Tag::read_from_path(path).map_err(|e| Error::tag_write(format!("{}: {e}", path.display())))?;

    tag.set_title(tags.title.as_str());
    tag.set_media_type(MediaType::Movie);

    if let Some(desc) = &tags.short_description {
        tag.set_description(desc.as_str());
    }
    if let Some(long) = &tags.long_description {
        tag.set_data(LONG_DESCRIPTION, Data::Utf8(long.clone()));
    }
    if let Some(date) = &tags.release_date {
        tag.set_data(RELEASE_DATE, Data::Utf8(date.clone()));
    }
    if let Some(year) = tags.year {
        tag.set_year(year.to_string());
    }
    if let Some(genre) = &tags.genre {
        tag.set_genre(genre.as_str());
    }

    tag.remove_artists();
    for name in &tags.performers {
        tag.add_artist(name.as_str());
    }

    if tags.hd {
        tag.set_data(HD_VIDEO, Data::BeSigned(vec![1]));
    }

    if let Some(bytes) = &tags.artwork {
        tag.set_artwork(Img::new(image_format(bytes), bytes.clone()));
    }

    debug!(file = %path.display(), title = %tags.title, "writing tags");
    tag.write_to_path(path)
        .map_err(|e| Error::tag_write(format!("{}: {e}", path.display())))
}

/// Sniff the artwork format from magic bytes. TMDB serves JPEG posters, so
/// that is the fallback.
fn image_format(bytes: &[u8]) -> ImgFmt {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        ImgFmt::Png
    } else if bytes.starts_with(b"BM") {
        ImgFmt::Bmp
    } else {
        ImgFmt::Jpeg
    }
}
