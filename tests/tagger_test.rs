//! Round-trip tests for the MP4 tag writer: stage a full tag set, save it,
//! and read the atoms back from disk.

mod common;

use std::path::PathBuf;

use mp4ameta::{Data, Fourcc, ImgFmt, MediaType, Tag};
use reeltag::tagger::{write_tags, TagSet};
use tempfile::TempDir;

const LDES: Fourcc = Fourcc(*b"ldes");
const TDRL: Fourcc = Fourcc(*b"tdrl");
const HDVD: Fourcc = Fourcc(*b"hdvd");

const JPEG_BYTES: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE0];
const PNG_BYTES: [u8; 5] = [0x89, b'P', b'N', b'G', 0x0D];

fn fixture_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("movie.mp4");
    std::fs::write(&path, common::minimal_mp4()).unwrap();
    path
}

fn full_tag_set() -> TagSet {
    TagSet {
        title: "Heat".to_string(),
        short_description: Some("A heist goes wrong.".to_string()),
        long_description: Some("A heist goes wrong in Los Angeles.".to_string()),
        release_date: Some("1995-12-15".to_string()),
        year: Some(1995),
        genre: Some("Crime".to_string()),
        performers: vec!["Al Pacino".to_string(), "Robert De Niro".to_string()],
        hd: true,
        artwork: Some(JPEG_BYTES.to_vec()),
    }
}

#[test]
fn all_atoms_survive_a_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture_file(&dir);

    write_tags(&file, &full_tag_set()).unwrap();

    let tag = Tag::read_from_path(&file).unwrap();
    assert_eq!(tag.title(), Some("Heat"));
    assert!(matches!(tag.media_type(), Some(MediaType::Movie)));
    assert_eq!(tag.description(), Some("A heist goes wrong."));
    assert_eq!(
        tag.strings_of(&LDES).next(),
        Some("A heist goes wrong in Los Angeles.")
    );
    assert_eq!(tag.strings_of(&TDRL).next(), Some("1995-12-15"));
    assert_eq!(tag.year(), Some("1995"));
    assert_eq!(tag.genre(), Some("Crime"));
    let artists: Vec<&str> = tag.artists().collect();
    assert_eq!(artists, ["Al Pacino", "Robert De Niro"]);
    assert!(
        matches!(tag.data_of(&HDVD).next(), Some(Data::BeSigned(v)) if v.as_slice() == [1])
    );
    let artwork = tag.artwork().unwrap();
    assert!(matches!(artwork.fmt, ImgFmt::Jpeg));
    assert_eq!(artwork.data, &JPEG_BYTES[..]);
}

#[test]
fn hd_atom_absent_when_not_hd() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture_file(&dir);

    let mut tags = full_tag_set();
    tags.hd = false;
    write_tags(&file, &tags).unwrap();

    let tag = Tag::read_from_path(&file).unwrap();
    assert_eq!(tag.title(), Some("Heat"));
    assert!(tag.data_of(&HDVD).next().is_none());
}

#[test]
fn optional_atoms_left_unset_for_sparse_detail() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture_file(&dir);

    let tags = TagSet {
        title: "Obscure".to_string(),
        ..TagSet::default()
    };
    write_tags(&file, &tags).unwrap();

    let tag = Tag::read_from_path(&file).unwrap();
    assert_eq!(tag.title(), Some("Obscure"));
    assert!(matches!(tag.media_type(), Some(MediaType::Movie)));
    assert!(tag.description().is_none());
    assert!(tag.strings_of(&LDES).next().is_none());
    assert!(tag.strings_of(&TDRL).next().is_none());
    assert!(tag.year().is_none());
    assert!(tag.genre().is_none());
    assert_eq!(tag.artists().count(), 0);
    assert!(tag.data_of(&HDVD).next().is_none());
    assert!(tag.artwork().is_none());
}

#[test]
fn second_write_replaces_artwork_and_performers() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture_file(&dir);

    write_tags(&file, &full_tag_set()).unwrap();

    let mut updated = full_tag_set();
    updated.performers = vec!["Val Kilmer".to_string()];
    updated.artwork = Some(PNG_BYTES.to_vec());
    write_tags(&file, &updated).unwrap();

    let tag = Tag::read_from_path(&file).unwrap();
    let artists: Vec<&str> = tag.artists().collect();
    assert_eq!(artists, ["Val Kilmer"]);
    assert_eq!(tag.artworks().count(), 1);
    let artwork = tag.artwork().unwrap();
    assert!(matches!(artwork.fmt, ImgFmt::Png));
    assert_eq!(artwork.data, &PNG_BYTES[..]);
}

#[test]
fn unparseable_container_is_a_tag_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("garbage.mp4");
    std::fs::write(&file, b"not a real mp4").unwrap();

    let err = write_tags(&file, &full_tag_set()).unwrap_err();
    assert!(matches!(err, reeltag::error::Error::TagWrite(_)));
}
