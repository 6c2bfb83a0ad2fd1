//! Shared test fixtures.

/// Build the bytes of a minimal valid MP4 container: an `ftyp` box and a
/// `moov` box holding only an `mvhd`. No tracks, no media data, no
/// existing tag atoms — just enough structure for the tag writer to read
/// and extend.
pub fn minimal_mp4() -> Vec<u8> {
    let mut data = Vec::new();

    // ftyp: major brand isom, minor version 0, one compatible brand.
    data.extend_from_slice(&20u32.to_be_bytes());
    data.extend_from_slice(b"ftyp");
    data.extend_from_slice(b"isom");
    data.extend_from_slice(&0u32.to_be_bytes());
    data.extend_from_slice(b"isom");

    let mvhd = mvhd_box();
    data.extend_from_slice(&((8 + mvhd.len()) as u32).to_be_bytes());
    data.extend_from_slice(b"moov");
    data.extend_from_slice(&mvhd);

    data
}

/// Version-0 movie header box, 108 bytes total.
fn mvhd_box() -> Vec<u8> {
    let mut b = Vec::with_capacity(108);
    b.extend_from_slice(&108u32.to_be_bytes());
    b.extend_from_slice(b"mvhd");
    b.extend_from_slice(&[0; 4]); // version + flags
    b.extend_from_slice(&0u32.to_be_bytes()); // creation time
    b.extend_from_slice(&0u32.to_be_bytes()); // modification time
    b.extend_from_slice(&1000u32.to_be_bytes()); // timescale
    b.extend_from_slice(&0u32.to_be_bytes()); // duration
    b.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // rate 1.0
    b.extend_from_slice(&[0x01, 0x00]); // volume 1.0
    b.extend_from_slice(&[0; 10]); // reserved
    for v in [
        0x0001_0000u32,
        0,
        0,
        0,
        0x0001_0000,
        0,
        0,
        0,
        0x4000_0000,
    ] {
        b.extend_from_slice(&v.to_be_bytes()); // unity matrix
    }
    b.extend_from_slice(&[0; 24]); // pre-defined
    b.extend_from_slice(&1u32.to_be_bytes()); // next track id
    b
}
