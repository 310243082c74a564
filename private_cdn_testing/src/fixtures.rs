//! Raw envelope fixtures.
//!
//! Three categories are provided:
//!
//! - **Valid envelopes**: well-formed bytes with a chosen amount of padding.
//! - **Truncated envelopes**: a partial header, or a payload shorter than declared.
//! - **Hostile headers**: declared lengths near `u32::MAX` that wrap under naive arithmetic.

/// Width of the envelope length header.
const HEADER_LEN: usize = 4;

const PADDING_PATTERN: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

fn header(declared: u32) -> [u8; HEADER_LEN] { declared.to_be_bytes() }

fn declared_len(payload: &[u8]) -> u32 {
    u32::try_from(payload.len()).expect("fixture payloads fit the 32-bit header")
}

/// Build a valid envelope: header, `payload`, then `padding` zero bytes.
///
/// # Examples
///
/// ```rust
/// use private_cdn_testing::valid_envelope;
///
/// assert_eq!(valid_envelope(b"Hello", 3), b"\x00\x00\x00\x05Hello\x00\x00\x00");
/// ```
#[must_use]
pub fn valid_envelope(payload: &[u8], padding: usize) -> Vec<u8> {
    let mut wire = Vec::with_capacity(HEADER_LEN + payload.len() + padding);
    wire.extend_from_slice(&header(declared_len(payload)));
    wire.extend_from_slice(payload);
    wire.resize(wire.len() + padding, 0);
    wire
}

/// Build a valid envelope whose padding is a repeating non-zero pattern.
///
/// Unpadding must ignore padding content, so results should match
/// [`valid_envelope`] with the same payload.
#[must_use]
pub fn patterned_padding_envelope(payload: &[u8], padding: usize) -> Vec<u8> {
    let mut wire = valid_envelope(payload, 0);
    wire.extend((0..padding).map(|i| PADDING_PATTERN[i % PADDING_PATTERN.len()]));
    wire
}

/// Build a bare header declaring `declared` bytes, with nothing after it.
#[must_use]
pub fn header_only(declared: u32) -> Vec<u8> { header(declared).to_vec() }

/// Return the first `len` header bytes of an envelope carrying `payload`.
///
/// # Panics
///
/// Panics if `len` is not shorter than the header.
#[must_use]
pub fn truncated_header(payload: &[u8], len: usize) -> Vec<u8> {
    assert!(len < HEADER_LEN, "truncated header must be shorter than 4 bytes");
    header(declared_len(payload))[..len].to_vec()
}

/// Build an envelope whose payload is `missing` bytes short of its header.
///
/// # Panics
///
/// Panics if `missing` is zero or exceeds the payload length.
///
/// # Examples
///
/// ```rust
/// use private_cdn_testing::truncated_payload;
///
/// assert_eq!(truncated_payload(b"Hello", 3), b"\x00\x00\x00\x05He");
/// ```
#[must_use]
pub fn truncated_payload(payload: &[u8], missing: usize) -> Vec<u8> {
    assert!(
        (1..=payload.len()).contains(&missing),
        "missing byte count must be within the payload"
    );
    let mut wire = valid_envelope(payload, 0);
    wire.truncate(wire.len() - missing);
    wire
}

/// Build an envelope declaring `u32::MAX - offset` bytes followed by `trailing`
/// bytes of filler.
///
/// With `offset < 4`, `declared + 4` overflows 32-bit arithmetic.
#[must_use]
pub fn overflowing_header(offset: u32, trailing: usize) -> Vec<u8> {
    let mut wire = header_only(u32::MAX - offset);
    wire.resize(HEADER_LEN + trailing, 0xFF);
    wire
}
