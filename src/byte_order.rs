//! Network byte-order helpers for the envelope length header.
//!
//! Clippy expectations stay scoped to the two conversion points so the rest of
//! the crate can stay explicit about wire endianness without repeating lint
//! annotations.

/// Width of the length header in bytes.
pub const LENGTH_HEADER_SIZE: usize = 4;

/// Serialise a `u32` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use private_cdn::byte_order::write_network_u32;
///
/// assert_eq!(write_network_u32(5), [0x00, 0x00, 0x00, 0x05]);
/// ```
#[must_use]
pub fn write_network_u32(value: u32) -> [u8; LENGTH_HEADER_SIZE] {
    #[expect(
        clippy::big_endian_bytes,
        reason = "The envelope header is defined in network byte order."
    )]
    value.to_be_bytes()
}

/// Parse a network-order `u32` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use private_cdn::byte_order::read_network_u32;
///
/// assert_eq!(read_network_u32([0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
/// ```
#[must_use]
pub fn read_network_u32(bytes: [u8; LENGTH_HEADER_SIZE]) -> u32 {
    #[expect(
        clippy::big_endian_bytes,
        reason = "The envelope header is defined in network byte order."
    )]
    u32::from_be_bytes(bytes)
}

/// Read the leading length header of `src`, if at least
/// [`LENGTH_HEADER_SIZE`] bytes are present.
///
/// Bytes after the header are not inspected.
///
/// # Examples
///
/// ```
/// use private_cdn::byte_order::read_length_header;
///
/// assert_eq!(read_length_header(&[0, 0, 1, 0, 0xAA]), Some(256));
/// assert_eq!(read_length_header(&[0, 0, 1]), None);
/// ```
#[must_use]
pub fn read_length_header(src: &[u8]) -> Option<u32> {
    src.first_chunk::<LENGTH_HEADER_SIZE>()
        .map(|header| read_network_u32(*header))
}
