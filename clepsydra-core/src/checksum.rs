//! Byte-stream checksums
//!
//! - CRC-8, generator polynomial `0x2F`, table driven
//! - 16-bit two's complement sum
//!
//! The CRC register starts from `TABLE[0xFF]`, i.e. the register after
//! shifting in a leading all-ones byte. An empty buffer therefore yields
//! `0x42`, not `0xFF`.

/// CRC-8 generator polynomial (x^8 + x^5 + x^3 + x^2 + x + 1)
pub const CRC8_POLY: u8 = 0x2F;

const TABLE: [u8; 256] = build_table(CRC8_POLY);

const fn build_table(poly: u8) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ poly
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// CRC-8 over `data`
///
/// # Example
/// ```
/// use clepsydra_core::checksum::crc8;
/// assert_eq!(crc8(b"123456789"), 0x25);
/// ```
pub fn crc8(data: &[u8]) -> u8 {
    data.iter()
        .fold(TABLE[0xFF], |crc, &byte| TABLE[usize::from(byte ^ crc)])
}

/// Two's complement of the 16-bit byte sum
///
/// Adding the result to the byte sum gives zero modulo 2^16.
pub fn twos_complement_sum(data: &[u8]) -> u16 {
    let sum = data
        .iter()
        .fold(0u16, |acc, &byte| acc.wrapping_add(u16::from(byte)));
    sum.wrapping_neg()
}
