// pn533-phy/pn533phy/src/protocol/checksum.rs

//! LCS/DCS checksums.

/// Length checksum of a standard frame: `LEN + LCS == 0 (mod 256)`.
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Length checksum of an extended frame, taken over both length bytes:
/// `LENM + LENL + LCS == 0 (mod 256)`.
pub fn lcs_ext(len: u16) -> u8 {
    let [hi, lo] = len.to_be_bytes();
    0u8.wrapping_sub(hi.wrapping_add(lo))
}

/// Data checksum over TFI + data: `sum(data) + DCS == 0 (mod 256)`.
pub fn dcs(data: &[u8]) -> u8 {
    let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
