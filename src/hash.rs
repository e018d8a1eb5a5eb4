use std::io;

use crate::encode::encode_wide;

pub use std::io::Result;

/// Default rotation width, matching the ROR-13 convention used by
/// common shellcode generators. Hash tables built for that convention
/// only match values computed with this width.
pub const DEFAULT_BITS: u32 = 13;

fn err_badbits<T>() -> Result<T> {
    Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        "rotation width must be between 1 and 31",
    ))
}

/// Rotates `value` right by `bits` bits. A rotation by 0 is the
/// identity; counts of 32 or more wrap modulo 32.
pub fn ror32(value: u32, bits: u32) -> u32 {
    value.rotate_right(bits)
}

/// Hashes a byte sequence with the given rotation width: the 32-bit
/// accumulator starts at 0 and, for each byte, is rotated right by
/// `bits` and then incremented by the byte value with wraparound.
/// An empty sequence hashes to 0.
pub fn hash_bytes(buf: &[u8], bits: u32) -> Result<u32> {
    if bits < 1 || bits > 31 {
        return err_badbits();
    }
    let mut h = 0u32;
    for c in buf {
        h = ror32(h, bits).wrapping_add(*c as u32);
    }
    Ok(h)
}

/// Hashes a function name over its raw narrow bytes, with no case
/// folding and no wide expansion.
///
/// # Examples
///
/// ```
/// let h = apihash::hash("LoadLibraryW", apihash::DEFAULT_BITS).unwrap();
/// assert_eq!(h, 0xEC0E4EA4);
/// ```
pub fn hash(name: &str, bits: u32) -> Result<u32> {
    hash_bytes(name.as_bytes(), bits)
}

/// Hashes a module name the way the loader stores it: upper-cased and
/// widened to two bytes per character before hashing. Kept separate
/// from [`hash`] so the two string conventions cannot be mixed up.
///
/// # Examples
///
/// ```
/// let h = apihash::module_hash("kernel32.dll", apihash::DEFAULT_BITS).unwrap();
/// assert_eq!(h, 0x6A4ABC5B);
/// ```
pub fn module_hash(name: &str, bits: u32) -> Result<u32> {
    hash_bytes(&encode_wide(name, true), bits)
}

#[test]
fn samples() {
    assert_eq!(hash("", DEFAULT_BITS).unwrap(), 0);
    assert_eq!(hash("LoadLibraryW", DEFAULT_BITS).unwrap(), 0xEC0E4EA4);
    assert_eq!(module_hash("kernel32.dll", DEFAULT_BITS).unwrap(), 0x6A4ABC5B);
}
