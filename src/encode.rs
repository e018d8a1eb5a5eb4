/// Encodes a name as wide bytes: each character becomes its code point
/// truncated to 8 bits followed by a zero filler byte, mimicking a
/// 16-bit character encoding. With `uppercase` set, ASCII case folding
/// is applied first. Characters above 0xFF are truncated to their low
/// byte; the intended domain is ASCII-range loader names.
pub fn encode_wide(name: &str, uppercase: bool) -> Vec<u8> {
    let mut buf = Vec::with_capacity(name.len() * 2);
    for c in name.chars() {
        let c = if uppercase { c.to_ascii_uppercase() } else { c };
        buf.push(c as u8);
        buf.push(0);
    }
    buf
}

#[test]
fn samples() {
    assert_eq!(encode_wide("", true), b"");
    assert_eq!(encode_wide("ab", false), b"a\0b\0");
    assert_eq!(encode_wide("ab", true), b"A\0B\0");
    assert_eq!(encode_wide("Ntdll.DLL", true), b"N\0T\0D\0L\0L\0.\0D\0L\0L\0");
}
