//! This crate computes the rotate-right rolling hash used by compact
//! shellcode to identify Windows modules and exported functions by
//! 32-bit value instead of by readable string. Module names are hashed
//! over an upper-cased wide (two bytes per character) encoding, the way
//! the loader stores them; function names are hashed over their raw
//! narrow bytes. The default rotation width of 13 matches the common
//! "ROR-13" shellcode convention.
//!
//! The hash is a small, fast, non-cryptographic fingerprint. It is
//! computed offline; nothing here resolves addresses at runtime.
//!
//! # Examples
//!
//! ```
//! use apihash::{hash, module_hash, DEFAULT_BITS};
//!
//! assert_eq!(module_hash("kernel32.dll", DEFAULT_BITS).unwrap(), 0x6A4ABC5B);
//! assert_eq!(hash("LoadLibraryW", DEFAULT_BITS).unwrap(), 0xEC0E4EA4);
//! ```
//!
//! # References
//!
//!  * [Metasploit's block_api hash resolver](https://github.com/rapid7/metasploit-framework/blob/master/external/source/shellcode/windows/x86/src/block/block_api.asm)
//!  * [Win32 shellcode walkthrough](https://simonuvarov.com/msfvenom-reverse-tcp-waitforsingleobject/)

mod encode;
mod hash;

pub use encode::encode_wide;
pub use hash::{hash, hash_bytes, module_hash, ror32, Result, DEFAULT_BITS};
