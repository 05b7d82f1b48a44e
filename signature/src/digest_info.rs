//! The fixed registry of DigestInfo prefixes from RFC 8017 appendix
//! B.1: the DER encoding of the AlgorithmIdentifier plus the OCTET
//! STRING header that precedes the raw digest inside a signature.

/// Hash algorithms with a known DigestInfo encoding. Knowing the
/// encoding is not the same as computing the hash: only SHA-256 is
/// marked supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md2,
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

/// One registry entry: the DER prefix, the digest length that follows
/// it, and whether sign/verify may succeed with it.
#[derive(Debug, Clone, Copy)]
pub struct DigestInfo {
    pub algorithm: HashAlgorithm,
    pub prefix: &'static [u8],
    pub digest_len: usize,
    pub supported: bool,
}

/// The registry, in the order the verifier walks it.
pub const DIGEST_INFOS: [DigestInfo; 6] = [
    DigestInfo {
        algorithm: HashAlgorithm::Md2,
        prefix: &[
            0x30, 0x20, 0x30, 0x0c, 0x06, 0x08, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x02,
            0x05, 0x00, 0x04, 0x10,
        ],
        digest_len: 16,
        supported: false,
    },
    DigestInfo {
        algorithm: HashAlgorithm::Md5,
        prefix: &[
            0x30, 0x20, 0x30, 0x0c, 0x06, 0x08, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x02, 0x05,
            0x05, 0x00, 0x04, 0x10,
        ],
        digest_len: 16,
        supported: false,
    },
    DigestInfo {
        algorithm: HashAlgorithm::Sha1,
        prefix: &[
            0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x04,
            0x14,
        ],
        digest_len: 20,
        supported: false,
    },
    DigestInfo {
        algorithm: HashAlgorithm::Sha256,
        prefix: &[
            0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x01, 0x05, 0x00, 0x04, 0x20,
        ],
        digest_len: 32,
        supported: true,
    },
    DigestInfo {
        algorithm: HashAlgorithm::Sha384,
        prefix: &[
            0x30, 0x41, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x02, 0x05, 0x00, 0x04, 0x30,
        ],
        digest_len: 48,
        supported: false,
    },
    DigestInfo {
        algorithm: HashAlgorithm::Sha512,
        prefix: &[
            0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02,
            0x03, 0x05, 0x00, 0x04, 0x40,
        ],
        digest_len: 64,
        supported: false,
    },
];

/// The registry entry for `algorithm`.
pub fn digest_info_for(algorithm: HashAlgorithm) -> &'static DigestInfo {
    DIGEST_INFOS
        .iter()
        .find(|entry| entry.algorithm == algorithm)
        .expect("every hash algorithm has a registry entry")
}

/// The entry whose prefix is the longest match at the start of
/// `encoded`, mirroring the byte-by-byte table walk of the verifier.
pub fn longest_prefix_match(encoded: &[u8]) -> Option<&'static DigestInfo> {
    DIGEST_INFOS
        .iter()
        .filter(|entry| encoded.len() >= entry.prefix.len() && encoded.starts_with(entry.prefix))
        .max_by_key(|entry| entry.prefix.len())
}
