//! End-to-end RSA coverage over freshly generated 512-bit key pairs.
//! Key generation is the expensive part, so the suite shares two pairs
//! across every test.

use std::sync::OnceLock;

use torreon_hashes::sha256;
use torreon_math::secure_random_biguint_with_max_bits;
use torreon_primitives::BigUint;
use torreon_signature::{digest_info_for, HashAlgorithm, RsaError, RsaKeyPair};

fn key_pair() -> &'static RsaKeyPair {
    static PAIR: OnceLock<RsaKeyPair> = OnceLock::new();
    PAIR.get_or_init(|| RsaKeyPair::generate(512))
}

fn other_key_pair() -> &'static RsaKeyPair {
    static PAIR: OnceLock<RsaKeyPair> = OnceLock::new();
    PAIR.get_or_init(|| RsaKeyPair::generate(512))
}

#[test]
fn test_raw_primitive_round_trips() {
    let pair = key_pair();

    for _ in 0..4 {
        let msg = secure_random_biguint_with_max_bits(8, pair.public().n().bits() - 1);
        let cipher = msg.pow_mod(pair.public().e(), pair.public().n());
        let back = cipher.pow_mod(pair.private().d(), pair.private().n());
        assert_eq!(back, msg);
    }
}

#[test]
fn test_encrypt_decrypt_round_trip() {
    let pair = key_pair();
    let msg: Vec<u8> = (0u8..32).collect();

    let ciphertext = pair.public().encrypt_pkcs1v15(&msg).unwrap();
    assert_eq!(ciphertext.len(), pair.public().modulus_len());

    let decrypted = pair.private().decrypt_pkcs1v15(&ciphertext).unwrap();
    assert_eq!(decrypted, msg);
}

#[test]
fn test_encrypt_empty_message() {
    let pair = key_pair();
    let ciphertext = pair.public().encrypt_pkcs1v15(&[]).unwrap();
    assert_eq!(pair.private().decrypt_pkcs1v15(&ciphertext).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_encrypt_maximum_length_message() {
    let pair = key_pair();
    let k = pair.public().modulus_len();
    let msg = vec![0x5A; k - 11];

    let ciphertext = pair.public().encrypt_pkcs1v15(&msg).unwrap();
    assert_eq!(pair.private().decrypt_pkcs1v15(&ciphertext).unwrap(), msg);
}

#[test]
fn test_encrypt_message_too_long() {
    let pair = key_pair();
    // 66 bytes cannot fit a 64-byte modulus with 11 bytes of padding
    let msg = [0u8; 66];
    assert_eq!(
        pair.public().encrypt_pkcs1v15(&msg),
        Err(RsaError::MessageTooLong)
    );

    let k = pair.public().modulus_len();
    assert_eq!(
        pair.public().encrypt_pkcs1v15(&vec![0u8; k - 10]),
        Err(RsaError::MessageTooLong)
    );
}

#[test]
fn test_decrypt_rejects_wrong_lengths() {
    let pair = key_pair();
    let k = pair.private().modulus_len();

    assert_eq!(
        pair.private().decrypt_pkcs1v15(&vec![0u8; k + 1]),
        Err(RsaError::MessageTooLong)
    );
    assert_eq!(
        pair.private().decrypt_pkcs1v15(&vec![0u8; k - 1]),
        Err(RsaError::MessageTooShort)
    );
}

#[test]
fn test_decrypt_with_wrong_key_fails() {
    let msg: Vec<u8> = (0u8..32).collect();
    let ciphertext = key_pair().public().encrypt_pkcs1v15(&msg).unwrap();

    // an unrelated key produces garbage that cannot carry the
    // 00 02 .. frame except with negligible probability
    let result = other_key_pair().private().decrypt_pkcs1v15(&ciphertext);
    assert_eq!(result, Err(RsaError::InvalidEncodedMessage));
}

#[test]
fn test_sign_verify_round_trip() {
    let pair = key_pair();
    let msg: Vec<u8> = (0u8..32).collect();

    let signature = pair
        .private()
        .sign_pkcs1v15(&msg, HashAlgorithm::Sha256)
        .unwrap();
    assert_eq!(signature.len(), pair.public().modulus_len());

    pair.public().verify_pkcs1v15(&msg, &signature).unwrap();
}

#[test]
fn test_verify_rejects_any_flipped_byte() {
    let pair = key_pair();
    let msg = b"attack at dawn";
    let signature = pair
        .private()
        .sign_pkcs1v15(msg, HashAlgorithm::Sha256)
        .unwrap();

    for i in 0..signature.len() {
        let mut tampered = signature.clone();
        tampered[i] ^= 0x01;
        assert!(
            pair.public().verify_pkcs1v15(msg, &tampered).is_err(),
            "flipping byte {} must invalidate the signature",
            i
        );
    }
}

#[test]
fn test_verify_rejects_wrong_message() {
    let pair = key_pair();
    let signature = pair
        .private()
        .sign_pkcs1v15(b"attack at dawn", HashAlgorithm::Sha256)
        .unwrap();

    assert_eq!(
        pair.public().verify_pkcs1v15(b"attack at dusk", &signature),
        Err(RsaError::InvalidSignature)
    );
}

#[test]
fn test_verify_rejects_wrong_length() {
    let pair = key_pair();
    let signature = pair
        .private()
        .sign_pkcs1v15(b"msg", HashAlgorithm::Sha256)
        .unwrap();

    let mut short = signature.clone();
    short.pop();
    assert_eq!(
        pair.public().verify_pkcs1v15(b"msg", &short),
        Err(RsaError::InvalidSignature)
    );

    let mut long = signature;
    long.push(0);
    assert_eq!(
        pair.public().verify_pkcs1v15(b"msg", &long),
        Err(RsaError::InvalidSignature)
    );
}

#[test]
fn test_sign_with_unsupported_hash() {
    let pair = key_pair();
    assert_eq!(
        pair.private().sign_pkcs1v15(b"msg", HashAlgorithm::Sha512),
        Err(RsaError::HashNotSupported(HashAlgorithm::Sha512))
    );
    assert_eq!(
        pair.private().sign_pkcs1v15(b"msg", HashAlgorithm::Md5),
        Err(RsaError::HashNotSupported(HashAlgorithm::Md5))
    );
}

#[test]
fn test_sign_needs_room_for_digest_info() {
    // a 128-bit modulus is 16 bytes, far below the 62 the SHA-256
    // DigestInfo needs with its padding
    let small = RsaKeyPair::generate(128);
    assert_eq!(
        small.private().sign_pkcs1v15(b"msg", HashAlgorithm::Sha256),
        Err(RsaError::MessageTooShort)
    );
}

#[test]
fn test_signatures_bind_to_the_key() {
    let msg = b"attack at dawn";
    let signature = key_pair()
        .private()
        .sign_pkcs1v15(msg, HashAlgorithm::Sha256)
        .unwrap();

    assert!(other_key_pair()
        .public()
        .verify_pkcs1v15(msg, &signature)
        .is_err());
}

#[test]
fn test_public_key_survives_serde() {
    let pair = key_pair();
    let json = serde_json::to_string(pair.public()).unwrap();
    let public: torreon_signature::RsaPublicKey = serde_json::from_str(&json).unwrap();

    let msg = b"round trip";
    let signature = pair
        .private()
        .sign_pkcs1v15(msg, HashAlgorithm::Sha256)
        .unwrap();
    public.verify_pkcs1v15(msg, &signature).unwrap();

    let ciphertext = public.encrypt_pkcs1v15(msg).unwrap();
    assert_eq!(
        pair.private().decrypt_pkcs1v15(&ciphertext).unwrap(),
        msg.to_vec()
    );
}

#[test]
fn test_fresh_ciphertexts_differ() {
    // PS is random, so equal plaintexts must not map to equal
    // ciphertexts
    let pair = key_pair();
    let msg = b"deterministic padding would leak";
    let c1 = pair.public().encrypt_pkcs1v15(msg).unwrap();
    let c2 = pair.public().encrypt_pkcs1v15(msg).unwrap();
    assert_ne!(c1, c2);
}

// Undo the RSA primitive by hand and return the k-byte encoded message.
fn recover_em(value: &BigUint, exponent: &BigUint, n: &BigUint, k: usize) -> Vec<u8> {
    let bytes = value.pow_mod(exponent, n).to_bytes_be();
    bytes[bytes.len() - k..].to_vec()
}

#[test]
fn test_encrypted_frame_layout() {
    let pair = key_pair();
    let k = pair.public().modulus_len();
    let msg = [0x41u8; 3];
    let ciphertext = pair.public().encrypt_pkcs1v15(&msg).unwrap();

    let c = BigUint::from_bytes_be(&ciphertext);
    let em = recover_em(&c, pair.private().d(), pair.private().n(), k);

    // 00 02 PS 00 M with PS free of zero bytes
    assert_eq!(em[0], 0x00);
    assert_eq!(em[1], 0x02);
    assert!(em[2..k - 4].iter().all(|byte| *byte != 0));
    assert_eq!(em[k - 4], 0x00);
    assert_eq!(&em[k - 3..], &msg);
}

#[test]
fn test_signature_frame_layout() {
    let pair = key_pair();
    let k = pair.public().modulus_len();
    let msg = b"abc";
    let signature = pair
        .private()
        .sign_pkcs1v15(msg, HashAlgorithm::Sha256)
        .unwrap();

    let s = BigUint::from_bytes_be(&signature);
    let em = recover_em(&s, pair.public().e(), pair.public().n(), k);

    // 00 01 FF.. 00, then the DER prefix, then the raw digest
    let info = digest_info_for(HashAlgorithm::Sha256);
    let t_len = info.prefix.len() + info.digest_len;
    assert_eq!(em[0], 0x00);
    assert_eq!(em[1], 0x01);
    assert!(em[2..k - t_len - 1].iter().all(|byte| *byte == 0xFF));
    assert_eq!(em[k - t_len - 1], 0x00);
    assert_eq!(&em[k - t_len..k - info.digest_len], info.prefix);
    assert_eq!(&em[k - info.digest_len..], sha256(msg).as_bytes());
}

#[test]
fn test_raw_message_order() {
    // sanity on the byte order: a one-byte message decrypts from the
    // low end of the modulus
    let pair = key_pair();
    let ciphertext = pair.public().encrypt_pkcs1v15(&[0xAB]).unwrap();
    assert_eq!(
        pair.private().decrypt_pkcs1v15(&ciphertext).unwrap(),
        vec![0xAB]
    );
    assert!(BigUint::from_bytes_be(&ciphertext) < *pair.public().n());
}
