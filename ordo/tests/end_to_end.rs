//! Concrete end-to-end scenarios exercised through the façade's one-shot entry points.

use ordo::{ordo_digest, ordo_enc_block, ordo_enc_stream, ordo_hmac, BlockCipherParams, DigestParams, ModeParams};
use ordo_core::PrimitiveId;

#[test]
fn sha256_empty_and_abc() {
    let mut out = [0u8; 32];
    ordo_digest(PrimitiveId::Sha256, DigestParams::Default, b"", &mut out).unwrap();
    assert_eq!(
        out,
        [
            0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
            0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c, 0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
        ]
    );

    ordo_digest(PrimitiveId::Sha256, DigestParams::Default, b"abc", &mut out).unwrap();
    assert_eq!(
        out,
        [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
            0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
        ]
    );
}

#[test]
fn aes128_ecb_fips197_vector() {
    let key: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    ];
    let plaintext: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
    ];
    let mut out = [0u8; 32];
    let n = ordo_enc_block(
        PrimitiveId::Aes,
        BlockCipherParams::Aes(Default::default()),
        PrimitiveId::Ecb,
        ModeParams::Unpadded,
        true,
        &key,
        &[],
        &plaintext,
        &mut out,
    )
    .unwrap();
    assert_eq!(n, 16);
    assert_eq!(
        &out[..16],
        &[0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a][..]
    );
}

#[test]
fn aes128_cbc_pkcs7_round_trips_without_padding_error() {
    let key: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
    ];
    let iv: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
    ];
    let plaintext: [u8; 14] =
        [0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93];

    let mut ciphertext = [0u8; 32];
    let n = ordo_enc_block(
        PrimitiveId::Aes,
        BlockCipherParams::Aes(Default::default()),
        PrimitiveId::Cbc,
        ModeParams::default(),
        true,
        &key,
        &iv,
        &plaintext,
        &mut ciphertext,
    )
    .unwrap();

    let mut recovered = [0u8; 32];
    let m = ordo_enc_block(
        PrimitiveId::Aes,
        BlockCipherParams::Aes(Default::default()),
        PrimitiveId::Cbc,
        ModeParams::default(),
        false,
        &key,
        &iv,
        &ciphertext[..n],
        &mut recovered,
    )
    .unwrap();

    assert_eq!(&recovered[..m], &plaintext[..]);
}

#[test]
fn rc4_drop0_keystream_prefix() {
    let key = [0x01u8, 0x02, 0x03, 0x04, 0x05];
    let mut buf = [0u8; 16];
    ordo_enc_stream(PrimitiveId::Rc4, ordo::StreamCipherParams::Rc4(ordo_stream::rc4::Params { drop: 0 }), &key, &mut buf)
        .unwrap();
    assert_eq!(
        buf,
        [0xb2, 0x39, 0x63, 0x05, 0xf0, 0x3d, 0xc0, 0x27, 0xcc, 0xc3, 0x52, 0x4a, 0x0a, 0x11, 0x18, 0xa8]
    );
}

#[test]
fn hmac_sha256_rfc4231_test_1() {
    let key = [0x0bu8; 20];
    let mut out = [0u8; 32];
    ordo_hmac(PrimitiveId::Sha256, DigestParams::Default, &key, b"Hi There", &mut out).unwrap();
    assert_eq!(
        out,
        [
            0xb0, 0x34, 0x4c, 0x61, 0xd8, 0xdb, 0x38, 0x53, 0x5c, 0xa8, 0xaf, 0xce, 0xaf, 0x0b, 0xf1, 0x2b,
            0x88, 0x1d, 0xc2, 0x00, 0xc9, 0x83, 0x3d, 0xa7, 0x26, 0xe9, 0x37, 0x6c, 0x2e, 0x32, 0xcf, 0xf7,
        ]
    );
}

#[test]
fn x25519_ecdh_is_symmetric() {
    let mut priv_a = [0u8; 32];
    let mut priv_b = [0u8; 32];
    ordo::x25519::gen(&mut priv_a).unwrap();
    ordo::x25519::gen(&mut priv_b).unwrap();

    let mut pub_a = [0u8; 32];
    let mut pub_b = [0u8; 32];
    ordo::x25519::pub_(&mut pub_a, &priv_a);
    ordo::x25519::pub_(&mut pub_b, &priv_b);

    let mut shared_a = [0u8; 32];
    let mut shared_b = [0u8; 32];
    ordo::x25519::ecdh(&mut shared_a, &priv_a, &pub_b);
    ordo::x25519::ecdh(&mut shared_b, &priv_b, &pub_a);

    assert_eq!(shared_a, shared_b);
}
