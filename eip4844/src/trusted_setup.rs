use bls12_381::{G1Point, G2Point};
use kzg_single_open::{prover::CommitKey, verifier::VerificationKey};

pub use rust_eth_kzg::TrustedSetup;

fn deserialize_g1_point(hex_str: &str) -> G1Point {
    let hex_str = hex_str
        .strip_prefix("0x")
        .expect("expected hex points to be prefixed with `0x`");
    let bytes: [u8; 48] = hex::decode(hex_str)
        .expect("trusted setup has malformed g1 points")
        .try_into()
        .expect("expected 48 bytes for G1 point");
    G1Point::from_compressed_unchecked(&bytes).expect("invalid g1 point")
}

fn deserialize_g2_point(hex_str: &str) -> G2Point {
    let hex_str = hex_str
        .strip_prefix("0x")
        .expect("expected hex points to be prefixed with `0x`");
    let bytes: [u8; 96] = hex::decode(hex_str)
        .expect("trusted setup has malformed g2 points")
        .try_into()
        .expect("expected 96 bytes for G2 point");
    G2Point::from_compressed_unchecked(&bytes).expect("invalid g2 point")
}

/// Builds the single-point opening [`CommitKey`] from the Lagrange-basis G1 points
/// in the shared trusted setup.
pub(crate) fn commit_key_from_setup(setup: &TrustedSetup) -> CommitKey {
    let g1_lagrange = setup
        .g1_lagrange
        .iter()
        .map(|hex_str| deserialize_g1_point(hex_str))
        .collect();
    CommitKey::new(g1_lagrange)
}

/// Builds the single-point opening [`VerificationKey`] from the monomial-basis
/// generator points in the shared trusted setup.
pub(crate) fn verification_key_from_setup(setup: &TrustedSetup) -> VerificationKey {
    let gen_g1 = deserialize_g1_point(&setup.g1_monomial[0]);
    let gen_g2 = deserialize_g2_point(&setup.g2_monomial[0]);
    let tau_g2 = deserialize_g2_point(&setup.g2_monomial[1]);
    VerificationKey::new(gen_g1, gen_g2, tau_g2)
}
