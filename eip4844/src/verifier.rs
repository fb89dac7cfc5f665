use bls12_381::{ff::Field, reduce_bytes_to_scalar_bias, Scalar};
use kzg_single_open::verifier::compute_evaluation;
use sha2::{Digest, Sha256};

use crate::{
    constants::{BYTES_PER_BLOB, BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT, FIELD_ELEMENTS_PER_BLOB},
    serialization::{
        deserialize_blob_to_scalars, deserialize_bytes_to_scalar, deserialize_compressed_g1,
    },
    BlobRef, Context, Error, KZGCommitment, KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
    VerifierError,
};

impl Context {
    /// Verify the KZG proof to the commitment.
    pub fn verify_kzg_proof(
        &self,
        commitment: KZGCommitment,
        z: KZGOpeningPoint,
        y: KZGOpeningEvaluation,
        proof: KZGProof,
    ) -> Result<(), Error> {
        let commitment = deserialize_compressed_g1(&commitment)?;
        let proof = deserialize_compressed_g1(&proof)?;
        let z = deserialize_bytes_to_scalar(&z)?;
        let y = deserialize_bytes_to_scalar(&y)?;

        self.verifier.verify_kzg_proof(commitment, z, y, proof)?;

        Ok(())
    }

    /// Verify the KZG proof to the commitment of a blob.
    pub fn verify_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: KZGCommitment,
        proof: KZGProof,
    ) -> Result<(), Error> {
        let polynomial = deserialize_blob_to_scalars(blob)?;

        let commitment_g1 = deserialize_compressed_g1(&commitment)?;

        let proof = deserialize_compressed_g1(&proof)?;

        let z = compute_fiat_shamir_challenge(blob, commitment);

        let y = compute_evaluation(&self.verifier.domain, &polynomial, z);

        self.verifier.verify_kzg_proof(commitment_g1, z, y, proof)?;

        Ok(())
    }

    /// Verify a batch of KZG proofs to the commitments of a set of blobs.
    pub fn verify_blob_kzg_proof_batch(
        &self,
        blobs: &[BlobRef],
        commitments: &[KZGCommitment],
        proofs: &[KZGProof],
    ) -> Result<(), Error> {
        let same_length = (blobs.len() == commitments.len()) & (blobs.len() == proofs.len());
        if !same_length {
            return Err(VerifierError::BatchVerificationInputsMustHaveSameLength {
                blobs_len: blobs.len(),
                commitments_len: commitments.len(),
                proofs_len: proofs.len(),
            }
            .into());
        }

        let polynomials = blobs
            .iter()
            .map(|blob| deserialize_blob_to_scalars(*blob))
            .collect::<Result<Vec<_>, _>>()?;

        let commitments_g1 = commitments
            .iter()
            .map(|commitment| deserialize_compressed_g1(commitment))
            .collect::<Result<Vec<_>, _>>()?;

        let proofs_g1 = proofs
            .iter()
            .map(|proof| deserialize_compressed_g1(proof))
            .collect::<Result<Vec<_>, _>>()?;

        let (zs, ys) = blobs
            .iter()
            .zip(&polynomials)
            .zip(commitments)
            .map(|((blob, polynomial), commitment)| {
                let z = compute_fiat_shamir_challenge(blob, *commitment);
                let y = compute_evaluation(&self.verifier.domain, polynomial, z);
                (z, y)
            })
            .unzip::<_, _, Vec<_>, Vec<_>>();

        let domain_size = self.verifier.domain.roots.len();

        let r_powers =
            compute_r_powers_for_verify_kzg_proof_batch(domain_size, commitments, &zs, &ys, proofs);

        self.verifier
            .verify_kzg_proof_batch(&commitments_g1, &zs, &ys, &proofs_g1, &r_powers)?;

        Ok(())
    }
}

/// Compute the Fiat-Shamir challenge of a blob KZG proof.
pub(crate) fn compute_fiat_shamir_challenge(blob: BlobRef, commitment: KZGCommitment) -> Scalar {
    // Matches [FIAT_SHAMIR_PROTOCOL_DOMAIN] in the spec.
    const DOMAIN_SEP: &str = "FSBLOBVERIFY_V1_";

    let hash_input_size = DOMAIN_SEP.len()
            + 2 * size_of::<u64>() // polynomial bound
            + BYTES_PER_BLOB
            + BYTES_PER_COMMITMENT;

    let mut hash_input: Vec<u8> = Vec::with_capacity(hash_input_size);

    hash_input.extend(DOMAIN_SEP.as_bytes());
    hash_input.extend(u64_to_byte_array_16(FIELD_ELEMENTS_PER_BLOB as u64));
    hash_input.extend(blob);
    hash_input.extend(commitment);

    assert_eq!(hash_input.len(), hash_input_size);
    let mut hasher = Sha256::new();
    hasher.update(hash_input);
    let result: [u8; 32] = hasher.finalize().into();

    // We only need a 128 bit scalar here, since this is used for batch verification
    // randomization; the bias introduced by reducing a 256 bit hash is negligible
    // at that security level.
    reduce_bytes_to_scalar_bias(result)
}

/// Compute the powers of the random linear combination challenge used for
/// batch verification.
pub(crate) fn compute_r_powers_for_verify_kzg_proof_batch(
    domain_size: usize,
    commitments: &[KZGCommitment],
    zs: &[Scalar],
    ys: &[Scalar],
    proofs: &[KZGProof],
) -> Vec<Scalar> {
    // Matches [RANDOM_CHALLENGE_KZG_BATCH_DOMAIN] in the spec.
    const DOMAIN_SEP: &str = "RCKZGBATCH___V1_";

    let n = commitments.len();

    let hash_input_size = DOMAIN_SEP.len()
        + size_of::<u64>() // polynomial bound
        + size_of::<u64>() // batch size
        + n * (
            BYTES_PER_COMMITMENT // commitment
            + BYTES_PER_FIELD_ELEMENT // z
            + BYTES_PER_FIELD_ELEMENT // y
            + BYTES_PER_COMMITMENT // proof
        );

    let mut hash_input: Vec<u8> = Vec::with_capacity(hash_input_size);

    hash_input.extend(DOMAIN_SEP.as_bytes());
    hash_input.extend((domain_size as u64).to_be_bytes());
    hash_input.extend((n as u64).to_be_bytes());
    commitments
        .iter()
        .zip(zs)
        .zip(ys)
        .zip(proofs)
        .for_each(|(((commitment, z), y), proof)| {
            hash_input.extend(commitment);
            hash_input.extend(z.to_bytes_be());
            hash_input.extend(y.to_bytes_be());
            hash_input.extend(proof);
        });

    assert_eq!(hash_input.len(), hash_input_size);
    let mut hasher = Sha256::new();
    hasher.update(hash_input);
    let result: [u8; 32] = hasher.finalize().into();

    let r = reduce_bytes_to_scalar_bias(result);

    std::iter::successors(Some(Scalar::ONE), |power| Some(*power * r))
        .take(n)
        .collect()
}

/// Converts a u64 to a byte array of length 16 in big endian format.
fn u64_to_byte_array_16(number: u64) -> [u8; 16] {
    let mut bytes = [0; 16];
    bytes[8..].copy_from_slice(&number.to_be_bytes());
    bytes
}
