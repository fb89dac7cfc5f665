use bls12_381::lincomb::g1_lincomb;
use kzg_single_open::{bitreverse_slice, prover::compute_evaluation_and_quotient};

use crate::{
    serialization::{
        deserialize_blob_to_scalars, deserialize_bytes_to_scalar, deserialize_compressed_g1,
        serialize_g1_compressed,
    },
    verifier::compute_fiat_shamir_challenge,
    BlobRef, Context, Error, KZGCommitment, KZGOpeningEvaluation, KZGOpeningPoint, KZGProof,
};

impl Context {
    /// Computes the KZG commitment to the polynomial represented by the blob.
    pub fn blob_to_kzg_commitment(&self, blob: BlobRef) -> Result<KZGCommitment, Error> {
        let mut polynomial = deserialize_blob_to_scalars(blob)?;

        bitreverse_slice(&mut polynomial);

        let commitment = g1_lincomb(&self.prover.commit_key.g1_lagrange, &polynomial)
            .expect("number of g1 points is equal to the number of coefficients in the polynomial")
            .into();

        Ok(serialize_g1_compressed(&commitment))
    }

    /// Compute the KZG proof given a blob and a point.
    pub fn compute_kzg_proof(
        &self,
        blob: BlobRef,
        z: KZGOpeningPoint,
    ) -> Result<(KZGProof, KZGOpeningEvaluation), Error> {
        let polynomial = deserialize_blob_to_scalars(blob)?;

        let z = deserialize_bytes_to_scalar(&z)?;

        let (y, mut quotient) =
            compute_evaluation_and_quotient(&self.prover.domain, &polynomial, z);
        bitreverse_slice(&mut quotient);

        let proof = g1_lincomb(&self.prover.commit_key.g1_lagrange, &quotient)
            .expect("number of g1 points is equal to the number of coefficients in the polynomial")
            .into();

        Ok((serialize_g1_compressed(&proof), y.to_bytes_be()))
    }

    /// Compute the KZG proof given a blob and its corresponding commitment.
    ///
    /// Note: This method does not check that the commitment corresponds to the
    /// blob. The method does still check that the commitment is a valid
    /// commitment.
    pub fn compute_blob_kzg_proof(
        &self,
        blob: BlobRef,
        commitment: KZGCommitment,
    ) -> Result<KZGProof, Error> {
        let polynomial = deserialize_blob_to_scalars(blob)?;

        let _ = deserialize_compressed_g1(&commitment)?;

        let z = compute_fiat_shamir_challenge(blob, commitment);

        let (_, mut quotient) =
            compute_evaluation_and_quotient(&self.prover.domain, &polynomial, z);
        bitreverse_slice(&mut quotient);

        let proof = g1_lincomb(&self.prover.commit_key.g1_lagrange, &quotient)
            .expect("number of g1 points is equal to the number of coefficients in the polynomial")
            .into();

        Ok(serialize_g1_compressed(&proof))
    }
}
