use crate::commit_key::CommitKey;
use crate::fk20::batch_toeplitz::BatchToeplitzMatrixVecMul;
use crate::fk20::cosets::reverse_bit_order;
use crate::fk20::h_poly::take_every_nth;
use bls12_381::fixed_base_msm::UsePrecomp;
use bls12_381::group::prime::PrimeCurveAffine;
use bls12_381::{g1_batch_normalize, G1Point, Scalar};
use polynomial::{domain::Domain, poly_coeff::PolyCoeff};

use super::h_poly::compute_h_poly_commitments;

/// Input contains the various structures that we can make FK20 proofs over.
pub enum Input {
    /// This is akin to creating proofs over a polynomial in monomial basis.
    PolyCoeff(Vec<Scalar>),
    /// Data: This is akin to creating proofs over a polynomial in lagrange basis.
    /// This variant has the useful property that the output evaluations will
    /// contain the data in the order that it was passed in.
    Data(Vec<Scalar>),
}

/// FK20Prover initializes all of the components needed to compute a KZG multi point
/// proof using the FK20 method.
///
/// The FK20 method gives an efficient algorithm for opening points, where
/// the points are roots of unity. (It cannot be used to open arbitrary points)
///
/// See [Fk21](https://github.com/khovratovich/Kate/blob/master/Kate_amortized.pdf) for details
/// on the scheme.
#[derive(Debug)]
pub struct FK20Prover {
    batch_toeplitz: BatchToeplitzMatrixVecMul,
    /// The amount of points that a single proof will attest to the opening of.
    ///
    /// Note: FK20 allows you to create a proof of an opening for multiple points.
    /// Each proof will attest to the opening of `l` points.
    /// In the FK20 paper, this is also referred to as `l` (ELL).
    coset_size: usize,
    /// The total number of points that we want to open a polynomial at.
    ///
    /// Note: A proof will attest to `point_set_size` of these points at a
    /// time.
    number_of_points_to_open: usize,

    /// Domain used in FK20 to create the opening proofs
    proof_domain: Domain,
    /// Domain used to evaluate the polynomial at the points we want to open at.
    evaluation_domain: Domain,
    /// Domain used for converting polynomial to monomial form.
    poly_domain: Domain,
    /// Commitment key used for committing to the polynomial
    /// in monomial form.
    commit_key: CommitKey,
}

impl FK20Prover {
    /// Initialize a FK20 struct with the given parameters.
    ///
    /// commit_key: The commitment key used to commit to polynomials.
    /// polynomial_bound: The number of coefficients in the polynomial.
    /// points_per_proof: The number of points that a single proof will attest to.
    /// number_of_points_to_open: The total number of points that we want to open a polynomial at.
    pub fn new(
        commit_key: CommitKey,
        polynomial_bound: usize,
        points_per_proof: usize,
        number_of_points_to_open: usize,
        use_precomp: UsePrecomp,
    ) -> Self {
        assert!(points_per_proof.is_power_of_two());
        assert!(number_of_points_to_open.is_power_of_two());
        assert!(number_of_points_to_open > points_per_proof);
        assert!(polynomial_bound.is_power_of_two());
        assert!(commit_key.g1s.len() >= polynomial_bound);
        assert!(commit_key.g1s.len() > points_per_proof);

        // 1. Compute the SRS vectors that we will multiply the toeplitz matrices by.
        //
        // Skip the last `coset_size` points in the srs
        //
        // To intuitively understand why this normal, note that the conventional
        // KZG polynomial commitment scheme for opening a polynomial at a single point
        // does not require all of the coefficients of the polynomial to compute
        // the quotient polynomial.
        let srs_truncated: Vec<_> = commit_key
            .g1s
            .clone()
            .into_iter()
            .rev()
            .skip(points_per_proof)
            .collect();
        let mut srs_vectors = take_every_nth(&srs_truncated, points_per_proof);

        // Pad srs vectors to the next power of two
        //
        // This is not strictly needed since our FFT implementation
        // will pad these.
        for srs_vector in &mut srs_vectors {
            let pad_by = srs_vector.len().next_power_of_two();
            srs_vector.resize(pad_by, G1Point::identity());
        }

        // Initialize structure that will allow us to do efficient sum of multiple toeplitz matrix
        // vector multiplication, where the vector is fixed.
        let batch_toeplitz = BatchToeplitzMatrixVecMul::new(srs_vectors, use_precomp);

        // 2. Compute the domains needed to produce the proofs and the evaluations
        //
        let num_proofs = number_of_points_to_open / points_per_proof;
        let proof_domain = Domain::new(num_proofs);
        let evaluation_domain = Domain::new(number_of_points_to_open);
        let poly_domain = Domain::new(polynomial_bound);

        Self {
            batch_toeplitz,
            coset_size: points_per_proof,
            number_of_points_to_open,
            proof_domain,
            evaluation_domain,
            poly_domain,
            commit_key,
        }
    }

    /// Commit to the `Input` that we will be creating FK20 proofs over.
    pub fn commit(&self, input: Input) -> G1Point {
        let poly_coeff = match input {
            Input::PolyCoeff(poly_coeff) => poly_coeff,
            Input::Data(mut data) => {
                // Reverse the order of the data, so that they are in bit-reversed order.
                //
                // FK20 will operate over the bit-reversed permutation of the data.
                reverse_bit_order(&mut data);

                // Interpolate the data, to get a polynomial in monomial form that corresponds
                // to the bit reversed data.
                self.poly_domain.ifft_scalars(data)
            }
        };

        // Commit to the interpolated polynomial.
        self.commit_key.commit_g1(&poly_coeff).into()
    }

    /// The number of proofs that will be produced.
    pub const fn num_proofs(&self) -> usize {
        self.number_of_points_to_open / self.coset_size
    }

    /// Evaluates the polynomial at all of the relevant cosets.
    ///
    /// Instead of evaluating each coset individually, we can evaluate the polynomial
    /// at all of the points we want to open at, and then use reverse bit ordering
    /// to group the evaluations into the relevant cosets.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn compute_coset_evaluations(&self, polynomial: PolyCoeff) -> Vec<Vec<Scalar>> {
        let mut evaluations = self.evaluation_domain.fft_scalars(polynomial);
        reverse_bit_order(&mut evaluations);
        evaluations
            .chunks_exact(self.coset_size)
            .map(|slice| slice.to_vec())
            .collect()
    }

    /// Computes multi-opening proofs over the given `Input`.
    ///
    /// When the input is set to Data;
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/13ac373a2c284dc66b48ddd2ef0a10537e4e0de6/specs/_features/eip7594/polynomial-commitments-sampling.md#compute_cells_and_kzg_proofs
    ///
    /// Returning the opening proofs and the corresponding coset evaluations.
    pub fn compute_multi_opening_proofs(&self, input: Input) -> (Vec<G1Point>, Vec<Vec<Scalar>>) {
        // Convert data to polynomial coefficients
        let poly_coeff = match input {
            Input::PolyCoeff(polynomial) => polynomial,
            Input::Data(mut data) => {
                reverse_bit_order(&mut data);
                self.poly_domain.ifft_scalars(data)
            }
        };

        self.compute_multi_opening_proofs_poly_coeff(poly_coeff)
    }

    /// Extends the polynomial by computing its coset evaluations
    pub fn extend_polynomial(&self, input: Input) -> Vec<Vec<Scalar>> {
        // Convert data to polynomial coefficients
        let poly_coeff = match input {
            Input::PolyCoeff(polynomial) => polynomial,
            Input::Data(mut data) => {
                reverse_bit_order(&mut data);
                self.poly_domain.ifft_scalars(data)
            }
        };
        self.compute_coset_evaluations(poly_coeff)
    }

    /// Computes multi-opening proofs over a given polynomial in coefficient form.
    ///
    /// The matching function in the specs is: https://github.com/ethereum/consensus-specs/blob/13ac373a2c284dc66b48ddd2ef0a10537e4e0de6/specs/_features/eip7594/polynomial-commitments-sampling.md#compute_cells_and_kzg_proofs_polynomialcoeff
    //
    // Note: one can view this implementation of FK20 as only working over polynomials in coefficient form.
    // ie the core algorithms never consider polynomials in lagrange form.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn compute_multi_opening_proofs_poly_coeff(
        &self,
        polynomial: PolyCoeff,
    ) -> (Vec<G1Point>, Vec<Vec<Scalar>>) {
        // Compute opening proofs for the polynomial
        //
        let h_poly_commitments =
            compute_h_poly_commitments(&self.batch_toeplitz, polynomial.clone(), self.coset_size);
        let mut proofs = {
            #[cfg(feature = "tracing")]
            let _span = tracing::info_span!("compute proof from h_poly_commitments").entered();
            self.proof_domain.fft_g1(h_poly_commitments)
        };

        // Reverse bit order the set of proofs, so that the proofs line up with the
        // coset evaluations.
        reverse_bit_order(&mut proofs);

        (
            g1_batch_normalize(&proofs),
            self.compute_coset_evaluations(polynomial),
        )
    }

    #[cfg(test)]
    pub(crate) const fn batch_toeplitz_matrix(&self) -> &BatchToeplitzMatrixVecMul {
        &self.batch_toeplitz
    }
}
