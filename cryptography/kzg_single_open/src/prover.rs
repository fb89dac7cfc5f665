use bls12_381::{batch_inversion::batch_inverse, ff::Field, G1Point, Scalar};
use maybe_rayon::prelude::*;
use polynomial::domain::Domain;

use crate::bitreverse_slice;

/// The key that is used to commit to polynomials in Lagrange form.
pub struct CommitKey {
    pub g1_lagrange: Vec<G1Point>,
}

impl CommitKey {
    pub const fn new(g1_lagrange: Vec<G1Point>) -> Self {
        Self { g1_lagrange }
    }
}

pub struct Prover {
    /// Domain used to create the opening proofs.
    pub domain: Domain,
    /// Commitment key used for committing to the polynomial
    /// in Lagrange form.
    pub commit_key: CommitKey,
}

impl Prover {
    pub fn new(domain_size: usize, commit_key: CommitKey) -> Self {
        Self {
            domain: Domain::new(domain_size),
            commit_key,
        }
    }
}

/// Compute evaluation and quotient of the given polynomial at the given point.
///
/// Note: The quotient is returned in normal order.
pub fn compute_evaluation_and_quotient(
    domain: &Domain,
    polynomial: &[Scalar],
    z: Scalar,
) -> (Scalar, Vec<Scalar>) {
    let point_idx = domain.roots.iter().position(|root| *root == z);

    point_idx.map_or_else(
        || compute_evaluation_and_quotient_out_of_domain(domain, polynomial, z),
        |point_idx| compute_evaluation_and_quotient_within_domain(domain, polynomial, point_idx),
    )
}

/// Compute evaluation and quotient of the given polynomial at the given point.
/// The point is guaranteed to be out-of-domain.
pub fn compute_evaluation_and_quotient_out_of_domain(
    domain: &Domain,
    polynomial: &[Scalar],
    z: Scalar,
) -> (Scalar, Vec<Scalar>) {
    // Bit-reverse polynomial into normal order.
    let mut polynomial = polynomial.to_vec();
    bitreverse_slice(&mut polynomial);

    // 1 / (z - ω^i)
    let mut denoms = (&domain.roots)
        .maybe_into_par_iter()
        .map(|root| z - *root)
        .collect::<Vec<_>>();
    batch_inverse(&mut denoms);

    let domain_size = domain.roots.len();

    // \sum (ω^i * f(ω^i) / (z - ω^i)) * ((z^n - 1) / n)
    let y = (&domain.roots)
        .maybe_into_par_iter()
        .zip(&polynomial)
        .zip(&denoms)
        .map(|((root, f_root), denom)| root * *f_root * denom)
        .sum::<Scalar>()
        * (z.pow_vartime([domain_size as u64]) - Scalar::ONE)
        * domain.domain_size_inv;

    // (y - f(ω^i)) / (z - ω^i)
    let quotient = denoms
        .maybe_into_par_iter()
        .zip(&polynomial)
        .map(|(denom, f_root)| (y - *f_root) * denom)
        .collect();

    (y, quotient)
}

/// Compute evaluation and quotient of the given polynomial at the given point
/// index of the domain.
///
/// For more details, read [PCS multiproofs using random evaluation] section
/// "Dividing when one of the points is zero".
///
/// [PCS multiproofs using random evaluation]: https://dankradfeist.de/ethereum/2021/06/18/pcs-multiproofs.html
pub fn compute_evaluation_and_quotient_within_domain(
    domain: &Domain,
    polynomial: &[Scalar],
    point_idx: usize,
) -> (Scalar, Vec<Scalar>) {
    let domain_size = domain.roots.len();

    // Bit-reverse polynomial into normal order.
    let mut polynomial = polynomial.to_vec();
    bitreverse_slice(&mut polynomial);

    // ω^m
    let z = domain.roots[point_idx];

    // f(ω^m)
    let y = polynomial[point_idx];

    // 1 / (ω^m - ω^j)
    // Note that we set (ω^m - ω^m) to be one to make the later `batch_inverse` work.
    let mut denoms = (&domain.roots)
        .maybe_into_par_iter()
        .enumerate()
        .map(|(idx, root)| {
            if idx == point_idx {
                Scalar::ONE
            } else {
                z - root
            }
        })
        .collect::<Vec<_>>();
    batch_inverse(&mut denoms);

    // (f(ω^m) - f(ω^j)) / (ω^m - ω^j)
    let mut quotient = denoms
        .maybe_into_par_iter()
        .zip(polynomial)
        .map(|(denom, f_root)| (y - f_root) * denom)
        .collect::<Vec<_>>();

    // Compute q(ω^m) = \sum q(ω^j) * (A'(ω^m) / A'(ω^j)) = \sum q(ω^j) * ω^{j - m}
    quotient[point_idx] = Scalar::ZERO;
    quotient[point_idx] = -(&quotient)
        .maybe_into_par_iter()
        .enumerate()
        .map(|(idx, quotient)| {
            let root_j_minus_m = domain.roots[(domain_size + idx - point_idx) % domain_size];
            *quotient * root_j_minus_m
        })
        .sum::<Scalar>();

    (y, quotient)
}
