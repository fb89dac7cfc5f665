use crate::monomial::{poly_add, poly_neg};
use bls12_381::Scalar;

/// A polynomial in monomial form where the lowest degree term is first
/// Layout: x^0 * a_0 + x^1 * a_1 + ... + x^(n-1) * a_(n-1)
pub type PolyCoeff = Vec<Scalar>;

/// For two polynomials, `f(x)` and `g(x)`, this method computes
/// the result of `f(x) - g(x)` and returns the result.
///
/// Note: Polynomials can be of different lengths
pub fn poly_sub(a: PolyCoeff, b: PolyCoeff) -> PolyCoeff {
    poly_add(a, poly_neg(b))
}

/// Multiplies two polynomials together using the schoolbook method.
fn poly_mul(a: &PolyCoeff, b: &PolyCoeff) -> PolyCoeff {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![Scalar::from(0u64); a.len() + b.len() - 1];
    for (i, a_i) in a.iter().enumerate() {
        for (j, b_j) in b.iter().enumerate() {
            result[i + j] += a_i * b_j;
        }
    }
    result
}

/// Computes powers of a scalar up to and including the given degree.
///
/// Example: powers(x, 10) == [1, x, x^2, ..., x^10]
fn powers_of(scalar: &Scalar, max_degree: usize) -> Vec<Scalar> {
    let mut powers = Vec::with_capacity(max_degree);
    powers.push(Scalar::from(1u64));
    for i in 1..=max_degree {
        powers.push(powers[i - 1] * scalar);
    }
    powers
}

/// Given a polynomial `f(x)` and a scalar `z`. This method will compute
/// the result of `f(z)` and return the result.
pub fn poly_eval(poly: &PolyCoeff, value: &Scalar) -> Scalar {
    // If the scalar we are evaluating at is zero, return the constant term
    if value == &Scalar::from(0u64) {
        return poly[0];
    }

    let powers = powers_of(value, poly.len());

    let mut sum = Scalar::from(0u64);
    for (power, coeff) in powers.iter().zip(poly.iter()) {
        sum += coeff * power
    }

    sum
}

/// Given a list of points, this method will compute the polynomial
/// Z(x) which is equal to zero when evaluated at each point.
///
/// Example: vanishing_poly([1, 2, 3]) = (x - 1)(x - 2)(x - 3)
pub fn vanishing_poly(roots: &[Scalar]) -> PolyCoeff {
    let mut poly = vec![Scalar::from(1u64)];
    for root in roots {
        poly = poly_mul(&poly, &vec![-root, Scalar::from(1u64)]);
    }
    poly
}

/// Interpolates a set of points to a given polynomial in monomial form.
///
/// Given a list of points (x_i, y_i), this method will return the lowest degree polynomial
/// in monomial form that passes through all the points.
///
/// A simple O(n^2) algorithm (lagrange interpolation).
///
/// Note: This method is only used for testing. Our domain will always be the roots
/// of unity, so we use IFFT to interpolate.
pub fn lagrange_interpolate(points: &[(Scalar, Scalar)]) -> Option<PolyCoeff> {
    let max_degree_plus_one = points.len();
    assert!(
        max_degree_plus_one >= 2,
        "should interpolate for degree >= 1"
    );
    let mut coeffs = vec![Scalar::from(0u64); max_degree_plus_one];
    // external iterator
    for (k, p_k) in points.iter().enumerate() {
        let (x_k, y_k) = p_k;
        // coeffs from 0 to max_degree - 1
        let mut contribution = vec![Scalar::from(0u64); max_degree_plus_one];
        let mut denominator = Scalar::from(1u64);
        let mut max_contribution_degree = 0;
        // internal iterator
        for (j, p_j) in points.iter().enumerate() {
            let (x_j, _) = p_j;
            if j == k {
                continue;
            }

            let mut diff = *x_k;
            diff -= x_j;
            denominator *= diff;

            if max_contribution_degree == 0 {
                max_contribution_degree = 1;
                *contribution
                    .get_mut(0)
                    .expect("must have enough coefficients") -= x_j;
                *contribution
                    .get_mut(1)
                    .expect("must have enough coefficients") += Scalar::from(1u64);
            } else {
                let mul_by_minus_x_j: Vec<Scalar> = contribution
                    .iter()
                    .map(|el| {
                        let mut tmp = *el;
                        tmp *= x_j;

                        -tmp
                    })
                    .collect();

                contribution.insert(0, Scalar::from(0u64));
                contribution.truncate(max_degree_plus_one);

                assert_eq!(mul_by_minus_x_j.len(), max_degree_plus_one);
                for (i, c) in contribution.iter_mut().enumerate() {
                    let other = mul_by_minus_x_j
                        .get(i)
                        .expect("should have enough elements");
                    *c += other;
                }
            }
        }

        denominator = denominator
            .invert()
            .expect("unexpected zero in denominator");
        for (i, this_contribution) in contribution.into_iter().enumerate() {
            let c = coeffs.get_mut(i).expect("should have enough coefficients");
            let mut tmp = this_contribution;
            tmp *= denominator;
            tmp *= y_k;
            *c += tmp;
        }
    }

    Some(coeffs)
}
