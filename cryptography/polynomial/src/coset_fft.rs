use bls12_381::Scalar;

/// A coset generator used to shift a domain before/after an FFT, so that we can
/// evaluate/interpolate a polynomial over a coset of the domain's roots of unity
/// rather than the roots themselves.
#[derive(Debug, Clone, Copy)]
pub struct CosetFFT {
    pub generator: Scalar,
    pub generator_inv: Scalar,
}

impl CosetFFT {
    pub fn new(generator: Scalar) -> Self {
        use bls12_381::ff::Field;
        Self {
            generator,
            generator_inv: generator.invert().expect("generator should not be zero"),
        }
    }
}
