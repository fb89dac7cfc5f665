pub mod coset_fft;
pub mod domain;
mod fft;
pub mod monomial;
pub mod poly_coeff;

pub use coset_fft::CosetFFT;
pub use poly_coeff::PolyCoeff;
