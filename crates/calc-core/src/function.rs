//! The fixed function under study, `f(x) = x²`, with its closed forms.

/// `f(x) = x²`
#[inline]
pub fn f(x: f64) -> f64 {
    x * x
}

/// `f'(x) = 2x`
#[inline]
pub fn f_prime(x: f64) -> f64 {
    2.0 * x
}

/// Antiderivative `F(x) = x³/3`.
#[inline]
pub fn antiderivative(x: f64) -> f64 {
    x * x * x / 3.0
}

/// Exact value of `∫ₐᵇ f(x) dx`.
pub fn definite_integral(a: f64, b: f64) -> f64 {
    antiderivative(b) - antiderivative(a)
}
