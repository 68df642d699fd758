//! Numeric helper traits for the route search.

/// Helper trait providing zero value for numeric types.
pub trait Zero {
    const ZERO: Self;
}

impl Zero for f64 {
    const ZERO: f64 = 0.0;
}

impl Zero for u32 {
    const ZERO: u32 = 0;
}

/// Helper trait, providing total ordering for non-`Ord` types such as `f64`.
///
/// The resulting order is defined for every value, `NaN` and infinities included.
pub trait IntoOrd {
    /// Some substitute `Ord` type which can be used instead of `Self` for ordering purposes.
    /// Only should be used for comparisons, its value itself is meaningless.
    type Output: Ord;

    /// Convert self into `Ord`-supporting type `Self::Output`.
    fn into_ord(self) -> Self::Output;
}

impl IntoOrd for f64 {
    type Output = i64;

    fn into_ord(self) -> Self::Output {
        // Negative floats order backwards by magnitude: flip their magnitude bits, keep the sign
        let bits = self.to_bits() as i64;
        if bits < 0 {
            bits ^ i64::MAX
        } else {
            bits
        }
    }
}

impl IntoOrd for u32 {
    type Output = u32;

    #[inline]
    fn into_ord(self) -> Self::Output {
        self
    }
}

#[test]
fn test_into_ord_f64() {
    // Road weights in ascending order, negative ones included
    let weights: [f64; 10] = [-9.5, -4.0, -0.25, 0.0, 0.5, 6.0, 20.0, 20.75, 30.0, 1e6];
    for pair in weights.windows(2) {
        assert!(pair[0].into_ord() < pair[1].into_ord(), "{} >= {}", pair[0], pair[1]);
    }
    assert_eq!(20.0f64.into_ord(), (10.0f64 + 10.0).into_ord());
    assert!((-0.0f64).into_ord() < 0.0f64.into_ord());
}

#[test]
fn test_into_ord_f64_non_finite() {
    let ord = |x: f64| x.into_ord();
    assert!(ord(f64::INFINITY) > ord(f64::MAX));
    assert!(ord(f64::NEG_INFINITY) < ord(f64::MIN));
    assert!(ord(f64::NAN) > ord(f64::INFINITY));
    assert_eq!(ord(f64::NAN), ord(f64::NAN));
}
