use ordered_float::NotNan;

/// Min-max scaled metric term, weight, or composite score: an f64 in
/// [0, 1] that is provably not NaN, so sorting by it never needs a
/// `partial_cmp(..).unwrap()`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Normalized(NotNan<f64>);

impl Normalized {
    pub const ZERO: Self = Self(unsafe { NotNan::new_unchecked(0.0) });
    pub const ONE: Self = Self(unsafe { NotNan::new_unchecked(1.0) });

    pub fn new(value: f64) -> Option<Self> {
        if !(0.0..=1.0).contains(&value) {
            return None;
        }
        NotNan::new(value).ok().map(Self)
    }

    /// Builds a normalized value by clamping into [0, 1]. Returns `None` only
    /// for NaN inputs.
    pub fn clamped(value: f64) -> Option<Self> {
        Self::new(value.clamp(0.0, 1.0))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }

    /// Flips polarity: lower raw values contribute more after inversion.
    pub fn inverted(&self) -> Self {
        Self(unsafe { NotNan::new_unchecked(1.0 - self.0.into_inner()) })
    }

    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl std::fmt::Debug for Normalized {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[track_caller]
pub fn assert_within(value: f64, expected: f64, tolerance: f64) {
    let diff = (value - expected).abs();
    assert!(
        diff <= tolerance,
        "Expected value of {expected} +- {tolerance} but got {value} which is off by {diff}",
    );
}
