use cfg_if::cfg_if;
use num_traits::Float;
use std::fmt::Debug;

cfg_if! {
    if #[cfg(feature = "use_f64")] {
        /// Default floating point precision of the arrays.
        pub type Real = f64;
    } else {
        /// Default floating point precision of the arrays.
        pub type Real = f32;
    }
}

/// Element type of the arrays the kernel operates on.
///
/// Implemented for every thread-safe floating point type; in practice `f32`
/// and `f64`.
pub trait Scalar: Float + Send + Sync + Debug + 'static {}

impl<T> Scalar for T where T: Float + Send + Sync + Debug + 'static {}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_scalar<T: Scalar>() -> bool { true }

    #[test]
    fn test_default_precision() {
        assert!(is_scalar::<Real>());
        #[cfg(feature = "use_f64")]
        assert_eq!(std::mem::size_of::<Real>(), 8);
        #[cfg(not(feature = "use_f64"))]
        assert_eq!(std::mem::size_of::<Real>(), 4);
    }
}
