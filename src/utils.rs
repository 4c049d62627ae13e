use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Exact `n!`.
pub fn factorial(n: u32) -> BigUint {
    (1..=n).fold(BigUint::one(), |acc, k| acc * k)
}

/// `n! / (k! (n-k)!)`, computed exactly and rounded to the nearest `f32`.
/// Zero when `k > n`.
pub fn binomial(n: u32, k: u32) -> f32 {
    if k > n {
        return 0.0;
    }
    let exact = factorial(n) / (factorial(k) * factorial(n - k));
    exact.to_f32().unwrap_or(f32::INFINITY)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::utils::{binomial, factorial};
    use num_bigint::BigUint;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), BigUint::from(1u32));
        assert_eq!(factorial(1), BigUint::from(1u32));
        assert_eq!(factorial(3), BigUint::from(6u32));
        assert_eq!(factorial(20), BigUint::from(2432902008176640000u64));
        assert_eq!(
            factorial(25).to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(4, 2), 6.0);
        assert_eq!(binomial(8, 4), 70.0);
        assert_eq!(binomial(5, 0), 1.0);
        assert_eq!(binomial(5, 5), 1.0);
        assert_eq!(binomial(3, 4), 0.0);
        assert_eq!(binomial(10, 5), 252.0);
    }
}
