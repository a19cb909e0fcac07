/// Polynomials over GF(256)
use super::gf256::Gf256;

/// Coefficients from highest to lowest degree, leading zeros trimmed.
///
/// The zero polynomial has no coefficients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Build from high-to-low coefficients, then multiply by x^`shift`
    pub fn new(coefficients: &[u8], shift: usize) -> Self {
        let start = coefficients
            .iter()
            .position(|&c| c != 0)
            .unwrap_or(coefficients.len());
        let mut trimmed = Vec::with_capacity(coefficients.len() - start + shift);
        trimmed.extend_from_slice(&coefficients[start..]);
        if !trimmed.is_empty() {
            trimmed.resize(trimmed.len() + shift, 0);
        }
        Self {
            coefficients: trimmed,
        }
    }

    /// Reed-Solomon generator `(x - a^0)(x - a^1)...(x - a^(degree-1))`
    pub fn rs_generator(degree: usize) -> Self {
        (0..degree).fold(Self::new(&[1], 0), |acc, i| {
            acc.multiply(&Self::new(&[1, Gf256::exp(i)], 0))
        })
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// True for the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree, or `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// Coefficient at position `index` (0 = highest degree)
    pub fn get(&self, index: usize) -> u8 {
        self.coefficients[index]
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Product over GF(256)
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Self::new(&[], 0);
        }
        let mut product = vec![0u8; self.len() + other.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] ^= Gf256::mul(a, b);
            }
        }
        Self::new(&product, 0)
    }

    /// Remainder of long division by `divisor`
    pub fn rem(&self, divisor: &Polynomial) -> Polynomial {
        assert!(!divisor.is_zero(), "polynomial division by zero");
        let mut remainder = self.clone();
        while remainder.len() >= divisor.len() {
            // Leading terms are non-zero after trimming
            let ratio = Gf256::div(remainder.get(0), divisor.get(0));
            let mut scaled = remainder.coefficients;
            for (slot, &d) in scaled.iter_mut().zip(divisor.coefficients.iter()) {
                *slot ^= Gf256::mul(d, ratio);
            }
            remainder = Self::new(&scaled, 0);
        }
        remainder
    }
}
