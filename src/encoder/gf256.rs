/// GF(256) arithmetic for QR Reed-Solomon codes
///
/// Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 with generator alpha = 2.
/// Both tables are built at compile time and never mutated, so they can be
/// read from any thread.
use crate::error::QrError;

/// GF(256) field operations over the static tables
pub struct Gf256;

/// alpha^i for i in 0..=255 (`EXP_TABLE[255]` wraps back to 1)
pub static EXP_TABLE: [u8; 256] = build_exp_table();

/// Inverse of `EXP_TABLE` over exponents 0..=254; entry 0 is unused
pub static LOG_TABLE: [u8; 256] = build_log_table();

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 8 {
        table[i] = 1 << i;
        i += 1;
    }
    while i < 256 {
        table[i] = table[i - 4] ^ table[i - 5] ^ table[i - 6] ^ table[i - 8];
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

impl Gf256 {
    /// alpha^n with `n` reduced modulo 255
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }

    /// Discrete logarithm base alpha; undefined for 0
    pub fn log(n: u8) -> Result<u8, QrError> {
        if n < 1 {
            return Err(QrError::InvalidLogarithmInput(n));
        }
        Ok(LOG_TABLE[n as usize])
    }

    /// Field product; zero when either factor is zero
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// Field quotient `a / b`; panics when `b` is zero
    pub fn div(a: u8, b: u8) -> u8 {
        assert!(b != 0, "GF(256) division by zero");
        if a == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + 255 - log_b) % 255]
    }
}
