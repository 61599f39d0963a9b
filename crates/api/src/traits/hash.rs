//! Hash oracle trait

/// Fixed-output digest treated as a random oracle
pub trait HashOracle {
    /// Digest length in bytes
    const OUTPUT_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;

    /// Hash `data` in one shot
    fn digest(data: &[u8]) -> Vec<u8>;

    /// Hash the concatenation of `parts`
    fn digest_concat(parts: &[&[u8]]) -> Vec<u8> {
        Self::digest(&parts.concat())
    }
}
