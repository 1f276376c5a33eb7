//! Hasher: stable 32-bit string fingerprint (FNV-1a over UTF-16 code units)

/// FNV offset basis; also the hash of the empty string
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// 32-bit FNV prime
pub const FNV_PRIME: u32 = 16_777_619;

/// String fingerprinting. Not cryptographic; collisions are tolerated.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hasher;

impl Hasher {
    /// Hash text into a u32 seed
    ///
    /// Iterates UTF-16 code units so astral characters contribute both
    /// surrogate halves, same as any UTF-16 string runtime would.
    pub fn hash(text: &str) -> u32 {
        text.encode_utf16().fold(FNV_OFFSET_BASIS, |acc, unit| {
            (acc ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_offset_basis() {
        assert_eq!(Hasher::hash(""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(Hasher::hash("a"), 3_826_002_220);
        assert_eq!(Hasher::hash("hello"), 1_335_831_723);
    }

    #[test]
    fn test_determinism() {
        let text = "I will practice every day and read daily";
        assert_eq!(Hasher::hash(text), Hasher::hash(text));
        assert_eq!(Hasher::hash(text), 2_453_215_582);
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(Hasher::hash("Hello"), Hasher::hash("hello"));
    }

    #[test]
    fn test_astral_uses_surrogate_pair() {
        let manual = [0xD83Cu32, 0xDF1F].iter().fold(FNV_OFFSET_BASIS, |acc, unit| {
            (acc ^ unit).wrapping_mul(FNV_PRIME)
        });
        assert_eq!(Hasher::hash("🌟"), manual);
    }
}
