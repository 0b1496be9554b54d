/// Default maximum encoded envelope size: 256 KiB.
pub const DEFAULT_MAX_ENVELOPE_SIZE: usize = 256 * 1024;

/// Controls payload validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, catalog-owned payload objects reject properties not in the schema.
    pub strict_mode: bool,
    /// Maximum bytes accepted when decoding an encoded envelope.
    pub max_envelope_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            max_envelope_size: DEFAULT_MAX_ENVELOPE_SIZE,
        }
    }
}
