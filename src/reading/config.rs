use std::ops::RangeInclusive;

/// Reader configuration: pacing bounds, presets and navigation distances.
///
/// Purely data; the engine consumes the bounds and skip distance, the UI
/// consumes the step and presets.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// WPM a fresh player starts at (default 300)
    pub default_wpm: u32,

    /// Minimum and maximum allowed WPM; `set_wpm` clamps into this range
    pub wpm_range: RangeInclusive<u32>,

    /// Increment applied by the speed-up/speed-down keys (default 50)
    pub wpm_step: u32,

    /// Quick-select WPM presets shown in the UI
    pub wpm_presets: Vec<u32>,

    /// Words skipped by a single forward/backward navigation (default 5)
    pub skip_words: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            default_wpm: 300,
            wpm_range: 100..=1000,
            wpm_step: 50,
            wpm_presets: vec![200, 300, 500, 700],
            skip_words: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = ReaderConfig::default();
        assert_eq!(config.default_wpm, 300);
        assert_eq!(config.wpm_range, 100..=1000);
    }

    #[test]
    fn test_default_wpm_within_range() {
        let config = ReaderConfig::default();
        assert!(config.wpm_range.contains(&config.default_wpm));
    }

    #[test]
    fn test_default_presets_within_range() {
        let config = ReaderConfig::default();
        assert_eq!(config.wpm_presets, vec![200, 300, 500, 700]);
        assert!(config
            .wpm_presets
            .iter()
            .all(|wpm| config.wpm_range.contains(wpm)));
    }
}
