//! Detector configuration
//!
//! High-level settings (polarity and the two thresholds) are required; low-level settings
//! (confirmation count, sample interval, validity limit) have defaults matching a stock HC-SR04.
//!
//! ```rust
//! use ultrasonic_presence::{DetectorConfig, EchoDuration};
//!
//! // Somebody standing closer than 4 feet is present, further than 6 feet is gone
//! let config = DetectorConfig::builder(false, EchoDuration::from_inches(72), EchoDuration::from_inches(48))
//!     .set_required_counts(4)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.required_counts(), 4);
//! ```

use thiserror::Error;

use crate::hysteresis::{Hysteresis, Polarity};
use crate::units::{EchoDuration, Millis};

/// Consecutive confirming samples needed before the state flips
pub const DEFAULT_REQUIRED_COUNTS: u8 = 4;

/// Minimum time between two measurements
pub const DEFAULT_SAMPLE_INTERVAL: Millis = Millis(1000);

/// Longest echo still considered valid (23200µs, about 400cm)
pub const DEFAULT_MAX_VALID_READING: EchoDuration = EchoDuration(23200);

/// Rejected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The short threshold lies above the long threshold
    #[error("short threshold {short} is above long threshold {long}")]
    ThresholdsInverted { short: EchoDuration, long: EchoDuration },
    /// A state change could never be confirmed
    #[error("required counts must be at least 1")]
    ZeroRequiredCounts,
    /// Readings reaching the long threshold would all be discarded as invalid
    #[error("long threshold {long} is above the maximum valid reading {max_valid}")]
    LongThresholdUnreachable { long: EchoDuration, max_valid: EchoDuration },
    /// Device names must start with the presence prefix
    #[error("device name must start with \"presence\"")]
    InvalidName,
}

/// Validated, immutable detector settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DetectorConfig {
    hysteresis: Hysteresis,
    required_counts: u8,
    sample_interval: Millis,
    max_valid_reading: EchoDuration,
}

impl DetectorConfig {
    /// Start building a configuration
    ///
    /// * `long_is_present` - true if a long echo (nothing close) means present
    /// * `long_threshold` - echoes at or above this count as long
    /// * `short_threshold` - echoes at or below this count as short
    pub fn builder(
        long_is_present: bool,
        long_threshold: EchoDuration,
        short_threshold: EchoDuration,
    ) -> DetectorConfigBuilder {
        DetectorConfigBuilder::new(long_is_present, long_threshold, short_threshold)
    }

    pub fn hysteresis(&self) -> &Hysteresis {
        &self.hysteresis
    }

    pub fn polarity(&self) -> Polarity {
        self.hysteresis.polarity()
    }

    pub fn long_threshold(&self) -> EchoDuration {
        self.hysteresis.long_threshold()
    }

    pub fn short_threshold(&self) -> EchoDuration {
        self.hysteresis.short_threshold()
    }

    pub fn required_counts(&self) -> u8 {
        self.required_counts
    }

    pub fn sample_interval(&self) -> Millis {
        self.sample_interval
    }

    pub fn max_valid_reading(&self) -> EchoDuration {
        self.max_valid_reading
    }

    /// Readings above the validity limit are timeouts or out-of-range echoes
    pub fn is_valid_reading(&self, duration: EchoDuration) -> bool {
        duration <= self.max_valid_reading
    }
}

/// Builder for [`DetectorConfig`]
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfigBuilder {
    long_is_present: bool,
    long_threshold: EchoDuration,
    short_threshold: EchoDuration,
    required_counts: u8,
    sample_interval: Millis,
    max_valid_reading: EchoDuration,
}

impl DetectorConfigBuilder {
    pub fn new(long_is_present: bool, long_threshold: EchoDuration, short_threshold: EchoDuration) -> Self {
        Self {
            long_is_present,
            long_threshold,
            short_threshold,
            required_counts: DEFAULT_REQUIRED_COUNTS,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            max_valid_reading: DEFAULT_MAX_VALID_READING,
        }
    }

    pub fn set_required_counts(mut self, counts: u8) -> Self {
        self.required_counts = counts;
        self
    }

    pub fn set_sample_interval(mut self, interval: Millis) -> Self {
        self.sample_interval = interval;
        self
    }

    pub fn set_max_valid_reading(mut self, max: EchoDuration) -> Self {
        self.max_valid_reading = max;
        self
    }

    /// Validate and freeze the configuration
    pub fn build(self) -> Result<DetectorConfig, ConfigError> {
        if self.short_threshold > self.long_threshold {
            return Err(ConfigError::ThresholdsInverted {
                short: self.short_threshold,
                long: self.long_threshold,
            });
        }
        if self.required_counts == 0 {
            return Err(ConfigError::ZeroRequiredCounts);
        }
        if self.long_threshold > self.max_valid_reading {
            return Err(ConfigError::LongThresholdUnreachable {
                long: self.long_threshold,
                max_valid: self.max_valid_reading,
            });
        }

        Ok(DetectorConfig {
            hysteresis: Hysteresis::new(
                Polarity::from_long_is_present(self.long_is_present),
                self.long_threshold,
                self.short_threshold,
            ),
            required_counts: self.required_counts,
            sample_interval: self.sample_interval,
            max_valid_reading: self.max_valid_reading,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doorway() -> DetectorConfigBuilder {
        DetectorConfig::builder(false, EchoDuration(10656), EchoDuration(7104))
    }

    #[test]
    fn test_defaults() {
        let config = doorway().build().unwrap();
        assert_eq!(config.required_counts(), 4);
        assert_eq!(config.sample_interval(), Millis(1000));
        assert_eq!(config.max_valid_reading(), EchoDuration(23200));
        assert_eq!(config.polarity(), Polarity::ShortIsPresent);
    }

    #[test]
    fn test_overrides() {
        let config = doorway()
            .set_required_counts(2)
            .set_sample_interval(Millis(250))
            .set_max_valid_reading(EchoDuration(11600))
            .build()
            .unwrap();
        assert_eq!(config.required_counts(), 2);
        assert_eq!(config.sample_interval(), Millis(250));
        assert_eq!(config.max_valid_reading(), EchoDuration(11600));
    }

    #[test]
    fn test_equal_thresholds_allowed() {
        assert!(DetectorConfig::builder(true, EchoDuration(5000), EchoDuration(5000))
            .build()
            .is_ok());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let err = DetectorConfig::builder(false, EchoDuration(7104), EchoDuration(10656))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ThresholdsInverted {
                short: EchoDuration(10656),
                long: EchoDuration(7104),
            }
        );
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert_eq!(
            doorway().set_required_counts(0).build(),
            Err(ConfigError::ZeroRequiredCounts)
        );
    }

    #[test]
    fn test_unreachable_long_threshold_rejected() {
        assert_eq!(
            doorway().set_max_valid_reading(EchoDuration(10000)).build(),
            Err(ConfigError::LongThresholdUnreachable {
                long: EchoDuration(10656),
                max_valid: EchoDuration(10000),
            })
        );
    }

    #[test]
    fn test_validity_limit_inclusive() {
        let config = doorway().build().unwrap();
        assert!(config.is_valid_reading(EchoDuration(23200)));
        assert!(!config.is_valid_reading(EchoDuration(23201)));
        assert!(!config.is_valid_reading(EchoDuration::NO_ECHO));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::ThresholdsInverted {
            short: EchoDuration(2),
            long: EchoDuration(1),
        };
        assert_eq!(err.to_string(), "short threshold 2us is above long threshold 1us");
    }
}
