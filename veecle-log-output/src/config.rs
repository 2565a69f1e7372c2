use serde::{Deserialize, Serialize};

/// Longest hostname accepted for syslog headers.
pub const MAX_HOSTNAME_LEN: usize = 64;

/// Longest tag accepted in front of records.
pub const MAX_TAG_LEN: usize = 32;

/// An error while applying an [`OutputConfig`].
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The hostname does not fit the hostname storage.
    #[error("the hostname is longer than {max} bytes")]
    HostnameTooLong {
        /// Longest accepted hostname.
        max: usize,
    },
    /// The tag does not fit the tag storage.
    #[error("the tag is longer than {max} bytes")]
    TagTooLong {
        /// Longest accepted tag.
        max: usize,
    },
}

/// Settings of a [`LogOutput`](crate::LogOutput) that live as long as the output.
///
/// Missing fields keep their defaults, so a configuration can be loaded from partial documents.
///
/// # Examples
///
/// ```rust
/// use veecle_log_output::{LogOutput, OutputConfig};
///
/// let config: OutputConfig = serde_json::from_str(r#"{ "hostname": "gateway", "frequency": 32768 }"#)?;
///
/// let mut output = LogOutput::<heapless::Vec<u8, 256>, 64>::buffered(heapless::Vec::new());
/// output.configure(&config)?;
/// assert_eq!(output.hostname(), Some("gateway"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig<'a> {
    /// Hostname used in syslog headers.
    #[serde(borrow)]
    pub hostname: Option<&'a str>,

    /// Tag printed in front of every record.
    #[serde(borrow)]
    pub tag: Option<&'a str>,

    /// Frequency of the timestamp counter in Hz, `0` if unknown.
    pub frequency: u32,

    /// Color info records green when colors are enabled.
    pub info_green: bool,

    /// Print dropped message notices in red.
    pub dropped_colors: bool,
}

/// Copies `value` into fixed-capacity storage.
pub(crate) fn store<const N: usize>(
    value: &str,
    error: ConfigError,
) -> Result<heapless::String<N>, ConfigError> {
    let mut stored = heapless::String::new();
    stored.push_str(value).map_err(|()| error)?;
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::{ConfigError, OutputConfig, store};
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_config() {
        let config: OutputConfig = serde_json::from_str(r#"{ "tag": "node1" }"#).unwrap();

        assert_eq!(
            config,
            OutputConfig {
                tag: Some("node1"),
                ..OutputConfig::default()
            }
        );
    }

    #[test]
    fn full_config() {
        let config: OutputConfig = serde_json::from_str(
            r#"{
                "hostname": "gateway",
                "tag": "node1",
                "frequency": 32768,
                "info_green": true,
                "dropped_colors": true
            }"#,
        )
        .unwrap();

        assert_eq!(
            config,
            OutputConfig {
                hostname: Some("gateway"),
                tag: Some("node1"),
                frequency: 32768,
                info_green: true,
                dropped_colors: true,
            }
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<OutputConfig>(r#"{ "colour": true }"#).is_err());
    }

    #[test]
    fn storage_limits() {
        let error = ConfigError::TagTooLong { max: 4 };

        assert_eq!(store::<4>("abcd", error).unwrap().as_str(), "abcd");
        assert_eq!(store::<4>("abcde", error), Err(error));
        assert_eq!(error.to_string(), "the tag is longer than 4 bytes");
    }
}
