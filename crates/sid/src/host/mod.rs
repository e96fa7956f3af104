//! Host name sources used to derive the machine fingerprint.
//!
//! The generator asks its [`HostnameSource`] exactly once, the first time a
//! fingerprint is needed. Any error switches the fingerprint to the
//! timestamp-derived fallback; it never fails generation.

use crate::{Error, Result};

/// A trait for sources that report the current host's network name.
///
/// # Example
/// ```
/// use sid::{FixedHostname, HostnameSource};
///
/// let host = FixedHostname::new("db-01");
/// assert_eq!(host.hostname().unwrap(), "db-01");
/// ```
pub trait HostnameSource {
    /// Returns the host name, or an error if it cannot be determined.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HostnameUnavailable`] when no usable name exists.
    fn hostname(&self) -> Result<String>;
}

impl<H: HostnameSource + ?Sized> HostnameSource for &H {
    fn hostname(&self) -> Result<String> {
        (**self).hostname()
    }
}

/// Reads the host name from the operating system.
///
/// Names that are empty or not valid UTF-8 are reported as unavailable.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> Result<String> {
        let name = gethostname::gethostname()
            .into_string()
            .map_err(|raw| Error::HostnameUnavailable {
                reason: format!("hostname is not valid UTF-8: {raw:?}"),
            })?;
        if name.is_empty() {
            return Err(Error::HostnameUnavailable {
                reason: String::from("hostname is empty"),
            });
        }
        Ok(name)
    }
}

/// A fixed host name, for tests and for deployments that pin the fingerprint
/// to a configured node name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedHostname(String);

impl FixedHostname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl HostnameSource for FixedHostname {
    fn hostname(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// A source that always fails, forcing the timestamp fallback.
#[derive(Default, Clone, Copy, Debug)]
pub struct UnavailableHostname;

impl HostnameSource for UnavailableHostname {
    fn hostname(&self) -> Result<String> {
        Err(Error::HostnameUnavailable {
            reason: String::from("hostname lookup disabled"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_hostname_returns_name() {
        assert_eq!(FixedHostname::new("host-A").hostname().unwrap(), "host-A");
    }

    #[test]
    fn unavailable_hostname_errors() {
        assert!(matches!(
            UnavailableHostname.hostname(),
            Err(Error::HostnameUnavailable { .. })
        ));
    }

    #[test]
    fn system_hostname_is_non_empty_when_present() {
        if let Ok(name) = SystemHostname.hostname() {
            assert!(!name.is_empty());
        }
    }
}
