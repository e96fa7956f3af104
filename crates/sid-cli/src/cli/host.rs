use sid::{FixedHostname, HostnameSource, SystemHostname};

/// Host name source selected on the command line.
#[derive(Debug, Clone)]
pub enum CliHostname {
    System(SystemHostname),
    Fixed(FixedHostname),
}

impl From<Option<String>> for CliHostname {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) => Self::Fixed(FixedHostname::new(name)),
            None => Self::System(SystemHostname),
        }
    }
}

impl HostnameSource for CliHostname {
    fn hostname(&self) -> sid::Result<String> {
        match self {
            Self::System(host) => host.hostname(),
            Self::Fixed(host) => host.hostname(),
        }
    }
}
