use anyhow::bail;
use clap::{Parser, Subcommand, ValueEnum};

/// Upper bound on identifiers produced by one `generate` invocation.
pub const MAX_COUNT: usize = 10_000_000;

/// Command line interface of the `sid` binary.
///
/// Every option can also be supplied through the environment (or a `.env`
/// file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sid",
    version,
    about = "Generate and inspect roughly-sortable base36 identifiers"
)]
pub struct CliArgs {
    /// Log output format. Logs go to stderr; identifiers go to stdout.
    ///
    /// Environment variable: `SID_LOG_FORMAT`
    #[arg(long, env = "SID_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print new identifiers, one per line.
    Generate {
        /// Prefix prepended to every identifier.
        ///
        /// Environment variable: `SID_PREFIX`
        #[arg(short, long, env = "SID_PREFIX", default_value_t = String::new())]
        prefix: String,

        /// How many identifiers to print.
        ///
        /// Environment variable: `SID_COUNT`
        #[arg(short = 'n', long, env = "SID_COUNT", default_value_t = 1)]
        count: usize,

        /// Zero-pad each block so every body is exactly 20 characters.
        #[arg(long, default_value_t = false)]
        padded: bool,

        /// Fingerprint from this name instead of the OS host name.
        ///
        /// Environment variable: `SID_HOSTNAME`
        #[arg(long, env = "SID_HOSTNAME")]
        hostname: Option<String>,
    },

    /// Decode an identifier and print its fields.
    Inspect {
        /// The identifier, including its prefix if any.
        token: String,

        /// Prefix to strip before decoding.
        #[arg(short, long, default_value_t = String::new())]
        prefix: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Config {
    Generate(GenerateConfig),
    Inspect(InspectConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub prefix: String,
    pub count: usize,
    pub padded: bool,
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectConfig {
    pub token: String,
    pub prefix: String,
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        match args.command {
            Command::Generate {
                prefix,
                count,
                padded,
                hostname,
            } => {
                if count == 0 {
                    bail!("SID_COUNT must be greater than 0");
                }
                if count > MAX_COUNT {
                    bail!("SID_COUNT ({count}) exceeds the maximum of {MAX_COUNT}");
                }
                if hostname.as_deref().is_some_and(str::is_empty) {
                    bail!("SID_HOSTNAME must not be empty");
                }
                Ok(Self::Generate(GenerateConfig {
                    prefix,
                    count,
                    padded,
                    hostname,
                }))
            }
            Command::Inspect { token, prefix } => {
                if token.is_empty() {
                    bail!("token must not be empty");
                }
                Ok(Self::Inspect(InspectConfig { token, prefix }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> anyhow::Result<Config> {
        Config::try_from(CliArgs::try_parse_from(argv)?)
    }

    #[test]
    fn generate_defaults() {
        let config = parse(&["sid", "generate"]).unwrap();
        assert_eq!(
            config,
            Config::Generate(GenerateConfig {
                prefix: String::new(),
                count: 1,
                padded: false,
                hostname: None,
            })
        );
    }

    #[test]
    fn generate_flags() {
        let config = parse(&[
            "sid", "generate", "-p", "user-", "-n", "3", "--padded", "--hostname", "node-1",
        ])
        .unwrap();
        assert_eq!(
            config,
            Config::Generate(GenerateConfig {
                prefix: String::from("user-"),
                count: 3,
                padded: true,
                hostname: Some(String::from("node-1")),
            })
        );
    }

    #[test]
    fn zero_count_is_rejected() {
        let err = parse(&["sid", "generate", "-n", "0"]).unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn oversized_count_is_rejected() {
        let too_many = (MAX_COUNT + 1).to_string();
        assert!(parse(&["sid", "generate", "-n", &too_many]).is_err());
    }

    #[test]
    fn inspect_takes_token_and_prefix() {
        let config = parse(&["sid", "inspect", "user-x9altvz9xd3fjzc9105c", "-p", "user-"]).unwrap();
        assert_eq!(
            config,
            Config::Inspect(InspectConfig {
                token: String::from("user-x9altvz9xd3fjzc9105c"),
                prefix: String::from("user-"),
            })
        );
    }

    #[test]
    fn log_format_is_global() {
        let args = CliArgs::try_parse_from(["sid", "inspect", "abc", "--log-format", "json"]).unwrap();
        assert_eq!(args.log_format, LogFormat::Json);
    }
}
