mod cli;

use std::io::{self, BufWriter, Write};

use clap::Parser;
use cli::config::{CliArgs, Config, GenerateConfig, InspectConfig};
use cli::host::CliHostname;
use cli::telemetry::init_telemetry;
use sid::{Generator, Identifier, SystemClock, ThreadRandom, TracingDiagnostics};

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry(args.log_format)?;
    let config = Config::try_from(args)?;

    if cfg!(debug_assertions) {
        tracing::debug!("Running with config: {:#?}", config);
    }

    match config {
        Config::Generate(config) => run_generate(&config),
        Config::Inspect(config) => run_inspect(&config),
    }
}

fn run_generate(config: &GenerateConfig) -> anyhow::Result<()> {
    let generator = Generator::from_components(
        SystemClock,
        ThreadRandom,
        CliHostname::from(config.hostname.clone()),
        TracingDiagnostics,
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for _ in 0..config.count {
        let token = if config.padded {
            generator.generate_padded(&config.prefix)
        } else {
            generator.generate(&config.prefix)
        };
        writeln!(out, "{token}")?;
    }
    out.flush()?;

    tracing::debug!(
        count = config.count,
        fingerprint = %generator.fingerprint(),
        "generated identifiers"
    );
    Ok(())
}

fn run_inspect(config: &InspectConfig) -> anyhow::Result<()> {
    let id = Identifier::parse_with_prefix(&config.token, &config.prefix)?;
    let [m0, m1, m2] = id.machine_bits();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "token:     {}", config.token)?;
    writeln!(out, "high:      {:#018x}", id.high().to_u64())?;
    writeln!(out, "low:       {:#018x}", id.low().to_u64())?;
    writeln!(out, "timestamp: {}", id.timestamp())?;
    writeln!(out, "counter:   {}", id.counter())?;
    writeln!(out, "machine:   {m0:02x}{m1:02x}{m2:02x}")?;
    writeln!(out, "jitter:    {:#010x}", id.jitter())?;
    Ok(())
}
