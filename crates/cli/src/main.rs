use anyhow::Result;
use clap::Parser;
use keyforge_core::{RandomnessSource, RunConfig, SCHEME_VERSION};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "keyforge")]
#[command(version)]
#[command(about = "Generate Ed25519 validator keypairs with secure file permissions")]
struct Cli {
    /// Output directory for key files
    #[arg(short, long, default_value = "./keys")]
    output: String,

    /// Number of keypairs to generate (1-100)
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Filename prefix for generated keys
    #[arg(short, long, default_value = "validator")]
    prefix: String,

    /// Don't write files, only print to stdout
    #[arg(long)]
    no_files: bool,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Suppress progress output and the security reminder
    #[arg(short, long)]
    quiet: bool,

    /// UNSAFE: derive keys from this fixed seed instead of OS entropy.
    /// Testing only; never use for real validator identities.
    #[arg(long, value_name = "SEED", hide_short_help = true)]
    insecure_random: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let verbose = !cli.quiet;

    let randomness = match cli.insecure_random {
        Some(seed) => {
            eprintln!("WARNING: insecure deterministic randomness selected; keys are NOT safe for production use");
            RandomnessSource::InsecureDeterministic { seed }
        }
        None => RandomnessSource::OsEntropy,
    };

    let config = RunConfig {
        output_dir: cli.output.into(),
        count: cli.count,
        prefix: cli.prefix,
        no_files: cli.no_files,
        json_output: cli.json,
        verbose,
        randomness,
        scheme_version: SCHEME_VERSION.to_string(),
    };

    if verbose {
        println!("Keyforge validator keygen v{}", env!("CARGO_PKG_VERSION"));
        println!("Generating {} Ed25519 keypair(s)...\n", config.count);
    }

    let report = keyforge_core::run(&config)?;
    print!("{report}");
    if verbose {
        print_security_reminder();
    }

    Ok(())
}

fn print_security_reminder() {
    println!("\n✓ Key generation complete");
    println!("\nSECURITY REMINDER:");
    println!("  - Private keys stored with 0600 permissions (owner read/write only)");
    println!("  - Never commit private keys to version control");
    println!("  - Use Hardware Security Modules (HSMs) in production");
    println!("  - Enable key rotation for institutional security");
}
