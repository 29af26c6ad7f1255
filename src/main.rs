use clap::{Args, Parser, Subcommand};
use shamir_cli::{
    load_request, parse_prime, recover_with, verify_shares, RecoveryConfig, SharePolicy,
};

#[derive(Parser)]
#[command(name = "shamir-cli")]
#[command(about = "CLI for recovering Shamir secret shares", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RecoveryArgs {
    /// JSON file with the `keys` header and the shares
    #[arg(short, long)]
    input: String,
    /// What to do with a selected share that fails to decode
    #[arg(short, long, value_enum, default_value_t = SharePolicy::FailFast)]
    policy: SharePolicy,
    /// Prime modulus in decimal (defaults to 2^521 - 1)
    #[arg(long)]
    prime: Option<String>,
}

impl RecoveryArgs {
    fn config(&self) -> Result<RecoveryConfig, Box<dyn std::error::Error>> {
        let mut config = RecoveryConfig::default().with_policy(self.policy);
        if let Some(prime) = &self.prime {
            config = config.with_prime(parse_prime(prime)?);
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recover the secret from the lowest-indexed k shares
    Recover(RecoveryArgs),
    /// Recover the secret and check the remaining shares against it
    Verify(RecoveryArgs),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Recover(args) => {
            let request = load_request(&args.input)?;
            let secret = recover_with(&request, &args.config()?)?;
            println!("{}", secret);
        }
        Commands::Verify(args) => {
            let request = load_request(&args.input)?;
            let report = verify_shares(&request, &args.config()?)?;
            println!("Secret: {}", report.secret);
            println!("Used shares: {:?}", report.used);
            println!("Consistent shares: {:?}", report.consistent);
            println!("Inconsistent shares: {:?}", report.inconsistent);
            println!("Undecodable shares: {:?}", report.undecodable);
        }
    }

    Ok(())
}
