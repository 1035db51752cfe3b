use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use eyre::WrapErr;
use rand_core::OsRng;
use tracing::info;
use weierstrass_ecdsa::DomainParams;

/// Generates a key pair, signs a message and checks the signature verifies.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file holding the domain parameters; overrides `--curve`.
    #[arg(long, value_name = "FILE")]
    params: Option<PathBuf>,

    /// Built-in domain parameters to use.
    #[arg(long, value_enum, default_value_t = BuiltinCurve::Validation)]
    curve: BuiltinCurve,

    /// The message to sign.
    #[arg(long, default_value = "hello world")]
    message: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BuiltinCurve {
    Validation,
    Secp256k1,
}

fn load_params(args: &Args) -> eyre::Result<DomainParams> {
    let Some(path) = &args.params else {
        return Ok(match args.curve {
            BuiltinCurve::Validation => DomainParams::validation_curve(),
            BuiltinCurve::Secp256k1 => DomainParams::secp256k1(),
        });
    };
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Ok(DomainParams::from_json(&text)?)
}

fn init_tracing() {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> eyre::Result<ExitCode> {
    init_tracing();
    let args = Args::parse();

    let dsa = load_params(&args)?.into_ecdsa()?;
    info!(order = %dsa.order(), "domain parameters loaded");

    let message = args.message.as_bytes();
    let key = dsa.generate_pair(&mut OsRng)?;
    let signature = dsa.sign(&key.private_key, message, &mut OsRng)?;
    info!(public_key = %key.public_key, %signature, "message signed");

    // Flip the lowest bit of the last byte; an empty message gains one byte.
    let mut tampered = message.to_vec();
    match tampered.last_mut() {
        Some(byte) => *byte ^= 0x01,
        None => tampered.push(0),
    }
    let rejects_tampered = !dsa.accepts(&signature, &key.public_key, &tampered);

    if dsa.accepts(&signature, &key.public_key, message) && rejects_tampered {
        println!("[**] Validation passed");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("[!!] Validation failed.");
        Ok(ExitCode::FAILURE)
    }
}
