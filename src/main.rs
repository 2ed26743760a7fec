use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use abi_model::abi::AbiUseCase;
use abi_model::config::{self, Config};
use abi_model::{AbiClient, Error};

#[derive(Debug, Parser)]
#[command(
    name = "abi-model",
    version,
    about = "Send typed ABI requests to an SDK core and print the result"
)]
struct Args {
    /// Core bridge url (overrides the config file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Config file (defaults to $ABI_MODEL_CONFIG or ~/.config/abi-model/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// ABI operation to run
    #[arg(value_enum)]
    operation: Operation,

    /// JSON file with the operation params, `-` for stdin
    params: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
    EncodeMessageBody,
    AttachSignatureToMessageBody,
    EncodeMessage,
    EncodeInternalMessage,
    AttachSignature,
    DecodeMessage,
    DecodeMessageBody,
    EncodeAccount,
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String> {
    let config = resolve_config(&args)?;
    let raw = read_params(&args.params).await?;

    let transport = config.transport()?;
    info!(endpoint = %config.endpoint, operation = ?args.operation, "dispatching");
    let client = AbiClient::new(transport);

    dispatch(&client, args.operation, &raw).await
}

/// Core failures print as `code: message`, anything else as its context chain
fn report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(core) => match (core.core_code(), core.core_message()) {
            (Some(code), Some(message)) => format!("{}: {}", code, message),
            _ => format!("{:#}", err),
        },
        None => format!("{:#}", err),
    }
}

fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
    }
    Ok(config)
}

async fn read_params(source: &str) -> Result<String> {
    if source == "-" {
        let mut raw = String::new();
        tokio::io::stdin()
            .read_to_string(&mut raw)
            .await
            .context("read params from stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(source).with_context(|| format!("read params file {}", source))
}

/// Parse `raw` as the params record of `operation`, run it, and render the result
async fn dispatch<U: AbiUseCase + ?Sized>(
    client: &U,
    operation: Operation,
    raw: &str,
) -> Result<String> {
    match operation {
        Operation::EncodeMessageBody => {
            render(client.encode_message_body(parse(raw)?).await?)
        }
        Operation::AttachSignatureToMessageBody => {
            render(client.attach_signature_to_message_body(parse(raw)?).await?)
        }
        Operation::EncodeMessage => render(client.encode_message(parse(raw)?).await?),
        Operation::EncodeInternalMessage => {
            render(client.encode_internal_message(parse(raw)?).await?)
        }
        Operation::AttachSignature => render(client.attach_signature(parse(raw)?).await?),
        Operation::DecodeMessage => render(client.decode_message(parse(raw)?).await?),
        Operation::DecodeMessageBody => render(client.decode_message_body(parse(raw)?).await?),
        Operation::EncodeAccount => render(client.encode_account(parse(raw)?).await?),
    }
}

fn parse<P: DeserializeOwned>(raw: &str) -> Result<P> {
    serde_json::from_str(raw).context("params do not match the operation's request shape")
}

fn render<R: Serialize>(result: R) -> Result<String> {
    Ok(serde_json::to_string_pretty(&result)?)
}
