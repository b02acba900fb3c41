use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mediconnect::{
    ApiClient, ClientConfig, ConfigOverrides, MessageTypeTag, SAMPLES, classify, find_sample,
    is_failure, load_bundle, load_message, print_report,
};

/// MediConnect: sniff HL7/EDI messages, convert them to FHIR and check the result
#[derive(Parser, Debug)]
#[command(name = "mediconnect", version, about)]
struct Cli {
    /// Conversion service base URL [env: MEDICONNECT_BASE_URL]
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key sent as X-API-Key [env: MEDICONNECT_API_KEY]
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Request timeout in seconds [env: MEDICONNECT_TIMEOUT_SECS]
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the message type detected for a message
    Classify {
        /// Message file, or - for stdin
        file: Option<PathBuf>,

        /// Use a built-in sample instead of a file
        #[arg(long)]
        sample: Option<String>,
    },

    /// Check the shape of a FHIR Bundle JSON file locally
    Check {
        /// Bundle file, or - for stdin
        bundle: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a message to FHIR with the remote service
    Convert {
        /// Message file, or - for stdin
        file: Option<PathBuf>,

        /// Use a built-in sample instead of a file
        #[arg(long)]
        sample: Option<String>,

        /// Send this source format instead of the detected one
        #[arg(long)]
        source_format: Option<MessageTypeTag>,

        /// Skip the local check of the returned bundle
        #[arg(long)]
        no_check: bool,

        /// Output the bundle and report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a FHIR Bundle with the remote service
    Validate {
        /// Bundle file, or - for stdin
        bundle: PathBuf,

        /// FHIR profile to validate against
        #[arg(long)]
        profile: Option<String>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the remote service is up
    Health,

    /// List supported message types and the FHIR resources they produce
    Formats,

    /// Print a built-in sample message
    Sample {
        /// Sample key, e.g. ADT or EDI_837
        key: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mediconnect=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        base_url: cli.base_url,
        api_key: cli.api_key,
        timeout_secs: cli.timeout_secs,
    };

    match cli.command {
        Commands::Classify { file, sample } => {
            let raw = load_message(file.as_deref(), sample.as_deref())?;
            println!("{}", classify(&raw));
        }

        Commands::Check { bundle, json } => {
            let report = mediconnect::check(&load_bundle(&bundle)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, &bundle.display().to_string());
            }
            if is_failure(&report) {
                anyhow::bail!("FHIR Bundle check failed");
            }
        }

        Commands::Convert {
            file,
            sample,
            source_format,
            no_check,
            json,
        } => {
            let raw = load_message(file.as_deref(), sample.as_deref())?;
            let input_label = match (&file, &sample) {
                (Some(path), _) => path.display().to_string(),
                (None, Some(key)) => format!("sample {key}"),
                (None, None) => "-".to_string(),
            };
            let client = ApiClient::new(ClientConfig::from_env(overrides)?)?;
            let source_format = source_format.unwrap_or_else(|| classify(&raw));
            let conversion = client
                .convert_as(&raw, source_format)
                .await
                .context("Conversion failed")?;
            let report = (!no_check).then(|| mediconnect::check(&conversion.bundle));

            if json {
                let output = serde_json::json!({
                    "sourceFormat": conversion.source_format,
                    "bundle": conversion.bundle,
                    "validation": report,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Source format: {}", conversion.source_format);
                println!("{}", serde_json::to_string_pretty(&conversion.bundle)?);
                if let Some(report) = &report {
                    println!();
                    print_report(report, &input_label);
                }
            }
        }

        Commands::Validate {
            bundle,
            profile,
            json,
        } => {
            let data = load_bundle(&bundle)?;
            let client = ApiClient::new(ClientConfig::from_env(overrides)?)?;
            let report = client
                .validate(&data, profile.as_deref())
                .await
                .context("Validation request failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report, &bundle.display().to_string());
            }
            if is_failure(&report) {
                anyhow::bail!("FHIR validation failed");
            }
        }

        Commands::Health => {
            let client = ApiClient::new(ClientConfig::from_env(overrides)?)?;
            let health = client.health().await.context("Health check failed")?;
            match health.version {
                Some(version) => println!("{} (version {})", health.status, version),
                None => println!("{}", health.status),
            }
        }

        Commands::Formats => {
            for tag in MessageTypeTag::ALL {
                let info = tag.info();
                println!("{:<8} {} [{}]", tag.as_str(), info.display_name, info.family);
                println!("         {}", info.description);
                if !info.fhir_resources.is_empty() {
                    println!("         FHIR: {}", info.fhir_resources.join(", "));
                }
                if SAMPLES.iter().any(|sample| sample.tag == tag) {
                    println!("         sample: mediconnect sample {}", tag);
                }
            }
        }

        Commands::Sample { key } => {
            let sample = find_sample(&key)
                .with_context(|| format!("unknown sample '{key}'"))?;
            println!("{}", sample.data);
        }
    }

    Ok(())
}
