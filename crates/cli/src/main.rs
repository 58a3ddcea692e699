use anyhow::Context;
use clap::{Parser, Subcommand};
use sgid_core::constants::DEFAULT_BITSPACE_BITS;
use sgid_core::{resolve_names_file, CoreConfig, FieldSet, GidService};
use sgid_types::Gid;
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sgid")]
#[command(about = "SGID study anonymization CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mint a GID from key=value identifying fields
    Gid {
        /// Identifying fields as key=value pairs (e.g. fname=Derek)
        fields: Vec<String>,
        /// Field that must be present (repeatable)
        #[arg(long = "require")]
        require: Vec<String>,
    },
    /// Resolve the placeholder pseudonym for a GID
    Pname {
        /// A previously minted GID
        gid: String,
    },
    /// Extract the year of birth from a date of birth
    Yob {
        /// Date of birth formatted MMDDYYYY
        dob: String,
    },
}

/// Parse key=value arguments into a FieldSet.
///
/// A combined `pname` field (DICOM-style `Last^First[^...]`) is split into
/// `lname` and `fname` before the core sees it; the core only ever receives
/// separated fields.
fn parse_field_args(args: &[String]) -> anyhow::Result<FieldSet> {
    let mut fields = FieldSet::new();
    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .with_context(|| format!("field '{arg}' is not a key=value pair"))?;
        fields.insert(key, value);
    }

    if let Some(pname) = fields.remove("pname") {
        let mut components = pname.split('^');
        let lname = components.next().unwrap_or_default();
        let fname = components
            .next()
            .with_context(|| format!("pname '{pname}' must be formatted Last^First[^...]"))?;
        fields.insert("lname", lname);
        fields.insert("fname", fname);
    }

    Ok(fields)
}

/// Deployment configuration from the environment, read once at startup.
///
/// # Environment Variables
/// - `SGID_SALT`: deployment-wide salt (default: empty)
/// - `SGID_BITSPACE`: digest truncation in bits (default: 64)
/// - `SGID_NAMES_FILE`: reference dataset path (default: resolved search)
fn config_from_env() -> anyhow::Result<CoreConfig> {
    let salt = std::env::var("SGID_SALT").unwrap_or_default();
    let bitspace_bits = match std::env::var("SGID_BITSPACE") {
        Ok(raw) => raw
            .parse::<u32>()
            .context("SGID_BITSPACE must be an integer number of bits")?,
        Err(_) => DEFAULT_BITSPACE_BITS,
    };
    let names_file = resolve_names_file(std::env::var("SGID_NAMES_FILE").ok().map(PathBuf::from))?;

    Ok(CoreConfig::new(salt, bitspace_bits, names_file)?)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("sgid=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let cfg = Arc::new(config_from_env()?);
    let service = GidService::new(cfg)?;

    match cli.command {
        Commands::Gid { fields, require } => {
            let fields = parse_field_args(&fields)?;
            let required: Option<BTreeSet<String>> = if require.is_empty() {
                None
            } else {
                Some(require.into_iter().collect())
            };
            let gid = service.mint_gid(&fields, required.as_ref())?;
            println!("{gid}");
        }
        Commands::Pname { gid } => {
            let gid = Gid::new(&gid)?;
            println!("{}", service.pseudonym(&gid)?);
        }
        Commands::Yob { dob } => {
            let mut fields = FieldSet::new();
            fields.insert("dob", dob);
            println!("{}", service.birth_year(&fields)?);
        }
    }

    Ok(())
}
