use std::{fs, time::Duration};

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use tcs_catalog::{
    catalog::{
        assembler::{CatalogAssembler, CatalogOutcome, UnresolvedPolicy},
        input_table::InputTable,
        writer::{catalog_filename, serialize, write_catalog},
    },
    constants::{
        DEFAULT_EPOCH, DEFAULT_EQUINOX, DEFAULT_PROBE_COORD, DEFAULT_ROTANG, DEFAULT_ROT_MODE,
    },
    env_state::{ResolverConfig, TcsCatEnv, SIMBAD_SCRIPT_URL},
    setup::SetupInput,
    simbad::SimbadResolver,
    tcs_errors::TcsCatError,
};

#[derive(Clone, Copy, ValueEnum)]
enum OnUnresolved {
    /// Report the name and leave it out of the catalog
    Isolate,
    /// Stop without writing a catalog
    Abort,
}

impl From<OnUnresolved> for UnresolvedPolicy {
    fn from(value: OnUnresolved) -> Self {
        match value {
            OnUnresolved::Isolate => UnresolvedPolicy::Isolate,
            OnUnresolved::Abort => UnresolvedPolicy::Abort,
        }
    }
}

#[derive(Parser)]
#[command(name = "tcscat")]
#[command(about = "Build a TCS observing catalog from SIMBAD-resolvable target names")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CommonArgs {
    /// Catalog file name, ".cat" is appended
    #[arg(short, long, required_unless_present = "stdout")]
    output: Option<String>,

    /// Directory the catalog is written to
    #[arg(long, default_value = ".")]
    dir: Utf8PathBuf,

    /// Print the catalog instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// SIMBAD script interface endpoint
    #[arg(long, default_value = SIMBAD_SCRIPT_URL)]
    simbad_url: String,

    /// Timeout of one SIMBAD request in seconds (default: none)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl CommonArgs {
    /// Validated catalog file name, `None` when printing to stdout.
    fn filename(&self) -> Result<Option<String>, TcsCatError> {
        if self.stdout {
            return Ok(None);
        }
        catalog_filename(self.output.as_deref().unwrap_or_default()).map(Some)
    }

    fn resolver(&self) -> SimbadResolver {
        SimbadResolver::new(TcsCatEnv::new(ResolverConfig {
            base_url: self.simbad_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a comma-separated list of names and broadcast the setup fields
    Names {
        /// Names separated by commas, e.g. "alf Sco, HD 214810A, HD 218434"
        #[arg(long, required_unless_present = "names_file", conflicts_with = "names_file")]
        names: Option<String>,
        /// Text file of names separated by commas
        #[arg(long)]
        names_file: Option<Utf8PathBuf>,
        #[command(flatten)]
        setup: SetupArgs,
        /// What to do with names SIMBAD cannot find
        #[arg(long, value_enum, default_value = "isolate")]
        on_unresolved: OnUnresolved,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Build the catalog from a csv table with a Name column
    Table {
        /// The csv table; with an RA column it is copied, otherwise positions are resolved
        csv: Utf8PathBuf,
        /// What to do with names SIMBAD cannot find
        #[arg(long, value_enum, default_value = "abort")]
        on_unresolved: OnUnresolved,
        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Each field takes one value for all targets or a list with one value per target.
#[derive(Args)]
struct SetupArgs {
    /// RA/Dec equinox
    #[arg(long, default_value = DEFAULT_EQUINOX)]
    equinox: String,
    /// Rotator angle
    #[arg(long, default_value = DEFAULT_ROTANG, allow_hyphen_values = true)]
    rotang: String,
    /// Rotator mode
    #[arg(long, default_value = DEFAULT_ROT_MODE)]
    rot_mode: String,
    /// RA of guide probe 1
    #[arg(long, default_value = DEFAULT_PROBE_COORD)]
    ra_probe1: String,
    /// Dec of guide probe 1
    #[arg(long, default_value = DEFAULT_PROBE_COORD, allow_hyphen_values = true)]
    dec_probe1: String,
    /// RA/Dec equinox of guide probe 1
    #[arg(long, default_value = DEFAULT_EQUINOX)]
    equinox_probe1: String,
    /// RA of guide probe 2
    #[arg(long, default_value = DEFAULT_PROBE_COORD)]
    ra_probe2: String,
    /// Dec of guide probe 2
    #[arg(long, default_value = DEFAULT_PROBE_COORD, allow_hyphen_values = true)]
    dec_probe2: String,
    /// RA/Dec equinox of guide probe 2
    #[arg(long, default_value = DEFAULT_EQUINOX)]
    equinox_probe2: String,
    /// Epoch
    #[arg(long, default_value = DEFAULT_EPOCH)]
    epoch: String,
}

impl From<SetupArgs> for SetupInput {
    fn from(args: SetupArgs) -> Self {
        SetupInput {
            equinox: args.equinox,
            rotang: args.rotang,
            rot_mode: args.rot_mode,
            ra_probe1: args.ra_probe1,
            dec_probe1: args.dec_probe1,
            equinox_probe1: args.equinox_probe1,
            ra_probe2: args.ra_probe2,
            dec_probe2: args.dec_probe2,
            equinox_probe2: args.equinox_probe2,
            epoch: args.epoch,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Commands::Names {
            names,
            names_file,
            setup,
            on_unresolved,
            common,
        } => {
            // no resolution before the catalog has a name
            let filename = common.filename()?;
            let names = match (names, names_file) {
                (Some(names), _) => names,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("Unable to read the name list {path}"))?,
                (None, None) => String::new(),
            };
            let resolver = common.resolver();
            let outcome = CatalogAssembler::new(&resolver).from_names(
                &names,
                &setup.into(),
                on_unresolved.into(),
            )?;
            deliver(&outcome, &common, filename)
        }
        Commands::Table {
            csv,
            on_unresolved,
            common,
        } => {
            let filename = common.filename()?;
            let table = InputTable::from_path(&csv)
                .with_context(|| format!("Unable to read the uploaded table {csv}"))?;
            let resolver = common.resolver();
            let outcome =
                CatalogAssembler::new(&resolver).from_table(&table, Some(on_unresolved.into()))?;
            deliver(&outcome, &common, filename)
        }
    }
}

/// Report unresolved names, then print or write the catalog.
fn deliver(
    outcome: &CatalogOutcome,
    common: &CommonArgs,
    filename: Option<String>,
) -> anyhow::Result<()> {
    for unresolved in &outcome.unresolved {
        eprintln!("Could not find {}", unresolved.name);
    }

    match filename {
        None => print!("{}", serialize(&outcome.catalog)?),
        Some(filename) => {
            let path = write_catalog(&outcome.catalog, &common.dir, &filename)?;
            info!("Catalog created: {path}");
        }
    }
    Ok(())
}
