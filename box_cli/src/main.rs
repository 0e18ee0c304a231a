//! # Cargo-Box CLI
//!
//! Terminal front end for `box_core`. It only collects inputs, calls the
//! library and prints or writes what comes back.
//!
//! ```text
//! box_cli solve --length 4200 --width 2100 --height 2100 --max-spacing 600 --skin-width 1200
//! box_cli export --out-dir out/
//! box_cli preview --length 5000
//! box_cli project new fleet.cbx --engineer "J. Doe" --job 26-001 --client Acme
//! box_cli project add fleet.cbx --label "Van 4.2m" --length 4200
//! box_cli project export fleet.cbx --out-dir out/
//! ```
//!
//! Set `RUST_LOG=box_core=debug` (or pass `--verbose`) to trace pipeline stages.

mod preview;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use box_core::file_io::{load_project, load_settings, save_project, write_artifact};
use box_core::{decompose, export_artifacts, BoxDesign, BoxError, BoxProject, BoxSpec, DesignSettings};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "box_cli")]
#[command(version)]
#[command(about = "Decompose a cargo box into posts, skins, a BOM and DXF cutting geometry")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Design settings JSON (limits, part catalog, drill pattern). Stored by
    /// `project new`; overrides the project's settings for other project commands.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log pipeline stages to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print post count, spacing and skin count
    Solve {
        #[command(flatten)]
        dims: DimArgs,

        /// Print the full decomposition as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the BOM CSV and the DXF drawing
    Export {
        #[command(flatten)]
        dims: DimArgs,

        #[arg(long, short = 'o', default_value = ".")]
        out_dir: PathBuf,
    },
    /// Draw the side panel in the terminal
    Preview {
        #[command(flatten)]
        dims: DimArgs,

        /// Drawing width in characters
        #[arg(long, default_value_t = 72)]
        columns: usize,
    },
    /// Manage .cbx project files
    #[command(subcommand)]
    Project(ProjectCommand),
}

#[derive(Subcommand)]
enum ProjectCommand {
    /// Create an empty project file
    New {
        path: PathBuf,
        #[arg(long, default_value = "")]
        engineer: String,
        #[arg(long, default_value = "")]
        job: String,
        #[arg(long, default_value = "")]
        client: String,
    },
    /// Add a labelled design to a project
    Add {
        path: PathBuf,
        #[arg(long)]
        label: String,
        #[command(flatten)]
        dims: DimArgs,
    },
    /// List designs and their headline numbers
    List { path: PathBuf },
    /// Export artifacts for every design into one subdirectory each
    Export {
        path: PathBuf,
        #[arg(long, short = 'o', default_value = ".")]
        out_dir: PathBuf,
    },
}

/// Box dimensions in millimetres.
#[derive(Args, Clone, Copy)]
struct DimArgs {
    /// Box length (mm)
    #[arg(long, short = 'l', default_value_t = 4200)]
    length: u32,
    /// Box width (mm)
    #[arg(long, short = 'w', default_value_t = 2100)]
    width: u32,
    /// Side wall height (mm)
    #[arg(long = "height", default_value_t = 2100)]
    height: u32,
    /// Maximum distance between posts (mm)
    #[arg(long, default_value_t = 600)]
    max_spacing: u32,
    /// Standard skin sheet width (mm)
    #[arg(long, default_value_t = 1200)]
    skin_width: u32,
}

impl From<DimArgs> for BoxSpec {
    fn from(d: DimArgs) -> Self {
        BoxSpec::new(d.length, d.width, d.height, d.max_spacing, d.skin_width)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "box_core=debug,box_cli=info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(box_err) = e.downcast_ref::<BoxError>() {
                if let Ok(json) = serde_json::to_string_pretty(box_err) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => DesignSettings::default(),
    };

    match cli.command {
        Commands::Solve { dims, json } => solve_cmd(dims.into(), &settings, json),
        Commands::Export { dims, out_dir } => export_cmd(dims.into(), &settings, &out_dir),
        Commands::Preview { dims, columns } => preview_cmd(dims.into(), &settings, columns),
        Commands::Project(cmd) => project_cmd(cmd, cli.settings.is_some().then_some(settings)),
    }
}

fn solve_cmd(spec: BoxSpec, settings: &DesignSettings, json: bool) -> Result<()> {
    let result = decompose(&spec, settings)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let summary = result.summary();
    println!("{}", summary);
    println!();
    println!("Bill of materials:");
    for line in &result.bom.lines {
        let dims = match (line.length_mm, line.width_mm, line.height_mm) {
            (Some(l), _, _) => format!("L {} mm", l),
            (None, Some(w), Some(h)) => format!("{} x {} mm", w, h),
            _ => String::new(),
        };
        println!(
            "  {:<12} {:<28} {:<16} x{}",
            line.part, line.specification, dims, line.quantity
        );
    }
    Ok(())
}

fn export_cmd(spec: BoxSpec, settings: &DesignSettings, out_dir: &Path) -> Result<()> {
    let artifacts = export_artifacts(&decompose(&spec, settings)?)?;
    for (name, bytes) in artifacts.files() {
        let path = write_artifact(out_dir, name, bytes)?;
        info!(path = %path.display(), "artifact written");
        println!("Wrote {}", path.display());
    }
    println!();
    println!("{}", artifacts.summary);
    Ok(())
}

fn preview_cmd(spec: BoxSpec, settings: &DesignSettings, columns: usize) -> Result<()> {
    let result = decompose(&spec, settings)?;
    let summary = result.summary();

    println!("Side wall layout ({} x {} mm)", spec.length_mm, spec.height_mm);
    println!();
    print!("{}", preview::render_panel(&result.panel, columns));
    println!();
    println!("{}", summary);
    println!();
    println!("Post positions:");
    println!("{}", preview::post_table(&summary));
    println!();
    println!("{}", preview::drill_schedule(&result.panel));
    Ok(())
}

fn project_cmd(cmd: ProjectCommand, settings_override: Option<DesignSettings>) -> Result<()> {
    match cmd {
        ProjectCommand::New {
            path,
            engineer,
            job,
            client,
        } => {
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            let mut project = BoxProject::new(engineer, job, client);
            if let Some(settings) = settings_override {
                project.settings = settings;
            }
            save_project(&project, &path)?;
            println!("Created {}", path.display());
        }
        ProjectCommand::Add { path, label, dims } => {
            let mut project = load_project(&path)?;
            let spec: BoxSpec = dims.into();
            // reject bad dimensions up front instead of storing them
            let limits = settings_override
                .as_ref()
                .map_or(&project.settings.limits, |s| &s.limits);
            spec.validate(limits)?;
            let id = project.add_design(BoxDesign::new(label, spec));
            save_project(&project, &path)?;
            println!("Added design {}", id);
        }
        ProjectCommand::List { path } => {
            let project = open_project(&path, settings_override)?;
            println!(
                "Job {} for {} ({} designs)",
                project.meta.job_id,
                project.meta.client,
                project.design_count()
            );
            for (id, result) in project.decompose_all() {
                let label = project
                    .get_design(&id)
                    .map(|d| d.label.as_str())
                    .unwrap_or_default();
                match result {
                    Ok(d) => {
                        let s = d.summary();
                        println!(
                            "  {}  {:<20} posts {:>2}  spacing {:>9}  skins {:>2}",
                            id,
                            label,
                            s.post_count,
                            s.spacing_label(),
                            s.skin_panel_count
                        );
                    }
                    Err(e) => println!("  {}  {:<20} {}", id, label, e),
                }
            }
        }
        ProjectCommand::Export { path, out_dir } => {
            let project = open_project(&path, settings_override)?;
            let mut failures = 0;
            for (id, result) in project.decompose_all() {
                let label = project
                    .get_design(&id)
                    .map(|d| d.label.clone())
                    .unwrap_or_else(|| id.to_string());
                let artifacts = match result.and_then(|d| export_artifacts(&d)) {
                    Ok(a) => a,
                    Err(e) => {
                        eprintln!("Skipping '{}': {}", label, e);
                        failures += 1;
                        continue;
                    }
                };
                let dir = out_dir.join(design_dir_name(&label, &id));
                for (name, bytes) in artifacts.files() {
                    let written = write_artifact(&dir, name, bytes)?;
                    println!("Wrote {}", written.display());
                }
            }
            if failures > 0 {
                bail!("{} design(s) could not be exported", failures);
            }
        }
    }
    Ok(())
}

/// Load a project; `--settings`, when given, replaces the stored settings
/// for this run only.
fn open_project(path: &Path, settings_override: Option<DesignSettings>) -> Result<BoxProject> {
    let mut project = load_project(path)?;
    if let Some(settings) = settings_override {
        project.settings = settings;
    }
    Ok(project)
}

/// Filesystem-safe directory name for a design label.
fn dir_name(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();
    let cleaned = cleaned.trim_matches(|c| c == '_' || c == '.').to_string();
    if cleaned.is_empty() {
        "design".to_string()
    } else {
        cleaned
    }
}

/// Export directory for one design. Labels need not be unique, so the
/// first block of the design UUID is appended.
fn design_dir_name(label: &str, id: &Uuid) -> String {
    let id = id.to_string();
    format!("{}-{}", dir_name(label), &id[..8])
}
