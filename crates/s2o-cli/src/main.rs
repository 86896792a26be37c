use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use s2o_core::config::{self, CONFIG_FILE_NAME, DocumentFormat, S2oConfig};
use s2o_core::parse::spec::SwaggerSpec;
use s2o_core::{assemble, emit, parse};

#[derive(Parser)]
#[command(name = "s2o", about = "Swagger 2.0 to OpenAPI 3.0.3 converter", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Swagger 2.0 document into an OpenAPI 3.0.3 document
    Convert {
        /// Path to the Swagger 2.0 document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path to write the OpenAPI 3.0.3 document to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults to the output file extension)
        #[arg(long)]
        format: Option<FormatArg>,
    },

    /// Check that a Swagger 2.0 document converts cleanly
    Validate {
        /// Path to the Swagger 2.0 document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Initialize a new s2o configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

impl From<FormatArg> for DocumentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => DocumentFormat::Yaml,
            FormatArg::Json => DocumentFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
        } => cmd_convert(input, output, format),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "s2o", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<S2oConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    let cfg = config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))?;
    if cfg.is_some() {
        log::debug!("loaded {}", config_path.display());
    }
    Ok(cfg)
}

fn load_source(path: &Path) -> Result<SwaggerSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let source = parse::from_str(&content, DocumentFormat::from_path(path))?;
    Ok(source)
}

fn cmd_convert(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<FormatArg>,
) -> Result<()> {
    let mut cfg = try_load_config()?.unwrap_or_default();
    if let Some(output) = &output {
        // An explicit output path brings its own extension-derived format.
        cfg.output = output.display().to_string();
        cfg.format = None;
    }
    if let Some(format) = format {
        cfg.format = Some(format.into());
    }

    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output = PathBuf::from(&cfg.output);

    let source = load_source(&input)?;
    let document = assemble(&source)?;
    let text = emit::to_string(&document, cfg.output_format())?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&output, text).with_context(|| format!("failed to write {}", output.display()))?;

    eprintln!(
        "Converted {} → {} ({} paths, {} schemas)",
        input.display(),
        output.display(),
        document.paths.len(),
        document.components.schemas.len()
    );
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    let source = load_source(input)?;

    eprintln!(
        "Valid Swagger {} document: {}",
        source.swagger.as_deref().unwrap_or("2.x"),
        input.display()
    );

    let document = assemble(&source)?;
    eprintln!("  Paths: {}", document.paths.len());
    eprintln!("  Operations: {}", document.operation_count());
    eprintln!("  Schemas: {}", document.components.schemas.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
