use std::path::Path;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use bayesfig::config::FigureConfig;
use bayesfig::figures::{
    figure_data_parameter_space, percent_label, plot_m_bayes_factor, plot_posterior_m,
    DataSpaceInputs,
};
use bayesfig::input::InputDocument;
use bayesfig::plotting::Figure;
use bayesfig::prior::PriorPair;

#[derive(Parser)]
#[command(name = "bayesfig")]
#[command(
    about = "Figures for Bayesian straight-line fitting",
    long_about = "Renders data-space/parameter-space panels, marginal slope posteriors with credible regions, and Savage-Dickey Bayes factor plots as SVG."
)]
struct Cli {
    /// Log verbosity level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,
    /// Append to log file instead of truncating
    #[arg(long, global = true)]
    append_log: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(clap::Args)]
struct FigureArgs {
    /// Input JSON with observations, truth, priors and/or posterior grid.
    #[arg(long, required = true)]
    input: String,
    /// Output SVG path. Missing parent directories are created.
    #[arg(long, required = true)]
    out: String,
    /// Figure configuration JSON (sizes, grid, credible mass, null value, seed).
    #[arg(long)]
    config: Option<String>,
    /// Force overwrite of an existing output file.
    #[arg(short, long)]
    force: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Observations and fitted lines next to the prior or posterior over (m, c)
    DataSpace(FigureArgs),
    /// Marginal posterior of the slope with its credible region
    Marginal(FigureArgs),
    /// Prior and posterior slope marginals with the Savage-Dickey Bayes factor
    BayesFactor(FigureArgs),
}

// Helper to check the output path and create its directory
fn check_output_path(out: &str, force: bool) -> Result<()> {
    let path = Path::new(out);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        info!("Creating output directory: {:?}", parent);
        std::fs::create_dir_all(parent)?;
    }

    if !force && path.exists() {
        bail!("Output file {} already exists. Use --force to overwrite.", out);
    }
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<FigureConfig> {
    let config = match path {
        Some(p) => FigureConfig::load(p)
            .map_err(|e| anyhow::anyhow!("Error loading figure config {}: {}", p, e))?,
        None => FigureConfig::default(),
    };
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid figure config: {}", e))?;
    Ok(config)
}

fn save(figure: &mut Figure, out: &str) -> Result<()> {
    figure
        .save(out)
        .map_err(|e| anyhow::anyhow!("Error saving figure to {}: {}", out, e))?;
    info!("Saved figure: {}", out);
    Ok(())
}

fn run_data_space(args: &FigureArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let doc = InputDocument::load(&args.input)?;
    let posterior = doc.posterior_grid()?;
    let priors = doc.build_priors()?;

    let mut inputs = DataSpaceInputs::new(&doc.x, &doc.y);
    if let Some(truth) = doc.truth {
        inputs = inputs.with_truth(truth);
    }
    if let Some((ref slope, ref intercept)) = priors {
        inputs = inputs.with_priors(PriorPair::new(slope.as_ref(), intercept.as_ref()));
    }
    if let Some(ref grid) = posterior {
        inputs = inputs.with_posterior(grid);
    }

    let mut rng = config.rng();
    let mut out = figure_data_parameter_space(&inputs, &config, &mut rng)
        .map_err(|e| anyhow::anyhow!("Error building data-space figure: {}", e))?;
    if let Some(best) = out.best_estimate {
        info!("Best estimate: m = {:.4}, c = {:.4}", best.slope, best.intercept);
    }
    save(&mut out.figure, &args.out)
}

fn run_marginal(args: &FigureArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let doc = InputDocument::load(&args.input)?;
    let posterior = doc.require_posterior()?;

    let mut out = plot_posterior_m(&posterior, &config)
        .map_err(|e| anyhow::anyhow!("Error building marginal figure: {}", e))?;
    info!(
        "Credible interval ({}): [{:.4}, {:.4}]",
        percent_label(out.interval.mass),
        out.interval.low,
        out.interval.high
    );
    save(&mut out.figure, &args.out)
}

fn run_bayes_factor(args: &FigureArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let doc = InputDocument::load(&args.input)?;
    let posterior = doc.require_posterior()?;
    let slope_prior = doc.slope_prior()?;

    let mut out = plot_m_bayes_factor(&posterior, slope_prior.as_ref(), &config)
        .map_err(|e| anyhow::anyhow!("Error building Bayes factor figure: {}", e))?;
    info!(
        "BF10 = {}, BF01 = {}",
        out.bayes_factor.bf10, out.bayes_factor.bf01
    );
    save(&mut out.figure, &args.out)
}

fn main() {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = if cli.append_log {
            std::fs::File::options().create(true).append(true).open(path)
        } else {
            std::fs::File::create(path)
        }
        .unwrap_or_else(|e| panic!("Could not open log file '{}': {}", path, e));
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();

    let (args, run): (&FigureArgs, fn(&FigureArgs) -> Result<()>) = match &cli.command {
        Commands::DataSpace(args) => (args, run_data_space),
        Commands::Marginal(args) => (args, run_marginal),
        Commands::BayesFactor(args) => (args, run_bayes_factor),
    };

    if let Err(e) = check_output_path(&args.out, args.force).and_then(|_| run(args)) {
        error!("{}", e);
        std::process::exit(1);
    }
}
