//! CLI entrypoint for ha-provision
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use provision_application::{
    ApplyProvisionUseCase, ArtifactWriter, CommandRunner, NoPrompt, PromptPort,
    RenderArtifactsUseCase, ResolveVariablesUseCase,
};
use provision_domain::{ProvisionConfig, ProvisionPlan, ResolvedValues, StackLayout, known_keys};
use provision_infrastructure::{
    AtomicFileWriter, ConfigLoader, DryRunCommandRunner, DryRunWriter, FileConfig,
    ProcessEnvironment, SystemCommandRunner,
};
use provision_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter, SimpleProgress, StdoutPrinter,
    TerminalPrompt,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(&cli)?;

    info!("Starting ha-provision");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        let mut config = load_config(&cli)?;
        config.values = config.values.redacted();
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let config = load_config(&cli)?;

    let output = OutputConfig {
        format: config.output.format.unwrap_or_default(),
        color: config.output.color,
        show_progress: true,
    }
    .with_format(cli.output.map(Into::into))
    .quiet(cli.quiet);
    output.apply_color();

    match cli.subcommand() {
        Command::Keys => {
            let text = if output.is_json() {
                ConsoleFormatter::format_json(&known_keys())
            } else {
                ConsoleFormatter::format_known_keys()
            };
            println!("{}", text);
            Ok(())
        }
        Command::Render { stdout } => run_render(&cli, &config, &output, stdout),
        Command::Apply {
            dry_run,
            skip_install,
        } => run_apply(&cli, &config, &output, dry_run, skip_install),
    }
}

/// Initialize logging based on verbosity level; `--log-file` moves it off stderr.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = &cli.log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must name a file: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    debug!(values = config.values.len(), "Configuration loaded");
    Ok(config)
}

fn layout(cli: &Cli, config: &FileConfig) -> Result<StackLayout> {
    config
        .paths
        .layout(cli.stack_dir.as_deref())
        .context("Failed to resolve artifact paths")
}

/// Resolve every key, then build the typed record the renderers consume.
fn resolve(cli: &Cli, config: &FileConfig) -> Result<(ResolvedValues, ProvisionConfig)> {
    let prompt: Arc<dyn PromptPort> = if cli.non_interactive {
        Arc::new(NoPrompt)
    } else {
        Arc::new(TerminalPrompt::stdio())
    };

    let values = ResolveVariablesUseCase::new(prompt)
        .with_source(Arc::new(ProcessEnvironment))
        .with_source(Arc::new(config.values.to_source()))
        .execute()?;
    let provision = ProvisionConfig::from_values(&values)?;

    // Empty entries are rendered as-is
    if provision.network.peer_ips.has_empty_entries() {
        warn!("PEER_IPS has an empty entry");
    }
    if provision.sync.peer_device_ids.has_empty_entries() {
        warn!("SYNCTHING_PEER_DEVICE_IDS has an empty entry");
    }
    Ok((values, provision))
}

fn run_render(cli: &Cli, config: &FileConfig, output: &OutputConfig, stdout: bool) -> Result<()> {
    let layout = layout(cli, config)?;
    let (values, provision) = resolve(cli, config)?;

    if stdout {
        RenderArtifactsUseCase::new(Arc::new(StdoutPrinter)).execute(&provision, &layout)?;
        return Ok(());
    }

    let result = RenderArtifactsUseCase::new(Arc::new(AtomicFileWriter::new()))
        .execute(&provision, &layout)?;

    if output.is_json() {
        println!("{}", ConsoleFormatter::format_json_report(&values, &result));
    } else {
        println!("{}", ConsoleFormatter::format_resolved(&values));
        println!("{}", ConsoleFormatter::format_render(&result));
    }
    Ok(())
}

/// Fail before touching the host when the first programs of the plan are missing.
fn preflight(plan: &ProvisionPlan) -> Result<()> {
    // The start programs come with the packages when there is an install step
    let first = if plan.install.is_empty() {
        &plan.start
    } else {
        &plan.install
    };
    for command in first {
        if !SystemCommandRunner::is_available(&command.program) {
            bail!("'{}' not found on PATH", command.program);
        }
    }
    Ok(())
}

fn run_apply(
    cli: &Cli,
    config: &FileConfig,
    output: &OutputConfig,
    dry_run: bool,
    skip_install: bool,
) -> Result<()> {
    let layout = layout(cli, config)?;

    let mut params = config.provision.to_params();
    if skip_install {
        params = params.with_packages(Vec::new());
    }
    let plan = ProvisionPlan::build(&params.plan_options(&layout));
    debug!(commands = plan.len(), dry_run, "Provision plan built");

    if !dry_run {
        preflight(&plan)?;
    }

    let (values, provision) = resolve(cli, config)?;

    // === Dependency Injection ===
    let (runner, writer): (Arc<dyn CommandRunner>, Arc<dyn ArtifactWriter>) = if dry_run {
        (Arc::new(DryRunCommandRunner), Arc::new(DryRunWriter))
    } else {
        (
            Arc::new(SystemCommandRunner::new()),
            Arc::new(AtomicFileWriter::new()),
        )
    };
    let use_case = ApplyProvisionUseCase::new(runner, writer);

    // Child processes write to the terminal, so real runs get plain lines
    let result = if !output.progress_enabled() {
        use_case.execute(&provision, &layout, &plan)?
    } else if dry_run {
        let progress = ProgressReporter::new();
        let result = use_case.execute_with_progress(&provision, &layout, &plan, &progress);
        progress.finish();
        result?
    } else {
        use_case.execute_with_progress(&provision, &layout, &plan, &SimpleProgress)?
    };

    if output.is_json() {
        println!("{}", ConsoleFormatter::format_json_report(&values, &result));
    } else {
        println!("{}", ConsoleFormatter::format_apply(&result, dry_run));
    }
    Ok(())
}
