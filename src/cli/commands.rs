//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, RenderArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
    debug!("project_dir: {}", project_dir.display());

    match &cli.command {
        None => cmd_render(&project_dir, &RenderArgs::default()),
        Some(Commands::Render(args)) => cmd_render(&project_dir, args),
        Some(Commands::Outline { input }) => cmd_outline(&project_dir, input.as_deref()),
        Some(Commands::Check { input }) => cmd_check(&project_dir, input.as_deref()),
        Some(Commands::Config { command }) => cmd_config(&project_dir, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "acornle", &mut io::stdout());
            Ok(())
        }
    }
}

fn resolve_project_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) if !dir.is_dir() => Err(CliError::InvalidArgs(format!(
            "project directory does not exist: {}",
            dir.display()
        ))),
        Some(dir) => Ok(dir.to_path_buf()),
        None => std::env::current_dir()
            .map_err(|e| CliError::from(InfraError::io("determine current directory", e))),
    }
}

fn input_path(settings: &Settings, project_dir: &Path, input: Option<&Path>) -> PathBuf {
    match input {
        Some(path) => path.to_path_buf(),
        None => settings.input_path(project_dir),
    }
}

#[instrument(skip(args))]
fn cmd_render(project_dir: &Path, args: &RenderArgs) -> CliResult<()> {
    let mut settings = Settings::load(Some(project_dir))?;
    if let Some(anchor) = &args.top_anchor {
        settings.render.top_anchor = anchor.clone();
    }
    if args.viewer.is_some() {
        settings.viewer = args.viewer.clone();
    }
    let open = settings.open_after_render && !args.no_open;

    let input = input_path(&settings, project_dir, args.input.as_deref());
    let output = match &args.output {
        Some(path) => path.clone(),
        None => settings.output_path(project_dir),
    };
    debug!(
        "render: input={}, output={}, open={}",
        input.display(),
        output.display(),
        open
    );

    let container = ServiceContainer::new(settings);
    let report = container.clue_tree.publish(&input, &output, open)?;

    output::success(&format!(
        "Rendered {} sections ({} bytes) to {}",
        report.sections,
        report.bytes,
        report.output.display()
    ));
    Ok(())
}

#[instrument]
fn cmd_outline(project_dir: &Path, input: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load(Some(project_dir))?;
    let input = input_path(&settings, project_dir, input);

    let container = ServiceContainer::new(settings);
    let root = container.clue_tree.load(&input)?;
    output::info(&container.clue_tree.outline(&root));
    Ok(())
}

#[instrument]
fn cmd_check(project_dir: &Path, input: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load(Some(project_dir))?;
    let input = input_path(&settings, project_dir, input);

    let container = ServiceContainer::new(settings);
    let root = container.clue_tree.load(&input)?;
    let report = container.clue_tree.check(&root);

    output::header(&input.display());
    output::detail(&format!("sections: {}", report.branches));
    output::detail(&format!("leaves:   {}", report.leaves));
    output::detail(&format!("depth:    {}", report.depth));

    if report.is_clean() {
        output::success("all anchor ids are unique");
        return Ok(());
    }
    for id in &report.collisions {
        output::warning(&format!("anchor id used by more than one section: {id}"));
    }
    Err(CliError::Data(format!(
        "{} colliding anchor id(s)",
        report.collisions.len()
    )))
}

#[instrument]
fn cmd_config(project_dir: &Path, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(Some(project_dir))?;
            output::info(&settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Init { global, force } => {
            let path = if *global {
                global_config_path().ok_or_else(|| {
                    CliError::Usage("cannot determine global config directory".into())
                })?
            } else {
                local_config_path(project_dir)
            };
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    InfraError::io(format!("create {}", parent.display()), e)
                })?;
            }
            std::fs::write(&path, Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::action("Created", &path.display());
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&format!(
                    "global: {} ({})",
                    path.display(),
                    existence(&path)
                )),
                None => output::info("global: (unavailable)"),
            }
            let local = local_config_path(project_dir);
            output::info(&format!("local:  {} ({})", local.display(), existence(&local)));
            Ok(())
        }
    }
}

fn existence(path: &Path) -> &'static str {
    if path.exists() {
        "exists"
    } else {
        "missing"
    }
}
