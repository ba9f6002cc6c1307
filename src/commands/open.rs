use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use autolink::{
    launcher::SystemLauncher,
    platform::{SystemRegistry, SystemWindows},
    snapshot, target, Config, Instance,
};

#[derive(Args)]
pub struct OpenArgs {
    /// Solution, project or directory to open (defaults to open.target)
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Wait for a newly launched IDE to exit and return its exit code
    #[arg(long)]
    pub wait: bool,

    /// List the Rust sources of this companion directory first
    #[arg(long, value_name = "DIR")]
    pub companion: Option<PathBuf>,

    /// Print the resolved target and exit without opening anything
    #[arg(long)]
    pub print_target: bool,
}

pub fn cmd_open(config: &Config, args: OpenArgs) -> Result<i32> {
    let requested = args
        .target
        .or_else(|| config.open.target.clone())
        .context("No target given and open.target is not set")?;
    let target = target::resolve(&requested, config.open.prefer_solution)?;

    if args.print_target {
        println!("{}", target.display());
        return Ok(0);
    }

    if let Some(dir) = args.companion.as_ref().or(config.companion.dir.as_ref()) {
        snapshot::log(dir);
    }

    let settings = config.locate_settings(args.wait)?;
    let registry = SystemRegistry::new();
    let instance = Instance::reuse_or_launch(
        &target,
        &settings,
        &registry,
        &SystemWindows::default(),
        &SystemLauncher,
    )?;
    Ok(instance.exit_code())
}
