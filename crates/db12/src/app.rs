//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::Result;

use db12_cli::output::{format_aggregate, write_json, JsonReport};
use db12_core::{Benchmark, Corrector, Db12Benchmark, RunConfig};
use db12_orchestration::{aggregate, run_parallel};

use crate::config::{AppConfig, CommonArgs, Mode};
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        db12_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    match &config.mode {
        Some(Mode::Single { common }) => run_single(common),
        Some(Mode::Wholenode {
            common,
            extra_iteration,
        }) => run_copies(
            "wholenode",
            db12_probe::wholenode_instances(),
            common,
            *extra_iteration,
        ),
        Some(Mode::Jobslot { common }) => {
            run_copies("jobslot", db12_probe::jobslot_instances(), common, false)
        }
        Some(Mode::Multiple {
            copies,
            common,
            extra_iteration,
        }) => run_copies("multiple", *copies, common, *extra_iteration),
        Some(Mode::Version) => {
            println!("{}", version::full_version());
            Ok(())
        }
        None => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

fn run_single(common: &CommonArgs) -> Result<()> {
    let run_config = run_config(common, false);
    let benchmark = build_benchmark(common);
    let result = benchmark.run(&run_config, None)?;

    if let Some(path) = &common.json {
        write_json(path, &result.norm)?;
    } else {
        println!("{}", result.norm);
    }
    Ok(())
}

fn run_copies(mode: &str, copies: usize, common: &CommonArgs, extra_iteration: bool) -> Result<()> {
    tracing::info!(mode, copies, "starting parallel benchmark");

    let run_config = run_config(common, extra_iteration);
    let benchmark: Arc<dyn Benchmark> = Arc::new(build_benchmark(common));

    let results = run_parallel(&benchmark, copies, &run_config)?;
    let summary = aggregate(&results)?;

    if let Some(path) = &common.json {
        let report = JsonReport {
            result: &summary,
            version: version::version(),
            mode,
        };
        write_json(path, &report)?;
    } else {
        println!("{}", format_aggregate(&summary));
    }
    Ok(())
}

fn run_config(common: &CommonArgs, extra_iteration: bool) -> RunConfig {
    RunConfig {
        iterations_num: common.iterations,
        extra_iteration,
        apply_correction: common.correction,
    }
    .normalize()
}

fn build_benchmark(common: &CommonArgs) -> Db12Benchmark {
    let benchmark = Db12Benchmark::new();
    if common.correction {
        benchmark.with_corrector(Corrector::new(version::version(), db12_probe::cpu_brand()))
    } else {
        benchmark
    }
}
