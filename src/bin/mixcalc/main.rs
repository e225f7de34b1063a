// mixcalc — Marketing Mix & ROAS/POAS runner
//
// Usage:
//   mixcalc mix                                  # Default five-channel mix
//   mixcalc --config scenario.toml mix           # Channels from a scenario file
//   mixcalc roas --margin 35 --ad-spend 10000 --target 2.0
//   mixcalc poas --sales 100 --price 200 --series poas.jsonl
//   mixcalc break-even --json out/break-even.json

mod cli;
mod report;
mod series;

use anyhow::{Context, Result};
use clap::Parser;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

use cli::{Cli, Command};
use report::*;
use roas_engine::config::ScenarioFile;
use roas_engine::digest::{summarize_mix, summarize_poas, summarize_roas, summarize_series};
use roas_engine::{break_even_curve, compute_mix, poas_curve, poas_metrics, profit_curve, roas_metrics};

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn,roas_engine=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_scenario(cli: &Cli) -> Result<ScenarioFile> {
    let file = match &cli.config {
        Some(path) => ScenarioFile::load(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => ScenarioFile::default(),
    };
    Ok(file)
}

fn run(cli: &Cli, scenario: &ScenarioFile) -> (RunOutput, roas_engine::digest::ReportSummary) {
    match &cli.command {
        Command::Mix => {
            let channels = if scenario.channels.is_empty() {
                ScenarioFile::default_mix()
            } else {
                scenario.channels.clone()
            };
            let report = compute_mix(&channels);
            print_mix(&report);
            let summary = summarize_mix(&report);
            (RunOutput::Mix { report }, summary)
        }
        Command::Roas(args) => {
            let inputs = roas_engine::config::validate_roas(&args.apply(scenario.roas.unwrap_or_default()));
            let metrics = roas_metrics(&inputs);
            let curve = profit_curve(&inputs);
            print_roas(&metrics);
            print_series(&curve);
            let summary = summarize_roas(&inputs, &metrics);
            (RunOutput::Roas { inputs, metrics, curve }, summary)
        }
        Command::Poas(args) => {
            let inputs = roas_engine::config::validate_poas(&args.apply(scenario.poas.unwrap_or_default()));
            let metrics = poas_metrics(&inputs);
            let curve = poas_curve(&inputs);
            print_poas(&metrics);
            print_series(&curve);
            let summary = summarize_poas(&inputs, &metrics);
            (RunOutput::Poas { inputs, metrics, curve }, summary)
        }
        Command::BreakEven => {
            let curve = break_even_curve();
            print_series(&curve);
            let summary = summarize_series(&curve);
            (RunOutput::BreakEven { curve }, summary)
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let scenario = load_scenario(&cli)?.validated();

    let (output, summary) = run(&cli, &scenario);

    if cli.digest {
        println!("{}", summary);
    }

    if let Some(path) = &cli.series {
        match output.series() {
            Some(curve) => {
                let n = series::write_jsonl(curve, path)
                    .with_context(|| format!("writing series {}", path.display()))?;
                info!(points = n, path = %path.display(), "series written");
            }
            None => eprintln!("  --series ignored: the mix command has no sweep"),
        }
    }

    if let Some(path) = &cli.json {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let report = RunReport {
            timestamp: ts.to_string(),
            version: env!("CARGO_PKG_VERSION"),
            output,
            summary,
        };
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("  Results saved to: {}\n", path.display());
    }

    Ok(())
}
