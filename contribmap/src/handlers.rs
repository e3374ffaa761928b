use crate::config::Config;
use crate::server::{self, AppState, build_heatmap, select_repo};
use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use contribmap_core::{CountryCode, Variant, resolve};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

pub async fn handle_serve(config: &Config) -> anyhow::Result<()> {
    println!(
        "{} Serving heatmaps on {}",
        "→".cyan(),
        format!("http://{}/api/heatmap", config.bind).bold()
    );
    println!("  Cache directory: {}", config.cache_dir.display());
    if let Some(template) = &config.template {
        println!("  Map template: {}", template.display());
    }
    server::serve(config).await
}

/// One-shot render of a repository's heatmap to a file or stdout.
pub async fn handle_render(config: &Config, args: &ArgMatches) -> anyhow::Result<()> {
    let repo = select_repo(
        args.get_one::<String>("repo").map(String::as_str),
        &config.default_repo,
    );
    let variant = args
        .get_one::<String>("variant")
        .and_then(|v| Variant::from_str(v))
        .unwrap_or_default();
    let refresh = args.get_flag("refresh");
    let output = args.get_one::<PathBuf>("output");

    let state = AppState::from_config(config)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Collecting contributors of {}...", repo));

    let result = build_heatmap(&state, &repo, variant, refresh).await;
    spinner.finish_and_clear();
    let svg = result.with_context(|| format!("Failed to render heatmap for {}", repo))?;

    match output {
        Some(path) => {
            fs::write(path, &svg)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} heatmap for {} to {} ({} bytes)",
                "✓".green(),
                variant.as_str(),
                repo.bold(),
                path.display(),
                svg.len()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&svg)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Print what each location resolves to.
pub fn handle_resolve(args: &ArgMatches) {
    let locations: Vec<&String> = args
        .get_many::<String>("LOCATION")
        .map(|values| values.collect())
        .unwrap_or_default();

    for location in locations {
        match resolve(Some(location.as_str())) {
            Some(code) => println!("{} {}", "✓".green(), describe_resolution(location, Some(code))),
            None => println!("{} {}", "✗".red(), describe_resolution(location, None)),
        }
    }
}

/// `"Berlin" -> de (Germany)` or `"CI" -> unresolved`.
pub fn describe_resolution(location: &str, code: Option<CountryCode>) -> String {
    match code {
        Some(code) => format!("{:?} -> {} ({})", location, code, code.display_name()),
        None => format!("{:?} -> unresolved", location),
    }
}
