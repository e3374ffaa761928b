use colored::Colorize;
use commands::command_argument_builder;
use contribmap::config::Config;
use contribmap::{handle_render, handle_resolve, handle_serve};
use std::process::ExitCode;

mod commands;

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries rendered SVG; logs go to stderr
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let config = Config::from_matches(&chosen_command);

    let result = match chosen_command.subcommand() {
        Some(("serve", _)) => handle_serve(&config).await,
        Some(("render", primary_command)) => handle_render(&config, primary_command).await,
        Some(("resolve", primary_command)) => {
            handle_resolve(primary_command);
            Ok(())
        }
        _ => unreachable!("clap should ensure we don't get here"),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red(), e);
            ExitCode::FAILURE
        }
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
