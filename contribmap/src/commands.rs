use crate::CLAP_STYLING;
use clap::{arg, command};
use contribmap::config::{DEFAULT_BIND, DEFAULT_CACHE_DIR, DEFAULT_REPO};
use contribmap_source::github::DEFAULT_API_URL;
use std::net::SocketAddr;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("contribmap")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("contribmap")
        .about("Embeddable SVG heatmaps of where a GitHub repository's contributors live")
        .styles(CLAP_STYLING)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            arg!(--"cache-dir" <DIR>)
                .required(false)
                .global(true)
                .help("Directory holding the repo and location caches")
                .env("CONTRIBMAP_CACHE_DIR")
                .default_value(DEFAULT_CACHE_DIR),
        )
        .arg(
            arg!(--"template" <PATH>)
                .required(false)
                .global(true)
                .help("SVG world map to use instead of the built-in one"),
        )
        .arg(
            arg!(--"repo-ttl" <SECONDS>)
                .required(false)
                .global(true)
                .help("How long a repository's contributor list stays cached")
                .value_parser(clap::value_parser!(u64))
                .default_value("86400"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .global(true)
                .help("Timeout for each request to the GitHub API")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("10"),
        )
        .arg(
            arg!(--"api-url" <URL>)
                .required(false)
                .global(true)
                .help("Base URL of the GitHub REST API")
                .value_parser(clap::value_parser!(Url))
                .default_value(DEFAULT_API_URL),
        )
        .arg(
            arg!(--"token" <TOKEN>)
                .required(false)
                .global(true)
                .help("GitHub API token, raises the rate limit")
                .env("GITHUB_TOKEN")
                .hide_env_values(true),
        )
        .arg(
            arg!(--"default-repo" <REPO>)
                .required(false)
                .global(true)
                .help("Repository rendered when a request names none (owner/name)")
                .default_value(DEFAULT_REPO),
        )
        .arg(
            arg!(--"bind" <ADDR>)
                .required(false)
                .global(true)
                .help("Address the HTTP server listens on")
                .value_parser(clap::value_parser!(SocketAddr))
                .default_value(DEFAULT_BIND),
        )
        .subcommand(command!("serve").about("Serve heatmaps over HTTP at /api/heatmap"))
        .subcommand(
            command!("render")
                .about("Render one heatmap to a file or stdout")
                .arg(
                    arg!(-r --"repo" <REPO>)
                        .required(false)
                        .help("Repository to render (owner/name), defaults to --default-repo"),
                )
                .arg(
                    arg!(--"variant" <VARIANT>)
                        .required(false)
                        .help("map: world map only, list: map plus the top countries")
                        .value_parser(["map", "list"])
                        .default_value("list"),
                )
                .arg(
                    arg!(--"refresh")
                        .required(false)
                        .help("Ignore the cached contributor list")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the SVG here instead of stdout")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            command!("resolve")
                .about("Show the country each free-text location resolves to")
                .arg(
                    arg!(<LOCATION> ...)
                        .required(true)
                        .help("Profile locations, e.g. \"Berlin, Germany\""),
                ),
        )
}
