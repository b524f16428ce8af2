use std::{env, io, path::PathBuf};

use color_eyre::{Section, eyre::eyre};
use sitecfg::{SiteConfig, install};
use tracing::info;
use tracing_subscriber::EnvFilter;

enum Command {
    Check,
    Show,
    Attrs,
}

impl Command {
    fn parse(raw: Option<&str>) -> color_eyre::Result<Self> {
        match raw {
            None | Some("check") => Ok(Self::Check),
            Some("show") => Ok(Self::Show),
            Some("attrs") => Ok(Self::Attrs),
            Some(other) => Err(eyre!("unknown command `{other}`"))
                .suggestion("usage: sitecfg [check|show|attrs] [PATH]"),
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(args.first().map(String::as_str))?;
    let path = args.get(1).map(PathBuf::from);

    let config = match &path {
        Some(p) => SiteConfig::load(p)
            .with_note(|| format!("While loading the site configuration from {}", p.display()))?,
        None => SiteConfig::builtin(),
    };
    let site = install(config)?;

    match command {
        Command::Check => info!(
            title = %site.title,
            website = %site.website,
            lang = %site.lang,
            dir = %site.dir,
            timezone = %site.timezone,
            "site configuration is valid"
        ),
        Command::Show => println!("{}", serde_json::to_string_pretty(site)?),
        Command::Attrs => println!("{}", site.html_attributes()),
    }

    Ok(())
}
