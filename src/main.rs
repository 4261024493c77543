use anyhow::{Context, Result};
use catalog_scraper::{
    AlbumQuery, AppConfig, ArtistQuery, CatalogScraper, CliConfig, FileConfig, SearchQuery,
    TagKind,
};
use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Catalog host, with or without scheme.
    #[clap(long)]
    pub host: Option<String>,

    /// Path to a TOML config file. Its values override the CLI ones.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Timeout in seconds for every HTTP request.
    #[clap(long, default_value_t = catalog_scraper::config::DEFAULT_TIMEOUT_SEC)]
    pub timeout_sec: u64,

    /// User agent sent with every request.
    #[clap(long)]
    pub user_agent: Option<String>,

    /// Maximum number of AJAX pages a single album fetch may request.
    #[clap(long, default_value_t = catalog_scraper::albums::DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every artist on the homepage.
    Artists,
    /// List every genre on the homepage.
    Genres,
    /// List tags of the given kind ("artist" or "genre").
    Tags { kind: String },
    /// All albums of one artist.
    #[clap(group(ArgGroup::new("artist").required(true).args(["id", "name", "pattern"])))]
    AlbumsByArtist {
        #[clap(long)]
        id: Option<u64>,
        #[clap(long)]
        name: Option<String>,
        /// Regular expression matched against artist names.
        #[clap(long)]
        pattern: Option<String>,
    },
    /// Most recent albums, starting at `offset`.
    Newest {
        #[clap(long, default_value_t = 0)]
        offset: usize,
    },
    /// Server-side album search.
    Search {
        /// Free-text terms.
        terms: Vec<String>,
        #[clap(long)]
        artist: Option<u64>,
        /// Genre ID that must be present; repeatable.
        #[clap(long = "include-genre")]
        include_genres: Vec<u64>,
        /// Genre ID that must be absent; repeatable.
        #[clap(long = "exclude-genre")]
        exclude_genres: Vec<u64>,
    },
    /// Albums by explicit ID.
    Albums {
        #[clap(required = true, value_delimiter = ',')]
        ids: Vec<u64>,
    },
    /// Latest edit/broken status per album from the comment feed.
    Changes,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let cli_config = CliConfig {
        host: cli_args.host.clone(),
        timeout_sec: cli_args.timeout_sec,
        user_agent: cli_args.user_agent.clone(),
        max_pages: cli_args.max_pages,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let mut scraper = CatalogScraper::from_config(&config)
        .context("Failed to create catalog scraper")?;
    info!("Scraping {}", scraper.base_url());

    let albums = match cli_args.command {
        Command::Artists => return print_json(&scraper.artists()?),
        Command::Genres => return print_json(&scraper.genres()?),
        Command::Tags { kind } => {
            let kind: TagKind = kind.parse()?;
            return print_json(&scraper.tags(kind)?);
        }
        Command::Changes => return print_json(&scraper.changes()?),
        Command::AlbumsByArtist { id, name, pattern } => {
            let query = match (id, name, pattern) {
                (Some(id), _, _) => ArtistQuery::Id(id),
                (None, Some(name), _) => ArtistQuery::Name(name),
                (None, None, Some(pattern)) => ArtistQuery::pattern(&pattern)?,
                (None, None, None) => unreachable!("clap enforces the artist group"),
            };
            scraper.albums_by_artist(query)?
        }
        Command::Newest { offset } => scraper.newest(offset)?,
        Command::Search {
            terms,
            artist,
            include_genres,
            exclude_genres,
        } => scraper.fetch_albums(AlbumQuery {
            search: Some(SearchQuery {
                terms,
                artist,
                include_genres,
                exclude_genres,
            }),
            ..Default::default()
        })?,
        Command::Albums { ids } => scraper.albums_from_ids(&ids)?,
    };

    match albums {
        Some(albums) => print_json(&albums),
        None => {
            warn!("No result");
            print_json(&serde_json::Value::Null)
        }
    }
}
