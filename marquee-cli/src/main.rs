//! marquee command line: browse the catalog and drive the demo session flow.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use marquee_core::config::{CatalogConfig, SessionConfig};
use marquee_core::{CatalogGateway, SessionStore};
use marquee_model::{CatalogItem, ImageSize, MediaKind, image_url};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about = "Media catalog browser and demo login")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Movie,
    Tv,
}

impl From<KindArg> for MediaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Movie => MediaKind::Movie,
            KindArg::Tv => MediaKind::Tv,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Trending movies and series this week
    Trending,
    /// Popular titles for one media kind
    Popular { kind: KindArg },
    /// Top rated movies
    TopRated,
    /// Search movies and series
    Search { term: String },
    /// Full details for one title
    Detail { id: u64, kind: KindArg },
    /// Genre id/name listing across both kinds
    Genres,
    /// The landing-view batch: trending, popular and top rated in one go
    Home,
    /// Log in (demo credentials: user@example.com / password)
    Login { email: String, password: String },
    /// Create a throwaway local account
    Signup {
        email: String,
        password: String,
        name: String,
    },
    /// Drop the local session
    Logout,
    /// Show the current session
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,marquee_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let catalog_config = CatalogConfig::from_env();
    let gateway = CatalogGateway::over_http(catalog_config.clone());

    match cli.command {
        Command::Trending => {
            print_rail("Trending this week", &gateway.fetch_trending().await);
        }
        Command::Popular { kind } => {
            let kind = MediaKind::from(kind);
            let items = gateway.fetch_popular(kind).await;
            print_rail(&format!("Popular ({kind})"), &items);
        }
        Command::TopRated => {
            print_rail("Top rated movies", &gateway.fetch_top_rated().await);
        }
        Command::Search { term } => {
            let items = gateway.search(&term).await;
            if items.is_empty() {
                println!("no results for {term:?}");
            } else {
                print_rail(&format!("Results for {term:?}"), &items);
            }
        }
        Command::Detail { id, kind } => {
            match gateway.fetch_detail(id, kind.into()).await {
                Some(detail) => {
                    println!("{}", detail.item);
                    if let Some(tagline) = &detail.tagline {
                        println!("  \"{tagline}\"");
                    }
                    if !detail.item.overview.is_empty() {
                        println!("  {}", detail.item.overview);
                    }
                    let genres: Vec<&str> =
                        detail.genres.iter().map(|g| g.name.as_str()).collect();
                    if !genres.is_empty() {
                        println!("  genres: {}", genres.join(", "));
                    }
                    if let Some(minutes) = detail.headline_runtime() {
                        println!("  runtime: {minutes} min");
                    }
                    if let Some(seasons) = detail.season_count {
                        println!("  seasons: {seasons}");
                    }
                    if !detail.item.poster_path.is_empty() {
                        println!(
                            "  poster: {}",
                            image_url(
                                &catalog_config.image_base,
                                ImageSize::W500,
                                Some(&detail.item.poster_path),
                            )
                        );
                    }
                }
                None => println!("no details for {kind:?} #{id}"),
            }
        }
        Command::Genres => {
            let genres = gateway.fetch_genres().await;
            for (id, name) in &genres {
                println!("{id:>6}  {name}");
            }
        }
        Command::Home => {
            let (trending, popular_movies, popular_tv, top_rated) = futures::join!(
                gateway.fetch_trending(),
                gateway.fetch_popular(MediaKind::Movie),
                gateway.fetch_popular(MediaKind::Tv),
                gateway.fetch_top_rated(),
            );
            print_rail("Trending this week", &trending);
            print_rail("Popular (Movie)", &popular_movies);
            print_rail("Popular (TV)", &popular_tv);
            print_rail("Top rated movies", &top_rated);
        }
        Command::Login { email, password } => {
            let mut store = session_store();
            store.initialize();
            if store.login(&email, &password).await {
                let session = store.state().session().expect("just authenticated");
                println!("signed in as {session}");
            } else {
                println!("login failed");
            }
        }
        Command::Signup {
            email,
            password,
            name,
        } => {
            let mut store = session_store();
            store.initialize();
            if store.signup(&email, &password, &name).await {
                let session = store.state().session().expect("just authenticated");
                println!("account created, signed in as {session}");
            } else {
                println!("signup failed");
            }
        }
        Command::Logout => {
            let mut store = session_store();
            store.initialize();
            store.logout();
            println!("signed out");
        }
        Command::Whoami => {
            let mut store = session_store();
            store.initialize();
            match store.state().session() {
                Some(session) => println!("{session}"),
                None => println!("anonymous"),
            }
        }
    }

    Ok(())
}

fn session_store() -> SessionStore<marquee_core::FileVault> {
    SessionStore::from_config(&SessionConfig::from_env())
}

fn print_rail(label: &str, items: &[CatalogItem]) {
    println!("{label} ({} titles)", items.len());
    for item in items {
        let date = item
            .relevant_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| "----".to_string());
        println!(
            "  {:>8}  {:<5}  {:<10}  {:>4.1}  {}",
            item.id,
            item.media_kind.path_segment(),
            date,
            item.vote_average,
            item.display_title
        );
    }
}
