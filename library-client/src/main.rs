use anyhow::Context as _;
use clap::{Parser, Subcommand};
use library_client::config::DEFAULT_GOOGLE_BOOKS_ENDPOINT;
use library_client::{ClientConfig, GoogleBooks, GoogleBooksConfig, LibraryClient};
use library_common::{BookId, LibraryId, MemberId};
use reqwest::Url;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
struct Cli {
    /// Base url of the library backend
    #[arg(long, env = "LIBRARY_API_URL", default_value = "http://localhost:5000")]
    api_url: Url,

    /// Path prefix of the library api on the backend
    #[arg(long, env = "LIBRARY_API_PATH", default_value = "/api")]
    api_path: String,

    /// Google Books api endpoint
    #[arg(long, env = "GOOGLE_BOOKS_ENDPOINT", default_value = DEFAULT_GOOGLE_BOOKS_ENDPOINT)]
    google_books_endpoint: Url,

    /// Google Books api key, requests are sent unauthenticated without one
    #[arg(long, env = "GOOGLE_BOOKS_API_KEY", hide_env_values = true)]
    google_books_api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every book of a library
    Books { library_id: LibraryId },

    /// List a library's books together with the copies it owns
    Inventory { library_id: LibraryId },

    /// Show a single book
    Book {
        library_id: LibraryId,
        book_id: BookId,
    },

    /// List the books of a library that can currently be checked out
    Available { library_id: LibraryId },

    /// List the books of a library that are currently checked out
    CheckedOut { library_id: LibraryId },

    /// Total copies of a book the library owns
    TotalCopies {
        library_id: LibraryId,
        book_id: BookId,
    },

    /// Copies of a book that are not checked out
    AvailableCopies {
        library_id: LibraryId,
        book_id: BookId,
    },

    /// Check a book out for a member
    CheckOut {
        library_id: LibraryId,
        book_id: BookId,
        member_id: MemberId,
    },

    /// Return a member's book
    Return {
        library_id: LibraryId,
        book_id: BookId,
        member_id: MemberId,
    },

    /// Look a book up on Google Books by isbn
    Metadata { isbn: String },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "library_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.api_url, cli.api_path);
    let library = LibraryClient::new(&config).context("Invalid library api url")?;
    info!("Using library api at {}", config.libraries_url()?);

    match cli.command {
        Commands::Books { library_id } => print_json(&library.books(library_id).await?)?,
        Commands::Inventory { library_id } => {
            print_json(&library.inventory(library_id).await?)?
        }
        Commands::Book {
            library_id,
            book_id,
        } => print_json(&library.book(library_id, book_id).await?)?,
        Commands::Available { library_id } => {
            print_json(&library.available_books(library_id).await?)?
        }
        Commands::CheckedOut { library_id } => {
            print_json(&library.checked_out_books(library_id).await?)?
        }
        Commands::TotalCopies {
            library_id,
            book_id,
        } => print_json(&library.total_copies(library_id, book_id).await?)?,
        Commands::AvailableCopies {
            library_id,
            book_id,
        } => print_json(&library.availability(library_id, book_id).await?)?,
        Commands::CheckOut {
            library_id,
            book_id,
            member_id,
        } => {
            let record = library
                .check_out_book(library_id, book_id, member_id)
                .await
                .with_context(|| format!("Failed to check out book {}", book_id))?;
            print_json(&record)?
        }
        Commands::Return {
            library_id,
            book_id,
            member_id,
        } => {
            let record = library
                .return_book(library_id, book_id, member_id)
                .await
                .with_context(|| format!("Failed to return book {}", book_id))?;
            print_json(&record)?
        }
        Commands::Metadata { isbn } => {
            let google_books = GoogleBooks::new(GoogleBooksConfig::new(
                cli.google_books_endpoint,
                cli.google_books_api_key,
            ));
            let metadata = google_books
                .metadata(&isbn)
                .await
                .with_context(|| format!("Failed to fetch metadata for {}", isbn))?;
            print_json(&metadata)?
        }
    }

    Ok(())
}
