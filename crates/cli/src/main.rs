use clap::{Parser, Subcommand};
use std::path::PathBuf;
use symcheck_core::{
    browse::{category_counts, classify, CategoryFilter},
    constants::{FALLBACK_POLICY_ENV, SUGGESTION_LIMIT_ENV, VOCABULARY_ENV},
    CoreConfig, FallbackPolicy, SymptomService,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "symcheck")]
#[command(about = "Match free-text symptom descriptions against a known vocabulary")]
struct Cli {
    /// Vocabulary file (.json, .yaml or .yml)
    #[arg(long, global = true, env = VOCABULARY_ENV)]
    vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a free-text query
    Match {
        /// The text to match
        query: String,
        /// Only return terms that are in the vocabulary
        #[arg(long)]
        strict: bool,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search the vocabulary
    Search {
        /// Substring to look for (case-insensitive)
        needle: String,
        /// Restrict to a category (all, respiratory, neurological, gastrointestinal,
        /// musculoskeletal, general)
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Count vocabulary terms per category
    Categories,
    /// Show the categories of a single term
    Classify {
        /// The term to classify
        term: String,
    },
}

fn load_service(
    vocabulary: Option<PathBuf>,
    strict: bool,
) -> Result<SymptomService, Box<dyn std::error::Error>> {
    let mut config = CoreConfig::from_values(
        vocabulary.map(|p| p.display().to_string()),
        std::env::var(FALLBACK_POLICY_ENV).ok(),
        std::env::var(SUGGESTION_LIMIT_ENV).ok(),
    )?;
    if strict {
        config = config.with_fallback_policy(FallbackPolicy::Strict);
    }
    Ok(SymptomService::load(config)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("symcheck=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Match {
            query,
            strict,
            json,
        }) => {
            let service = load_service(cli.vocabulary, strict)?;
            let outcome = service.match_query(&query);
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else if let Some(clarification) = service.clarify(&outcome) {
                print!("{}", clarification);
            } else {
                for m in &outcome.matches {
                    println!("{} ({:?})", m.term, m.rule);
                }
            }
        }
        Some(Commands::Search { needle, category }) => {
            let filter: CategoryFilter = category.parse()?;
            let service = load_service(cli.vocabulary, false)?;
            let found = service.browse(&needle, filter);
            if found.is_empty() {
                println!("No symptoms found.");
            } else {
                for term in found {
                    println!("{}", term);
                }
            }
        }
        Some(Commands::Categories) => {
            let service = load_service(cli.vocabulary, false)?;
            let counts = category_counts(service.vocabulary());
            println!("All Symptoms: {}", counts.all);
            for (category, count) in counts.by_category {
                println!("{}: {}", category.label(), count);
            }
        }
        Some(Commands::Classify { term }) => {
            let categories = classify(&term);
            if categories.is_empty() {
                println!("{}: uncategorised", term);
            } else {
                let names: Vec<&str> = categories.iter().map(|c| c.label()).collect();
                println!("{}: {}", term, names.join(", "));
            }
        }
        None => {
            println!("Use 'symcheck --help' for commands");
        }
    }

    Ok(())
}
