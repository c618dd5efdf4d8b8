use std::io::{BufRead, Write};

use anyhow::Context;
use symcheck_core::constants::{FALLBACK_POLICY_ENV, SUGGESTION_LIMIT_ENV, VOCABULARY_ENV};
use symcheck_core::selection::Selection;
use symcheck_core::{CoreConfig, SymptomService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WELCOME: &str = "Describe your symptoms (e.g. \"fever, headache, nausea\").
Commands: :selected lists collected symptoms, :clear resets them, :quit exits.";

/// Main entry point for the symcheck session runner
///
/// Loads the vocabulary once, then reads one message per line from stdin and prints the
/// matched terms (or a clarification prompt) for each.
///
/// # Environment Variables
/// - `SYMCHECK_VOCABULARY`: vocabulary file (default: "data/symptoms.json")
/// - `SYMCHECK_FALLBACK_POLICY`: "permissive" (default) or "strict"
/// - `SYMCHECK_SUGGESTION_LIMIT`: terms offered when nothing matched (default: 10)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("symcheck=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CoreConfig::from_values(
        std::env::var(VOCABULARY_ENV).ok(),
        std::env::var(FALLBACK_POLICY_ENV).ok(),
        std::env::var(SUGGESTION_LIMIT_ENV).ok(),
    )?;
    tracing::info!(
        "++ Starting symcheck session with {} ({:?})",
        config.vocabulary_path().display(),
        config.fallback_policy()
    );

    let service = SymptomService::load(config).context("failed to load vocabulary")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&service, stdin.lock(), stdout.lock())
}

/// Runs the read-match-print loop until end of input or `:quit`.
fn run_session<R: BufRead, W: Write>(
    service: &SymptomService,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let mut selection = Selection::new();
    writeln!(output, "{WELCOME}")?;

    for line in input.lines() {
        let line = line?;
        let message = line.trim();

        match message {
            "" => continue,
            ":quit" => break,
            ":clear" => {
                selection.clear();
                writeln!(output, "Selection cleared.")?;
                continue;
            }
            ":selected" => {
                if selection.is_empty() {
                    writeln!(output, "No symptoms selected.")?;
                } else {
                    writeln!(output, "Selected: {}", selection.terms().join(", "))?;
                }
                continue;
            }
            _ => {}
        }

        let outcome = service.match_query(message);
        match service.clarify(&outcome) {
            Some(clarification) => write!(output, "{clarification}")?,
            None => {
                selection.extend_from_outcome(&outcome);
                writeln!(output, "Matched: {}", outcome.terms().join(", "))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use symcheck_core::{FallbackPolicy, Vocabulary};

    fn service() -> SymptomService {
        let config = CoreConfig::new(PathBuf::from("unused.json"), FallbackPolicy::Permissive, 2)
            .expect("valid config");
        SymptomService::new(
            config,
            Vocabulary::from_terms(["fever", "cough", "sore throat"]),
        )
    }

    fn transcript(input: &str) -> String {
        let mut output = Vec::new();
        run_session(&service(), input.as_bytes(), &mut output).expect("session runs");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn collects_matches_across_messages() {
        let out = transcript("I have cough and fever\nsore throat\n:selected\n");
        assert!(out.contains("Matched: cough, fever"));
        assert!(out.contains("Matched: sore throat"));
        assert!(out.contains("Selected: cough, fever, sore throat"));
    }

    #[test]
    fn unrecognised_message_prompts_for_clarification() {
        let out = transcript("my knee hurts\n");
        assert!(out.contains("couldn't identify"));
        assert!(out.contains("fever, cough..."));
    }

    #[test]
    fn quit_stops_reading_and_clear_resets() {
        let out = transcript("fever\n:clear\n:selected\n:quit\ncough\n");
        assert!(out.contains("Selection cleared."));
        assert!(out.contains("No symptoms selected."));
        assert!(!out.contains("Matched: cough"));
    }
}
