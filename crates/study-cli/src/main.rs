//! Smart Study Assistant CLI
//!
//! Usage:
//!     study [OPTIONS] [COMMAND]
//!
//! Environment Variables:
//!     GEMINI_API_KEY: API key for the hosted model (required)
//!     MODEL_NAME: Model variant to use (default: gemini-2.0-flash)
//!     MAX_TOKENS: Maximum output tokens per response (default: 2048)
//!     TEMPERATURE: Sampling temperature (default: 0.7)
//!     GEMINI_BASE_URL: OpenAI-compatible API base URL

use std::fs;
use std::future::Future;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use dotenv::dotenv;
use indicatif::{ProgressBar, ProgressStyle};
use study_assistant::{Difficulty, ModelConfig, StudyAssistant, DEFAULT_BASE_URL, DEFAULT_MODEL};
use tracing_subscriber::EnvFilter;

/// Smart Study Assistant - AI-powered study companion
#[derive(Parser, Debug)]
#[command(name = "study")]
#[command(version)]
#[command(about = "Smart Study Assistant - Your AI-powered study companion")]
#[command(after_help = r#"Examples:
    # Explain a concept
    study explain "binary search trees"

    # Generate a hard quiz with 10 questions
    study quiz "cell biology" -q 10 -d hard

    # Create a two-week study plan
    study plan "linear algebra" -d 14 --hours-per-day 2 -g "exam preparation"

    # Summarize a file of notes
    study summarize -f notes.md

    # Get study tips for a focus area
    study tips memorization

    # Start an interactive session
    study
"#)]
struct Cli {
    // Model options
    /// API key for the hosted model
    #[arg(long, env = "GEMINI_API_KEY")]
    api_key: String,

    /// Model variant to use
    #[arg(long, env = "MODEL_NAME", default_value = DEFAULT_MODEL)]
    model: String,

    /// Maximum output tokens per response
    #[arg(long, env = "MAX_TOKENS", default_value_t = 2048)]
    max_tokens: u32,

    /// Sampling temperature (0.0 to 2.0)
    #[arg(long, env = "TEMPERATURE", default_value_t = 0.7)]
    temperature: f32,

    /// OpenAI-compatible API base URL
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Command to run (interactive mode if not provided)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Get a clear explanation of a concept or topic
    Explain {
        /// Concept to explain
        query: String,
    },
    /// Generate a quiz on a specific topic
    Quiz {
        /// Topic for the quiz
        topic: String,

        /// Number of questions to generate
        #[arg(short = 'q', long, default_value_t = 5)]
        questions: usize,

        /// Difficulty level of the quiz
        #[arg(short = 'd', long, default_value = "medium", value_parser = ["easy", "medium", "hard"])]
        difficulty: String,
    },
    /// Create a personalized study plan
    Plan {
        /// Subject to study
        subject: String,

        /// Number of days for the study plan
        #[arg(short = 'd', long, default_value_t = 7)]
        days: u32,

        /// Hours to study per day
        #[arg(long, default_value_t = 1)]
        hours_per_day: u32,

        /// Your study goal
        #[arg(short = 'g', long, default_value = "mastery")]
        goal: String,
    },
    /// Summarize study content
    Summarize {
        /// File to summarize
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Text to summarize
        #[arg(short = 't', long)]
        text: Option<String>,
    },
    /// Get evidence-based study technique recommendations
    Tips {
        /// Specific area to focus on (general tips if omitted)
        topic: Option<String>,
    },
    /// Start an interactive session with the study assistant
    Chat,
}

/// Parse difficulty string to Difficulty enum
fn parse_difficulty(difficulty: &str) -> Difficulty {
    match difficulty.to_lowercase().as_str() {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

/// Run a request future behind a terminal spinner
async fn with_spinner<F>(message: &str, fut: F) -> String
where
    F: Future<Output = String>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}").expect("static spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = fut.await;

    spinner.finish_and_clear();
    result
}

/// Print a response inside a titled panel
fn print_panel(title: &str, body: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{}", style(title).bold().cyan());
    println!("{}", "-".repeat(60));
    println!("{}", body.trim());
    println!("{}", "=".repeat(60));
}

/// Run the interactive chat session
async fn run_interactive_mode(assistant: &mut StudyAssistant) -> Result<()> {
    println!("{}", "=".repeat(60));
    println!("{}", style("\u{1F9E0} Interactive Mode").bold().cyan());
    println!("Welcome to Smart Study Assistant! Ask me anything about your studies.");
    println!("Type 'exit' or 'quit' to end the session.");
    println!("{}", "=".repeat(60));

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("\n{} ", style("You:").bold().blue());
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\n{}", style("Goodbye! Happy studying!").bold().green());
                break;
            }
            Ok(_) => {}
            Err(_) => {
                println!("\n{}", style("Goodbye! Happy studying!").bold().green());
                break;
            }
        }

        let message = input.trim();

        if message.eq_ignore_ascii_case("exit")
            || message.eq_ignore_ascii_case("quit")
            || message.eq_ignore_ascii_case("bye")
        {
            println!("{}", style("Goodbye! Happy studying!").bold().green());
            break;
        }

        if message.is_empty() {
            continue;
        }

        let response = with_spinner("Thinking...", assistant.chat(message)).await;

        println!("\n{}", style("Assistant").bold().green());
        println!("{}", response);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Cli::parse();

    let config = ModelConfig::new(&args.api_key)
        .with_base_url(&args.base_url)
        .with_model(&args.model)
        .with_max_tokens(args.max_tokens)
        .with_temperature(args.temperature);

    let mut assistant = StudyAssistant::new(config);

    match args.command {
        Some(Commands::Explain { query }) => {
            let result =
                with_spinner("Getting explanation...", assistant.explain_concept(&query)).await;
            print_panel(&format!("\u{1F4DA} Explanation: {}", query), &result);
        }
        Some(Commands::Quiz {
            topic,
            questions,
            difficulty,
        }) => {
            let difficulty = parse_difficulty(&difficulty);
            let message = format!(
                "Creating a {} quiz with {} questions...",
                difficulty.as_str(),
                questions
            );
            let result = with_spinner(
                &message,
                assistant.generate_quiz(&topic, questions, difficulty),
            )
            .await;
            print_panel(&format!("\u{1F3AF} Quiz: {}", topic), &result);
        }
        Some(Commands::Plan {
            subject,
            days,
            hours_per_day,
            goal,
        }) => {
            let message = format!("Creating a {}-day study plan...", days);
            let result = with_spinner(
                &message,
                assistant.create_study_plan(&subject, days, hours_per_day, &goal),
            )
            .await;
            print_panel(&format!("\u{1F4C6} Study Plan: {}", subject), &result);
        }
        Some(Commands::Summarize { file, text }) => {
            let content = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => bail!("Please provide either a file or text to summarize"),
            };

            let result = with_spinner(
                "Summarizing content...",
                assistant.summarize_content(&content),
            )
            .await;
            print_panel("\u{1F4DD} Summary", &result);
        }
        Some(Commands::Tips { topic }) => {
            let result = with_spinner(
                "Finding study tips...",
                assistant.study_tips(topic.as_deref()),
            )
            .await;
            print_panel("\u{1F4A1} Study Tips", &result);
        }
        Some(Commands::Chat) | None => {
            run_interactive_mode(&mut assistant).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serial_test::serial;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_a_parse_error() {
        std::env::remove_var("GEMINI_API_KEY");
        let result = Cli::try_parse_from(["study", "explain", "recursion"]);
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_quiz_options_are_parsed() {
        let cli = Cli::try_parse_from([
            "study", "--api-key", "k", "quiz", "biology", "-q", "3", "-d", "easy",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Quiz {
                topic,
                questions,
                difficulty,
            }) => {
                assert_eq!(topic, "biology");
                assert_eq!(questions, 3);
                assert_eq!(difficulty, "easy");
            }
            other => panic!("Expected quiz command, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_no_subcommand_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["study", "--api-key", "k"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty("easy"), Difficulty::Easy);
        assert_eq!(parse_difficulty("HARD"), Difficulty::Hard);
        assert_eq!(parse_difficulty("anything-else"), Difficulty::Medium);
    }
}
