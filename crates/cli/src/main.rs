use std::io::{self, BufRead, Write};

use anyhow::Result;
use assist_engine::{quick_questions, resolve, PageContext};
use clap::{Args, Parser, Subcommand};

use crate::models::{AskOutput, QuickEntry, QuickOutput};
use crate::transcript::Transcript;

mod models;
mod transcript;

#[derive(Parser)]
#[command(name = "assist")]
#[command(about = "Elite Cuts contextual chat assistant", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one question against a page context
    Ask(AskArgs),
    /// Interactive line-oriented chat session
    Chat(ChatArgs),
    /// List the quick-question shortcuts offered on a page
    Quick(QuickArgs),
}

#[derive(Args)]
struct AskArgs {
    /// Page the assistant is embedded in: home, barbers, ai-assistant, booking
    #[arg(long)]
    page: PageContext,

    /// Question text; omit it to get the page welcome message
    #[arg(default_value = "")]
    text: String,

    /// Emit a JSON envelope instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ChatArgs {
    /// Page the assistant is embedded in: home, barbers, ai-assistant, booking
    #[arg(long)]
    page: PageContext,

    /// Dump the session transcript as JSON on exit
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct QuickArgs {
    /// Page the assistant is embedded in: home, barbers, ai-assistant, booking
    #[arg(long)]
    page: PageContext,

    /// Resolve each quick question and print its answer too
    #[arg(long)]
    answers: bool,

    /// Emit a JSON envelope instead of plain text
    #[arg(long)]
    json: bool,
}

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // JSON output goes to stdout; keep the log channel quiet so piping the
    // envelope into another tool stays clean.
    let json_output = match &cli.command {
        Commands::Ask(args) => args.json,
        Commands::Chat(args) => args.json,
        Commands::Quick(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Ask(args) => run_ask(args),
        Commands::Chat(args) => run_chat(args),
        Commands::Quick(args) => run_quick(args),
    }
}

fn run_ask(args: AskArgs) -> Result<()> {
    let answer = resolve(args.page, &args.text);
    if args.json {
        let output = AskOutput {
            page: args.page,
            question: args.text,
            answer,
        };
        print_stdout(&serde_json::to_string_pretty(&output)?)
    } else {
        print_stdout(answer)
    }
}

fn run_chat(args: ChatArgs) -> Result<()> {
    let mut transcript = Transcript::default();

    // First contact: the page welcome, same as an empty utterance.
    let welcome = resolve(args.page, "");
    transcript.push_bot(welcome);
    print_stdout(welcome)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let text = line.trim();
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }
        log::debug!("chat: page={} input={text:?}", args.page);

        let answer = resolve(args.page, text);
        transcript.push_user(text);
        transcript.push_bot(answer);
        print_stdout(answer)?;
    }

    if args.json {
        print_stdout(&serde_json::to_string_pretty(&transcript)?)?;
    }
    Ok(())
}

fn run_quick(args: QuickArgs) -> Result<()> {
    let questions = quick_questions(args.page);

    if args.json {
        let output = QuickOutput {
            page: args.page,
            questions: questions
                .iter()
                .map(|question| QuickEntry {
                    question,
                    answer: args.answers.then(|| resolve(args.page, question)),
                })
                .collect(),
        };
        return print_stdout(&serde_json::to_string_pretty(&output)?);
    }

    for question in questions {
        print_stdout(question)?;
        if args.answers {
            print_stdout(resolve(args.page, question))?;
            print_stdout("")?;
        }
    }
    Ok(())
}
