use clap::{Parser, Subcommand};
use crossguid::{Guid, GuidSource, NativeSource, OsEntropySource};
use std::collections::HashSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "crossguid")]
#[command(about = "Generate, parse, and check globally-unique identifiers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate new GUIDs
    New {
        /// How many to generate
        #[arg(long, default_value_t = 1)]
        count: u32,
        /// Print without hyphens
        #[arg(long)]
        simple: bool,
        /// Print with uppercase hex digits
        #[arg(long, conflicts_with = "simple")]
        uppercase: bool,
        /// Use the platform UUID facility instead of the default source
        #[arg(long)]
        native: bool,
    },
    /// Validate a GUID and print its canonical form
    Parse {
        /// Input in hyphenated, braced, or unhyphenated form
        input: String,
    },
    /// Print the nil GUID
    Nil,
    /// Run the conformance checks
    Check {
        /// Number of GUIDs to generate for the uniqueness check
        #[arg(long, default_value_t = 10_000)]
        count: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("crossguid=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New {
            count,
            simple,
            uppercase,
            native,
        } => {
            let source: &dyn GuidSource = if native { &NativeSource } else { &OsEntropySource };
            for _ in 0..count {
                let guid = Guid::generate_with(source)?;
                if simple {
                    println!("{}", guid.to_simple_string());
                } else if uppercase {
                    println!("{}", guid.to_uppercase_string());
                } else {
                    println!("{guid}");
                }
            }
        }
        Commands::Parse { input } => {
            let guid = Guid::parse_any(&input)?;
            println!("{guid}");
            tracing::info!(version = guid.version(), nil = guid.is_nil(), "parsed");
        }
        Commands::Nil => {
            println!("{}", Guid::NIL);
        }
        Commands::Check { count } => {
            run_checks(count)?;
        }
    }

    Ok(())
}

/// Exercises the library end to end and reports per-check status.
/// Returns an error (non-zero exit) if any check fails.
fn run_checks(count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = 0u32;
    let mut check = |ok: bool, what: &str| {
        if ok {
            println!(" [PASSED] {what}");
        } else {
            failures += 1;
            eprintln!(" [FAILED] {what}");
        }
    };

    let guid = Guid::generate()?;
    let text = guid.to_string();

    check(!guid.is_nil(), "new GUID is not nil");
    check(guid.version() == 4, "new GUID carries version 4");
    check(guid.as_bytes()[8] & 0xc0 == 0x80, "new GUID carries the RFC variant");
    check(text.len() == 36, "canonical form is 36 characters");
    check(
        [8, 13, 18, 23].iter().all(|&p| text.as_bytes()[p] == b'-'),
        "hyphens sit at positions 8, 13, 18, 23",
    );
    check(
        text.chars()
            .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "hex digits are lowercase",
    );
    check(Guid::parse(&text)? == guid, "round-trips through canonical text");
    check(
        Guid::parse_any(&guid.to_uppercase_string())? == guid,
        "uppercase form normalizes to the same value",
    );
    check(
        Guid::NIL.to_string() == "00000000-0000-0000-0000-000000000000",
        "nil formats as all zeros",
    );
    check(
        Guid::parse("00000000-0000-0000-0000-000000000000")?.is_nil(),
        "all-zero text parses back to nil",
    );
    check(
        Guid::parse("123e4567-e89b-12d3-a456-42661417400").is_err(),
        "truncated text is rejected",
    );
    check(
        Guid::generate()? != Guid::generate()?,
        "sequential generations differ",
    );

    tracing::info!(count, "running uniqueness check");
    let mut seen = HashSet::with_capacity(count);
    let mut duplicates = 0usize;
    for _ in 0..count {
        if !seen.insert(Guid::generate()?) {
            duplicates += 1;
        }
    }
    check(duplicates == 0, "generated GUIDs contain no duplicates");

    if failures > 0 {
        return Err(format!("{failures} check(s) failed").into());
    }
    println!("all checks passed");
    Ok(())
}
