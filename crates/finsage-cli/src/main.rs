//! FinSage advisor CLI
//!
//! An interactive command-line interface to the response engine.
//!
//! # Usage
//!
//! ```bash
//! # Start the interactive advisor
//! cargo run --bin finsage
//!
//! # One-shot query with no simulated latency
//! cargo run --bin finsage -- --instant --query "analyze AAPL"
//! ```

use clap::{Parser, ValueEnum};
use finsage_core::profile::{ExperienceLevel, RiskTolerance, UserProfile};
use finsage_engine::{EngineConfig, ResponseEngine};
use std::io::{self, BufRead, Write};
use tracing::info;

mod format;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RiskArg {
    Conservative,
    Moderate,
    Aggressive,
}

impl From<RiskArg> for RiskTolerance {
    fn from(arg: RiskArg) -> Self {
        match arg {
            RiskArg::Conservative => Self::Conservative,
            RiskArg::Moderate => Self::Moderate,
            RiskArg::Aggressive => Self::Aggressive,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExperienceArg {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl From<ExperienceArg> for ExperienceLevel {
    fn from(arg: ExperienceArg) -> Self {
        match arg {
            ExperienceArg::Beginner => Self::Beginner,
            ExperienceArg::Intermediate => Self::Intermediate,
            ExperienceArg::Advanced => Self::Advanced,
            ExperienceArg::Expert => Self::Expert,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "finsage")]
#[command(about = "Interactive FinSage market advisor", long_about = None)]
struct Args {
    /// Risk tolerance for the session profile
    #[arg(long, value_enum, default_value = "moderate")]
    risk: RiskArg,

    /// Experience level for the session profile
    #[arg(long, value_enum, default_value = "intermediate")]
    experience: ExperienceArg,

    /// Skip the simulated processing delay
    #[arg(long)]
    instant: bool,

    /// Run a single query and exit instead of starting the REPL
    #[arg(short, long)]
    query: Option<String>,
}

fn print_banner() {
    println!(
        r"
+--------------------------------------------------------------+
|                      FinSage Advisor                         |
|                                                              |
|  Ask in natural language:                                    |
|    'Can you analyze AAPL for me?'                            |
|    'Predict where TSLA goes next month'                      |
|    'Recommend a strategy'                                    |
|    'Explain diversification'                                 |
|                                                              |
|  Commands:                                                   |
|    /context  - Show the simulated market context             |
|    /history  - Show past responses                           |
|    /help     - Show help                                     |
|    /exit     - Exit                                          |
+--------------------------------------------------------------+
"
    );
}

fn help_text() -> &'static str {
    "FinSage Advisor Commands:\n\
     /context - Show the simulated market context\n\
     /history - Show past responses this session\n\
     /help - Show help\n\
     /exit - Exit\n\
     Anything else is sent to the advisor as a query."
}

async fn handle_line(engine: &ResponseEngine, line: &str) -> bool {
    match line {
        "/exit" | "/quit" => return false,
        "/help" => println!("{}", help_text()),
        "/context" => println!("{}", format::render_context(engine.market_context())),
        "/history" => println!("{}", format::render_history(&engine.history_snapshot())),
        query => match engine.respond(query).await {
            Ok(response) => println!("{}", format::render_response(&response)),
            Err(e) => eprintln!("Error: {e}"),
        },
    }
    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    finsage_utils::init_tracing_with("warn,finsage_engine=info");

    let args = Args::parse();

    let profile = UserProfile {
        risk_tolerance: args.risk.into(),
        experience: args.experience.into(),
        ..UserProfile::default()
    };

    let config = if args.instant {
        EngineConfig::instant()
    } else {
        EngineConfig::default()
    };

    let engine = ResponseEngine::builder()
        .user_profile(profile)
        .config(config)
        .build()?;

    info!(session = %engine.session_id(), "advisor session started");

    if let Some(query) = args.query {
        let response = engine.respond(&query).await?;
        println!("{}", format::render_response(&response));
        return Ok(());
    }

    print_banner();
    println!(
        "Market context: {} market, {} volatility. Type /help for commands.\n",
        engine.market_context().current_market,
        engine.market_context().volatility
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("you> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                break;
            }
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if !handle_line(&engine, line).await {
            println!("Goodbye!");
            break;
        }
    }

    Ok(())
}
