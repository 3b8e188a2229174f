use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use crate::mcp;
use crate::tools::{
    self, DEFAULT_HISTORY_LIMIT, GetHistoryArgs, GetSessionDetailArgs, ListSessionsArgs, ToolError,
};
use crate::utils::resolve_claude_dir;

#[derive(Parser)]
#[command(name = "claude-json-reporter")]
#[command(version)]
#[command(about = "Report Claude Code projects, sessions and prompt history as JSON", long_about = None)]
pub struct Cli {
    /// Claude configuration directory (defaults to ~/.claude)
    #[arg(long, global = true, env = "CLAUDE_CONFIG_DIR", value_name = "DIR")]
    pub claude_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects with recorded sessions
    Projects,
    /// List the sessions of a project, newest first
    Sessions {
        /// Project path, e.g. /Users/alice/projects/my-app
        project_path: String,
    },
    /// Show the global prompt history, newest first
    History {
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,
        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,
        /// Only include prompts from this project path
        #[arg(long)]
        project: Option<String>,
        /// Maximum entries to return; 0 returns all
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT, allow_negative_numbers = true)]
        limit: i64,
    },
    /// Show the conversation and summary of one session
    Session {
        /// Project path the session belongs to
        project_path: String,
        /// Session ID
        session_id: String,
    },
    /// Serve the history tools over stdio (JSON-RPC, one message per line)
    Serve,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(ExitCode::SUCCESS);
    };

    let claude_dir = resolve_claude_dir(cli.claude_dir.as_deref())?;
    debug!(claude_dir = %claude_dir.display(), "Using Claude directory");

    let outcome = match command {
        Commands::Projects => tools::list_projects(&claude_dir).map(|r| print_json(&r)),
        Commands::Sessions { project_path } => {
            tools::list_sessions(&claude_dir, &ListSessionsArgs { project_path })
                .map(|r| print_json(&r))
        }
        Commands::History { start_date, end_date, project, limit } => {
            let args = GetHistoryArgs { start_date, end_date, project, limit: Some(limit) };
            tools::get_history(&claude_dir, &args).map(|r| print_json(&r))
        }
        Commands::Session { project_path, session_id } => {
            let args = GetSessionDetailArgs { project_path, session_id };
            tools::get_session_detail(&claude_dir, &args).map(|r| print_json(&r))
        }
        Commands::Serve => return serve(&claude_dir).map(|()| ExitCode::SUCCESS),
    };

    report(outcome)
}

fn serve(claude_dir: &Path) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    mcp::serve(claude_dir, stdin.lock(), stdout.lock())
}

fn report(outcome: Result<Result<()>, ToolError>) -> Result<ExitCode> {
    match outcome {
        Ok(printed) => printed.map(|()| ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write output")?;
    Ok(())
}
