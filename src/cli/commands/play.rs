//! Play command - Interactive game on stdin/stdout

use std::io;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{config::SessionConfig, session::Session},
    tictactoe::SortOrder,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game in the terminal")]
pub struct PlayArgs {
    /// Initial order of the move list
    #[arg(long, value_enum, default_value = "asc")]
    pub order: SortOrder,

    /// Only print the move list on request ('history')
    #[arg(long)]
    pub quiet_history: bool,

    /// Do not print a prompt (useful when piping commands in)
    #[arg(long)]
    pub no_prompt: bool,
}

impl PlayArgs {
    pub fn config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_order(self.order)
            .with_history(!self.quiet_history)
            .with_prompt(!self.no_prompt)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut session = Session::new(args.config());
    println!("Type 'help' for a list of commands.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
