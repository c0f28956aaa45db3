use clap::Args;
use puttforge::config::GlobalParams;
use puttforge::PfResult;
use std::io::{self, BufRead, Write};

#[derive(Args, Debug, Clone)]
pub struct ClearArgs {
    /// Skip the confirmation prompt.
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}

pub fn run(args: ClearArgs, global: &GlobalParams) -> PfResult<()> {
    let store = global.store();

    if !store.exists() {
        println!("No session data found at {}.", store.path().display());
        return Ok(());
    }

    if !args.yes && !confirm(&format!(
        "Delete all history in {}? This cannot be undone. Type 'yes': ",
        store.path().display()
    ))? {
        println!("Aborted, nothing deleted.");
        return Ok(());
    }

    store.clear()?;
    println!("🗑  All history deleted.");
    Ok(())
}

fn confirm(prompt: &str) -> PfResult<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}
