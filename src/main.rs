use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::*;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use structopt::StructOpt;

use lr35902_alu::cpu::{CarryBound, Config, Cpu};
use lr35902_alu::tui::{self, Outcome};

#[derive(Debug, StructOpt)]
#[structopt(about)]
struct Opt {
    /// Detect carries against the signed maximum (127 or 32767) instead of the unsigned one, for
    /// compatibility with traces from the reference core.
    #[structopt(long)]
    reference_carry: bool,

    /// A file of debugger commands to run instead of starting the interactive prompt.
    #[structopt(long, parse(from_os_str))]
    script: Option<PathBuf>,
}

impl Opt {
    fn config(&self) -> Config {
        let carry_bound = if self.reference_carry {
            CarryBound::SignedMax
        } else {
            CarryBound::Unsigned
        };

        Config { carry_bound }
    }
}

fn run_script(cpu: &mut Cpu, path: &Path) -> Result<()> {
    info!("running script '{}'", path.display());

    let script = fs::read_to_string(path)
        .with_context(|| format!("could not read script '{}'", path.display()))?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    for (number, line) in script.lines().enumerate() {
        let outcome = tui::parse_command(cpu, line, &mut stdout)
            .with_context(|| format!("line {}: `{}`", number + 1, line.trim()))?;

        if outcome == Outcome::Quit {
            break;
        }
    }

    Ok(())
}

fn run_prompt(cpu: &mut Cpu) -> Result<()> {
    let mut rl = Editor::<()>::new();

    loop {
        let line = match rl.readline("alu [?]: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        rl.add_history_entry(line.as_str());

        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        match tui::parse_command(cpu, &line, &mut stdout) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Continue) => (),
            Err(e) => writeln!(stdout, "error: {:#}", e)?,
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let opt = Opt::from_args();
    let mut cpu = Cpu::with_config(opt.config());

    match &opt.script {
        Some(script) => run_script(&mut cpu, script),
        None => run_prompt(&mut cpu),
    }
}
