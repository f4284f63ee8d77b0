//! Interactive console for reading numbers aloud in Thai.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use thainum::read_number_lossy;

const PROMPT: &str = "กรุณาใส่ตัวเลข (หรือพิมพ์ 'exit' เพื่อออก): ";

/// Reads decimal numbers aloud in Thai.
///
/// With no arguments an interactive prompt starts; type a number per line,
/// or `exit` to quit.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Numbers to read non-interactively, one reading per line.
    #[arg(allow_negative_numbers = true)]
    numbers: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.numbers.is_empty() {
        for number in &cli.numbers {
            println!("{}", read_number_lossy(number));
        }
        return Ok(());
    }

    repl(&mut io::stdin().lock(), &mut io::stdout())
}

/// Prompt, read a line, print `→ reading` and a blank line; a trimmed
/// case-insensitive `exit` or end of input ends the loop. Malformed numbers
/// print the fixed error reading and the loop continues.
fn repl(input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim();
        if entry.eq_ignore_ascii_case("exit") {
            break;
        }
        writeln!(output, "→ {}\n", read_number_lossy(entry))?;
    }
    Ok(())
}
