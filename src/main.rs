use std::io::{self, Write};
use std::process;
use bicolor::{Graph, Strategy, Verdict};

fn report(verdict: Verdict) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "{}", verdict)?;
    out.flush()
}

fn main() {
    env_logger::init();
    // Read the graph and decide with the classic single sweep.
    let g = match Graph::new_from_stdin() {
        Ok(g) => g,
        Err(err) => {
            eprintln!("invalid input: {}", err);
            process::exit(1);
        }
    };
    let verdict = bicolor::check(&g, Strategy::SinglePass);
    if let Err(err) = report(verdict) {
        eprintln!("failed to write result: {}", err);
        process::exit(1);
    }
}
