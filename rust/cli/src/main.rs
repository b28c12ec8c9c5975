use std::io;
use std::process;

fn main() {
    farkell_cli::logging::init_logging();
    let mut out = io::stdout();
    let mut err = io::stderr();
    let code = farkell_cli::run(std::env::args(), &mut out, &mut err);
    process::exit(code);
}
