use std::io;

fn main() {
    eights_cli::logging::init_logging();
    let code = eights_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
