//! chatdigest CLI binary entrypoint.

fn main() {
    if let Err(err) = chatdigest_cli::app::run() {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
