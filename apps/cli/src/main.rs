use std::process;

fn main() {
    if let Err(e) = flashcards_cli::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
