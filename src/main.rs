use std::process;

fn main() {
    process::exit(npcolumns::cli::run());
}
