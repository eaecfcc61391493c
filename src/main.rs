fn main() {
    if let Err(e) = rawcook::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
