mod console;
mod shell;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut shell = shell::Shell::new();
    if let Err(err) = shell.run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
