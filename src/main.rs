use onboard::client::HttpAccountClient;
use onboard::config::Config;
use onboard::runtime::Runtime;
use onboard::state::AppState;
use onboard::terminal::Terminal;
use std::sync::Arc;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let client = Arc::new(HttpAccountClient::from_config(&config));
    let terminal = Terminal::new();
    let mut runtime = Runtime::new(AppState::new(), terminal, client);
    runtime.run()?;
    Ok(())
}
