use std::env;
use std::process::ExitCode;

mod api;
mod items;
#[cfg(test)]
mod test_utils;

use api::ApiConfig;
use api::items::{ItemsApi, NewItem};
use items::CreateItemState;

fn print_welcome() {
    println!("Welcome to the items console");
    println!("Creates a named item on the configured backend.");
    println!();
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    print_welcome();

    let mut args = env::args().skip(1);
    let Some(name) = args.next() else {
        eprintln!("usage: app <name> [description]");
        return ExitCode::FAILURE;
    };
    let description = args.next();

    let config = ApiConfig::from_env();
    println!("Backend: {}", config.base_url);

    let mut creation = CreateItemState::new(ItemsApi::with_config(config));
    match creation.create(&NewItem { name, description }).await {
        Some(item) => {
            println!("Created item:");
            println!("{}", serde_json::to_string_pretty(&item).unwrap_or_default());
            ExitCode::SUCCESS
        }
        None => {
            eprintln!(
                "Failed to create item: {}",
                creation.create_error.as_deref().unwrap_or("unknown error")
            );
            ExitCode::FAILURE
        }
    }
}
