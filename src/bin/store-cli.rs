use clap::{Parser, Subcommand};
use reqwest::{header::ALLOW, Method};

#[derive(Parser)]
#[command(name = "store-cli")]
#[command(about = "Command-line client for the Collectible Store API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:4567")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List,
    /// Fetch one user
    Get { id: String },
    /// Add a user from a JSON body
    Add { body: String },
    /// Update a user with a JSON body
    Update { id: String, body: String },
    /// Delete a user
    Delete { id: String },
    /// Show allowed methods and whether the user exists
    Options { id: String },
}

impl Commands {
    fn request(&self, base: &str) -> (Method, String, Option<String>) {
        let base = base.trim_end_matches('/');
        match self {
            Commands::List => (Method::GET, format!("{}/users", base), None),
            Commands::Get { id } => (Method::GET, format!("{}/users/{}", base, id), None),
            Commands::Add { body } => (Method::POST, format!("{}/users", base), Some(body.clone())),
            Commands::Update { id, body } => (
                Method::PUT,
                format!("{}/users/{}", base, id),
                Some(body.clone()),
            ),
            Commands::Delete { id } => (Method::DELETE, format!("{}/users/{}", base, id), None),
            Commands::Options { id } => (Method::OPTIONS, format!("{}/users/{}", base, id), None),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let (method, url, body) = cli.command.request(&cli.url);
    let mut req = client.request(method, url);
    if let Some(body) = body {
        req = req
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
    }

    print_response(req.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    println!("Status: {}", status);
    if let Some(allow) = res.headers().get(ALLOW) {
        println!("Allow: {}", allow.to_str()?);
    }

    let text = res.text().await?;
    if text.is_empty() {
        return Ok(());
    }

    // Bodies echo client input and may not be valid JSON
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
