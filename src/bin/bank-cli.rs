use clap::{Parser, Subcommand};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "bank-cli")]
#[command(about = "Client for the mock banking API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5002")]
    url: String,

    #[arg(long, default_value = "CUST001")]
    customer: String,

    #[arg(long, default_value = "WEB")]
    channel_code: String,

    #[arg(long, default_value = "lucy")]
    username: String,

    #[arg(long, default_value = "en")]
    lang: String,

    #[arg(long, default_value = "NL")]
    country_code: String,

    /// Session id sent with every request. A fresh one is generated when omitted.
    #[arg(long)]
    session_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List inbox messages
    Messages,
    /// Count unread messages
    Unread,
    /// Create an inbox message
    Send {
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long = "type")]
        kind: Option<String>,
    },
    /// Show one message
    Read { reference: String },
    /// Delete a message
    Delete { reference: String },
    /// Show the source-of-funds questions
    Questions,
    /// Change the customer password
    SetPassword { password: String },
    /// Check a password against the current one
    CheckPassword { password: String },
}

fn gate_headers(cli: &Cli) -> Result<HeaderMap, Box<dyn std::error::Error>> {
    let session_id = cli
        .session_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let mut headers = HeaderMap::new();
    for (name, value) in [
        ("channelCode", cli.channel_code.as_str()),
        ("username", cli.username.as_str()),
        ("lang", cli.lang.as_str()),
        ("countryCode", cli.country_code.as_str()),
        ("sessionId", session_id.as_str()),
    ] {
        headers.insert(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }
    Ok(headers)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let headers = gate_headers(&cli)?;
    let base = cli.url.trim_end_matches('/');
    let customer = &cli.customer;

    let request = match &cli.command {
        Commands::Messages => client.get(format!("{base}/customer/messages/list/{customer}")),
        Commands::Unread => client.get(format!("{base}/customer/messages/unread/{customer}")),
        Commands::Send {
            subject,
            content,
            kind,
        } => {
            let mut body = serde_json::Map::new();
            if let Some(subject) = subject {
                body.insert("subject".into(), json!(subject));
            }
            if let Some(content) = content {
                body.insert("content".into(), json!(content));
            }
            if let Some(kind) = kind {
                body.insert("type".into(), json!(kind));
            }
            client
                .post(format!("{base}/customer/messages/{customer}"))
                .json(&body)
        }
        Commands::Read { reference } => {
            client.get(format!("{base}/customer/messages/{customer}/{reference}"))
        }
        Commands::Delete { reference } => {
            client.delete(format!("{base}/customer/messages/{customer}/{reference}"))
        }
        Commands::Questions => client.get(format!("{base}/api/sof-questions")),
        Commands::SetPassword { password } => client
            .put(format!("{base}/api/personal-details/password"))
            .json(&json!({ "password": password })),
        Commands::CheckPassword { password } => client
            .post(format!("{base}/api/personal-details/validate-password"))
            .json(&json!({ "password": password })),
    };

    let res = request.headers(headers).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
