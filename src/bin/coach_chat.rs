use anyhow::{Context, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use form_coach::coach::{
    ChatSession, HttpCoachClient, LoginOutcome, SendOutcome, Sender, QUICK_SUGGESTIONS,
};
use form_coach::config::Config;
use form_coach::speech::ConsoleSpeech;

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load_or_default(CONFIG_PATH);
    let client = HttpCoachClient::from_config(&config.coach).context("building HTTP client")?;

    println!("=== Coach Chat {} ===", env!("GIT_VERSION"));
    println!("backend: {}", client.base_url());
    match client.health().await {
        Ok(h) => println!("status: {}", h.status),
        Err(e) => println!("status: unreachable ({})", e),
    }
    println!();
    println!("commands:");
    println!("  /login <id>   - log in");
    println!("  /suggest <n>  - send a quick suggestion");
    println!("  /say <id>     - read a message aloud");
    println!("  /quit         - exit");
    println!("  anything else is sent to the coach");
    println!();
    for (i, s) in QUICK_SUGGESTIONS.iter().enumerate() {
        println!("  [{}] {}", i, s);
    }
    println!();

    let mut session = ChatSession::new(client);
    let mut speech = ConsoleSpeech::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, arg) = match input.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (input, ""),
        };

        match cmd {
            "/quit" | "/q" => break,
            "/login" => match session.login(arg).await {
                LoginOutcome::LoggedIn => print_new(&session, 0),
                LoginOutcome::Skipped => println!("usage: /login <id>"),
                LoginOutcome::Rejected(msg) | LoginOutcome::Unreachable(msg) => {
                    println!("! {}", msg)
                }
            },
            "/suggest" => {
                let Ok(index) = arg.parse::<usize>() else {
                    println!("usage: /suggest <0-{}>", QUICK_SUGGESTIONS.len() - 1);
                    continue;
                };
                let before = session.messages().len();
                let outcome = session.send_suggestion(index).await;
                report(&session, outcome, before);
            }
            "/say" => {
                let Ok(id) = arg.parse::<u64>() else {
                    println!("usage: /say <message id>");
                    continue;
                };
                if !session.read_aloud(id, &mut speech) {
                    println!("no message #{}", id);
                }
            }
            _ => {
                let before = session.messages().len();
                let outcome = session.send(input).await;
                report(&session, outcome, before);
            }
        }
    }

    Ok(())
}

fn report(session: &ChatSession<HttpCoachClient>, outcome: SendOutcome, before: usize) {
    match outcome {
        SendOutcome::Ignored if !session.is_logged_in() => println!("log in first: /login <id>"),
        SendOutcome::Ignored => {}
        SendOutcome::Replied | SendOutcome::Fallback => print_new(session, before),
    }
}

/// Prints messages appended since index `from`
fn print_new(session: &ChatSession<HttpCoachClient>, from: usize) {
    for m in session.messages().iter().skip(from) {
        let who = match m.sender {
            Sender::User => "you",
            Sender::Coach => "coach",
        };
        println!("#{} [{}] {}: {}", m.id, m.timestamp.format("%H:%M"), who, m.content);
    }
}
