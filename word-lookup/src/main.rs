use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use word_lookup::app::{App, LookupOutcome};
use word_lookup::config::Config;
use word_lookup::{logging, web};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve { addr: None }) {
        Command::Serve { addr } => {
            let addr = addr.unwrap_or(config.server.addr);
            let app = Arc::new(App::new(&config));
            web::serve(app, addr)
                .await
                .with_context(|| format!("Failed to serve on {addr}"))?;
        }
        Command::Define { word } => {
            define_word(&App::new(&config), &word).await;
        }
    }
    Ok(())
}

async fn define_word(app: &App, word: &str) {
    match app.submit(word).await {
        LookupOutcome::Rendered => {
            let document = app.document();
            for section in document.content() {
                println!("{}", section.to_html());
            }
            if let Some(source) = document.source() {
                println!("{}", source.to_html());
            }
        }
        LookupOutcome::NotFound | LookupOutcome::Failed(_) => {
            println!("{}", app.document().error().text);
        }
        LookupOutcome::Superseded => {}
    }
}
