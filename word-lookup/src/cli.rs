use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "word-lookup", about = "Dictionary lookup widget", version)]
pub struct Cli {
    /// Config file to use instead of ~/.config/word-lookup/config.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level for word-lookup and the dictionary client (overrides RUST_LOG).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the widget over HTTP (the default).
    Serve {
        /// Address to listen on.
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
    /// Look a word up once and print the rendered markup.
    Define {
        /// The word, as it would be typed into the search field.
        word: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["word-lookup"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn define_takes_the_word() {
        let cli =
            Cli::try_parse_from(["word-lookup", "--log-level", "debug", "define", "hello"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Some(Command::Define { word }) if word == "hello"));
    }

    #[test]
    fn serve_accepts_an_address() {
        let cli = Cli::try_parse_from(["word-lookup", "serve", "--addr", "0.0.0.0:9000"]).unwrap();
        match cli.command {
            Some(Command::Serve { addr }) => {
                assert_eq!(addr, Some("0.0.0.0:9000".parse::<SocketAddr>().unwrap()));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
