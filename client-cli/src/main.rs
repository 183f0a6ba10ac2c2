use std::io;
use std::path::Path;

use eyre::WrapErr;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use common::config::Config;
use tracing::{error, info, metadata::LevelFilter, trace};
use tracing_subscriber::EnvFilter;

mod system_clipboard;
mod command;
mod session;
mod terminal;

use crate::system_clipboard::SystemClipboard;
use crate::command::Command;
use crate::session::Session;
use crate::terminal::Terminal;

fn setup_logger() -> eyre::Result<()> {

    let filter = EnvFilter::from_default_env()
        // Set the base level when not matched by other directives to WARN.
        .add_directive(LevelFilter::WARN.into())
        .add_directive("common=trace".parse()?)
        .add_directive("client_common=trace".parse()?)
        .add_directive("client_cli=trace".parse()?)
    ;


    let subscriber = tracing_subscriber::FmtSubscriber::builder()
    .with_max_level(tracing::Level::TRACE)
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    Ok(())
}

async fn load_config(path: &Path) -> eyre::Result<Config> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Config::from_toml(&text).wrap_err_with(|| format!("invalid config {}", path.display()))?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("no {} found, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e).wrap_err_with(|| format!("failed to read {}", path.display())),
    }
}

fn main() -> eyre::Result<()>{
    color_eyre::install()?;
    setup_logger()?;

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    let config = rt.block_on(load_config(Path::new(common::consts::CONFIG_PATH)))?;
    trace!(?config, "loaded config");

    let clipboard = SystemClipboard::default();
    let mut session = Session::new(&config);
    let mut term = Terminal::new(io::stdout());

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(&config.history_path).is_err() {
        println!("No previous history.");
    }
    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                match Command::parse(&line) {
                    Ok(command) => {
                        if let Err(e) = rt.block_on(session.handle(command, &clipboard, &mut term)) {
                            error!("{:?}", e);
                        }
                    }
                    Err(e) => {
                        error!("{}", e);
                    }
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break
            }
        }
    }
    rl.save_history(&config.history_path)?;
    Ok(())
}
