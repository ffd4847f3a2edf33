use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use plainwiki::logger::Logger;
use plainwiki::utils::write_port_file;
use plainwiki::{app, AppState, Config, PageStore, TemplateSet, WikiError};

/// Plainwiki server
#[derive(Parser, Debug)]
#[command(name = "plainwiki")]
#[command(about = "A minimal personal wiki")]
#[command(version)]
struct Args {
    /// Listen on an ephemeral loopback port and write it to final-port.txt
    #[arg(long)]
    addr: bool,

    /// Directory holding one <title>.txt file per page
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Directory holding view.html and edit.html
    #[arg(short, long, default_value = "tmpl")]
    template_dir: PathBuf,

    /// Port used when --addr is not given
    #[arg(short, long)]
    port: Option<u16>,

    /// Host used when --addr is not given
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    let args = Args::parse();
    if let Err(e) = Logger::init() {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::with_custom(args.data_dir, args.template_dir, args.port, args.host, args.addr);

    let store = PageStore::open(config.data_dir.clone())?;
    let templates = TemplateSet::load(&config.template_dir)?;
    let state = AppState::new(store, templates);

    let listener = TcpListener::bind(config.bind_addr()?).await?;
    let local = listener.local_addr()?;
    if config.ephemeral {
        write_port_file(&config.port_file, local)?;
        log::info!("Wrote listen address to {:?}", config.port_file);
    }

    log::info!("Wiki listening on http://{}", local);
    axum::serve(listener, app(state)).await.map_err(WikiError::from)
}
