mod config;
mod openai;
mod snapshot;

use std::env;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use getopts::Options;

use helpdesk_core::ai::{Capabilities, LanguageModel, Summarizer};
use helpdesk_core::page::watcher::presence_channel;
use helpdesk_core::template::{TemplateEngine, TemplateSet};
use helpdesk_core::ui::buttons::EXTRACT_BUTTON_ID;
use helpdesk_core::Assistant;

use crate::config::Config;
use crate::openai::OpenAiCapability;
use crate::snapshot::PageSnapshot;

fn print_usage(program: &str, opts: Options) {
    let brief = format!("Usage: {} -p PAGE [OPTIONS]", program);
    print!("{}", opts.usage(&brief));
    println!("\nButtons:");
    println!("  extract-btn           Extract & Summarise Comments");
    println!("  single-line-summary   Fill time");
    println!("  first-strike          3rd Strike (template1)");
    println!("  second-strike         2nd Strike (template2)");
    println!("  closure               Closure (template3)");
    println!("\nEnvironment variables:");
    println!("  OPENAI_API_KEY             Enables the language model (optional)");
    println!("  HELPDESK_TEMPLATES         Template file (default templates.json)");
    println!("  HELPDESK_MENTION_DOMAIN    Mail domain turned into mentions (default eviosys)");
    println!("  HELPDESK_STREAM_DELAY_MS   Delay between streamed updates (default 5)");
}

/// AI capabilities for the run. Without a usable client the assistant still
/// installs buttons and fills templates.
fn build_capabilities(config: &Config) -> Capabilities {
    let Some(api_key) = &config.openai_api_key else {
        log::info!("OPENAI_API_KEY not set, AI features are unavailable");
        return Capabilities::default();
    };

    match OpenAiCapability::new(api_key) {
        Ok(openai) => {
            let openai = Arc::new(openai);
            Capabilities::new(
                Some(openai.clone() as Arc<dyn LanguageModel>),
                Some(openai as Arc<dyn Summarizer>),
            )
        }
        Err(e) => {
            log::error!("Failed to create OpenAI client, AI features are unavailable: {}", e);
            Capabilities::default()
        }
    }
}

fn load_templates(config: &Config) -> Option<TemplateSet> {
    match TemplateSet::load(&config.templates_path) {
        Ok(templates) => {
            log::info!("Templates loaded from {}", config.templates_path.display());
            Some(templates)
        }
        Err(e) => {
            log::error!(
                "Failed to load templates from {}: {}",
                config.templates_path.display(),
                e
            );
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("p", "page", "Page snapshot to work on (JSON)", "FILE");
    opts.optopt("o", "output", "Write the updated snapshot here instead of stdout", "FILE");
    opts.optflag("s", "summarize", "Extract & summarise the comment history");
    opts.optmulti("c", "click", "Press a button by id (repeatable)", "BUTTON");
    opts.optflag("h", "help", "Show this help message");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("Error parsing arguments: {}", f);
            print_usage(&program, opts);
            process::exit(1);
        }
    };

    if matches.opt_present("h") {
        print_usage(&program, opts);
        return Ok(());
    }

    let Some(page_path) = matches.opt_str("p") else {
        eprintln!("Error: a page snapshot (-p) is required");
        print_usage(&program, opts);
        process::exit(1);
    };

    let config = Config::from_env()?;
    let engine = TemplateEngine::new(&config.mention_domain)?;
    let assistant = Assistant::new(
        build_capabilities(&config),
        load_templates(&config),
        engine,
        config.stream_delay,
    );

    let mut page = PageSnapshot::load(&page_path)?;
    let ticket = assistant.open_ticket(&mut page).unwrap_or_default();

    // The snapshot is a single moment: report the editor once, then stop reporting.
    let (editor_tx, mut editor_rx) = presence_channel();
    editor_tx.send_replace(page.editor.as_ref().map(|_| ()));
    drop(editor_tx);
    assistant.watch_comment_editor(&mut page, &mut editor_rx).await;

    let mut clicks = matches.opt_strs("c");
    if matches.opt_present("s") {
        clicks.insert(0, EXTRACT_BUTTON_ID.to_string());
    }
    for id in &clicks {
        if !assistant.click(&mut page, &ticket, id).await {
            eprintln!("Unknown button: {}", id);
        }
    }

    let json = page.to_json()?;
    match matches.opt_str("o") {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("Failed to write page snapshot {}", path))?,
        None => println!("{}", json),
    }

    Ok(())
}
