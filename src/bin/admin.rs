//! Admin utility for inspecting the regulatory document tree.
//!
//! This consolidates the ad-hoc inspection workflows into a single CLI with
//! subcommands, sharing the same loader and config as the MCP server.
//!
//! Usage:
//!   cargo run --bin admin -- stats
//!   cargo run --bin admin -- search "customer funds"
//!   cargo run --bin admin -- crossref 4.1.1
//!   cargo run --bin admin -- url rts "Aim 12"
//!   cargo run --bin admin -- ask "When must operators verify customer age?"

use anyhow::Result;
use clap::{Parser, Subcommand};
use ukgc_regulatory_mcp::clients::{AnswerRequest, create_answer_client};
use ukgc_regulatory_mcp::config::Config;
use ukgc_regulatory_mcp::crossref::{self, CrossRefOutcome};
use ukgc_regulatory_mcp::framework::Framework;
use ukgc_regulatory_mcp::links::{UrlMap, format_reference_link, resolve_url};
use ukgc_regulatory_mcp::prompts::{SYSTEM_PROMPT, build_context, build_question_prompt};
use ukgc_regulatory_mcp::search;
use ukgc_regulatory_mcp::store::{DocumentStore, LoadReport, load_documents};

#[derive(Parser)]
#[command(name = "admin")]
#[command(about = "UKGC regulatory document utilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show document counts, index names, and load warnings
    Stats,
    /// Keyword search across the loaded documents
    Search {
        /// Search phrase
        query: String,
        /// Restrict to one framework (lccp, iso27001, rts)
        #[arg(long)]
        framework: Option<String>,
    },
    /// Resolve LCCP cross-references for a provision
    Crossref {
        /// LCCP provision id, e.g. 4.1.1
        provision_id: String,
    },
    /// Resolve the documentation URL for a provision
    Url {
        /// Framework (lccp, iso27001, rts)
        framework: String,
        /// Provision id, e.g. "Aim 12" or "A.9.4.2"
        provision_id: String,
    },
    /// Ask a question against the configured answering service
    Ask {
        /// The question text
        question: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats => stats(),
        Commands::Search { query, framework } => run_search(&query, framework.as_deref()),
        Commands::Crossref { provision_id } => run_crossref(&provision_id),
        Commands::Url {
            framework,
            provision_id,
        } => run_url(&framework, &provision_id),
        Commands::Ask { question } => ask(&question).await,
    }
}

fn load_tree() -> Result<(DocumentStore, LoadReport, Config)> {
    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;
    let (store, report) = load_documents(std::path::Path::new(&config.system.documents_path));
    Ok((store, report, config))
}

/// Show document counts, index names, and load warnings
fn stats() -> Result<()> {
    let (store, report, config) = load_tree()?;

    println!("📂 Document tree: {}", config.system.documents_path);
    for (framework, count) in &report.loaded {
        println!("  📚 {:<9} {} document(s)", framework.to_string(), count);
    }
    println!("  📇 index     {} document(s)", report.index_count);

    let index_names = store.index_names();
    if !index_names.is_empty() {
        println!("\nIndex documents:");
        for name in index_names {
            println!("  - {}", name);
        }
    }

    let provision_count: usize = Framework::ALL
        .iter()
        .flat_map(|fw| store.documents(*fw))
        .map(|doc| doc.provisions.len())
        .sum();
    println!(
        "\nTotal: {} document(s), {} extracted provision(s)",
        store.total_documents(),
        provision_count
    );

    if !report.warnings.is_empty() {
        println!("\n⚠️  {} file(s) skipped:", report.warnings.len());
        for warning in &report.warnings {
            println!("  - {}: {}", warning.path.display(), warning.reason);
        }
    }

    Ok(())
}

/// Keyword search across the loaded documents
fn run_search(query: &str, framework: Option<&str>) -> Result<()> {
    let (store, _report, _config) = load_tree()?;
    let framework = framework.map(str::parse::<Framework>).transpose()?;

    let results = search::search(&store, query, framework)?;
    if results.is_empty() {
        println!("No matches for '{}'", query);
        return Ok(());
    }

    let urls = UrlMap::from_store(&store);
    println!("Found {} match(es) for '{}':", results.len(), query);
    for result in &results {
        println!(
            "\n{}",
            format_reference_link(urls.as_ref(), result.framework, &result.id, &result.title)
        );
        println!("   score: {} | source: {}", result.score(), result.filename);
        if !result.snippet.is_empty() {
            println!("   {}", result.snippet);
        }
    }

    Ok(())
}

/// Resolve LCCP cross-references for a provision
fn run_crossref(provision_id: &str) -> Result<()> {
    let (store, _report, _config) = load_tree()?;

    match crossref::resolve(&store, Framework::Lccp, provision_id) {
        CrossRefOutcome::Found(entry) => {
            println!("🔗 {}: {}", entry.id, entry.title);
            println!(
                "  ISO 27001 controls: {}",
                join_or_none(&entry.iso27001_controls)
            );
            println!("  RTS chapters:       {}", join_or_none(&entry.rts_chapters));
        }
        CrossRefOutcome::NotFound => {
            println!("No cross-references recorded for {}", provision_id);
        }
        CrossRefOutcome::Unavailable => {
            println!("❌ Cross-reference mapping not loaded");
        }
    }

    Ok(())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

/// Resolve the documentation URL for a provision
fn run_url(framework: &str, provision_id: &str) -> Result<()> {
    let (store, _report, _config) = load_tree()?;
    let framework: Framework = framework.parse()?;

    match resolve_url(&store, framework, provision_id) {
        Some(entry) => {
            println!("🔗 {}", entry.url);
            if !entry.title.is_empty() {
                println!("   {}", entry.title);
            }
        }
        None => println!("No URL mapping for {} {}", framework, provision_id),
    }

    Ok(())
}

/// Ask a question against the configured answering service
async fn ask(question: &str) -> Result<()> {
    let (store, _report, config) = load_tree()?;
    let answerer = create_answer_client(&config)?;

    let results = search::search(&store, question, None)?;
    let context = build_context(&results);
    let prompt = build_question_prompt(question, &context);
    let request = AnswerRequest {
        system: SYSTEM_PROMPT.to_string(),
        prompt,
        max_tokens: config.system.answer_max_tokens,
    };

    println!("🤖 Asking {} ...", answerer.model());
    match answerer.answer(&request).await {
        Ok(text) => println!("\n{}", text),
        Err(err) => eprintln!("⚠️  Answering service failed: {}", err),
    }

    if !results.is_empty() {
        let urls = UrlMap::from_store(&store);
        println!("\nRelated documents:");
        for result in &results {
            println!(
                "  {}",
                format_reference_link(urls.as_ref(), result.framework, &result.id, &result.title)
            );
        }
    }

    Ok(())
}
