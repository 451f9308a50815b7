use std::path::Path;

use clap::Parser;
use serde_json::json;
use smartsuggest::{
    SearchService,
    cli::{self, Cli, Command},
    data_dir::DataDir,
    error::{self, Error},
    scoring,
    search::{self, SearchParams},
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("SMARTSUGGEST_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Command::Completions(args) = &cli.command {
        args.generate();
        return Ok(());
    }

    let snippets_dir = match cli.snippets_dir {
        Some(ref dir) => dir.clone(),
        None => DataDir::resolve(cli.data_dir.as_deref())?.snippets_dir(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            Error::Config(format!("failed to start tokio runtime: {e}"))
        })?;

    runtime.block_on(async {
        let service = SearchService::new(cli.strategy);
        service.initialize_corpus(&snippets_dir).await;
        run_command(&service, &cli.command, &snippets_dir).await
    })
}

async fn run_command(
    service: &SearchService,
    command: &Command,
    snippets_dir: &Path,
) -> error::Result<()> {
    match command {
        Command::Search(args) => {
            let results = service.execute(&args.params()).await;
            if args.json {
                println!("{}", search::format_json(&results, &args.query));
            } else if args.code {
                match search::top_code(&results) {
                    Some(code) => println!("{code}"),
                    None => {
                        return Err(Error::NotFound {
                            kind: "snippet",
                            name: args.query.clone(),
                        });
                    }
                }
            } else {
                print!("{}", search::format_human(&results));
            }
        }
        Command::List(args) => {
            let mut params = SearchParams::new("");
            params.all = true;
            let results = service.execute(&params).await;
            if args.json {
                println!("{}", search::format_json(&results, ""));
            } else {
                print!("{}", search::format_human(&results));
            }
        }
        Command::Get(args) => cmd_get(service, args)?,
        Command::Status(args) => cmd_status(service, snippets_dir, args.json),
        Command::Completions(args) => args.generate(),
    }
    Ok(())
}

fn cmd_get(service: &SearchService, args: &cli::GetArgs) -> error::Result<()> {
    let record = service
        .engine()
        .and_then(|engine| engine.corpus().find_by_title(&args.title))
        .ok_or_else(|| Error::NotFound {
            kind: "snippet",
            name: args.title.clone(),
        })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", record.code);
    }
    Ok(())
}

fn cmd_status(service: &SearchService, snippets_dir: &Path, json: bool) {
    let Some(engine) = service.engine() else {
        println!("Snippets are not loaded.");
        return;
    };
    let corpus = engine.corpus();

    if json {
        println!(
            "{}",
            json!({
                "snippets_dir": snippets_dir.display().to_string(),
                "source": corpus.source().to_string(),
                "records": corpus.len(),
                "strategy": engine.strategy_name(),
                "linguistic": scoring::linguistic_available(),
            })
        );
    } else {
        println!("Snippet directory: {}", snippets_dir.display());
        println!("Source: {}", corpus.source());
        println!("Records: {}", corpus.len());
        println!("Strategy: {}", engine.strategy_name());
    }
}
