use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use storyloom::config::is_stdin;
use storyloom::{
    Command, Config, GenerationContext, MarkdownRenderer, ReferenceResolver, Story, export_site, pages,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// JSON shape printed by `resolve --json`.
#[derive(Serialize)]
struct ResolveOutput<'a> {
    prompt: &'a str,
    notice: Vec<String>,
    context: GenerationContext<'a>,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn resolve(story_path: &Path, prompt: &str, chapter: Option<usize>, json: bool) -> Result<()> {
    let story = Story::load(story_path)?;
    let resolved = ReferenceResolver::from_story(&story).resolve(prompt);

    if json {
        let context = GenerationContext::new(&story, &resolved, chapter);
        let output = ResolveOutput {
            prompt: &resolved.cleaned_prompt,
            notice: resolved.notice(),
            context,
        };
        let text =
            serde_json::to_string_pretty(&output).context("Failed to serialize context")?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", resolved.cleaned_prompt);
    for line in resolved.notice() {
        println!("{}", line);
    }

    Ok(())
}

fn render(input: &Path, output: Option<&Path>, page: bool, title: &str) -> Result<()> {
    let renderer = MarkdownRenderer::new();
    let fragment = if is_stdin(input) {
        let mut markdown = String::new();
        io::stdin()
            .read_to_string(&mut markdown)
            .context("Failed to read markdown from stdin")?;
        renderer.render(&markdown)
    } else {
        renderer.render_file(input)?
    };

    let html = if page {
        pages::preview::generate(title, &fragment).into_string()
    } else {
        fragment
    };

    match output {
        Some(path) => {
            fs::write(path, html)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", html),
    }

    Ok(())
}

fn export(story_path: &Path, output: &Path, open_index: bool) -> Result<()> {
    let story = Story::load(story_path)?;
    let summary = export_site(&story, output)?;

    if summary.chapters_failed > 0 {
        warn!("{} chapter pages could not be written", summary.chapters_failed);
    }
    info!("Preview site ready: {}", summary.index.display());

    if open_index && let Err(e) = open::that(&summary.index) {
        warn!("Failed to open browser: {}", e);
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config);
    config.validate().context("Invalid configuration")?;

    match &config.command {
        Command::Resolve {
            story,
            prompt,
            chapter,
            json,
        } => resolve(story, prompt, *chapter, *json),
        Command::Render {
            input,
            output,
            page,
            title,
        } => render(input, output.as_deref(), *page, title),
        Command::Export {
            story,
            output,
            open,
        } => export(story, output, *open),
    }
}
