//! basichtml CLI - rich-text document to HTML export tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use basichtml::model::{Document, Node, Run, RunContent};
use basichtml::{load_file, to_html_with_stats, EmissionStrategy, ExportOptions, ExportStats};

#[derive(Parser)]
#[command(name = "basichtml")]
#[command(version)]
#[command(about = "Export rich-text documents to minimal HTML", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a JSON document to HTML
    Export {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emission strategy
        #[arg(long, value_enum, default_value = "attribute", env = "BASICHTML_STRATEGY")]
        strategy: Strategy,

        /// Wrap output in clipboard fragment markers
        #[arg(long)]
        fragment_markers: bool,

        /// Table handling
        #[arg(long, value_enum, default_value = "skip")]
        tables: Tables,

        /// Maximum frame nesting depth
        #[arg(long, default_value_t = basichtml::render::DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Print export statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Show document information
    Info {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output information as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// Inline style declarations
    Attribute,
    /// Heading, paragraph and phrase tags
    Semantic,
}

impl From<Strategy> for EmissionStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Attribute => EmissionStrategy::Attribute,
            Strategy::Semantic => EmissionStrategy::SemanticTag,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Tables {
    /// Leave tables out of the output
    Skip,
    /// Render tables as rows of cells
    Render,
}

impl From<Tables> for basichtml::TableMode {
    fn from(tables: Tables) -> Self {
        match tables {
            Tables::Skip => basichtml::TableMode::Skip,
            Tables::Render => basichtml::TableMode::Render,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Export {
            input,
            output,
            strategy,
            fragment_markers,
            tables,
            max_depth,
            stats,
        } => {
            let options = ExportOptions::new()
                .with_strategy(strategy.into())
                .with_fragment_markers(fragment_markers)
                .with_table_mode(tables.into())
                .with_max_depth(max_depth);
            cmd_export(&input, output.as_deref(), &options, stats)
        }
        Commands::Info { input, json } => cmd_info(&input, json),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_export(
    input: &Path,
    output: Option<&Path>,
    options: &ExportOptions,
    show_stats: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    log::info!("Loaded {} ({} blocks)", input.display(), doc.block_count());

    let result = to_html_with_stats(&doc, options);

    if let Some(path) = output {
        fs::write(path, &result.html)?;
        eprintln!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", result.html);
    }

    if show_stats {
        print_stats(&result.stats);
    }

    Ok(())
}

fn print_stats(stats: &ExportStats) {
    eprintln!();
    eprintln!("{}", "Export Statistics".cyan().bold());
    eprintln!("{}", "─".repeat(40).dimmed());

    let rows = [
        ("Blocks", stats.block_count),
        ("List items", stats.list_item_count),
        ("Lists", stats.list_count),
        ("Images", stats.image_count),
        ("Anchors", stats.anchor_count),
        ("Links", stats.link_count),
        ("Frames", stats.frame_count),
        ("Tables", stats.table_count),
        ("Skipped tables", stats.skipped_table_count),
        ("Horizontal rules", stats.horizontal_rule_count),
        ("Suppressed blocks", stats.suppressed_block_count),
        ("Dropped objects", stats.dropped_object_count),
        ("Truncated frames", stats.truncated_frame_count),
    ];
    for (label, value) in rows {
        if value > 0 {
            eprintln!("{}: {}", label.bold(), value);
        }
    }
}

/// Structural counts for `info`.
#[derive(Default)]
struct Summary {
    frames: usize,
    tables: usize,
    objects: usize,
    links: usize,
    max_depth: usize,
}

impl Summary {
    fn collect(doc: &Document) -> Self {
        let mut summary = Summary::default();
        summary.visit(&doc.root().children, 0);
        summary
    }

    fn visit(&mut self, children: &[Node], depth: usize) {
        self.max_depth = self.max_depth.max(depth);
        for child in children {
            match child {
                Node::Block(block) => block.runs.iter().for_each(|run| self.count_run(run)),
                Node::Frame(frame) => {
                    if frame.is_table() {
                        self.tables += 1;
                    } else {
                        self.frames += 1;
                    }
                    self.visit(&frame.children, depth + 1);
                }
            }
        }
    }

    fn count_run(&mut self, run: &Run) {
        if matches!(run.content, RunContent::Object { .. }) {
            self.objects += 1;
        }
        if run.format.anchor_href.as_deref().is_some_and(|h| !h.is_empty()) {
            self.links += 1;
        }
    }
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_file(input)?;
    let summary = Summary::collect(&doc);
    let text = doc.plain_text();
    let words = text.split_whitespace().count();
    let list_items: usize = doc.lists().iter().map(|list| list.count()).sum();

    if json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "blocks": doc.block_count(),
            "length": doc.len(),
            "lists": doc.lists().len(),
            "list_items": list_items,
            "frames": summary.frames,
            "tables": summary.tables,
            "objects": summary.objects,
            "links": summary.links,
            "max_depth": summary.max_depth,
            "words": words,
            "default_font": doc.default_font(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!(
        "{}: {} {}",
        "Default font".bold(),
        doc.default_font().family,
        font_size_label(&doc)
    );
    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Length".bold(), doc.len());

    println!();
    println!("{}", "Structure".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {} ({} items)", "Lists".bold(), doc.lists().len(), list_items);
    println!("{}: {}", "Frames".bold(), summary.frames);
    println!("{}: {}", "Tables".bold(), summary.tables);
    println!("{}: {}", "Nesting depth".bold(), summary.max_depth);
    println!("{}: {}", "Objects".bold(), summary.objects);
    println!("{}: {}", "Links".bold(), summary.links);
    println!("{}: {}", "Words".bold(), words);

    Ok(())
}

fn font_size_label(doc: &Document) -> String {
    match doc.default_font().size {
        basichtml::model::FontSize::Points(pt) => format!("{}pt", pt),
        basichtml::model::FontSize::Pixels(px) => format!("{}px", px),
    }
}
