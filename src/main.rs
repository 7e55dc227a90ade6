use clap::{Parser, Subcommand};
use filecity::oracle::{max_height_at, stack_visual_top};
use filecity::{layout, load_tree, CityLayout, LayoutRules, Node, PinSet};
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "filecity", version, about = "Lay out a scanned file tree as a city")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct Inputs {
    /// Scanned tree as JSON
    #[arg(long)]
    tree: PathBuf,
    /// Layout rules JSON (defaults when omitted)
    #[arg(long)]
    rules: Option<PathBuf>,
    /// JSON array of pinned paths
    #[arg(long)]
    pins: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the building primitives for the tree root's contents
    Layout {
        #[command(flatten)]
        inputs: Inputs,
        /// Output path; stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the tallest obstruction at a world x/z position
    Probe {
        #[command(flatten)]
        inputs: Inputs,
        #[arg(long, allow_hyphen_values = true)]
        x: f32,
        #[arg(long, allow_hyphen_values = true)]
        z: f32,
    },
    /// Print the tiers of one node and its visual top
    Stack {
        #[command(flatten)]
        inputs: Inputs,
        /// Path of the node as it appears in the tree
        #[arg(long)]
        path: String,
    },
}

fn build_city(inputs: &Inputs) -> Result<(Node, CityLayout), Box<dyn Error>> {
    let tree = load_tree(&inputs.tree)?;
    let rules = match &inputs.rules {
        Some(path) => LayoutRules::load(path)?,
        None => LayoutRules::default(),
    };
    let pins = match &inputs.pins {
        Some(path) => PinSet::load_paths(path)?,
        None => PinSet::new(),
    };
    let city = layout(&tree, &rules, &pins);
    Ok((tree, city))
}

fn write_layout(city: &CityLayout, output: Option<&Path>, pretty: bool) -> Result<(), Box<dyn Error>> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut writer, city.blocks())?;
    } else {
        serde_json::to_writer(&mut writer, city.blocks())?;
    }
    writeln!(writer)?;
    writer.flush()?;
    if let Some(path) = output {
        log::info!("wrote {} blocks to {}", city.len(), path.display());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Layout {
            inputs,
            output,
            pretty,
        } => {
            let (_, city) = build_city(&inputs)?;
            write_layout(&city, output.as_deref(), pretty)?;
        }
        Command::Probe { inputs, x, z } => {
            let (_, city) = build_city(&inputs)?;
            match max_height_at(&city, x, z) {
                Some(height) => println!("{height}"),
                None => println!("ground"),
            }
        }
        Command::Stack { inputs, path } => {
            let (tree, city) = build_city(&inputs)?;
            let Some(node) = tree.children.iter().find(|child| child.path == path) else {
                return Err(format!("{path} is not a direct child of {}", tree.path).into());
            };
            let tiers = city.stack(node.id);
            for tier in tiers {
                println!(
                    "y={:<4} h={:<4} footprint={}x{} shape={}",
                    tier.base_y(),
                    tier.height,
                    tier.footprint.width,
                    tier.footprint.depth,
                    tier.shape_kind().label()
                );
            }
            if let Some(top) = stack_visual_top(tiers) {
                println!("visual top {} at ({}, {})", top.y, top.apex.x, top.apex.y);
            }
        }
    }
    Ok(())
}
