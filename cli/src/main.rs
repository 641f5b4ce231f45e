//! snaplayout CLI - mobile layout optimization for extracted PDF blocks

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use studysnap_layout::{
    optimize_request, to_json, BlockClassifier, ErrorMode, JsonFormat, LayoutOptions,
    LayoutRequest, LayoutResult, VisionData,
};

#[derive(Parser)]
#[command(name = "snaplayout")]
#[command(author = "StudySnap")]
#[command(version)]
#[command(about = "Group PDF-extracted blocks into mobile-ready sections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize one or more block files into section layouts (JSON)
    Optimize {
        /// Input block files (a JSON array of blocks or a request object)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file for a single input, or output directory for several
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Content type selecting the palette (e.g. "election", "newsletter")
        #[arg(long, env = "SNAPLAYOUT_CONTENT_TYPE")]
        content_type: Option<String>,

        /// Target page width echoed into the layout summary
        #[arg(long)]
        page_width: Option<u32>,

        /// Vision annotations file ({"content_blocks": [...]})
        #[arg(long, value_name = "FILE")]
        vision: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Reject blocks with no type or negative geometry
        #[arg(long)]
        strict: bool,
    },

    /// Show block role tallies
    Analyze {
        /// Input block file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show the section breakdown of a page
    Sections {
        /// Input block file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Content type selecting the palette
        #[arg(long, env = "SNAPLAYOUT_CONTENT_TYPE")]
        content_type: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Optimize {
            inputs,
            output,
            content_type,
            page_width,
            vision,
            compact,
            strict,
        } => {
            let settings = OptimizeSettings {
                content_type,
                page_width,
                vision,
                format: if compact {
                    JsonFormat::Compact
                } else {
                    JsonFormat::Pretty
                },
                error_mode: if strict {
                    ErrorMode::Strict
                } else {
                    ErrorMode::Lenient
                },
            };
            cmd_optimize(&inputs, output.as_deref(), &settings)
        }
        Commands::Analyze { input } => cmd_analyze(&input),
        Commands::Sections {
            input,
            content_type,
        } => cmd_sections(&input, content_type),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

struct OptimizeSettings {
    content_type: Option<String>,
    page_width: Option<u32>,
    vision: Option<PathBuf>,
    format: JsonFormat,
    error_mode: ErrorMode,
}

/// Load a request, letting command-line settings win over the file's own.
fn load_request(
    input: &Path,
    content_type: Option<&str>,
    page_width: Option<u32>,
    vision: Option<&VisionData>,
) -> Result<LayoutRequest, Box<dyn std::error::Error>> {
    let mut request = LayoutRequest::from_file(input)
        .map_err(|e| format!("{}: {}", input.display(), e))?;
    log::debug!("Loaded {} blocks from {}", request.blocks.len(), input.display());

    if let Some(content_type) = content_type {
        request.content_type = Some(content_type.to_string());
    }
    if let Some(width) = page_width {
        request.page_width = Some(width);
    }
    if let Some(vision) = vision {
        request.vision_data = Some(vision.clone());
    }

    Ok(request)
}

/// `page.json` -> `<dir>/page.layout.json`
fn output_path_for(input: &Path, dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    dir.join(format!("{}.layout.json", stem))
}

/// Output path for each input, refusing two inputs that map to the same file.
fn plan_outputs(
    inputs: &[PathBuf],
    output: Option<&Path>,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    let mut paths = Vec::with_capacity(inputs.len());

    for input in inputs {
        let dir = output
            .map(Path::to_path_buf)
            .or_else(|| input.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        let path = output_path_for(input, &dir);

        if let Some(first) = claimed.insert(path.clone(), input.as_path()) {
            return Err(format!(
                "{} and {} would both write {}",
                first.display(),
                input.display(),
                path.display()
            )
            .into());
        }
        paths.push(path);
    }

    Ok(paths)
}

fn cmd_optimize(
    inputs: &[PathBuf],
    output: Option<&Path>,
    settings: &OptimizeSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let vision = match settings.vision {
        Some(ref path) => {
            let data: VisionData = serde_json::from_str(&fs::read_to_string(path)?)
                .map_err(|e| format!("{}: {}", path.display(), e))?;
            Some(data)
        }
        None => None,
    };

    let options = LayoutOptions::new().with_error_mode(settings.error_mode);

    let run = |input: &Path| -> Result<LayoutResult, Box<dyn std::error::Error>> {
        let request = load_request(
            input,
            settings.content_type.as_deref(),
            settings.page_width,
            vision.as_ref(),
        )?;
        optimize_request(request, &options).map_err(|e| format!("{}: {}", input.display(), e).into())
    };

    // Single input: stdout or the given file
    if let [input] = inputs {
        let json = to_json(&run(input.as_path())?, settings.format)?;
        if let Some(path) = output {
            fs::write(path, &json)?;
            println!("{} {}", "Saved to".green(), path.display());
        } else {
            println!("{}", json);
        }
        return Ok(());
    }

    // Several inputs: one file per input, next to it or in the output dir
    let paths = plan_outputs(inputs, output)?;
    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    for (input, path) in inputs.iter().zip(&paths) {
        pb.set_message(input.display().to_string());

        let json = to_json(&run(input.as_path())?, settings.format)?;
        fs::write(path, &json)?;
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    for (i, path) in paths.iter().enumerate() {
        let branch = if i + 1 == paths.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), path.display());
    }

    Ok(())
}

fn cmd_analyze(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut request = load_request(input, None, None, None)?;
    request.validate(ErrorMode::Lenient)?;

    let set = BlockClassifier::new().classify(&request.blocks);

    println!("{}", "Block Analysis".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Blocks".bold(), request.blocks.len());
    println!();
    println!("{}: {}", "Titles".bold(), set.titles.len());
    println!("{}: {}", "Subtitles".bold(), set.subtitles.len());
    println!("{}: {}", "Body texts".bold(), set.body_texts.len());
    println!("{}: {}", "Main images".bold(), set.main_images.len());
    println!("{}: {}", "Icons".bold(), set.icons.len());
    println!("{}: {}", "Unknown".bold(), set.unknown.len());

    Ok(())
}

fn cmd_sections(input: &Path, content_type: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let request = load_request(input, content_type.as_deref(), None, None)?;
    let result = optimize_request(request, &LayoutOptions::default())?;

    println!("{}", "Sections".cyan().bold());
    println!("{}", "─".repeat(72).dimmed());

    for section in &result.sections {
        println!(
            "{:<11} {:>7.1} - {:<7.1} {:>3} blocks  {:<6} {:<22} {}",
            section.id.bold(),
            section.metadata.y_start,
            section.metadata.y_end,
            section.metadata.block_count,
            section.section_type.as_str(),
            section.layout_strategy.as_str(),
            section.background_color.dimmed(),
        );
    }

    println!("{}", "─".repeat(72).dimmed());
    let info = &result.layout_info;
    println!(
        "{}: {}  {}: {}  {}: {}",
        "Total".bold(),
        info.total_sections,
        "Colored".bold(),
        info.color_sections,
        "Hero".bold(),
        if info.has_hero { "Yes" } else { "No" }
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "snaplayout".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Mobile layout optimizer for extracted PDF blocks");
    println!();
    println!("License: MIT");
}
