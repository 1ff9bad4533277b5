//! CLI tool for turning markdown-like text into styled slide deck plans.

use anyhow::{Context, Result};
use clap::Parser;
use slidegen_core::{
    DeckBuilder, JsonPlanWriter, PresentationWriter, Rgb, TemplateOverrides, TemplateRegistry,
    DEFAULT_TEMPLATE,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Turn slide descriptions into JSON deck plans for a presentation writer.
#[derive(Parser, Debug)]
#[command(name = "slidegen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file(s) using the slide markup
    #[arg(required_unless_present = "list_templates")]
    input: Vec<PathBuf>,

    /// Template to style the deck with
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    template: String,

    /// Extra template definitions (JSON array); may be repeated
    #[arg(long = "templates", value_name = "FILE")]
    template_files: Vec<PathBuf>,

    /// List available templates and exit
    #[arg(long)]
    list_templates: bool,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Override the template's font family
    #[arg(long)]
    font: Option<String>,

    /// Override the title font size (points)
    #[arg(long)]
    title_size: Option<u32>,

    /// Override the body font size (points)
    #[arg(long)]
    content_size: Option<u32>,

    /// Override the theme color (#RRGGBB)
    #[arg(long)]
    theme_color: Option<Rgb>,

    /// Override the background color (#RRGGBB)
    #[arg(long)]
    background_color: Option<Rgb>,

    /// Override whether titles are bold
    #[arg(long)]
    title_bold: Option<bool>,

    /// Override whether body text is bold
    #[arg(long)]
    content_bold: Option<bool>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn overrides(&self) -> TemplateOverrides {
        TemplateOverrides {
            font_family: self.font.clone(),
            title_font_size: self.title_size,
            content_font_size: self.content_size,
            theme_color: self.theme_color,
            background_color: self.background_color,
            title_bold: self.title_bold,
            content_bold: self.content_bold,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let registry = load_registry(&args.template_files)?;

    if args.list_templates {
        for template in registry.iter() {
            println!(
                "{}\t{} {}/{}pt",
                template.name,
                template.font_family,
                template.title_font_size,
                template.content_font_size
            );
        }
        return Ok(());
    }

    // Fail early on a bad template name or customization.
    registry
        .get(&args.template)?
        .with_overrides(&args.overrides())?;

    let builder = DeckBuilder::new(&registry).with_overrides(args.overrides());

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        if let Err(e) = process_file(input_path, &args, &builder) {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
        }
    }

    Ok(())
}

/// Build the template catalog: built-ins plus any template files.
fn load_registry(template_files: &[PathBuf]) -> Result<TemplateRegistry> {
    let mut registry = TemplateRegistry::builtin();

    for path in template_files {
        let file = File::open(path)
            .with_context(|| format!("Failed to open template file {}", path.display()))?;
        let count = registry
            .load_json(BufReader::new(file))
            .with_context(|| format!("Failed to load templates from {}", path.display()))?;
        log::debug!("Loaded {} templates from {}", count, path.display());
    }

    Ok(registry)
}

/// Plan a single input file and write the result.
fn process_file(input_path: &Path, args: &Args, builder: &DeckBuilder<'_>) -> Result<()> {
    let text = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;

    let plan = if args.print {
        let stdout = std::io::stdout();
        let mut writer = JsonPlanWriter::new(stdout.lock());
        builder.build(&text, &args.template, &mut writer)?
    } else {
        let output_path = get_output_path(input_path, args.output.as_ref())?;
        let plan = builder.plan(&text, &args.template)?;
        write_output(&output_path, |writer| writer.write_deck(&plan))?;
        if args.verbose {
            eprintln!("Written to: {}", output_path.display());
        }
        plan
    };

    if args.verbose {
        eprintln!("  Planned {} slides", plan.slides.len());
    }
    for warning in &plan.warnings {
        eprintln!("Warning ({}): {}", input_path.display(), warning);
    }

    Ok(())
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.json", stem);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => {
            if let Some(parent) = input_path.parent() {
                parent.join(output_filename)
            } else {
                PathBuf::from(output_filename)
            }
        }
    };

    Ok(output_path)
}

/// Write a deck plan to a file.
fn write_output<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut JsonPlanWriter<BufWriter<File>>) -> slidegen_core::Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    let mut writer = JsonPlanWriter::new(BufWriter::new(file));
    write(&mut writer).with_context(|| format!("Failed to write to {}", path.display()))?;

    writer
        .into_inner()
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_output_path_next_to_input() {
        let path = get_output_path(Path::new("talks/intro.md"), None).unwrap();
        assert_eq!(path, PathBuf::from("talks/intro.json"));
    }

    #[test]
    fn test_overrides_from_args() {
        let args = Args::parse_from([
            "slidegen",
            "deck.md",
            "--font",
            "Georgia",
            "--theme-color",
            "#FF0000",
            "--title-bold",
            "false",
        ]);
        let overrides = args.overrides();
        assert_eq!(overrides.font_family.as_deref(), Some("Georgia"));
        assert_eq!(overrides.theme_color, Some(Rgb::new(255, 0, 0)));
        assert_eq!(overrides.title_bold, Some(false));
        assert_eq!(overrides.content_font_size, None);
        assert_eq!(args.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_list_templates_needs_no_input() {
        let args = Args::parse_from(["slidegen", "--list-templates"]);
        assert!(args.list_templates);
        assert!(args.input.is_empty());
    }
}
