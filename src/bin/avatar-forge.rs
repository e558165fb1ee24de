use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing::Level;

use avatar_forge::{
    BatchOptions, BatchReport, Catalog, FontLibrary, ProductKind, Style, SynthesisProfile,
    Synthesizer, default_font_dirs, initials, run_batch,
};

#[derive(Parser, Debug)]
#[command(name = "avatar-forge", version, about)]
struct Cli {
    /// Log every font candidate that is tried.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the avatar PNGs of the catalog.
    Avatars(GenerateArgs),
    /// Generate the placeholder PNGs of the catalog.
    Placeholders(GenerateArgs),
    /// Generate avatars and placeholders.
    All(GenerateArgs),
    /// Print the initials derived from each name.
    Initials {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output directory (default: ./generated_avatars, or ./generated_avatars_v2 for pro).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Artwork generation to produce.
    #[arg(long, value_enum, default_value_t = Style::Classic)]
    style: Style,

    /// JSON file overriding the built-in palettes and item lists.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Synthesize items in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel.
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,

    /// Extra directory searched for relative font paths (repeatable, searched first).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Ignore font files and draw text with the built-in font only.
    #[arg(long)]
    builtin_fonts: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("install log subscriber")?;

    match cli.cmd {
        Command::Avatars(args) => cmd_generate(args, &[ProductKind::Avatar]),
        Command::Placeholders(args) => cmd_generate(args, &[ProductKind::Placeholder]),
        Command::All(args) => cmd_generate(args, &[ProductKind::Avatar, ProductKind::Placeholder]),
        Command::Initials { names } => {
            for name in names {
                println!("{name}\t{}", initials(&name));
            }
            Ok(())
        }
    }
}

fn cmd_generate(args: GenerateArgs, kinds: &[ProductKind]) -> anyhow::Result<()> {
    let style = args.style;

    let mut profile = SynthesisProfile::for_style(style);
    if args.builtin_fonts {
        profile = profile.builtin_fonts_only();
    }

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(style, path)
            .with_context(|| format!("load catalog '{}'", path.display()))?,
        None => Catalog::builtin(style),
    };

    let mut font_dirs = args.font_dirs.clone();
    font_dirs.extend(default_font_dirs());
    let fonts = FontLibrary::new(font_dirs);

    let out_dir = args.out.clone().unwrap_or_else(|| match style {
        Style::Classic => PathBuf::from("./generated_avatars"),
        Style::Pro => PathBuf::from("./generated_avatars_v2"),
    });
    let opts = BatchOptions {
        out_dir,
        parallel: args.parallel,
        threads: args.threads,
    };

    tracing::info!(
        style = style.as_str(),
        out = %opts.out_dir.display(),
        "generating"
    );

    let synth = Synthesizer::new(&profile, &catalog, &fonts);
    let mut report = BatchReport::default();
    for &kind in kinds {
        let part = run_batch(&synth, kind, catalog.items(kind), &opts)
            .with_context(|| format!("generate {kind}s into '{}'", opts.out_dir.display()))?;
        report.extend(part);
    }

    for item in report.degraded() {
        eprintln!(
            "degraded: {} ({:?})",
            item.path.display(),
            item.glyph
        );
    }
    eprintln!(
        "wrote {} file(s) to {}",
        report.len(),
        opts.out_dir.display()
    );
    Ok(())
}
