use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::{debug, info};

use recipe_pages::{parse_file, Locale, RecipePages, SiteConfig};

#[derive(Parser)]
#[command(name = "recipe-pages", version, about = "Generate bilingual recipe pages from text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the English and Hebrew pages and their print variants
    Generate(GenerateArgs),
    /// Print the parsed sections of a recipe file as JSON
    Parse {
        /// Recipe text file
        file: PathBuf,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Recipe name; reads `{NAME}_en.txt` and `{NAME}_he.txt`
    name: Option<String>,
    /// Directory holding the recipe sources and image
    #[arg(long)]
    source_dir: Option<PathBuf>,
    /// Directory to write the pages to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Configuration file (defaults to ./recipe-pages.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Hero image file name, skipping the lookup in the source directory
    #[arg(long)]
    hero_image: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Command::Generate(args) => generate(args),
        Command::Parse { file, pretty } => {
            // Header vocabulary is bilingual, so the locale only affects logging
            let recipe = parse_file(&file, Locale::En)?;
            let json = if pretty {
                serde_json::to_string_pretty(&recipe)?
            } else {
                serde_json::to_string(&recipe)?
            };
            println!("{}", json);
            Ok(())
        }
    }
}

fn generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::load(args.config.as_deref())?;
    debug!("{:#?}", config);

    let mut builder = RecipePages::builder().config(config);
    if let Some(name) = args.name {
        builder = builder.name(name);
    }
    if let Some(dir) = args.source_dir {
        builder = builder.source_dir(dir);
    }
    if let Some(dir) = args.output_dir {
        builder = builder.output_dir(dir);
    }
    if let Some(hero) = args.hero_image {
        builder = builder.hero_image(hero);
    }

    let written = builder.write()?;
    info!("Generated {} pages", written.len());
    Ok(())
}
