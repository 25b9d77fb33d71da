//! BarFind CLI
//!
//! Command-line interface for the BarFind cocktail search.
//! Provides one-shot lookups and the interactive TUI mode.

use barfind::tui::colors::icon_for_drink;
use barfind::{format_count, AppConfig, Drink, DrinkClient};
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{HumanDuration, ProgressBar};
use std::io::Write;
use std::time::{Duration, Instant};

/// BarFind - Fast cocktail database search
///
/// Searches TheCocktailDB by name, id or ingredient, from the command
/// line or in an interactive live-search terminal UI.
#[derive(Parser)]
#[command(name = "barfind")]
#[command(author = "BarFind Contributors")]
#[command(version)]
#[command(about = "Fast cocktail database search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search drinks by name
    Search {
        /// Search term (use -- before the term if it starts with -)
        #[arg(allow_hyphen_values = true)]
        term: String,

        /// Maximum results
        #[arg(short, long, default_value = "25")]
        max: usize,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Show one drink by its id
    Lookup {
        /// Drink id (e.g. 11007)
        id: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Show a random drink
    Random,

    /// List drinks containing an ingredient
    Ingredient {
        /// Ingredient name (e.g. Gin)
        name: String,

        /// Maximum results
        #[arg(short, long, default_value = "50")]
        max: usize,
    },

    /// List the drink categories the database knows
    Categories,

    /// Export search results to a file
    Export {
        /// Search term
        term: String,

        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: String,
    },

    /// Launch the interactive terminal UI
    Tui {
        /// Quiet period between keystrokes and the fetch, in milliseconds
        #[arg(long, default_value = "1000")]
        debounce_ms: u64,
    },
}

fn main() {
    // Initialize logging
    barfind::logging::init();
    barfind::logging::info("MAIN", "BarFind starting up");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search { term, max, output } => cmd_search(&term, max, &output),

        Commands::Lookup { id, output } => cmd_lookup(&id, &output),

        Commands::Random => cmd_random(),

        Commands::Ingredient { name, max } => cmd_ingredient(&name, max),

        Commands::Categories => cmd_categories(),

        Commands::Export {
            term,
            output,
            format,
        } => cmd_export(&term, &output, &format),

        Commands::Tui { debounce_ms } => cmd_tui(debounce_ms),
    };

    barfind::logging::flush();

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn client_for(max_results: usize) -> barfind::Result<DrinkClient> {
    let config = AppConfig {
        max_results,
        ..Default::default()
    };
    DrinkClient::new(config.fetch_config())
}

/// Run a provider call behind a spinner
fn with_spinner<T>(
    message: String,
    call: impl FnOnce() -> barfind::Result<T>,
) -> barfind::Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = call();
    spinner.finish_and_clear();
    result
}

/// Search command implementation
fn cmd_search(term: &str, max: usize, output_format: &str) -> barfind::Result<()> {
    let client = client_for(max)?;
    let start = Instant::now();

    println!(
        "{} Searching for '{}'",
        style("→").cyan().bold(),
        style(term).yellow()
    );

    let set = with_spinner(format!("Searching '{}'...", term), || {
        client.search_by_name(term)
    })?;

    if output_format == "json" {
        println!(
            "{}",
            serde_json::json!({
                "term": set.term,
                "count": set.stats.total,
                "stats": set.stats,
                "drinks": set.drinks,
            })
        );
        return Ok(());
    }

    println!();
    println!(
        "{} {} in {}",
        style("✓").green().bold(),
        style(format_count(set.len())).green(),
        style(HumanDuration(start.elapsed())).cyan()
    );
    println!();

    for (i, drink) in set.drinks.iter().enumerate() {
        println!(
            "  {} {} {}",
            style(format!("{:3}.", i + 1)).dim(),
            icon_for_drink(drink.alcoholic, &drink.category),
            style(&drink.name).cyan()
        );
        println!(
            "      {} {} \u{2022} {} \u{2022} {}",
            style("Info:").dim(),
            drink.category,
            drink.glass,
            drink.alcoholic.as_str()
        );
    }

    if set.stats.total > 0 {
        println!();
        println!(
            "  {} {} alcoholic, {} non-alcoholic, {} categories",
            style("Stats:").bold(),
            set.stats.alcoholic,
            set.stats.non_alcoholic,
            set.stats.categories
        );
    }

    Ok(())
}

/// Lookup command implementation
fn cmd_lookup(id: &str, output_format: &str) -> barfind::Result<()> {
    let client = client_for(1)?;

    let drink = with_spinner(format!("Looking up {}...", id), || client.lookup(id))?
        .ok_or_else(|| barfind::BarFindError::NotFound(id.to_string()))?;

    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(&drink).map_err(
            |e| barfind::BarFindError::decode("drink", e),
        )?);
        return Ok(());
    }

    print_drink_detail(&drink);
    Ok(())
}

/// Random command implementation
fn cmd_random() -> barfind::Result<()> {
    let client = client_for(1)?;
    let drink = with_spinner("Shaking...".to_string(), || client.random())?;

    println!(
        "{} Random pick:",
        style("→").cyan().bold()
    );
    println!();
    print_drink_detail(&drink);
    Ok(())
}

/// Ingredient filter command implementation
fn cmd_ingredient(name: &str, max: usize) -> barfind::Result<()> {
    let client = client_for(max)?;
    let start = Instant::now();

    println!(
        "{} Drinks containing '{}'",
        style("→").cyan().bold(),
        style(name).yellow()
    );

    let set = with_spinner(format!("Filtering by '{}'...", name), || {
        client.filter_by_ingredient(name)
    })?;

    println!();
    println!(
        "{} {} in {:.2}s",
        style("✓").green().bold(),
        style(format_count(set.len())).green(),
        start.elapsed().as_secs_f64()
    );
    println!();

    // Filter responses are summaries: name and id only
    for (i, drink) in set.drinks.iter().enumerate() {
        println!(
            "  {} {} {}",
            style(format!("{:3}.", i + 1)).dim(),
            style(&drink.name).cyan(),
            style(format!("(id {})", drink.id)).dim()
        );
    }

    Ok(())
}

/// Categories command implementation
fn cmd_categories() -> barfind::Result<()> {
    let client = client_for(100)?;
    let categories =
        with_spinner("Fetching categories...".to_string(), || client.list_categories())?;

    println!("{} Drink categories:", style("→").cyan().bold());
    println!();
    for category in &categories {
        println!("  \u{2022} {}", category);
    }
    println!();
    println!("  {} {}", style("Total:").bold(), categories.len());

    Ok(())
}

/// Export command implementation
fn cmd_export(term: &str, output: &str, format: &str) -> barfind::Result<()> {
    println!(
        "{} Exporting results for '{}' to {}",
        style("→").cyan().bold(),
        style(term).yellow(),
        style(output).yellow()
    );

    let client = client_for(100)?;
    let set = with_spinner(format!("Searching '{}'...", term), || {
        client.search_by_name(term)
    })?;

    let mut file = std::fs::File::create(output)?;

    match format {
        "csv" => {
            writeln!(file, "Id,Name,Category,Glass,Type,Ingredients,Modified")?;
            for drink in &set.drinks {
                let ingredients = drink
                    .ingredients
                    .iter()
                    .map(|line| line.display())
                    .collect::<Vec<_>>()
                    .join("; ");
                writeln!(
                    file,
                    "{},{},{},{},{},{},{}",
                    csv_field(&drink.id),
                    csv_field(&drink.name),
                    csv_field(&drink.category),
                    csv_field(&drink.glass),
                    csv_field(drink.alcoholic.as_str()),
                    csv_field(&ingredients),
                    csv_field(&drink.modified_label())
                )?;
            }
        }
        _ => {
            // JSON format
            let json = serde_json::to_string_pretty(&set)
                .map_err(|e| barfind::BarFindError::decode("result set", e))?;
            writeln!(file, "{}", json)?;
        }
    }

    println!(
        "{} Wrote {} to {}",
        style("✓").green().bold(),
        format_count(set.len()),
        output
    );

    Ok(())
}

/// TUI command implementation
fn cmd_tui(debounce_ms: u64) -> barfind::Result<()> {
    let config = AppConfig {
        debounce_ms,
        ..Default::default()
    };
    barfind::tui::run(&config)
}

/// Print one drink with its full recipe
fn print_drink_detail(drink: &Drink) {
    println!(
        "  {} {}",
        icon_for_drink(drink.alcoholic, &drink.category),
        style(&drink.name).cyan().bold()
    );
    println!("      {} {}", style("Category:").dim(), drink.category);
    println!("      {} {}", style("Glass:").dim(), drink.glass);
    println!("      {} {}", style("Type:").dim(), drink.alcoholic.as_str());
    if let Some(iba) = &drink.iba {
        println!("      {} {}", style("IBA:").dim(), iba);
    }
    if !drink.tags.is_empty() {
        println!("      {} {}", style("Tags:").dim(), drink.tags.join(", "));
    }

    println!();
    println!("      {}", style("Ingredients:").bold());
    for line in &drink.ingredients {
        println!("        \u{2022} {}", line.display());
    }

    if !drink.instructions.is_empty() {
        println!();
        println!("      {}", style("Instructions:").bold());
        println!("        {}", drink.instructions);
    }
}

/// Quote a CSV field, doubling embedded quotes
fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_fields_are_quoted_and_escaped() {
        assert_eq!(csv_field("Margarita"), "\"Margarita\"");
        assert_eq!(
            csv_field("1 1/2 oz \"silver\" tequila"),
            "\"1 1/2 oz \"\"silver\"\" tequila\""
        );
        assert_eq!(csv_field("a,b"), "\"a,b\"");
    }

    #[test]
    fn cli_parses_search_with_defaults() {
        let cli = Cli::try_parse_from(["barfind", "search", "margarita"]).unwrap();
        match cli.command {
            Commands::Search { term, max, output } => {
                assert_eq!(term, "margarita");
                assert_eq!(max, 25);
                assert_eq!(output, "text");
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn cli_parses_hyphen_leading_terms() {
        let cli = Cli::try_parse_from(["barfind", "search", "--", "-151 proof rum"]).unwrap();
        match cli.command {
            Commands::Search { term, .. } => assert_eq!(term, "-151 proof rum"),
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn cli_parses_tui_debounce_override() {
        let cli = Cli::try_parse_from(["barfind", "tui", "--debounce-ms", "250"]).unwrap();
        match cli.command {
            Commands::Tui { debounce_ms } => assert_eq!(debounce_ms, 250),
            _ => panic!("expected tui command"),
        }
    }
}
