//! `catalogue` - command-line front end for the catalogue analysis.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalogue_analyse::config;
use catalogue_analyse::models::{ExpansionState, NormalizedRecord, QueryState, SortMode, Tier, ALL};
use catalogue_analyse::Catalogue;

#[derive(Parser)]
#[command(name = "catalogue", about = "Browse and analyse the product catalogue")]
struct Cli {
    /// Catalog JSON file (defaults to $CATALOGUE_DATA or the platform data dir).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Catalog-wide averages, tier breakdown, genders and top categories.
    Stats,
    /// One page of the filtered view.
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Show the detail panel under this model's row.
        #[arg(long)]
        expand: Option<String>,
    },
    /// Full detail for one model.
    Show { model: String },
    /// Export the whole filtered view as CSV.
    Export {
        #[command(flatten)]
        filter: FilterArgs,
        /// Output file; `-` writes to stdout.
        #[arg(long, short, default_value = config::EXPORT_FILENAME)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long, default_value = ALL)]
    gender: String,
    #[arg(long, default_value = ALL)]
    category: String,
    /// all, grossiste, club or detail.
    #[arg(long, default_value = "all")]
    sort: SortMode,
}

impl FilterArgs {
    fn state(&self) -> QueryState {
        QueryState::new()
            .with_search(self.search.as_str())
            .with_gender(&self.gender)
            .with_category(&self.category)
            .with_sort(self.sort)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut builder = Catalogue::builder();
    if let Some(ref path) = cli.catalog {
        builder = builder.path(path);
    }
    let catalogue = builder.build().context("failed to load the catalogue")?;

    match cli.command {
        Commands::Stats => print_stats(&catalogue),
        Commands::List {
            filter,
            page,
            expand,
        } => {
            let state = filter.state().with_page(page);
            let expansion = match expand {
                Some(ref model) => ExpansionState::new().toggle(model),
                None => ExpansionState::new(),
            };
            let view = catalogue.records().page(&state);
            println!(
                "{} produits • Page {}/{}",
                view.total, view.page, view.page_count
            );
            for r in &view.items {
                println!("{}", summary_line(r));
                if expansion.is_expanded(r.model()) {
                    print_detail(r);
                }
            }
        }
        Commands::Show { model } => {
            let record = catalogue
                .records()
                .get_by_model(&model)
                .with_context(|| format!("unknown model {}", model))?;
            println!("{}", summary_line(record));
            print_detail(record);
        }
        Commands::Export { filter, output } => {
            let state = filter.state();
            if output.as_os_str() == "-" {
                println!("{}", catalogue.export(&state)?);
            } else {
                catalogue.export_to(&state, &output)?;
                eprintln!("wrote {} ({})", output.display(), config::EXPORT_MIME);
            }
        }
    }

    Ok(())
}

fn print_stats(catalogue: &Catalogue) {
    let stats = catalogue.stats();
    let summary = stats.summary();

    println!("{} produits", summary.total_count);
    println!("1 USD = {} ₪", catalogue.pricing().usd_to_ils);
    println!("Prix NET moyen: {} ₪", money(summary.avg_net_ils));
    println!("Transport moyen: {} ₪", money(summary.avg_transport_ils));

    for tier in stats.tiers() {
        println!(
            "{}: achat {} ₪ (${}) • vente {} ₪ • marge {}%",
            tier.tier.label(),
            money(tier.total_ils),
            money(tier.total_usd),
            money(tier.avg_price),
            percent(tier.avg_margin_pct),
        );
    }

    println!("Par sexe:");
    for g in stats.by_gender() {
        println!("  {}: {}", g.key, g.count);
    }
    println!("Top catégories:");
    for c in stats.top_categories() {
        println!("  {}: {} (marge {}%)", c.key, c.count, percent(c.avg_margin_pct));
    }
}

fn print_detail(r: &NormalizedRecord) {
    let c = &r.record;
    println!("  NET: ${} / {} ₪", money(r.net_usd), money(r.net_ils));
    println!("  Transport: ${} / {} ₪", money(r.transport_usd), money(r.transport_ils));
    println!("  Achat: ${} / {} ₪", money(c.purchase_usd), money(c.purchase_ils));
    for tier in Tier::ALL {
        println!(
            "  {}: {} ₪ • marge {} ₪ ({}%)",
            tier.label(),
            money(c.price(tier)),
            money(c.margin_ils(tier)),
            percent(c.margin_pct(tier)),
        );
    }
    let sizes: Vec<String> = c
        .sizes
        .iter()
        .map(|(label, available)| format!("{}{}", label, if *available { "" } else { " (épuisé)" }))
        .collect();
    println!("  Tailles: {}", sizes.join(", "));
}

fn summary_line(r: &NormalizedRecord) -> String {
    let c = &r.record;
    format!(
        "{} | {} | {} | {} | {} | {} ₪ | {} ₪ | {} ₪",
        c.model,
        c.description.as_deref().unwrap_or(""),
        c.color.as_deref().unwrap_or(""),
        c.gender.as_deref().unwrap_or(""),
        c.category.as_deref().unwrap_or(""),
        money(c.wholesale_price),
        money(c.club_price),
        money(c.retail_price),
    )
}

fn money(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

fn percent(value: Option<f64>) -> String {
    value.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string())
}
