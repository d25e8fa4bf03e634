use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use facetx_core::{Catalog, Collator};
use facetx_ranking::{rank_by_query, FacetScorer, ItemRanker, RankerConfig, SelectionState};
use facetx_store::PreferenceStore;

/// Rank catalog facets and items by bought/liked history
#[derive(Parser, Debug)]
#[command(name = "facetx")]
#[command(about = "Preference-weighted faceted filtering and ranking", long_about = None)]
struct Args {
    /// Path to the catalog JSON document
    #[arg(short, long, default_value = "./products.json")]
    catalog: PathBuf,

    /// Path to the preference store snapshot
    #[arg(short, long, default_value = "./preferences.json")]
    store: PathBuf,

    /// Context key namespacing history and selections
    #[arg(long, default_value = "default")]
    context: String,

    /// Free-text query; ranks items by name similarity instead of history
    #[arg(short, long)]
    query: Option<String>,

    /// Maximum number of facets and items to print
    #[arg(long, default_value_t = 20)]
    limit: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting facetx v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);

    let catalog = Catalog::load(&args.catalog)?;
    info!("Loaded {} products", catalog.len());

    if let Some(query) = &args.query {
        info!("Ranking by name similarity to {:?}", query);
        println!("Results:");
        for (product, distance) in rank_by_query(query, catalog.products())
            .into_iter()
            .take(args.limit)
        {
            println!("  {:>6.3}  {}", distance, product.name);
        }
        return Ok(());
    }

    let store = PreferenceStore::open(&args.store)?;
    let bought = catalog.by_ids(&store.bought_ids(&args.context));
    let liked = catalog.by_ids(&store.liked_ids(&args.context));
    info!(
        "History for context '{}': {} bought, {} liked",
        args.context,
        bought.len(),
        liked.len()
    );

    let collator = Collator::default();
    let catalog_hist = collator.collate(catalog.products());
    let bought_hist = collator.collate(bought.iter().copied());
    let liked_hist = collator.collate(liked.iter().copied());

    let scorer = FacetScorer::default();
    println!("Facets:");
    for facet in scorer
        .score(&catalog_hist, &bought_hist, &liked_hist)
        .into_iter()
        .take(args.limit)
    {
        println!("  {:>10.1}  {} / {}", facet.score, facet.category, facet.value);
    }

    let selection: SelectionState = store.selected_filters(&args.context).into_iter().collect();
    if !selection.is_empty() {
        info!("{} selected filters active", selection.len());
    }

    let ranker = ItemRanker::new(RankerConfig::default(), collator);
    let ranked = ranker.rank(catalog.products(), &bought_hist, &liked_hist, &selection);
    info!("{} of {} products above cutoff", ranked.len(), catalog.len());

    println!("Products:");
    for scored in ranked.into_iter().take(args.limit) {
        println!("  {:>10.1}  {}", scored.score, scored.product.name);
    }

    Ok(())
}
