use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use search_widget::widget::render_list;
use search_widget::{
    classify_text, filter_items, items_from_payload, match_fields, normalize_item,
    normalize_value, resolve_link_details, FilterOptions, RawItem, RawLinkValue, SearchItem,
    WidgetLayout, WidgetPayload,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("{} {:#}", display::error_label(), err);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `SEARCH_WIDGET_LOG` (default `warn`).
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("SEARCH_WIDGET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Normalize { link, json } => run_normalize(&link, json),
        Commands::Filter {
            input,
            query,
            no_description,
            json,
            html,
        } => run_filter(&input, &query, no_description, json, html),
        Commands::Inspect { input } => run_inspect(&input),
    }
}

/// Parse the argument as JSON when possible, otherwise as bare link text.
fn parse_link_arg(link: &str) -> RawLinkValue {
    match serde_json::from_str::<serde_json::Value>(link) {
        Ok(value) => RawLinkValue::from(value),
        Err(_) => classify_text(link),
    }
}

fn run_normalize(link: &str, json: bool) -> Result<()> {
    let canonical = resolve_link_details(&parse_link_arg(link));
    if json {
        println!("{}", serde_json::to_string_pretty(&canonical)?);
    } else {
        display::print_link(&canonical);
    }
    Ok(())
}

fn load_page_list(input: &str) -> Result<(WidgetPayload, Vec<RawItem>)> {
    let mut payload = WidgetPayload::from_path(input)
        .with_context(|| format!("could not load payload from {}", input))?;
    let page_list = match payload.page_list.take() {
        Some(page_list) => page_list,
        None => {
            warn!(input, "payload has no pageList array; nothing to search");
            Vec::new()
        }
    };
    Ok((payload, page_list))
}

/// Normalized items and the effective options: payload `options`, then flags.
fn load_items(input: &str, no_description: bool) -> Result<(Vec<SearchItem>, FilterOptions)> {
    let (payload, page_list) = load_page_list(input)?;

    let mut options = payload.options;
    if no_description {
        options.include_description = false;
    }

    Ok((items_from_payload(&page_list), options))
}

/// List markup for `results`, as the widget would render it.
fn results_html(results: &[&SearchItem]) -> String {
    let layout = WidgetLayout {
        list: true,
        ..WidgetLayout::default()
    };
    render_list(results, &layout)
        .map(|view| view.to_html())
        .unwrap_or_default()
}

fn run_filter(input: &str, query: &str, no_description: bool, json: bool, html: bool) -> Result<()> {
    let (items, options) = load_items(input, no_description)?;
    let results = filter_items(&items, query, &options);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if html {
        print!("{}", results_html(&results));
        return Ok(());
    }

    let normalized_query = normalize_value(query);
    for (position, item) in results.iter().enumerate() {
        let band = if normalized_query.is_empty() {
            None
        } else {
            match_fields(item, &normalized_query, &options)
                .best()
                .map(|(band, _)| band)
        };
        display::print_result(position + 1, band, item);
    }
    display::print_summary(query, results.len(), items.len());
    Ok(())
}

fn link_shape(raw: &RawLinkValue) -> &'static str {
    match raw {
        RawLinkValue::Absent => "absent",
        RawLinkValue::PlainString(_) => "plain string",
        RawLinkValue::EncodedString(_) => "encoded string",
        RawLinkValue::StructuredLink(_) => "structured",
    }
}

/// Each payload entry's link shape next to its normalized item.
fn inspect_entries(input: &str) -> Result<Vec<(&'static str, SearchItem)>> {
    let (_, page_list) = load_page_list(input)?;
    Ok(page_list
        .iter()
        .map(|raw| (link_shape(&raw.link_dest), normalize_item(raw)))
        .collect())
}

fn run_inspect(input: &str) -> Result<()> {
    for (index, (shape, item)) in inspect_entries(input)?.iter().enumerate() {
        println!(
            "#{} {} ({})",
            index,
            display::themed(display::CYAN, &[display::BOLD], &item.title_name),
            shape
        );
        display::print_link(&item.link());
        println!();
    }
    Ok(())
}
