use std::error::Error;
use std::fs::File;
use std::sync::Arc;

use gridkit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const COLUMNS: &str = r##"[
    {"title": "Stock", "kind": "icon", "width": 10},
    {"title": "Item", "kind": "text", "width": 45},
    {"title": "Price", "kind": "text", "width": 20, "format": "N2", "sensitive": true},
    {"title": "Status", "kind": "text-color", "width": 25,
     "header_foreground": "#fff", "header_background": "oklch(45% 0.1 250)"}
]"##;

#[derive(Debug, Clone)]
struct Product {
    sku: &'static str,
    name: &'static str,
    price: f64,
    on_hand: u32,
}

fn catalogue() -> GroupedOrderedData<Product> {
    let group = |label: &str, products: Vec<Product>| -> (String, Vec<(String, Product)>) {
        (
            label.to_string(),
            products
                .into_iter()
                .map(|p| (p.sku.to_string(), p))
                .collect(),
        )
    };
    vec![
        group(
            "Hardware",
            vec![
                Product { sku: "HW-100", name: "Hex key set", price: 12.5, on_hand: 40 },
                Product { sku: "HW-220", name: "Cordless drill", price: 1249.0, on_hand: 0 },
            ],
        ),
        group(
            "Garden",
            vec![
                Product { sku: "GD-010", name: "Hose reel", price: 64.99, on_hand: 3 },
                Product { sku: "GD-042", name: "Pruning shears", price: 18.0, on_hand: 25 },
            ],
        ),
    ]
}

fn columns() -> Result<Vec<ColumnConfiguration<Product>>, Box<dyn Error>> {
    let definitions: Vec<ColumnDefinition> = serde_json::from_str(COLUMNS)?;
    let mut columns = Vec::with_capacity(definitions.len());

    for definition in definitions {
        let title = definition.title.clone();
        let column = match title.as_str() {
            "Stock" => definition.into_configuration(|p: &Product| {
                let (name, color) = if p.on_hand > 0 {
                    ("inventory", Color::rgb(0, 128, 0))
                } else {
                    ("report", Color::rgb(200, 0, 0))
                };
                IconSpec::new(name)
                    .foundry(IconFoundry::MaterialThemed(MaterialTheme::Outlined))
                    .color(color)
                    .into()
            })?,
            "Item" => definition.into_configuration(|p: &Product| p.name.into())?,
            "Price" => definition
                .into_configuration(|p: &Product| p.price.into())?
                .foreground(|p: &Product| if p.price > 1000.0 { Color::rgb(150, 0, 0) } else { Color::BLACK }),
            "Status" => definition.into_configuration(|p: &Product| {
                let spec = TextColorSpec::new("LOW", Color::WHITE, Color::rgb(230, 120, 0));
                let spec = if p.on_hand < 5 { spec } else { spec.suppressed() };
                spec.into()
            })?,
            other => {
                log::warn!("no data for column {other:?}");
                continue;
            }
        };
        columns.push(column);
    }
    Ok(columns)
}

async fn run() -> Result<(), Box<dyn Error>> {
    let metrics = Arc::new(MonospaceMetrics::new(7.5));
    let mut driver = GridDriver::new(Grid::new(metrics.clone()));

    let params = GridParams::new(columns()?, catalogue())
        .measurement(Measurement::FitToData)
        .group(true)
        .highlight_selected_row(true)
        .obscure_sensitive(true)
        .class("demo")
        .on_row_click(|key| log::info!("row clicked: {key}"))
        .log_identification("demo");

    driver.deliver(params).await?;
    for commit in driver.commits() {
        log::info!("committed {:?}", commit.mode);
    }
    println!("{}", driver.html());

    driver.click("GD-010").await?;
    driver.grid().scroll_to_row("GD-010").await?;
    println!();
    println!("{}", driver.html());

    log::info!("interop calls: {:?}", metrics.calls());
    Ok(())
}

#[tokio::main]
async fn main() {
    let log_file = File::create("gridkit-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}
