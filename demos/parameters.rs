//! Rendering one dashboard in every notation.
//!
//! Run with: cargo run --example parameters

use paramdoc::{doc, to_string_with_options, to_value, Format, Options, Value};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Panel {
    title: String,
    datasource: String,
    span: u32,
    regions: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let panel = Panel {
        title: "Checkout latency".to_string(),
        datasource: "prometheus-eu".to_string(),
        span: 12,
        regions: vec!["eu-west-1".to_string(), "eu-central-1".to_string()],
    };

    let mut dashboard = doc!({
        "title": "Checkout",
        "refresh": "30s",
        "editable": false
    });
    if let Value::Object(ref mut root) = dashboard {
        root.insert("panel".to_string(), to_value(&panel)?);
    }

    let base = Options::new()
        .with_param("datasource", "prometheus-eu")
        .with_param("primary_region", "eu-west-1");

    for path in [
        "dashboard.json",
        "dashboard.notationA",
        "dashboard.notationB",
        "dashboard.notationC-script",
    ] {
        let options = base.clone().for_path(path);
        println!("== {} ({:?})", path, options.format);
        println!("{}", to_string_with_options(&dashboard, &options)?);
    }

    // Numbers are never replaced, even when a parameter spells the same text.
    let options = Options::new()
        .with_format(Format::LetBinding)
        .with_param("span", "12");
    println!("{}", to_string_with_options(&dashboard, &options)?);

    Ok(())
}
