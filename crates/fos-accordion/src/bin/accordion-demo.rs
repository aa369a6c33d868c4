//! fOS Accordion demo
//!
//! Usage: accordion-demo [--options <json>] [--scroll-height <px>] <file.html> [action...]
//!
//! Actions: `click:<item>`, `focus:<item>`, `key:<KeyboardEvent.key>`
//! (`key:Space` sends " "). Keys go to the focused element.
//!
//! There is no layout pass, so panels open to `max-height: 0px` unless
//! `--scroll-height` stands in for the height layout would report.

use std::rc::Rc;

use anyhow::{bail, Context, Result};
use fos_accordion::{bootstrap, Accordion, AccordionOptions, ACCORDION_SELECTOR, CONTENT_SELECTOR};
use fos_dom::Document;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1).peekable();
    let mut options = None;
    let mut scroll_height = None;
    while let Some(flag) = args.next_if(|arg| arg.starts_with("--")) {
        match flag.as_str() {
            "--options" => {
                let json = args.next().context("--options needs a JSON argument")?;
                options = Some(serde_json::from_str::<AccordionOptions>(&json).context("invalid --options JSON")?);
            }
            "--scroll-height" => {
                let px = args.next().context("--scroll-height needs a pixel value")?;
                scroll_height = Some(px.parse::<u32>().context("invalid --scroll-height")?);
            }
            other => bail!("unknown flag {other:?}"),
        }
    }
    let Some(path) = args.next() else {
        bail!("usage: accordion-demo [--options <json>] [--scroll-height <px>] <file.html> [action...]");
    };

    let html = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let mut doc = fos_html::HtmlParser::new()
        .parse_with_url(&html, &format!("file://{path}"))
        .with_context(|| format!("parsing {path}"))?;

    match scroll_height {
        Some(height) => {
            for content in doc.query_selector_all(CONTENT_SELECTOR) {
                doc.tree_mut().set_scroll_height(content, height)?;
            }
        }
        None => tracing::warn!("No layout heights; panels open to max-height: 0px (see --scroll-height)"),
    }

    let accordion = match options {
        Some(options) => {
            let container = doc
                .query_selector(ACCORDION_SELECTOR)
                .with_context(|| format!("no {ACCORDION_SELECTOR} element in {path}"))?;
            Accordion::mount(&mut doc, container, options)?
        }
        None => bootstrap(&mut doc)?,
    };
    tracing::info!("Accordion ready with {} items", accordion.items().len());
    print_state(&doc, &accordion);

    for action in args {
        apply(&mut doc, &accordion, &action).with_context(|| format!("action {action:?}"))?;
        println!("> {action}");
        print_state(&doc, &accordion);
    }

    Ok(())
}

fn apply(doc: &mut Document, accordion: &Rc<Accordion>, action: &str) -> Result<()> {
    let Some((verb, arg)) = action.split_once(':') else {
        bail!("expected <verb>:<arg>");
    };
    match verb {
        "click" | "focus" => {
            let index: usize = arg.parse().context("item index")?;
            let item = accordion
                .item(index)
                .with_context(|| format!("no item {index}"))?;
            if verb == "click" {
                doc.click(item.header());
            } else {
                doc.focus(item.header());
            }
        }
        "key" => {
            let target = doc.active_element().context("nothing focused")?;
            let key = if arg == "Space" { " " } else { arg };
            let event = doc.key_down(target, key);
            tracing::debug!("{:?} default_prevented={}", key, event.is_default_prevented());
        }
        other => bail!("unknown action {other:?}"),
    }
    Ok(())
}

fn print_state(doc: &Document, accordion: &Accordion) {
    for item in accordion.items() {
        let focus = if doc.active_element() == Some(item.header()) { '*' } else { ' ' };
        let state = if accordion.is_expanded(doc, *item) { "open" } else { "closed" };
        let label = doc.tree().text_content(item.header());
        let style = doc.tree().get_attribute(item.content(), "style").unwrap_or_default();
        println!("{focus} [{}] {:<6} {}  style={:?}", item.index(), state, label.trim(), style);
    }
}
