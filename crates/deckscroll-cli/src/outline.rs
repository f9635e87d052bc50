//! Plain-text outline of a deck, for `deckscroll outline`

use std::fmt::Write;

use deckscroll_core::{render_document, Document, IconRegistry};

/// Sections in order with their block kinds and per-card dispatch
pub fn render_outline(document: &Document, icons: &IconRegistry) -> String {
    let mut out = String::new();
    let title = document.title.as_deref().unwrap_or("Untitled deck");
    let _ = writeln!(out, "{}", title);

    for (name, link) in [
        ("back", &document.navigation.back),
        ("next", &document.navigation.next),
    ] {
        if let Some(link) = link {
            let _ = writeln!(out, "  {}: {} ({})", name, link.label, link.href);
        }
    }

    let dupes = document.duplicate_keys();
    if !dupes.is_empty() {
        let keys: Vec<&str> = dupes.iter().map(|k| k.as_str()).collect();
        let _ = writeln!(out, "  warning: duplicate section keys: {}", keys.join(", "));
    }
    let _ = writeln!(out);

    for (i, view) in render_document(document, icons).iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {} [{}]", i + 1, view.title, view.key);
        let labels = view.labels();
        if !labels.is_empty() {
            let _ = writeln!(out, "    {}", labels.join(", "));
        }
        for node in &view.nodes {
            for card in node.cards() {
                let _ = writeln!(
                    out,
                    "      {} {} ({}, {})",
                    card.icon().glyph,
                    card.title(),
                    node.label(),
                    card.kind()
                );
            }
        }
    }
    out
}
