use colored::Colorize;

use crate::{
    ebay::{
        links::{SPORTS_CARDS_CATEGORY, SoldLinks, sold_url},
        variations::build_variations,
    },
    error, info, warning,
};

/// Variants shown in the auction-only and category sections.
const SHORTLIST: usize = 4;

pub async fn sold_links(words: Vec<String>, open: bool) {
    let input = words.join(" ").trim().to_string();
    if input.is_empty() {
        error!("Usage: okbo sold-links <card query>");
    }

    let mut variations = build_variations(&input);
    if variations.is_empty() {
        warning!("Query is too short to vary, using it as typed.");
        variations.push(input.clone());
    }

    println!(
        "\n{}\n",
        "EBAY SOLD + COMPLETED LINKS (open these in browser)".bold()
    );

    println!("{}", "A) Core SOLD searches:".bold());
    for (i, v) in variations.iter().enumerate() {
        println!("{}. {}\n   {}", i + 1, v, sold_url(v, ""));
    }

    println!(
        "\n{}",
        "B) Auction-only SOLD (often better for comp pricing):".bold()
    );
    for (i, v) in variations.iter().take(SHORTLIST).enumerate() {
        println!("{}. {}\n   {}", i + 1, v, sold_url(v, "&LH_Auction=1"));
    }

    println!(
        "\n{}",
        "C) SOLD in Sports Trading Cards category (optional filter):".bold()
    );
    for (i, v) in variations.iter().take(SHORTLIST).enumerate() {
        println!(
            "{}. {}\n   {}",
            i + 1,
            v,
            sold_url(v, &format!("&_sacat={SPORTS_CARDS_CATEGORY}"))
        );
    }

    println!();
    info!("Start with A1/A2. If too broad, use B (auctions) or add more keywords.");

    if open {
        let link = SoldLinks::for_query(&variations[0]).core;
        if webbrowser::open(&link).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                link
            )
        }
    }
}
