use std::collections::HashSet;

use okbo::ebay::variations::*;

const ELI: &str = "2015 Topps Field Access Eli Manning autograph /99";

#[test]
fn test_normalize() {
    assert_eq!(normalize("  Eli   Manning\t auto "), "Eli Manning auto");
    assert_eq!(normalize("\u{201C}Eli\u{201D} Manning\u{2019}s"), "\"Eli\" Manning's");
}

#[test]
fn test_strip_punctuation() {
    assert_eq!(
        strip_punctuation("Topps (Gold) [Refractor] {SP} | /99"),
        "Topps Gold Refractor SP /99"
    );
}

#[test]
fn test_remove_years_only_removes_1900_to_2099() {
    assert_eq!(remove_years(ELI), "Topps Field Access Eli Manning autograph /99");
    assert_eq!(remove_years("1999 Bowman 2099"), "Bowman");
    assert_eq!(remove_years("1899 Old Judge 2100"), "1899 Old Judge 2100");
    // part of a longer number is not a year
    assert_eq!(remove_years("Card 120155"), "Card 120155");
}

#[test]
fn test_swap_terminology() {
    assert_eq!(swap_terminology("Eli Manning AUTOGRAPH"), "Eli Manning auto");
    assert_eq!(swap_terminology("autographed ball"), "autographed ball");
}

#[test]
fn test_quote_name_takes_tail_of_first_capitalized_run() {
    assert_eq!(
        quote_name(ELI).as_deref(),
        Some("2015 Topps Field Access \"Eli Manning\" autograph /99")
    );
    assert_eq!(
        quote_name("Tom Brady rookie").as_deref(),
        Some("\"Tom Brady\" rookie")
    );
    assert_eq!(
        quote_name("Eli Manning rookie Eli Manningham").as_deref(),
        Some("\"Eli Manning\" rookie Eli Manningham")
    );
    assert_eq!(quote_name("tom brady PSA 10"), None);
    assert_eq!(quote_name("Brady"), None);
    assert_eq!(quote_name(""), None);
}

#[test]
fn test_serial_variants() {
    let variants = serial_variants("Eli Manning /99");
    assert_eq!(
        variants,
        vec![
            "Eli Manning  /99".to_string(),
            "Eli Manning  #/99".to_string(),
            "Eli Manning  99/99".to_string(),
        ]
    );
    assert!(serial_variants("Eli Manning").is_empty());
}

#[test]
fn test_build_variations_eli_manning() {
    let variations = build_variations(ELI);

    assert_eq!(
        variations,
        vec![
            "2015 Topps Field Access Eli Manning autograph /99",
            "Topps Field Access Eli Manning autograph /99",
            "2015 Topps Field Access Eli Manning auto /99",
            "2015 Topps Field Access \"Eli Manning\" autograph /99",
            "2015 Topps Field Access Eli Manning autograph #/99",
            "2015 Topps Field Access Eli Manning autograph 99/99",
        ]
    );

    assert!(variations.iter().any(|v| v.contains("auto /99")));
    assert!(variations.iter().any(|v| !v.contains("2015")));
    assert!(variations.iter().any(|v| v.contains("\"Eli Manning\"")));
    assert!(
        variations
            .iter()
            .any(|v| v.ends_with(" /99") || v.ends_with("#/99") || v.ends_with("99/99"))
    );
}

#[test]
fn test_build_variations_is_deterministic() {
    let input = "2019 Prizm Zion Williamson (Silver) RC /25";
    assert_eq!(build_variations(input), build_variations(input));
}

#[test]
fn test_build_variations_invariants() {
    let inputs = [
        ELI,
        "a",
        "2015 ab",
        "Card",
        "2020 Panini Prizm Justin Herbert AUTOGRAPH Autograph [RC] #/10",
        "   lots    of   space   ",
    ];

    for input in inputs {
        let variations = build_variations(input);
        let mut seen = HashSet::new();
        for v in &variations {
            assert!(v.chars().count() >= MIN_VARIANT_LEN, "{v:?} too short");
            assert!(seen.insert(v.to_lowercase()), "{v:?} duplicated");
            assert_eq!(v, &normalize(v));
        }
    }
}

#[test]
fn test_build_variations_short_input_is_empty() {
    // "card" normalizes to four characters, under the five character minimum
    assert!(build_variations("card").is_empty());
    assert!(build_variations("   ").is_empty());
    assert_eq!(build_variations("cards"), vec!["cards".to_string()]);
}

#[test]
fn test_build_variations_skips_rules_that_change_nothing() {
    let variations = build_variations("Tom Brady autograph /12");
    assert_eq!(
        variations,
        vec![
            "Tom Brady autograph /12",
            "Tom Brady auto /12",
            "\"Tom Brady\" autograph /12",
            "Tom Brady autograph #/12",
            "Tom Brady autograph 12/12",
        ]
    );
}
