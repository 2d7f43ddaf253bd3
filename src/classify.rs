use std::fmt;

/// The fixed set of product categories the export recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductType {
    Burger,
    Nuggets,
    Sausages,
    Meatballs,
    Cutlets,
    Seitan,
    Bites,
    Other,
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductType::Burger => "Burger",
            ProductType::Nuggets => "Nuggets",
            ProductType::Sausages => "Sausages",
            ProductType::Meatballs => "Meatballs",
            ProductType::Cutlets => "Cutlets",
            ProductType::Seitan => "Seitan",
            ProductType::Bites => "Bites (chicken-like)",
            ProductType::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Classification rules, evaluated in order. Descriptions mix Swedish and
/// English loanwords, so most rules carry both forms. First match wins:
/// "burger" takes precedence over everything below it when keywords
/// co-occur.
const RULES: &[(&[&str], ProductType)] = &[
    (&["burger"], ProductType::Burger),
    (&["nuggets"], ProductType::Nuggets),
    (&["sausage", "korv"], ProductType::Sausages),
    (&["meatball", "köttbullar"], ProductType::Meatballs),
    (&["cutlet", "kotlett"], ProductType::Cutlets),
    (&["seitan"], ProductType::Seitan),
    (&["bites", "bitar"], ProductType::Bites),
];

/// Classify a product from its free-text description.
///
/// Matching is case-insensitive substring containment; unmatched
/// descriptions fall back to `Other`.
pub fn classify(description: &str) -> ProductType {
    let lower = description.to_lowercase();
    for (keywords, product_type) in RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *product_type;
        }
    }
    ProductType::Other
}
