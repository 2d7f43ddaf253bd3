use crate::translate::TranslationTable;

/// Ingredients that carry no commercial signal when looking for the main
/// ingredient. Lists are ordered by descending weight, so skipping these
/// leaves the first meaningful ingredient.
const FILLERS: [&str; 5] = ["vatten", "water", "salt", "kryddor", "naturlig arom"];

/// Extracts the primary ingredient from a free-text ingredient list.
///
/// Source lists look like `"INGREDIENSER: Vatten, SOJAprotein, salt"` — a
/// label prefix followed by comma-separated ingredients in descending
/// weight order.
pub struct IngredientExtractor<'t> {
    table: &'t TranslationTable,
}

impl<'t> IngredientExtractor<'t> {
    pub fn new(table: &'t TranslationTable) -> Self {
        Self { table }
    }

    /// The first listed ingredient, translated. No filtering.
    ///
    /// Absent input yields an empty string.
    pub fn sanitise_first(&self, ingredients: Option<&str>) -> String {
        let Some(ingredients) = ingredients else {
            return String::new();
        };
        if ingredients.is_empty() {
            return String::new();
        }

        let cleaned = strip_label(ingredients);
        let first = cleaned.split(',').next().unwrap_or("").trim();
        self.table.translate(first)
    }

    /// The first listed ingredient that is not a filler, translated.
    ///
    /// Filters out segments containing water, salt, spices or natural
    /// flavouring (case-insensitively) before picking the first survivor.
    /// Absent input, or a list of nothing but fillers, yields an empty
    /// string.
    pub fn main_ingredient(&self, ingredients: Option<&str>) -> String {
        let Some(ingredients) = ingredients else {
            return String::new();
        };
        if ingredients.is_empty() {
            return String::new();
        }

        let cleaned = strip_label(ingredients);
        let first_real = cleaned
            .split(',')
            .map(str::trim)
            .find(|segment| !is_filler(segment))
            .unwrap_or("");
        self.table.translate(first_real)
    }
}

/// Remove a leading label such as `"INGREDIENSER: "` — everything up to
/// and including the first colon, plus following whitespace.
fn strip_label(ingredients: &str) -> &str {
    match ingredients.split_once(':') {
        Some((label, rest)) if !label.is_empty() => rest.trim_start(),
        _ => ingredients,
    }
}

fn is_filler(segment: &str) -> bool {
    let lower = segment.to_lowercase();
    FILLERS.iter().any(|filler| lower.contains(filler))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor_fixture() -> TranslationTable {
        TranslationTable::swedish_english()
    }

    #[test]
    fn test_sanitise_first_absent_input() {
        let table = extractor_fixture();
        let extractor = IngredientExtractor::new(&table);
        assert_eq!(extractor.sanitise_first(None), "");
        assert_eq!(extractor.sanitise_first(Some("")), "");
    }

    #[test]
    fn test_main_ingredient_absent_input() {
        let table = extractor_fixture();
        let extractor = IngredientExtractor::new(&table);
        assert_eq!(extractor.main_ingredient(None), "");
        assert_eq!(extractor.main_ingredient(Some("")), "");
    }

    #[test]
    fn test_sanitise_first_takes_first_entry_unfiltered() {
        let table = extractor_fixture();
        let extractor = IngredientExtractor::new(&table);
        let result =
            extractor.sanitise_first(Some("INGREDIENSER: Vatten, SOJAprotein, salt"));
        assert_eq!(result, "Water");
    }

    #[test]
    fn test_main_ingredient_skips_fillers() {
        let table = extractor_fixture();
        let extractor = IngredientExtractor::new(&table);
        let result =
            extractor.main_ingredient(Some("INGREDIENSER: Vatten, SOJAprotein, salt"));
        assert_eq!(result, "Soy protein");
    }

    #[test]
    fn test_main_ingredient_filler_match_is_case_insensitive() {
        let table = extractor_fixture();
        let extractor = IngredientExtractor::new(&table);
        let result = extractor.main_ingredient(Some("INGREDIENSER: VATTEN, kikärtor"));
        assert_eq!(result, "Chickpeas");
    }

    #[test]
    fn test_main_ingredient_all_fillers() {
        let table = extractor_fixture();
        let extractor = IngredientExtractor::new(&table);
        let result = extractor.main_ingredient(Some("INGREDIENSER: Vatten, salt, kryddor"));
        assert_eq!(result, "");
    }

    #[test]
    fn test_missing_label_prefix() {
        let table = extractor_fixture();
        let extractor = IngredientExtractor::new(&table);
        assert_eq!(
            extractor.sanitise_first(Some("kikärtor, rapsolja")),
            "Chickpeas"
        );
    }

    #[test]
    fn test_multiword_keys_do_not_match_token_split() {
        let table = extractor_fixture();
        let extractor = IngredientExtractor::new(&table);
        // "Kikärtor (84 %)" is a table key, but translation works token by
        // token, so the multi-word phrase passes through untranslated.
        let result = extractor.main_ingredient(Some(
            "INGREDIENSER: Vatten, Kikärtor (84 %), salt",
        ));
        assert_eq!(result, "Kikärtor (84 %)");
    }
}
