use std::collections::HashMap;

/// Immutable Swedish-to-English word table.
///
/// Built once at startup and passed by reference wherever translation is
/// needed, so tests can inject their own tables. Lookups are exact and
/// case-sensitive: a word not present in the table passes through
/// unchanged.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Build a table from (source, target) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The fixed Swedish-to-English table used for the catalog export.
    ///
    /// Keys are whole tokens as they appear in the source data, including
    /// a few multi-word ingredient phrases that only match when the full
    /// phrase survives whitespace splitting intact.
    pub fn swedish_english() -> Self {
        Self::from_pairs([
            ("Vatten", "Water"),
            ("SOJAprotein", "Soy protein"),
            ("rapsolja", "Rapeseed oil"),
            ("lök", "Onion"),
            ("salt", "Salt"),
            ("kryddor", "Spices"),
            ("naturlig arom", "Natural flavouring"),
            ("vitlök", "Garlic"),
            ("potatismjöl", "Potato flour"),
            ("kikärtor", "Chickpeas"),
            ("persilja", "Parsley"),
            ("koriander", "Coriander"),
            ("spiskummin", "Cumin"),
            ("kanel", "Cinnamon"),
            ("paprika", "Paprika"),
            ("socker", "Sugar"),
            ("tomat", "Tomato"),
            ("morot", "Carrot"),
            ("mjölk", "Milk"),
            ("ägg", "Egg"),
            ("gluten", "Gluten"),
            ("selleri", "Celery"),
            ("senap", "Mustard"),
            ("sesamfrön", "Sesame seeds"),
            ("Köttfria", "Meat-free"),
            ("Anammas", "Anamma"),
            ("Quorn", "Quorn"),
            ("Quorns", "Quorn's"),
            ("Prova", "Try"),
            ("Naturella", "Natural"),
            ("MAX", "MAX"),
            ("En", "One"),
            ("Variera", "Vary"),
            ("Njut", "Enjoy"),
            ("Oumph!", "Oumph!"),
            ("Felix", "Felix"),
            ("Nuggets", "Nuggets"),
            ("Pulled", "Pulled"),
            ("Smakrika", "Flavourful"),
            ("Vegansk", "Vegan"),
            ("Green", "Green"),
            ("Dumplings", "Dumplings"),
            ("Äntligen", "Finally"),
            ("Mungburgare", "Mung bean burger"),
            ("Creamy", "Creamy"),
            ("Grandiosas", "Grandiosas"),
            ("Formbar", "Mouldable"),
            ("Himmelskt", "Heavenly"),
            ("VETE- och SOJAPROTEIN(vatten", "WHEAT- and SOY PROTEIN(water"),
            ("kalciumklorid", "Calcium chloride"),
            ("Vatten/vann", "Water"),
            ("VETEMJÖL/HVETEMEL/HVEDEMEL", "WHEAT FLOUR"),
            ("Kikärtor (84 %)", "Chickpeas (84 %)"),
            ("Couscous (72 %) (VETE)", "Couscous (72 %) (WHEAT)"),
            ("Risflingor", "Rice flakes"),
            ("Icke-EU.", "Non-EU."),
            ("Spenat 41 %", "Spinach 41 %"),
            ("Vitkål", "White cabbage"),
            ("Morot (47%)", "Carrot (47%)"),
            ("dinatriumdifosfat", "Disodium diphosphate"),
            ("Mungböna* 68%", "Mung bean* 68%"),
            ("vegansk ragùsås 40% (vatten", "vegan ragù sauce 40% (water"),
            ("Gröna och röda linser (15 %)", "Green and red lentils (15 %)"),
            (
                "Svenskodlad vegofärs 52% (SÖTLUPIN*",
                "Swedish-grown veggie mince 52% (SWEET LUPIN*",
            ),
            ("Rehydrerat ärtprotein (50%)", "Rehydrated pea protein (50%)"),
            ("Kokta baljväxter 93% (SÖTLUPIN*", "Cooked legumes 93% (SWEET LUPIN*"),
        ])
    }

    /// Look up a single token, returning it unchanged when unmapped.
    pub fn lookup<'a>(&'a self, word: &'a str) -> &'a str {
        self.entries.get(word).map(String::as_str).unwrap_or(word)
    }

    /// Translate a string token by token.
    ///
    /// Splits on the literal space character, substitutes each token
    /// through the table and rejoins with single spaces. Tokens with
    /// attached punctuation will not match keys lacking that punctuation;
    /// translation is token-exact by design.
    pub fn translate(&self, text: &str) -> String {
        text.split(' ')
            .map(|word| self.lookup(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
