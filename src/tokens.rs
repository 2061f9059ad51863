//! Keyword tables: the names a user types, and the Jelly atoms they stand for.

use std::{collections::HashMap, sync::LazyLock};

/// Keywords for links of arity one.
pub(crate) const MONADIC: &[(&str, &str)] = &[
    ("abs", "A"),
    ("all", "Ạ"),
    ("all_not_empty", "Ȧ"),
    ("i_to_b", "B"),
    ("b_to_i", "Ḅ"),
    ("odd", "Ḃ"),
    ("not", "C"),
    ("ceil", "Ċ"),
    ("i_to_d", "D"),
    ("d_to_i", "Ḍ"),
    ("tail", "Ḋ"),
    ("all_eq", "E"),
    ("any", "Ẹ"),
    ("zip_idx", "Ė"),
    ("flat", "F"),
    ("floor", "Ḟ"),
    ("grid", "G"),
    ("idx_part", "Ġ"),
    ("half", "H"),
    ("double", "Ḥ"),
    ("head", "Ḣ"),
    ("deltas", "I"),
    ("inv", "İ"),
    ("abs_le_one", "Ị"),
    ("iota_len", "J"),
    ("join_space", "K"),
    ("split_space", "Ḳ"),
    ("len", "L"),
    ("iota0", "Ḷ"),
    ("idx_max", "M"),
    ("minr", "Ṃ"),
    ("maxr", "Ṁ"),
    ("neg", "N"),
    ("println", "Ṅ"),
    ("NOT", "Ṇ"),
    ("ord", "O"),
    ("chr", "Ọ"),
    ("print", "Ȯ"),
    ("prod", "P"),
    ("pop", "Ṗ"),
    ("uniq", "Q"),
    ("iota", "R"),
    ("rev", "Ṛ"),
    ("print_str", "Ṙ"),
    ("sum", "S"),
    ("sign", "Ṡ"),
    ("sort", "Ṣ"),
    ("idx", "T"),
    ("new_bool_arr", "Ṭ"),
    ("last", "Ṫ"),
    ("rev_arr", "U"),
    ("grade_up", "Ụ"),
    ("eval", "V"),
    ("uneval", "Ṿ"),
    ("wrap", "W"),
    ("sublists", "Ẇ"),
    ("len_each", "Ẉ"),
    ("rand_elem", "X"),
    ("shuffle", "Ẋ"),
    ("join_ln", "Y"),
    ("split_ln", "Ỵ"),
    ("tighten", "Ẏ"),
    ("columns", "Z"),
    ("prep_zero", "Ż"),
    ("is_prime", "Ẓ"),
    ("sum_vec", "§"),
    ("sums", "Ä"),
    ("factorial", "!"),
    ("bit_not", "~"),
    ("sq", "²"),
    ("sqrt", "½"),
    ("deg_to_rad", "°"),
    ("NOT_vect", "¬"),
    ("add1", "‘"),
    ("sub1", "’"),
    ("id", "¹"),
    ("group", "Œg"),
    ("group_len", "Œɠ"),
    ("rle", "Œr"),
];

/// Keywords for links of arity two.
pub(crate) const DYADIC: &[(&str, &str)] = &[
    ("+", "+"),
    ("_", "_"),
    ("*", "×"),
    ("div", "÷"),
    ("=", "="),
    ("join", ";"),
    ("cut", "k"),
    ("mod", "%"),
    ("max", "»"),
    ("min", "«"),
    ("chunk", "s"),
    ("slide", "ṡ"),
    ("split_at", "ṣ"),
    ("<", "<"),
    (">", ">"),
    ("l", "ḷ"),
    ("r", "ṛ"),
];

/// Quicks modify the link before them, so their arity depends on context.
pub(crate) const QUICK: &[(&str, &str)] = &[
    ("each", "€"),
    ("fold", "/"),
    ("chunk_fold", "/"),
    ("scan", "\\"),
    ("slide_fold", "\\"),
    ("prior", "ṕ"),
];

/// Chain separators: `.` starts a new monadic chain, `:` a new dyadic one.
pub(crate) const SEPARATOR: &[(&str, &str)] = &[
    (".", "µ"),
    (":", "ð"),
];

pub(crate) struct Table(HashMap<&'static str, &'static str>);

impl Table {
    fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self(entries.iter().copied().collect())
    }

    pub(crate) fn get(&self, keyword: &str) -> Option<&'static str> {
        self.0.get(keyword).copied()
    }

    pub(crate) fn contains(&self, keyword: &str) -> bool {
        self.0.contains_key(keyword)
    }
}

pub(crate) static MONADS: LazyLock<Table> = LazyLock::new(|| Table::new(MONADIC));
pub(crate) static DYADS: LazyLock<Table> = LazyLock::new(|| Table::new(DYADIC));
pub(crate) static QUICKS: LazyLock<Table> = LazyLock::new(|| Table::new(QUICK));
pub(crate) static SEPARATORS: LazyLock<Table> = LazyLock::new(|| Table::new(SEPARATOR));

/// Every keyword, in table order, for completion.
pub(crate) fn keywords() -> impl Iterator<Item = &'static str> {
    MONADIC
        .iter()
        .chain(DYADIC)
        .chain(QUICK)
        .chain(SEPARATOR)
        .map(|(keyword, _)| *keyword)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_keywords_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for keyword in keywords() {
            assert!(seen.insert(keyword), "duplicate keyword {}", keyword);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(MONADS.get("sum"), Some("S"));
        assert_eq!(MONADS.get("rle"), Some("Œr"));
        assert_eq!(DYADS.get("*"), Some("×"));
        assert_eq!(QUICKS.get("each"), Some("€"));
        assert_eq!(SEPARATORS.get("."), Some("µ"));
        assert_eq!(DYADS.get("sum"), None);
    }
}
