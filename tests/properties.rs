use clj_chroma::utils::strip_ansi;
use clj_chroma::{highlight, Category, Highlighter};
use proptest::prelude::*;

/// Clojure-flavoured text: brackets, quotes, comments, keywords, numbers and
/// names from the tables, glued together with whitespace.
fn clojure_like() -> impl Strategy<Value = String> {
    let atoms = prop::sample::select(vec![
        "(", ")", "[", "]", "{", "}", "#{", "\"", "\\", ";", "\n", " ", ":k", "::ns/k", "42", "-1.5",
        "3/4", "nil", "true", "false", "defn", "let", "when", "doseq", "catch", "map", "*out*", "->",
        "'", "`", "~@", "@", "^", "#_", "#\"", "x", "é", "λ", "#!",
    ]);
    prop::collection::vec(atoms, 0..64).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn stripping_markers_gives_back_the_source(source in "[^\x1b]{0,200}") {
        prop_assert_eq!(strip_ansi(&highlight(&source)), source);
    }

    #[test]
    fn stripping_markers_gives_back_clojure_source(source in clojure_like()) {
        prop_assert_eq!(strip_ansi(&highlight(&source)), source);
    }

    #[test]
    fn spans_tile_the_source(source in clojure_like()) {
        let spans = Highlighter::new().classify(&source);
        let mut offset = 0;
        for span in &spans {
            prop_assert_eq!(span.range.start, offset);
            prop_assert!(span.range.end > span.range.start);
            offset = span.range.end;
        }
        prop_assert_eq!(offset, source.len());
    }

    #[test]
    fn claimed_spans_hold_no_nested_markers(source in clojure_like()) {
        let tagged = clj_chroma::Colorscheme::empty();
        let tagged = Category::ALL.into_iter().fold(tagged, |scheme, category| {
            scheme.with(category, std::sync::Arc::new(|t: &str| format!("\u{1}{t}\u{2}")))
        });
        let out = clj_chroma::highlight_with(&source, &tagged);
        let mut depth = 0i32;
        for c in out.chars() {
            match c {
                '\u{1}' => depth += 1,
                '\u{2}' => depth -= 1,
                _ => {}
            }
            prop_assert!((0..=1).contains(&depth));
        }
        prop_assert_eq!(depth, 0);
    }
}
