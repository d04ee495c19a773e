//! Static name tables for the symbol-shaped categories.
//!
//! The tables are disjoint: a name appears in at most one of them.

pub const SPECIAL_FORMS: &[&str] = &[
    "def",
    "if",
    "do",
    "let",
    "quote",
    "var",
    "fn",
    "loop",
    "recur",
    "throw",
    "try",
    "monitor-enter",
    "monitor-exit",
    "new",
    "set!",
    ".",
    "fn*",
    "let*",
    "letfn*",
    "loop*",
    "case*",
    "deftype*",
    "reify*",
    "import*",
];

pub const DEFINITIONS: &[&str] = &[
    "defn",
    "defn-",
    "defmacro",
    "defmulti",
    "defmethod",
    "defonce",
    "defprotocol",
    "defrecord",
    "defstruct",
    "deftype",
    "definline",
    "definterface",
    "ns",
];

pub const CONDITIONALS: &[&str] = &[
    "case",
    "cond",
    "condp",
    "cond->",
    "cond->>",
    "if-let",
    "if-not",
    "if-some",
    "when",
    "when-first",
    "when-let",
    "when-not",
    "when-some",
];

pub const REPEATS: &[&str] = &["doseq", "dotimes", "while", "for"];

pub const EXCEPTIONS: &[&str] = &["catch", "finally"];

pub const MACROS: &[&str] = &[
    "->",
    "->>",
    "..",
    "amap",
    "and",
    "areduce",
    "as->",
    "assert",
    "binding",
    "bound-fn",
    "comment",
    "declare",
    "delay",
    "dosync",
    "doto",
    "extend-protocol",
    "extend-type",
    "future",
    "gen-class",
    "gen-interface",
    "import",
    "io!",
    "lazy-cat",
    "lazy-seq",
    "letfn",
    "locking",
    "memfn",
    "or",
    "proxy",
    "proxy-super",
    "pvalues",
    "refer-clojure",
    "reify",
    "some->",
    "some->>",
    "sync",
    "time",
    "vswap!",
    "with-bindings",
    "with-in-str",
    "with-local-vars",
    "with-open",
    "with-out-str",
    "with-precision",
    "with-redefs",
];

pub const VARIABLES: &[&str] = &[
    "*1",
    "*2",
    "*3",
    "*e",
    "*agent*",
    "*assert*",
    "*clojure-version*",
    "*command-line-args*",
    "*compile-files*",
    "*compile-path*",
    "*data-readers*",
    "*default-data-reader-fn*",
    "*err*",
    "*file*",
    "*flush-on-newline*",
    "*in*",
    "*ns*",
    "*out*",
    "*print-dup*",
    "*print-length*",
    "*print-level*",
    "*print-meta*",
    "*print-readably*",
    "*read-eval*",
    "*unchecked-math*",
    "*warn-on-reflection*",
];

pub const CORE_FNS: &[&str] = &[
    "*",
    "+",
    "-",
    "/",
    "<",
    "<=",
    "=",
    "==",
    ">",
    ">=",
    "not=",
    "inc",
    "dec",
    "max",
    "min",
    "mod",
    "rem",
    "quot",
    "zero?",
    "pos?",
    "neg?",
    "even?",
    "odd?",
    "nil?",
    "some?",
    "true?",
    "false?",
    "number?",
    "string?",
    "keyword?",
    "symbol?",
    "map?",
    "vector?",
    "list?",
    "set?",
    "seq?",
    "coll?",
    "fn?",
    "empty?",
    "every?",
    "not-every?",
    "not-any?",
    "contains?",
    "identical?",
    "instance?",
    "not",
    "some",
    "identity",
    "constantly",
    "comp",
    "partial",
    "complement",
    "juxt",
    "memoize",
    "apply",
    "map",
    "mapv",
    "mapcat",
    "map-indexed",
    "filter",
    "filterv",
    "remove",
    "reduce",
    "reduce-kv",
    "reductions",
    "keep",
    "keep-indexed",
    "into",
    "conj",
    "cons",
    "concat",
    "assoc",
    "assoc-in",
    "dissoc",
    "get",
    "get-in",
    "update",
    "update-in",
    "merge",
    "merge-with",
    "select-keys",
    "keys",
    "vals",
    "key",
    "val",
    "zipmap",
    "frequencies",
    "group-by",
    "partition",
    "partition-by",
    "partition-all",
    "first",
    "second",
    "last",
    "rest",
    "next",
    "nth",
    "nthnext",
    "butlast",
    "drop",
    "drop-while",
    "drop-last",
    "take",
    "take-while",
    "take-last",
    "take-nth",
    "count",
    "seq",
    "vec",
    "vector",
    "list",
    "list*",
    "hash-map",
    "hash-set",
    "sorted-map",
    "sorted-set",
    "set",
    "range",
    "repeat",
    "repeatedly",
    "iterate",
    "cycle",
    "interleave",
    "interpose",
    "distinct",
    "dedupe",
    "flatten",
    "reverse",
    "sort",
    "sort-by",
    "shuffle",
    "empty",
    "str",
    "subs",
    "name",
    "namespace",
    "keyword",
    "symbol",
    "format",
    "print",
    "println",
    "pr",
    "prn",
    "pr-str",
    "prn-str",
    "print-str",
    "println-str",
    "newline",
    "read-string",
    "slurp",
    "spit",
    "atom",
    "deref",
    "swap!",
    "reset!",
    "compare-and-set!",
    "ref",
    "alter",
    "commute",
    "ref-set",
    "agent",
    "send",
    "send-off",
    "await",
    "volatile!",
    "vreset!",
    "promise",
    "deliver",
    "realized?",
    "force",
    "meta",
    "with-meta",
    "vary-meta",
    "type",
    "class",
    "ex-info",
    "ex-data",
    "ex-message",
    "gensym",
    "resolve",
    "require",
    "use",
    "refer",
    "in-ns",
    "eval",
    "macroexpand",
    "macroexpand-1",
    "doall",
    "dorun",
    "run!",
    "transduce",
    "sequence",
    "eduction",
    "completing",
    "rand",
    "rand-int",
    "rand-nth",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_are_disjoint() {
        let tables = [
            SPECIAL_FORMS,
            DEFINITIONS,
            CONDITIONALS,
            REPEATS,
            EXCEPTIONS,
            MACROS,
            VARIABLES,
            CORE_FNS,
        ];
        let mut seen = HashSet::new();
        for table in tables {
            for name in table {
                assert!(seen.insert(*name), "`{name}` appears in more than one table");
            }
        }
    }
}
