use clj_chroma::highlight;

fn main() {
    let source = r#"
        ;; greet someone
        (defn greet [name]
          (println "Hello," name :twice 2 nil))
    "#;

    println!("{}", highlight(source));
}
