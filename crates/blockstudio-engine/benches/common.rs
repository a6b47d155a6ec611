// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use serde_json::{Value, json};

/// A persisted landing page: `repeats` copies of a mix of legacy-shaped blocks.
#[allow(dead_code)]
pub fn generate_legacy_blocks(repeats: usize) -> Value {
    let mut blocks = Vec::with_capacity(repeats * 6);
    for i in 0..repeats {
        blocks.push(json!({
            "id": format!("hero-{i}"),
            "type": "hero",
            "title": "Välkommen",
            "description": "Vi hjälper dig hela vägen.",
            "background": "dark",
        }));
        blocks.push(json!({
            "id": format!("faq-{i}"),
            "type": "faq",
            "items": [
                { "question": "Vad kostar det?", "answer": "Från 499 kr." },
                { "question": "Hur lång tid tar det?", "answer": "En vecka." },
            ],
        }));
        blocks.push(json!({
            "id": format!("features-{i}"),
            "type": "featureList",
            "columns": "4",
            "items": [
                { "title": "Snabbt", "description": "Leverans inom 24 h" },
                { "title": "Tryggt", "description": "Nöjd-kund-garanti" },
            ],
        }));
        blocks.push(json!({
            "id": format!("table-{i}"),
            "type": "simpleTable",
            "headers": ["Tjänst", "Pris"],
            "rows": [["Städning", "300 kr", "1 h"], ["Fönster"]],
        }));
        blocks.push(json!({ "id": format!("retired-{i}"), "type": "pricingWidget" }));
        blocks.push(json!({ "id": format!("divider-{i}"), "type": "divider", "style": "dots" }));
    }
    Value::Array(blocks)
}
