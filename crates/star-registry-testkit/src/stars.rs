//! Sample star documents.

use serde_json::{json, Value};

pub fn sirius() -> Value {
    json!({
        "dec": "-16º 42' 58",
        "ra": "6h 45m 9s",
        "story": "Sirius"
    })
}

pub fn vega() -> Value {
    json!({
        "dec": "38º 47' 1",
        "ra": "18h 36m 56s",
        "story": "Vega"
    })
}

pub fn betelgeuse() -> Value {
    json!({
        "dec": "7º 24' 25",
        "ra": "5h 55m 10s",
        "story": "Betelgeuse"
    })
}
