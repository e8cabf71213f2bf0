//! Working with dynamic trees through `Value` and the `cton!` macro.
//!
//! Run with: cargo run --example dynamic_values

use serde_cton::{cton, decode, encode, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = cton!({
        "server": {"host": "localhost", "port": 8080},
        "features": ["logging", "metrics"],
        "debug": false
    });

    let text = encode(&config)?;
    println!("Encoded: {}\n", text);

    // Decoding never fails, even on truncated input.
    let parsed = decode(&text);
    if let Some(server) = parsed.as_object().and_then(|o| o.get("server")) {
        let host = server
            .as_object()
            .and_then(|s| s.get("host"))
            .and_then(Value::as_str);
        println!("Host: {:?}", host);
    }

    let truncated = decode("{server{host localhost port 80");
    println!("Partial tree from truncated input: {}", truncated);

    Ok(())
}
