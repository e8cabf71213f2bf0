//! CTON vs JSON size comparison.
//!
//! Run with: cargo run --example token_efficiency

use serde::{Deserialize, Serialize};
use serde_cton::to_string;
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    active: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ApiResponse {
    users: Vec<User>,
    total: u32,
    page: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let response = ApiResponse {
        users: vec![
            User {
                id: 1,
                name: "Alice".to_string(),
                active: true,
            },
            User {
                id: 2,
                name: "Bob".to_string(),
                active: true,
            },
            User {
                id: 3,
                name: "Charlie".to_string(),
                active: false,
            },
        ],
        total: 3,
        page: 1,
    };

    let json = serde_json::to_string(&response)?;
    println!("JSON ({} chars):\n{}\n", json.len(), json);

    let cton = to_string(&response)?;
    println!("CTON ({} chars):\n{}\n", cton.len(), cton);

    let savings = ((json.len() - cton.len()) as f64 / json.len() as f64) * 100.0;
    println!(
        "✓ Size savings: {:.1}% ({} → {} chars)",
        savings,
        json.len(),
        cton.len()
    );

    Ok(())
}
