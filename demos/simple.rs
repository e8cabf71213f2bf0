//! Basic CTON serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_cton::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        },
        User {
            id: 43,
            name: "Bob".to_string(),
            active: false,
            tags: vec!["user".to_string()],
        },
    ];

    // Serialize to CTON
    let cton = to_string(&users)?;
    println!("CTON output:\n{}\n", cton);

    // Deserialize back to struct
    let users_back: Vec<User> = from_str(&cton)?;
    assert_eq!(users, users_back);
    println!("✓ Round-trip successful");

    Ok(())
}
