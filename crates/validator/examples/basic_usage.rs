//! Basic usage example for fieldrules

use fieldrules::prelude::*;

#[derive(Record)]
struct SignUp {
    #[validate("min:3 max:12")]
    pub username: String,
    #[validate("len:2")]
    pub country: String,
}

fn main() {
    let valid = SignUp {
        username: "ferris".into(),
        country: "NL".into(),
    };
    let invalid = SignUp {
        username: "fe".into(),
        country: "NLD".into(),
    };

    for (label, record) in [("valid", &valid), ("invalid", &invalid)] {
        match record.validate() {
            Ok(()) => println!("✓ {label}: ok"),
            Err(e) => println!("✗ {label}:\n{e}"),
        }
    }
}
