//! Generate an `ADMIN_PASSWORD_HASH` value
//!
//! Reads one password line from stdin and prints its Argon2id PHC string:
//!
//! ```text
//! echo 'Mergington#Staff2024' | cargo run --bin hash_password
//! ```

use std::io::{self, BufRead};

use anyhow::Context;
use platform::password::ClearTextPassword;

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;

    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);

    let password = ClearTextPassword::new(line)?;
    let hashed = password.hash()?;

    println!("{}", hashed.as_phc_string());
    Ok(())
}
