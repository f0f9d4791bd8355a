//! Print the Argon2 hash of a password for `auth.admin_password_hash`

use catalog_server::services::auth::hash_password;

fn main() -> anyhow::Result<()> {
    let password = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: hash-password <password>"))?;
    println!("{}", hash_password(&password)?);
    Ok(())
}
