//! Assemble a resolution setup and print what the engine would receive.
//!
//! Run with proxy variables to see translation in action:
//!
//! ```bash
//! HTTPS_PROXY=http://proxy.example.com:8080 cargo run --example bootstrap
//! ```

use mortar::Mortar;
use tracing::Level;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let setup = Mortar::setup()
        .cache_sub_path("local-repo")
        .tracing(true)
        .build()?;

    println!("artifact cache: {}", setup.session.local_cache());

    for repository in &setup.repositories {
        match repository.proxy() {
            Some(proxy) => println!(
                "{} -> {} via {}://{}:{}",
                repository.id(),
                repository.url(),
                proxy.scheme(),
                proxy.host(),
                proxy.port(),
            ),
            None => println!("{} -> {} (direct)", repository.id(), repository.url()),
        }
    }

    Ok(())
}
