//! Bibliotek demo driver.
//!
//! Seeds the sample catalog and walks through the librarian and member
//! operations, logging confirmations as it goes.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliotek::{catalog::sample_catalog, Book, Role};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bibliotek=info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bibliotek v{}", env!("CARGO_PKG_VERSION"));

    let mut catalog = sample_catalog()?;

    // The librarian record stays in the catalog; work on a copy and pass the
    // catalog into each delegated operation.
    let charlie = catalog
        .find_librarian(2001)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("sample librarian missing"))?;

    charlie.add_book(&mut catalog, Book::new("The Hobbit", "J.R.R. Tolkien", 11))?;

    println!("Library books:");
    for line in charlie.list_books(&catalog) {
        println!("  {line}");
    }
    println!("Registered members:");
    for line in charlie.list_members(&catalog) {
        println!("  {line}");
    }

    // Alice borrows and returns 1984.
    if !catalog.authenticate(Role::Member, 1001, "secure123") {
        anyhow::bail!("sample member failed to authenticate");
    }
    catalog.checkout(1001, 2)?;
    println!(
        "After checkout: {}",
        catalog.list_books()[&2]
    );
    catalog.checkin(1001, 2)?;
    println!(
        "After checkin:  {}",
        catalog.list_books()[&2]
    );

    Ok(())
}
