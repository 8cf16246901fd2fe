use tracing::info;
use bookshelf::catalog::factory;
use bookshelf::catalog::sample::{print_catalog, run_sample};
use bookshelf::core::domain::Configuration;
use bookshelf::utils::logs::setup_tracing;

const STRICT_MODE: bool = false;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = if STRICT_MODE {
        Configuration::strict("dev")
    } else {
        Configuration::new("dev")
    };

    let mut catalog_svc = factory::create_catalog_service(&config);
    let books = run_sample(catalog_svc.as_mut())?;
    print_catalog(&mut std::io::stdout().lock(), &books)?;
    info!(catalog = config.catalog_name.as_str(), size = books.len(), "printed catalog");
    Ok(())
}
