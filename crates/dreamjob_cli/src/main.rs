//! CLI smoke entry point.
//!
//! Usage: `dreamjob_cli [config.json]`. Without a config file the seeded
//! in-memory backend is used and logging stays off.

use dreamjob_core::{init_from_config, CoreConfig, Repositories, VacancyService};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dreamjob_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => CoreConfig::load(path)?,
        None => CoreConfig::default(),
    };
    init_from_config(&config.logging)?;

    let repositories = Repositories::open(&config.storage)?;
    let cities = repositories.cities.find_all()?;
    let service = VacancyService::new(repositories.vacancies);

    println!("dreamjob_core version={}", dreamjob_core::core_version());
    for vacancy in service.find_all_visible()? {
        let city = cities
            .iter()
            .find(|city| city.id == vacancy.city_id)
            .map_or("unknown", |city| city.name.as_str());
        println!(
            "{:>4}  {}  {}  {}",
            vacancy.id,
            vacancy.creation_date.format("%Y-%m-%d %H:%M"),
            vacancy.title,
            city
        );
    }
    info!("event=cli_list module=cli status=ok");
    Ok(())
}
