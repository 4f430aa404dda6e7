pub mod client;
pub mod data;
pub mod endpoints;
pub mod internal_error;
pub mod storage;

use std::path::PathBuf;

use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::{routes, Build, Rocket};

use storage::DocumentStore;

/// Resolves the backing-file path from the `data_file` configuration key,
/// falling back to `data.json`. A key that is present but unusable is
/// warned about instead of being silently ignored; a missing key defaults
/// quietly.
pub fn configured_data_file(figment: &Figment) -> PathBuf {
    match figment.extract_inner::<PathBuf>("data_file") {
        Ok(path) => path,
        Err(e) => {
            if figment.find_value("data_file").is_ok() {
                log::warn!("ignoring unusable data_file value: {}", e);
            }
            PathBuf::from("data.json")
        }
    }
}

/// Builds the server around the given store: the document API under `/api`
/// and the browser client's static assets at the root.
pub fn server(store: DocumentStore) -> Rocket<Build> {
    rocket::build()
        .manage(store)
        .mount("/api", routes![endpoints::get_data, endpoints::set_data])
        .mount(
            "/",
            FileServer::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public")).rank(15),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_data_file_reads_the_key() {
        let figment = Figment::from(("data_file", "planner/state.json"));
        assert_eq!(
            configured_data_file(&figment),
            PathBuf::from("planner/state.json")
        );
    }

    #[test]
    fn configured_data_file_defaults_when_the_key_is_missing() {
        assert_eq!(
            configured_data_file(&Figment::new()),
            PathBuf::from("data.json")
        );
    }

    #[test]
    fn configured_data_file_defaults_when_the_value_is_unusable() {
        let figment = Figment::from(("data_file", vec![1, 2, 3]));
        assert_eq!(configured_data_file(&figment), PathBuf::from("data.json"));
    }
}
