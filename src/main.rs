use std::error::Error;

use dayplan::storage::DocumentStore;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let data_file = dayplan::configured_data_file(&rocket::Config::figment());

    dayplan::server(DocumentStore::open(data_file))
        .launch()
        .await?;

    Ok(())
}
