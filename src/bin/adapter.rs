use colored::Colorize;
use design_patterns::adapter::{Client, Mac, Windows, WindowsAdapter};
use design_patterns::logging;

fn main() {
    logging::init();

    println!("{}", "=== Adapter Demo ===".bold());

    let client = Client;
    let mac = Mac;

    client.insert_lightning_connector_into_computer(&mac);

    let windows_adapter = WindowsAdapter::new(Windows);

    client.insert_lightning_connector_into_computer(&windows_adapter);
}
