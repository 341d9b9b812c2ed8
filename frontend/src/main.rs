use log::{error, Level};

use manifold_client::services::Logger;

fn main() {
    console_error_panic_hook::set_once();
    Logger::init(if cfg!(debug_assertions) { Level::Debug } else { Level::Info });

    if let Err(e) = manifold_client::run() {
        error!("Manifold client failed to start: {:#}", e);
    }
}
