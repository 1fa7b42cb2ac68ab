#[macro_use]
extern crate rocket;

use backend::{build_rocket, config};

#[launch]
fn rocket() -> _ {
    config::load_environment();
    config::init_logger();
    build_rocket()
}
