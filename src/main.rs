//! Windowed showcase runner.
//!
//! Pass a showcase plan as the first argument, or run bare for the
//! built-in demo plan.

use std::path::Path;

use vitrine::{ShowcasePlan, Viewer};

fn main() {
    env_logger::init();

    let mut builder = Viewer::builder();
    if let Some(arg) = std::env::args().nth(1) {
        match ShowcasePlan::load(Path::new(&arg)) {
            Ok(plan) => builder = builder.with_plan(plan),
            Err(e) => {
                log::error!("could not load showcase plan '{arg}': {e}");
                std::process::exit(1);
            }
        }
    } else {
        log::info!("no plan given, using the built-in showcase");
    }

    if let Err(e) = builder.build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
