//! resetboard main entrypoint.

use resetboard::run;
use resetboard::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
