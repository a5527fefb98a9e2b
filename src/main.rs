//! rCalGrab main entrypoint.

use rcalgrab::run;
use rcalgrab::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
