//! czfilter main entrypoint.

use czfilter::run;
use czfilter::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
