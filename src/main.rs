mod entry;
mod system;

use alyvix_sensor::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
