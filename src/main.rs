mod entry;
mod logger;

use stresstest::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
