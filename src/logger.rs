use anyhow::Result;
use simple_logger::init_with_level;

pub fn init(debug: bool) -> Result<()> {
    init_with_level(level(debug))?;

    Ok(())
}

fn level(debug: bool) -> log::Level {
    if debug {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
