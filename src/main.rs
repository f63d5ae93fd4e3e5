use decoder::LineDecoder;
use env_logger::Env;
use std::{error::Error, io};

pub mod decoder;
pub mod errors;
pub mod util;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let stderr = io::stderr();

    match LineDecoder::new(stdin, stdout, stderr).run() {
        Ok(summary) => {
            log::info!(
                "Finished: {} lines, {} decoded, {} skipped, {} bytes written",
                summary.lines,
                summary.decoded,
                summary.skipped,
                summary.bytes
            );
            Ok(())
        }
        Err(why) => {
            log::error!("{why} (Aborting)");
            Err(why.into())
        }
    }
}
