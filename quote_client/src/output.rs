//! Writing the received bid to the local output file.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use quote_common::{BidResponse, Result};

/// Default output file, relative to the working directory.
pub const OUTPUT_PATH: &str = "cotacao.txt";

/// Create or truncate `path` and write `Dólar: <bid>` to it.
pub fn write_quote(path: &Path, bid: &BidResponse) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bid.line().as_bytes())?;
    Ok(())
}
