//! Print the OpenAPI document as JSON.

use std::io::{self, Write};

use print_broker::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), serde_json::Error> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &ApiDoc::openapi())?;
    writeln!(stdout).map_err(serde_json::Error::io)
}
