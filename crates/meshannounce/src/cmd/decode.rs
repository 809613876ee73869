use meshannounce_neighbors::decode_neighbors;

use crate::cmd::DecodeArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_decode, DecodeOutput, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = args.payload.resolve()?;
    let neighbors = decode_neighbors(&payload);

    match &neighbors {
        Some(ids) => tracing::debug!(count = ids.len(), "direct-neighbor record found"),
        None => tracing::debug!(
            payload_len = payload.len(),
            "no direct-neighbor record in payload"
        ),
    }

    let out = DecodeOutput {
        found: neighbors.is_some(),
        count: neighbors.as_ref().map_or(0, Vec::len),
        neighbors,
    };
    print_decode(&out, format);
    Ok(SUCCESS)
}
