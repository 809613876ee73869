use meshannounce_neighbors::{
    decode_neighbors, encode_neighbors_with_config, NeighborConfig, NeighborError, PeerId,
};
use meshannounce_tlv::MAX_VALUE_LEN;

use crate::cmd::EncodeArgs;
use crate::exit::{neighbor_error, CliResult, SUCCESS};
use crate::output::{print_encode, EncodeOutput, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    if args.strict {
        check_strict(&args.peer_ids)
            .map_err(|err| neighbor_error("encode failed", err))?;
    }

    let config = NeighborConfig {
        max_neighbors: args.max_neighbors,
    };
    if config.max_value_len() > MAX_VALUE_LEN {
        tracing::warn!(
            max_neighbors = config.max_neighbors,
            "neighbor cap exceeds a single record; long lists will be rejected"
        );
    }

    let record = encode_neighbors_with_config(&args.peer_ids, &config)
        .map_err(|err| neighbor_error("encode failed", err))?;

    tracing::info!(
        requested = args.peer_ids.len(),
        record_len = record.len(),
        "encoded direct-neighbor record"
    );

    let out = EncodeOutput {
        neighbors: decode_neighbors(&record).unwrap_or_default(),
        record_len: record.len(),
        record: hex::encode(&record),
    };
    print_encode(&out, &record, format);
    Ok(SUCCESS)
}

fn check_strict(peer_ids: &[String]) -> Result<(), NeighborError> {
    for id in peer_ids {
        id.parse::<PeerId>()?;
    }
    Ok(())
}
