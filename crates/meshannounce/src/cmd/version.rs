use meshannounce_neighbors::{NeighborConfig, DEFAULT_MAX_NEIGHBORS};
use meshannounce_tlv::DIRECT_NEIGHBORS;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    println!("meshannounce {}", env!("CARGO_PKG_VERSION"));
    if args.extended {
        let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);
        let max_value_len = NeighborConfig::default().max_value_len();
        println!("target: {target}");
        println!("neighbor_tag: {DIRECT_NEIGHBORS:#04x}");
        println!("max_neighbors: {DEFAULT_MAX_NEIGHBORS}");
        println!("max_value_len: {max_value_len}");
    }
    Ok(SUCCESS)
}
