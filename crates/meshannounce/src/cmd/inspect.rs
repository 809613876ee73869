use meshannounce_tlv::{iter_tlvs, tag_name};

use crate::cmd::InspectArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_inspect, InspectOutput, OutputFormat, RecordOutput};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = args.payload.resolve()?;
    let out = inspect_payload(&payload);
    if out.truncated {
        tracing::warn!(
            payload_len = out.payload_len,
            records = out.records.len(),
            "payload ends in a truncated record"
        );
    }
    print_inspect(&out, format);
    Ok(SUCCESS)
}

fn inspect_payload(payload: &[u8]) -> InspectOutput {
    let mut iter = iter_tlvs(payload);
    let records = iter
        .by_ref()
        .map(|record| RecordOutput {
            offset: record.offset,
            tag: record.tag,
            tag_name: tag_name(record.tag),
            length: record.value.len(),
            wire_size: record.wire_size(),
            value: hex::encode(record.value),
        })
        .collect();

    let truncated = iter.is_truncated();
    InspectOutput {
        payload_len: payload.len(),
        records,
        truncated,
        truncated_at: truncated.then_some(iter.position()),
    }
}
