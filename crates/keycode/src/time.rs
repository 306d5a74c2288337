// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use crate::int::{I32Codec, I64Codec, U32Codec};
use crate::{Codec, Result, invalid_value};
use chrono::{DateTime, FixedOffset, TimeDelta};
use std::io::{Read, Write};

/// Instants with a fixed UTC offset: whole seconds since the Unix epoch in
/// UTC (8-byte signed), nanoseconds within the second (4-byte unsigned),
/// then the offset in seconds east of UTC (4-byte signed). The UTC instant
/// is the primary sort key; the offset only disambiguates equal instants.
///
/// Zone names and daylight-saving rules are not carried; decoding always
/// reconstructs a fixed-offset zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimestampCodec;

impl Codec for TimestampCodec {
    type Value = DateTime<FixedOffset>;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &DateTime<FixedOffset>) -> Result<()> {
        I64Codec.encode_into(writer, &value.timestamp())?;
        U32Codec.encode_into(writer, &value.timestamp_subsec_nanos())?;
        I32Codec.encode_into(writer, &value.offset().local_minus_utc())
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<DateTime<FixedOffset>> {
        let seconds = I64Codec.decode_from(reader)?;
        let nanos = U32Codec.decode_from(reader)?;
        let offset_seconds = I32Codec.decode_from(reader)?;
        let Some(offset) = FixedOffset::east_opt(offset_seconds) else {
            return invalid_value!("timezone offset {offset_seconds}s out of range");
        };
        let Some(instant) = DateTime::from_timestamp(seconds, nanos) else {
            return invalid_value!("timestamp {seconds}s {nanos}ns out of range");
        };
        Ok(instant.with_timezone(&offset))
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}

/// Elapsed time as floor-decomposed whole seconds (8-byte signed) and
/// subsecond nanoseconds (4-byte unsigned), so negative durations order
/// before positive ones and byte order equals duration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationCodec;

impl Codec for DurationCodec {
    type Value = TimeDelta;

    fn encode_into<W: Write>(&self, writer: &mut W, value: &TimeDelta) -> Result<()> {
        let mut seconds = value.num_seconds();
        let mut nanos = value.subsec_nanos();
        if nanos < 0 {
            seconds -= 1;
            nanos += 1_000_000_000;
        }
        I64Codec.encode_into(writer, &seconds)?;
        U32Codec.encode_into(writer, &(nanos as u32))
    }

    fn decode_from<R: Read>(&self, reader: &mut R) -> Result<TimeDelta> {
        let seconds = I64Codec.decode_from(reader)?;
        let nanos = U32Codec.decode_from(reader)?;
        if nanos >= 1_000_000_000 {
            return invalid_value!("subsecond nanoseconds {nanos} out of range");
        }
        let Some(duration) = TimeDelta::new(seconds, nanos) else {
            return invalid_value!("duration {seconds}s {nanos}ns out of range");
        };
        Ok(duration)
    }

    fn requires_terminator(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn timestamp(seconds: i64, nanos: u32, offset_seconds: i32) -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(offset_seconds).unwrap();
        offset.timestamp_opt(seconds, nanos).unwrap()
    }

    #[test]
    fn test_timestamp_round_trip() {
        for value in [
            timestamp(0, 0, 0),
            timestamp(1_700_000_000, 999_999_999, 7200),
            timestamp(-1, 500, -3600),
        ] {
            let bytes = TimestampCodec.encode(&value).unwrap();
            let decoded = TimestampCodec.decode(&bytes).unwrap();
            assert_eq!(decoded, value);
            assert_eq!(decoded.offset(), value.offset());
        }
    }

    #[test]
    fn test_instant_is_primary_key() {
        // The same wall-clock reading in two zones is two instants; the
        // earlier instant sorts first regardless of the offset sign.
        let values = [
            timestamp(-1_000, 0, 0),
            timestamp(0, 0, 3600),
            timestamp(0, 1, -3600),
            timestamp(1, 0, 0),
        ];
        let mut previous: Option<Vec<u8>> = None;
        for value in values {
            let bytes = TimestampCodec.encode(&value).unwrap();
            if let Some(previous) = previous {
                assert!(previous < bytes);
            }
            previous = Some(bytes);
        }
    }

    #[test]
    fn test_offset_disambiguates_equal_instants() {
        let west = TimestampCodec.encode(&timestamp(0, 0, -3600)).unwrap();
        let utc = TimestampCodec.encode(&timestamp(0, 0, 0)).unwrap();
        let east = TimestampCodec.encode(&timestamp(0, 0, 3600)).unwrap();
        assert!(west < utc);
        assert!(utc < east);
    }

    #[test]
    fn test_duration_round_trip_and_order() {
        let values = [
            TimeDelta::try_milliseconds(-1_500).unwrap(),
            TimeDelta::try_milliseconds(-500).unwrap(),
            TimeDelta::zero(),
            TimeDelta::nanoseconds(1),
            TimeDelta::try_seconds(90).unwrap(),
        ];
        let mut previous: Option<Vec<u8>> = None;
        for value in values {
            let bytes = DurationCodec.encode(&value).unwrap();
            assert_eq!(DurationCodec.decode(&bytes).unwrap(), value);
            if let Some(previous) = previous {
                assert!(previous < bytes);
            }
            previous = Some(bytes);
        }
    }

    #[test]
    fn test_duration_rejects_bad_nanos() {
        let mut bytes = I64Codec.encode(&0).unwrap();
        bytes.extend(U32Codec.encode(&2_000_000_000).unwrap());
        assert!(DurationCodec.decode(&bytes).is_err());
    }
}
