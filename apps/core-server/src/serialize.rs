use serde::Serializer;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

// millisecond precision, trailing `Z`, e.g. "2023-06-09T14:19:57.000Z"
const FRONT_TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

pub fn front_time<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = value
        .to_offset(UtcOffset::UTC)
        .format(&FRONT_TIME_FORMAT)
        .map_err(serde::ser::Error::custom)?;

    serializer.serialize_str(&formatted)
}
