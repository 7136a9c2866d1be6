pub mod patterns;
pub mod schedule;

pub use patterns::{DetailRow, BOOKED_MARKER, END_OF_BLOCK_MARKER};
pub use schedule::{
    parse_lines, parse_report, LineEvent, ParseOutcome, ParseStats, ScanState, ScheduleParser,
};
