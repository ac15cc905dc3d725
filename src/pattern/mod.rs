mod lexer;
mod segment;

pub use lexer::{parse_segment, parse_template};
pub use segment::{Segment, SegmentKind, SegmentRange};
