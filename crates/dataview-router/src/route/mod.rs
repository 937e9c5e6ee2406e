/// Route module: declaration, pattern parsing and matching
///
/// - `segment`: typed pattern segments
/// - `parser`: pattern parsing and priority
/// - `matcher`: path matching against parsed patterns
/// - `definition`: the declarative `Route` entity

pub mod definition;
pub mod matcher;
pub mod parser;
pub mod segment;

pub use definition::Route;
pub use parser::{calculate_priority, parse_child_pattern, parse_pattern, ParsedPattern};
pub use segment::{classify_segment, Segment};
