//! Shift Calendar Common Library
//!
//! 勤務表テキストの正規化・パースを行うコア部分（I/Oなし）

pub mod types;
pub mod error;
pub mod normalize;
pub mod parser;

pub use types::{ScheduleMonth, ShiftRecord, ShiftTable};
pub use error::{Error, Result};
pub use normalize::{normalize, normalize_lines};
pub use parser::{parse_shift_table, parse_shifts};
