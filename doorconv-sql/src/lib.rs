pub mod convert;
pub mod dump;
pub mod error;
pub mod gfx;
pub mod spawn;

pub use convert::{ConvertOptions, ConvertReport, convert_dump};
pub use dump::{Column, DumpRecord, DumpScan, ParseMode, parse_dump_file, scan_dump};
pub use error::SqlError;
pub use gfx::GfxEntry;
pub use spawn::SpawnEntry;
