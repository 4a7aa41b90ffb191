//! Input side: locating files and loading trace and spike tables.

pub mod paths;
pub mod spikes;
pub mod table;

pub use spikes::SpikeTable;
pub use table::TraceTable;
