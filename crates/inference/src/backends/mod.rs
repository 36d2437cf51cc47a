pub mod vaal;

pub use self::vaal::VaalEngine;
