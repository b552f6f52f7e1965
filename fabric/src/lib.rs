pub mod site;
pub mod tag;
pub mod wire;

pub use site::SiteKind;
pub use tag::{TagOutOfRange, UnknownName};
pub use wire::{WireDir, WireKind, WireLabel, WireSituation};
