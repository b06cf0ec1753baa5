pub mod breadcrumb;
pub mod header;

pub use header::Header;
