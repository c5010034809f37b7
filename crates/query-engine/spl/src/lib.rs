pub mod spl;
