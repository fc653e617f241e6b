// Some prebuilt parsers and transfer functions
// for datasets used in development.
// With so many different data formats, a user should
// write their own to satisfy their needs.

pub mod parse;
pub mod transfer_functions;
