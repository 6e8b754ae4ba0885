// Resume parsing: upload → inline file → model in JSON mode → strict decode.

pub mod handlers;
pub mod parser;
