// Job search relay. Results come back from the provider untouched.

pub mod client;
pub mod handlers;
