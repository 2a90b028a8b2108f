mod location;

pub use location::{find_by_prefix, fsa_prefix, Location, LOCATIONS};
