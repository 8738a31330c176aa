mod location;

pub use location::LocationRecord;
