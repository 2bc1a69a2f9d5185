// Domain layer: timesheet rows, summary rows, the input schema and the ports
// the pipeline is assembled from.

pub mod fields;
pub mod model;
pub mod ports;
pub mod schema;
