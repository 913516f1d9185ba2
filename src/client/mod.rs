pub mod model;
pub mod transport;

pub use model::{Boundary, ErrorBody, Location, MapData, QueryRequest, QueryResponse};
pub use transport::{HttpTransport, QueryTransport};
