//! Work partitioning, worker execution, and run dispatch.
mod assign;
mod dispatcher;
mod transport;
mod worker;


pub use assign::{assign, work_assignments};
pub use dispatcher::{RunOutput, dispatch, run_load_test, run_with_transport};
pub use transport::{ReqwestTransport, ReqwestTransportFactory, Transport, TransportFactory};
