use service::line::{LineRepository, LineService};

/// Shared handler state; cheap to clone per request.
#[derive(Clone)]
pub struct ServerState {
    pub lines: LineService<dyn LineRepository>,
}

impl ServerState {
    pub fn new(lines: LineService<dyn LineRepository>) -> Self { Self { lines } }
}
