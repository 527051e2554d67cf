mod record_handler;
mod record_response;
mod router;

pub(crate) use {
    record_handler::record_handler,
    record_response::RecordResponse,
    router::{SharedOrchestrator, router},
};
