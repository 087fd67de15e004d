mod admission;
mod checker;
mod context;
mod error;
mod fanout;
mod fault;
mod handlers;
mod resolver;
mod scores;
mod validate;

pub use admission::{DirectScheduler, Scheduler, Task};
pub use checker::check_exists;
pub use context::RequestContext;
pub use error::{ResolveError, Result};
pub use fault::Fault;
pub use handlers::{
    bed_resolver, crop_checker, crop_resolver, crop_resolver_with_companionships, make_checker,
    make_resolver, CheckHandler, ResolveHandler,
};
pub use resolver::resolve;
pub use scores::companion_scores;
pub use validate::validate_ids;
