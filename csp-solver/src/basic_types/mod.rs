mod model_error;
mod propagation_status;
mod random;
mod solution;
mod trail;

pub use model_error::*;
pub use propagation_status::*;
pub use random::*;
pub use solution::*;
pub(crate) use trail::*;
