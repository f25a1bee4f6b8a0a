pub mod input;
pub use input::*;

pub mod outcome;
pub use outcome::*;

pub mod phase;
pub use phase::*;

pub mod renderer;
pub use renderer::*;

pub mod session;
pub use session::*;

pub mod side;
pub use side::*;

pub mod snapshot;
pub use snapshot::*;

pub mod status;
pub use status::*;
