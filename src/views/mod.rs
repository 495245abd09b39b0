pub mod descriptor;
pub mod registry;
pub mod selector;

pub use descriptor::SubView;
pub use registry::ViewRegistry;
pub use selector::{Pane, ViewSelector};
