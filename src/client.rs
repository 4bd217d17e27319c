//! Client-domain identifiers, secret wrappers, and the registered client descriptor.

pub mod credential;
pub mod descriptor;
pub mod id;

pub use credential::*;
pub use descriptor::*;
pub use id::*;
