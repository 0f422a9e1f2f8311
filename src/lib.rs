// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod errors;
pub mod generate;
pub mod index;
pub mod roots;
pub mod stub;

// Re-export commonly used types
pub use crate::errors::StubError;
pub use crate::generate::{generate_stub, SOURCE_FILE_NAME};
pub use crate::index::StubIndex;
pub use crate::roots::{find_source_root, SOURCE_ROOT_MARKER};
pub use crate::stub::{ClassStub, Declaration, FunctionStub, Member, Param, ANY};
