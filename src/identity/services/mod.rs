//! Application services for the user directory.

mod directory;

pub use directory::{
    RegisterUserRequest, UpdateUserRequest, UserDirectoryError, UserDirectoryResult,
    UserDirectoryService,
};
