// Shared fixtures for unit tests. Compiled only under `cfg(test)`.

pub mod commands {
    pub mod add_guest;
}
pub mod guests;
