// Crate entry point. Re-export modules so tests and hosts can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.
//
// How it is used
// - Presentation layers build a WaitlistStore through `shell::bootstrap` (or wire
//   their own adapters) and read or mutate the waitlist through it.

pub mod core {
    pub mod ports;
    pub mod waitlist;
}

pub mod application {
    pub mod errors;
    pub mod waitlist_store;
    pub mod persistence {
        pub mod keys;
        pub mod loader;
        pub mod writer;
    }
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_key_value_store;
    }
    pub mod file {
        pub mod file_key_value_store;
    }
    pub mod clock {
        pub mod fixed_clock;
        pub mod system_clock;
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures;
}
