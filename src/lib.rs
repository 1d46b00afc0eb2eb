pub mod cli;
pub mod lianliankan;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{Context, Error, anyhow};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeSet, HashMap, HashSet},
            ops::{Add, Sub},
        };
    }
}

pub mod prelude {
    pub use super::cli::*;
    pub use super::lianliankan::prelude::*;
    pub use super::utils::prelude::*;
}
