pub use anyhow::{Context as _, Result};
pub use itertools::Itertools as _;
pub use log::{info, warn};
pub use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};
