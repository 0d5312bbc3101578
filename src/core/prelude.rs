#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    util::{
        colour::Colour,
        linalg,
        linalg::{Matrix3, Matrix4, Vector3, Vector4},
    },
};
