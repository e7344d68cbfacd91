pub mod animate;
pub mod circle;
pub mod constants;
pub mod error;
pub mod field;
pub mod highlight;
pub mod sink;
pub mod sphere;
pub mod sync;

pub use animate::*;
pub use circle::*;
pub use constants::*;
pub use error::{DistributionError, Result};
pub use field::*;
pub use highlight::*;
pub use sink::*;
pub use sphere::*;
pub use sync::*;
